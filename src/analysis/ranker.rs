//! Final watchlist ordering.

use std::cmp::Ordering;

use crate::models::RadarRecord;

/// Sort by smart rank descending and truncate to the top N. Ties break on
/// instrument id ascending so repeated runs produce identical output.
pub fn rank(mut records: Vec<RadarRecord>, top_n: usize) -> Vec<RadarRecord> {
    records.sort_by(|a, b| {
        b.smart_rank
            .partial_cmp(&a.smart_rank)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.instrument_id.cmp(&b.instrument_id))
    });
    records.truncate(top_n);
    records
}
