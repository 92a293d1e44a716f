//! Entry detection and price-excursion measurement.
//!
//! The "entry" is the first reading of the day where the instrument shows
//! both a meaningful OI build (abs change above the gate) and a confirmed
//! level break. Everything after it is measured as favorable excursion
//! from the entry price, signed by the direction the OI flow implies.

use crate::config::constants::entry::MIN_OI_CHANGE;
use crate::domain::{Snapshot, Timeline};
use crate::utils::maths_utils::{favorable_move_pct, get_max};

/// Price excursion since entry. Both fields are 0 when there is no entry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveMetrics {
    /// Best favorable move from the entry price, entry reading onward.
    pub max_move_pct: f64,
    /// Favorable move of the latest price vs the entry price. Negative
    /// means the move has gone against the signal.
    pub current_move_pct: f64,
}

/// Index of the first reading meeting both entry conditions, if any.
pub fn find_entry(snapshots: &[Snapshot]) -> Option<usize> {
    snapshots
        .iter()
        .position(|s| s.oi_change_pct.abs() > MIN_OI_CHANGE && s.break_type.is_level_break())
}

/// Direction implied by the latest OI reading: positive flow is bullish.
pub fn is_bullish(timeline: &Timeline) -> bool {
    timeline
        .latest()
        .map(|s| s.oi_change_pct >= 0.0)
        .unwrap_or(true)
}

/// Measure excursion from the entry reading onward.
///
/// A zero entry price has no meaningful base (no trade data at entry), so
/// it yields `None` and the caller treats the instrument as un-entered.
/// Zero-price readings later in the day are skipped as candidates for the
/// same reason.
pub fn move_metrics(timeline: &Timeline, entry_idx: usize) -> Option<MoveMetrics> {
    let snapshots = timeline.snapshots();
    let entry_price = snapshots.get(entry_idx)?.price;
    if entry_price == 0.0 {
        return None;
    }

    let bullish = is_bullish(timeline);

    let candidates: Vec<f64> = snapshots[entry_idx..]
        .iter()
        .filter(|s| s.price != 0.0)
        .filter_map(|s| favorable_move_pct(entry_price, s.price, bullish))
        .collect();
    // The entry reading itself always qualifies, so this is never empty.
    let max_move_pct = get_max(&candidates);

    let current_move_pct = timeline
        .latest()
        .filter(|s| s.price != 0.0)
        .and_then(|s| favorable_move_pct(entry_price, s.price, bullish))
        .unwrap_or(0.0);

    Some(MoveMetrics {
        max_move_pct,
        current_move_pct,
    })
}
