//! The full recompute cycle.
//!
//! Each invocation is stateless with respect to timelines: given all of a
//! day's raw batches, every instrument's record is rebuilt from scratch.
//! The only cross-cycle state is the durable peak-score bucket, touched
//! through one read up front and one max-merge write per instrument. A
//! cycle either returns a complete ranked list or fails; there is no
//! partial-result contract.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rayon::prelude::*;

use crate::analysis::{ranker, scoring};
use crate::data::score_store::ScoreStore;
use crate::data::{history, normalizer};
use crate::domain::Timeline;
use crate::models::RadarRecord;

pub struct RadarEngine {
    score_store: Arc<dyn ScoreStore>,
}

impl RadarEngine {
    pub fn new(score_store: Arc<dyn ScoreStore>) -> Self {
        Self { score_store }
    }

    /// Recompute every instrument's record from the day's raw batches and
    /// return the ranked top `top_n`.
    pub async fn run_cycle(
        &self,
        day: NaiveDate,
        raw_batches: &[String],
        top_n: usize,
    ) -> Result<Vec<RadarRecord>> {
        // 1. Normalize. A batch that fails to decode is skipped with a
        // warning; partial-day data is normal, especially early on.
        let mut snapshots = Vec::new();
        for (idx, raw) in raw_batches.iter().enumerate() {
            match normalizer::parse_batch(raw) {
                Ok(batch) => snapshots.extend(batch),
                Err(err) => log::warn!("Skipping undecodable batch #{idx}: {err:#}"),
            }
        }

        // 2. Assemble per-instrument timelines.
        let timelines: Vec<Timeline> = history::assemble(snapshots).into_values().collect();
        log::info!(
            "Cycle for {day}: {} batches, {} instruments",
            raw_batches.len(),
            timelines.len()
        );

        // 3. Pure per-instrument evaluation, fanned out with rayon. A
        // fault in one instrument must not sink the cycle: it is logged
        // and that instrument sits out this round.
        let mut records: Vec<RadarRecord> = timelines
            .par_iter()
            .filter_map(|timeline| {
                match catch_unwind(AssertUnwindSafe(|| scoring::evaluate(timeline))) {
                    Ok(record) => record,
                    Err(_) => {
                        log::error!(
                            "Evaluation failed for {}; excluded from this cycle",
                            timeline.instrument_id
                        );
                        None
                    }
                }
            })
            .collect();

        // 4. Reconcile against the durable day bucket: read once up
        // front, then one max-merge write per instrument.
        let stored_peaks = self
            .score_store
            .load_day(day)
            .await
            .context("Failed to load persisted peak scores")?;
        for record in &mut records {
            self.score_store
                .merge_peak(day, &record.instrument_id, record.latest_score)
                .await
                .with_context(|| format!("Failed to persist peak for {}", record.instrument_id))?;
            let prior = stored_peaks
                .get(&record.instrument_id)
                .copied()
                .unwrap_or(0.0);
            scoring::reconcile_peak(record, prior);
        }

        // 5. Rank and truncate.
        Ok(ranker::rank(records, top_n))
    }
}
