//! Score aggregation.
//!
//! `latest_score` is rebuilt from scratch every cycle from the timeline:
//! the raw OI magnitude plus fixed bonuses for a staircase pattern and for
//! confirmed level breaks. The smart rank blends the day's peak, the
//! latest state, and the score frozen at entry.

use crate::analysis::entry_move::{self, MoveMetrics};
use crate::analysis::staircase::is_staircase;
use crate::config::constants::entry::SCORE_FLOOR;
use crate::config::constants::scoring::*;
use crate::domain::{BreakType, Snapshot, Timeline, confirmed_break_in};
use crate::models::{EntryPoint, RadarRecord, SignalState};

/// The score components for a run of readings (the full day, or a prefix
/// when valuing the moment of entry).
pub(crate) struct ScoreParts {
    pub score: f64,
    pub is_staircase: bool,
    pub break_type: BreakType,
}

pub(crate) fn score_parts(snapshots: &[Snapshot]) -> Option<ScoreParts> {
    let latest = snapshots.last()?;
    let break_type = confirmed_break_in(snapshots);
    let oi_series: Vec<f64> = snapshots.iter().map(|s| s.oi_change_pct).collect();
    let staircase = is_staircase(&oi_series, break_type.is_level_break());

    let mut score = latest.oi_change_pct.abs();
    if staircase {
        score += STAIRCASE_BONUS;
    }
    if break_type.is_level_break() {
        score += DAILY_BREAK_BONUS;
        if break_type.is_weekly() {
            score += WEEKLY_BREAK_BONUS;
        }
    }

    Some(ScoreParts {
        score,
        is_staircase: staircase,
        break_type,
    })
}

/// The latest-score-equivalent for a run of readings. 0 for an empty run.
pub fn score_over(snapshots: &[Snapshot]) -> f64 {
    score_parts(snapshots).map(|p| p.score).unwrap_or(0.0)
}

/// Weighted composite used for final ordering.
pub fn smart_rank(peak_score: f64, latest_score: f64, entry_time_score: f64) -> f64 {
    WEIGHT_PEAK * peak_score + WEIGHT_LATEST * latest_score + WEIGHT_ENTRY * entry_time_score
}

/// Build the full per-instrument record for the current moment.
///
/// `peak_score` starts at `latest_score`; the engine reconciles it against
/// the durable store afterwards via [`reconcile_peak`]. Returns `None` for
/// an empty timeline (the instrument is still `NoHistory` and produces no
/// record).
pub fn evaluate(timeline: &Timeline) -> Option<RadarRecord> {
    let latest = timeline.latest()?;
    let parts = score_parts(timeline.snapshots())?;
    let latest_score = parts.score;

    // Entry gate: scores at or below the floor are not actionable and the
    // whole entry/move calculation is skipped.
    let (entry, moves) = if latest_score > SCORE_FLOOR {
        detect_entry(timeline)
    } else {
        (None, MoveMetrics::default())
    };

    let state = if entry.is_some() {
        SignalState::Entered
    } else {
        SignalState::Accumulating
    };
    let entry_time_score = entry.as_ref().map(|e| e.score).unwrap_or(0.0);

    Some(RadarRecord {
        instrument_id: timeline.instrument_id.clone(),
        display_name: latest.display_name.clone(),
        latest_score,
        peak_score: latest_score,
        is_staircase: parts.is_staircase,
        break_type: parts.break_type,
        entry,
        max_move_pct: moves.max_move_pct,
        current_move_pct: moves.current_move_pct,
        smart_rank: smart_rank(latest_score, latest_score, entry_time_score),
        state,
    })
}

/// Merge the stored day peak into a freshly evaluated record. The peak is
/// a monotonic max, and the smart rank is recomputed from the merged value.
pub fn reconcile_peak(record: &mut RadarRecord, stored_peak: f64) {
    record.peak_score = record.peak_score.max(stored_peak);
    let entry_time_score = record.entry.as_ref().map(|e| e.score).unwrap_or(0.0);
    record.smart_rank = smart_rank(record.peak_score, record.latest_score, entry_time_score);
}

fn detect_entry(timeline: &Timeline) -> (Option<EntryPoint>, MoveMetrics) {
    let Some(idx) = entry_move::find_entry(timeline.snapshots()) else {
        return (None, MoveMetrics::default());
    };
    // A zero entry price cannot anchor excursion math; treat as no entry.
    let Some(moves) = entry_move::move_metrics(timeline, idx) else {
        return (None, MoveMetrics::default());
    };
    let entry_snap = &timeline.snapshots()[idx];
    let entry = EntryPoint {
        time: entry_snap.timestamp.clone(),
        price: entry_snap.price,
        // Valued over the prefix ending at entry: what latest_score read
        // at the moment the entry was detected.
        score: score_over(&timeline.snapshots()[..=idx]),
    };
    (Some(entry), moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(ts: &str, price: f64, oi: f64, brk: BreakType) -> Snapshot {
        Snapshot {
            instrument_id: "X".into(),
            display_name: "X CORP".into(),
            timestamp: ts.into(),
            price,
            oi_change_pct: oi,
            break_type: brk,
        }
    }

    fn timeline(snaps: Vec<Snapshot>) -> Timeline {
        Timeline::from_snapshots("X".into(), snaps)
    }

    #[test]
    fn base_score_is_abs_oi() {
        let tl = timeline(vec![
            snap("09:30", 100.0, -1.0, BreakType::None),
            snap("09:45", 99.0, -4.5, BreakType::None),
        ]);
        assert_eq!(score_over(tl.snapshots()), 4.5);
    }

    #[test]
    fn bonuses_are_additive() {
        // Staircase (+15) on top of a weekly break (+10 daily +10 weekly).
        let tl = timeline(vec![
            snap("09:30", 100.0, 1.0, BreakType::None),
            snap("09:45", 101.0, 4.0, BreakType::PrevWeekHigh),
            snap("10:00", 102.0, 9.0, BreakType::PrevWeekHigh),
        ]);
        // abs(9) + 15 + 10 + 10
        assert_eq!(score_over(tl.snapshots()), 44.0);
    }

    #[test]
    fn daily_break_earns_single_bonus() {
        let tl = timeline(vec![
            snap("09:30", 100.0, 1.0, BreakType::None),
            snap("09:45", 101.0, 4.0, BreakType::PrevDayHigh),
            snap("10:00", 102.0, 9.0, BreakType::PrevDayHigh),
        ]);
        // abs(9) + 15 + 10
        assert_eq!(score_over(tl.snapshots()), 34.0);
    }

    #[test]
    fn smart_rank_blend() {
        assert_eq!(smart_rank(40.0, 30.0, 20.0), 0.5 * 40.0 + 0.3 * 30.0 + 0.2 * 20.0);
    }

    #[test]
    fn score_floor_gates_entry() {
        // abs(3) + 15 staircase = 18, below the 20 floor: no entry fields
        // even though a qualifying reading exists.
        let tl = timeline(vec![
            snap("09:30", 100.0, 0.5, BreakType::None),
            snap("09:45", 101.0, 2.0, BreakType::None),
            snap("10:00", 102.0, 3.0, BreakType::None),
        ]);
        let rec = evaluate(&tl).unwrap();
        assert_eq!(rec.latest_score, 18.0);
        assert!(rec.entry.is_none());
        assert_eq!(rec.max_move_pct, 0.0);
        assert_eq!(rec.current_move_pct, 0.0);
        assert_eq!(rec.state, SignalState::Accumulating);
    }

    #[test]
    fn entry_score_is_frozen_at_entry_prefix() {
        let tl = timeline(vec![
            snap("09:30", 100.0, 1.0, BreakType::None),
            snap("09:45", 101.0, 4.0, BreakType::PrevDayHigh),
            snap("10:00", 102.0, 9.0, BreakType::PrevDayHigh),
        ]);
        let rec = evaluate(&tl).unwrap();
        let entry = rec.entry.expect("entry should be detected");
        assert_eq!(entry.time, "09:45");
        assert_eq!(entry.price, 101.0);
        // Prefix [1, 4]: abs(4) + 10 daily break, no staircase yet
        // (only one good step).
        assert_eq!(entry.score, 14.0);
        assert_eq!(rec.state, SignalState::Entered);
    }

    #[test]
    fn reconcile_keeps_higher_stored_peak() {
        let tl = timeline(vec![
            snap("09:30", 100.0, 1.0, BreakType::None),
            snap("09:45", 101.0, 4.0, BreakType::PrevDayHigh),
            snap("10:00", 102.0, 9.0, BreakType::PrevDayHigh),
        ]);
        let mut rec = evaluate(&tl).unwrap();
        let local_peak = rec.peak_score;
        reconcile_peak(&mut rec, local_peak + 6.0);
        assert_eq!(rec.peak_score, local_peak + 6.0);
        // Rank reflects the merged peak, not the local one.
        let entry_score = rec.entry.as_ref().unwrap().score;
        assert_eq!(
            rec.smart_rank,
            smart_rank(local_peak + 6.0, rec.latest_score, entry_score)
        );
    }

    #[test]
    fn empty_timeline_yields_no_record() {
        let tl = timeline(vec![]);
        assert!(evaluate(&tl).is_none());
    }
}
