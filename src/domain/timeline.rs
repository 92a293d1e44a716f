use crate::domain::{BreakType, Snapshot};

/// Sticky confirmed break over an ordered run of snapshots: the most
/// recent reading that crossed a level wins, else the last reading's
/// status. Shared by [`Timeline`] and by prefix scoring, which works on
/// sub-slices.
pub(crate) fn confirmed_break_in(snapshots: &[Snapshot]) -> BreakType {
    snapshots
        .iter()
        .rev()
        .find(|s| s.break_type.is_level_break())
        .or(snapshots.last())
        .map(|s| s.break_type)
        .unwrap_or_default()
}

/// The ordered sequence of snapshots for one instrument for one day.
///
/// Built once per computation cycle by the history assembler; sorted
/// ascending by timestamp. Duplicate timestamps are legal and kept in
/// arrival order; "latest" is simply the last element.
#[derive(Debug, Clone)]
pub struct Timeline {
    pub instrument_id: String,
    snapshots: Vec<Snapshot>,
}

impl Timeline {
    /// Build from a day's snapshots for one instrument. Sorting is stable
    /// so same-timestamp readings keep their batch arrival order.
    pub fn from_snapshots(instrument_id: String, mut snapshots: Vec<Snapshot>) -> Self {
        snapshots.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Self {
            instrument_id,
            snapshots,
        }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Most recent reading of the day.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// The raw OI-change series in time order, ready for classification.
    pub fn oi_series(&self) -> Vec<f64> {
        self.snapshots.iter().map(|s| s.oi_change_pct).collect()
    }

    /// The day's confirmed break, sticky: the most recent reading that
    /// actually crossed a level defines it, even if a later reading pulled
    /// back `INSIDE`. Falls back to the latest reading's status when no
    /// level was ever crossed.
    pub fn confirmed_break(&self) -> BreakType {
        confirmed_break_in(&self.snapshots)
    }

    /// True once any reading of the day crossed a reference level.
    pub fn is_break_confirmed(&self) -> bool {
        self.confirmed_break().is_level_break()
    }
}
