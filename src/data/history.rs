//! History assembly: a day's loose snapshots into per-instrument timelines.

use std::collections::HashMap;

use itertools::Itertools;

use crate::domain::{Snapshot, Timeline};

/// Group snapshots by instrument id and sort each group by timestamp.
///
/// The id is the grouping key, never the display name: names vary in
/// capitalization and spacing across batches while the feed's raw id is
/// stable. Nothing is de-duplicated: two batches reporting the same
/// timestamp both survive, and "latest" resolves to the last element of
/// the sorted timeline.
pub fn assemble(snapshots: Vec<Snapshot>) -> HashMap<String, Timeline> {
    snapshots
        .into_iter()
        .map(|s| (s.instrument_id.clone(), s))
        .into_group_map()
        .into_iter()
        .map(|(id, snaps)| (id.clone(), Timeline::from_snapshots(id, snaps)))
        .collect()
}
