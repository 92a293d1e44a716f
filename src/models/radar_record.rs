use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::domain::BreakType;

/// Where an instrument sits in its day lifecycle. Transitions only move
/// forward within a day; the day boundary resets everyone to `NoHistory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, Default)]
pub enum SignalState {
    /// No readings seen yet, nothing to say.
    #[default]
    NoHistory,
    /// A score exists but no qualifying entry has appeared.
    Accumulating,
    /// Entry detected; move metrics keep updating every cycle.
    Entered,
}

/// The first qualifying reading of the day and the score frozen at that
/// moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPoint {
    /// Sampling label of the entry reading, "HH:MM".
    pub time: String,
    pub price: f64,
    /// The latest-score-equivalent as of the entry reading. Feeds the
    /// smart-rank blend with a fixed 0.2 weight.
    pub score: f64,
}

/// Computed per-instrument output for the current moment. One per
/// instrument per cycle; the ranker orders these and truncates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarRecord {
    pub instrument_id: String,
    pub display_name: String,
    /// Score derived from the most recent timeline state.
    pub latest_score: f64,
    /// Highest latest_score seen today. Monotonically non-decreasing
    /// within a day; reconciled against the durable store every cycle.
    pub peak_score: f64,
    pub is_staircase: bool,
    pub break_type: BreakType,
    pub entry: Option<EntryPoint>,
    /// Best favorable excursion since entry, percent. 0 without an entry.
    pub max_move_pct: f64,
    /// Favorable excursion of the latest price vs entry, percent. Signed:
    /// negative means the move has gone against the signal.
    pub current_move_pct: f64,
    pub smart_rank: f64,
    pub state: SignalState,
}

impl RadarRecord {
    /// Magnitude of the current move, for display columns that sort or
    /// color by size regardless of direction.
    pub fn abs_current_move(&self) -> f64 {
        self.current_move_pct.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_displays_cleanly() {
        assert_eq!(SignalState::Entered.to_string(), "Entered");
    }

    #[test]
    fn abs_move_strips_sign() {
        let rec = RadarRecord {
            instrument_id: "X".into(),
            display_name: "X".into(),
            latest_score: 0.0,
            peak_score: 0.0,
            is_staircase: false,
            break_type: BreakType::None,
            entry: None,
            max_move_pct: 0.0,
            current_move_pct: -3.25,
            smart_rank: 0.0,
            state: SignalState::Accumulating,
        };
        assert_eq!(rec.abs_current_move(), 3.25);
    }
}
