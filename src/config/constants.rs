//! Fixed tuning constants (Immutable Blueprints)
//!
//! Every threshold here is an empirically tuned value carried over from the
//! production scanner. None of them are runtime configurable: changing one
//! silently alters which instruments surface and how they rank.

/// Staircase classification thresholds.
pub mod staircase {
    /// Minimum day-long net growth in OI-change points. Below this the
    /// series is noise, not structure.
    pub const MIN_NET_GROWTH: f64 = 2.0;

    /// Largest single step allowed when the instrument has no confirmed
    /// level break. A violent jump is a gap or a one-off event.
    pub const MAX_STEP: f64 = 5.0;

    /// Relaxed step limit once a level break is confirmed.
    pub const MAX_STEP_CONFIRMED: f64 = 50.0;

    /// Any step below this is a meaningful pullback and kills the pattern.
    pub const MAX_PULLBACK: f64 = -0.5;

    /// A step must exceed this to count as a "good" step.
    pub const GOOD_STEP: f64 = 0.2;

    /// Minimum number of good steps for a staircase verdict.
    pub const MIN_GOOD_STEPS: usize = 2;

    /// A 0.0 reading directly after a value with magnitude above this is a
    /// collection glitch, repaired by carrying the prior value forward.
    pub const GLITCH_MAGNITUDE: f64 = 1.0;
}

/// Entry detection gates.
pub mod entry {
    /// Absolute OI-change an entry snapshot must exceed.
    pub const MIN_OI_CHANGE: f64 = 1.5;

    /// Instruments scoring at or below this floor are not actionable and
    /// never receive entry fields.
    pub const SCORE_FLOOR: f64 = 20.0;
}

/// Score composition.
pub mod scoring {
    /// Bonus for a clean staircase timeline.
    pub const STAIRCASE_BONUS: f64 = 15.0;

    /// Bonus for a confirmed break of a previous-day level.
    pub const DAILY_BREAK_BONUS: f64 = 10.0;

    /// Additional bonus when the broken level is a previous-week one.
    pub const WEEKLY_BREAK_BONUS: f64 = 10.0;

    // Smart-rank blend. Weights sum to 1.0.
    pub const WEIGHT_PEAK: f64 = 0.5;
    pub const WEIGHT_LATEST: f64 = 0.3;
    pub const WEIGHT_ENTRY: f64 = 0.2;
}

/// Watchlist output.
pub mod ranking {
    /// Default truncation when the caller does not supply a limit.
    pub const DEFAULT_TOP_N: usize = 20;
}
