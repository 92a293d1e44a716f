use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Which reference level, if any, a reading has crossed.
///
/// The feed labels one level per reading: previous-day high/low (PDH/PDL)
/// or previous-week high/low (PWH/PWL). `Inside` means the price is back
/// within yesterday's range; `None` means the feed reported nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, Default)]
pub enum BreakType {
    #[default]
    #[serde(rename = "NONE")]
    #[strum(serialize = "-")]
    None,
    #[serde(rename = "INSIDE")]
    #[strum(serialize = "INSIDE")]
    Inside,
    #[serde(rename = "PDH")]
    #[strum(serialize = "PDH")]
    PrevDayHigh,
    #[serde(rename = "PDL")]
    #[strum(serialize = "PDL")]
    PrevDayLow,
    #[serde(rename = "PWH")]
    #[strum(serialize = "PWH")]
    PrevWeekHigh,
    #[serde(rename = "PWL")]
    #[strum(serialize = "PWL")]
    PrevWeekLow,
}

impl BreakType {
    /// Lenient mapping from a feed label. Unknown labels collapse to `None`
    /// rather than failing the reading.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "PDH" => Self::PrevDayHigh,
            "PDL" => Self::PrevDayLow,
            "PWH" => Self::PrevWeekHigh,
            "PWL" => Self::PrevWeekLow,
            "INSIDE" => Self::Inside,
            _ => Self::None,
        }
    }

    /// True for any actual high/low crossing (not `None`/`Inside`).
    pub fn is_level_break(&self) -> bool {
        matches!(
            self,
            Self::PrevDayHigh | Self::PrevDayLow | Self::PrevWeekHigh | Self::PrevWeekLow
        )
    }

    /// True when the broken level is a previous-week one.
    pub fn is_weekly(&self) -> bool {
        matches!(self, Self::PrevWeekHigh | Self::PrevWeekLow)
    }
}

/// One timestamped reading of price / OI-change / break-status for one
/// instrument within the trading day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Stable identifier from the upstream feed. The grouping key: never
    /// the display name, which varies in spacing/capitalization across
    /// batches.
    pub instrument_id: String,
    /// Human-readable name as the feed reported it.
    pub display_name: String,
    /// Intraday sampling label, "HH:MM". Lexically sortable.
    pub timestamp: String,
    /// Last traded price. 0.0 means no trade data for this reading.
    pub price: f64,
    /// Signed open-interest change since session start, in percent points.
    pub oi_change_pct: f64,
    pub break_type: BreakType,
}
