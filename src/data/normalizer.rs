//! Snapshot normalization.
//!
//! One raw batch blob is a point-in-time JSON record covering many
//! instruments. The feed is sloppy: numbers arrive as numbers, quoted
//! strings, or nulls depending on which collector wrote the batch. A
//! single bad field must never drop the whole batch, so numeric fields
//! coerce to 0.0 on any parse failure. Only a payload that fails to decode
//! as JSON at all rejects the batch.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::{BreakType, Snapshot};

/// Wire shape of one raw batch: a sampling label plus per-instrument rows.
#[derive(Debug, Deserialize)]
pub struct RawBatch {
    pub sampling_time: String,
    #[serde(default)]
    pub readings: Vec<RawReading>,
}

/// One wire row. Numeric fields use lenient coercion; `break_type` is an
/// optional free-form label resolved via [`BreakType::from_label`].
#[derive(Debug, Deserialize)]
pub struct RawReading {
    #[serde(default)]
    pub instrument_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, deserialize_with = "de_f64_lenient")]
    pub price: f64,
    #[serde(default, deserialize_with = "de_f64_lenient")]
    pub oi_change_pct: f64,
    #[serde(default)]
    pub break_type: Option<String>,
}

/// Parse one raw batch blob into typed snapshots, all stamped with the
/// batch's sampling time. Rows without an instrument id cannot be grouped
/// and are dropped individually.
pub fn parse_batch(raw: &str) -> Result<Vec<Snapshot>> {
    let RawBatch {
        sampling_time,
        readings,
    } = serde_json::from_str(raw).context("batch payload is not decodable as JSON")?;

    let snapshots = readings
        .into_iter()
        .filter(|r| !r.instrument_id.is_empty())
        .map(|r| Snapshot {
            instrument_id: r.instrument_id,
            display_name: r.display_name,
            timestamp: sampling_time.clone(),
            price: r.price,
            oi_change_pct: r.oi_change_pct,
            break_type: r
                .break_type
                .as_deref()
                .map(BreakType::from_label)
                .unwrap_or_default(),
        })
        .collect();

    Ok(snapshots)
}

fn de_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value))
}

fn coerce_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_batch_parses() {
        let raw = r#"{
            "sampling_time": "09:30",
            "readings": [
                {"instrument_id": "NSE:RELIANCE", "display_name": "RELIANCE INDUSTRIES LTD",
                 "price": 2810.5, "oi_change_pct": 2.4, "break_type": "PDH"}
            ]
        }"#;
        let snaps = parse_batch(raw).unwrap();
        assert_eq!(snaps.len(), 1);
        assert_eq!(snaps[0].timestamp, "09:30");
        assert_eq!(snaps[0].price, 2810.5);
        assert_eq!(snaps[0].break_type, BreakType::PrevDayHigh);
    }

    #[test]
    fn stringly_numbers_coerce() {
        let raw = r#"{
            "sampling_time": "09:45",
            "readings": [
                {"instrument_id": "X", "price": "101.25", "oi_change_pct": " 3.5 "}
            ]
        }"#;
        let snaps = parse_batch(raw).unwrap();
        assert_eq!(snaps[0].price, 101.25);
        assert_eq!(snaps[0].oi_change_pct, 3.5);
        assert_eq!(snaps[0].break_type, BreakType::None);
    }

    #[test]
    fn malformed_value_becomes_zero_without_dropping_batch() {
        let raw = r#"{
            "sampling_time": "10:00",
            "readings": [
                {"instrument_id": "BAD", "price": "n/a", "oi_change_pct": null},
                {"instrument_id": "OK", "price": 55.0, "oi_change_pct": 1.2}
            ]
        }"#;
        let snaps = parse_batch(raw).unwrap();
        assert_eq!(snaps.len(), 2);
        assert_eq!(snaps[0].price, 0.0);
        assert_eq!(snaps[0].oi_change_pct, 0.0);
        assert_eq!(snaps[1].price, 55.0);
    }

    #[test]
    fn row_without_instrument_id_is_dropped() {
        let raw = r#"{
            "sampling_time": "10:15",
            "readings": [
                {"display_name": "GHOST", "price": 1.0, "oi_change_pct": 1.0},
                {"instrument_id": "X", "price": 2.0, "oi_change_pct": 2.0}
            ]
        }"#;
        let snaps = parse_batch(raw).unwrap();
        assert_eq!(snaps.len(), 1);
        assert_eq!(snaps[0].instrument_id, "X");
    }

    #[test]
    fn undecodable_payload_is_an_error() {
        assert!(parse_batch("not json at all").is_err());
    }
}
