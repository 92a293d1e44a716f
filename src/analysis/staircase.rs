//! Staircase classification.
//!
//! A "staircase" is a sustained, spike-free, non-reversing step-wise climb
//! in open-interest change across the day. The classifier is a fixed rule
//! chain, deliberately not a statistical model: it trades recall for
//! precision, preferring to miss a real accumulation over flagging a fake
//! one.

use crate::config::constants::staircase::*;

/// Repair transient data-collection glitches in an OI-change series.
///
/// A `0.0` reading immediately after a kept value with magnitude above
/// [`GLITCH_MAGNITUDE`] is a sensor dropout, not a genuine reset; the prior
/// kept value is carried forward. The carry is forward-only and chains
/// through consecutive zeros.
pub(crate) fn repair_glitches(series: &[f64]) -> Vec<f64> {
    let mut cleaned: Vec<f64> = Vec::with_capacity(series.len());
    for &value in series {
        match cleaned.last() {
            Some(&kept) if value == 0.0 && kept.abs() > GLITCH_MAGNITUDE => cleaned.push(kept),
            _ => cleaned.push(value),
        }
    }
    cleaned
}

/// Classify one instrument's OI-change series.
///
/// `break_confirmed` relaxes the spike limit: a confirmed level break means
/// a large jump can be genuine participation rather than a data gap.
pub fn is_staircase(oi_series: &[f64], break_confirmed: bool) -> bool {
    // 1. Insufficient history
    if oi_series.len() < 2 {
        return false;
    }

    // 2. Glitch repair before any structure analysis
    let cleaned = repair_glitches(oi_series);

    // 3. Minimum day-long net growth
    if cleaned[cleaned.len() - 1] - cleaned[0] < MIN_NET_GROWTH {
        return false;
    }

    // 4. First differences
    let steps: Vec<f64> = cleaned.windows(2).map(|w| w[1] - w[0]).collect();
    if steps.is_empty() {
        return false;
    }

    // 5. Spike filter
    let max_step = if break_confirmed {
        MAX_STEP_CONFIRMED
    } else {
        MAX_STEP
    };
    if steps.iter().any(|&s| s > max_step) {
        return false;
    }

    // 6. Reversal filter
    if steps.iter().any(|&s| s < MAX_PULLBACK) {
        return false;
    }

    // 7. Consistency: enough good steps
    steps.iter().filter(|&&s| s > GOOD_STEP).count() >= MIN_GOOD_STEPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_staircase_passes() {
        // Steps of 3 each, all good, max step under the limit.
        assert!(is_staircase(&[0.0, 3.0, 6.0, 9.0], false));
    }

    #[test]
    fn spike_fails_without_break() {
        // 57-point jump far above the unconfirmed limit of 5.
        assert!(!is_staircase(&[0.0, 3.0, 60.0], false));
    }

    #[test]
    fn spike_above_relaxed_limit_still_fails() {
        // 57 > 50 even with the break-confirmed allowance.
        assert!(!is_staircase(&[0.0, 3.0, 60.0], true));
    }

    #[test]
    fn large_step_passes_with_confirmed_break() {
        // 37 <= 50 once a break is confirmed.
        assert!(is_staircase(&[0.0, 3.0, 40.0], true));
    }

    #[test]
    fn short_series_fails() {
        assert!(!is_staircase(&[], false));
        assert!(!is_staircase(&[5.0], false));
    }

    #[test]
    fn weak_net_growth_fails() {
        // 1.5 points of growth over the day is noise, not structure.
        assert!(!is_staircase(&[0.0, 0.9, 1.5], false));
    }

    #[test]
    fn pullback_fails() {
        assert!(!is_staircase(&[0.0, 3.0, 2.4, 6.0], false));
    }

    #[test]
    fn too_few_good_steps_fails() {
        // Net growth clears 2.0 but only one step exceeds 0.2.
        assert!(!is_staircase(&[0.0, 0.1, 2.2], false));
    }

    #[test]
    fn glitch_zero_is_repaired() {
        assert_eq!(repair_glitches(&[5.0, 0.0, 8.0]), vec![5.0, 5.0, 8.0]);
    }

    #[test]
    fn consecutive_glitch_zeros_chain() {
        assert_eq!(
            repair_glitches(&[5.0, 0.0, 0.0, 8.0]),
            vec![5.0, 5.0, 5.0, 8.0]
        );
    }

    #[test]
    fn zero_after_small_value_is_genuine() {
        // Prior magnitude 0.8 is under the glitch threshold; the zero stays.
        assert_eq!(repair_glitches(&[0.8, 0.0, 1.0]), vec![0.8, 0.0, 1.0]);
    }

    #[test]
    fn leading_zero_is_untouched() {
        assert_eq!(repair_glitches(&[0.0, 3.0]), vec![0.0, 3.0]);
    }

    #[test]
    fn glitch_repair_rescues_classification() {
        // Without repair the embedded zero is a -5 pullback; with repair
        // this is a clean climb.
        assert!(is_staircase(&[2.0, 5.0, 0.0, 8.0], true));
    }
}
