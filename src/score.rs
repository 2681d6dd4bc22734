//! Score classification
//!
//! Maps a numeric score and its maximum to a three-level tier and to the
//! display color token used by the stylesheet.

use serde::{Deserialize, Serialize};

/// Default maximum for component and factor scores
pub const DEFAULT_MAX: f64 = 10.0;

/// Number of components a report is assumed to carry when deriving the
/// headline average from the stored total.
pub const COMPONENTS_PER_REPORT: f64 = 9.0;

const HIGH_THRESHOLD: f64 = 0.70;
const MID_THRESHOLD: f64 = 0.50;

/// Three-level ordinal classification of a score ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Low,
    Mid,
    High,
}

impl ScoreTier {
    /// Lowercase tag used in `score-*` and `tier-badge-*` CSS classes
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTier::Low => "low",
            ScoreTier::Mid => "mid",
            ScoreTier::High => "high",
        }
    }

    /// CSS color token for this tier
    pub fn color_token(&self) -> &'static str {
        match self {
            ScoreTier::Low => "var(--gdt-score-low)",
            ScoreTier::Mid => "var(--gdt-score-mid)",
            ScoreTier::High => "var(--gdt-score-high)",
        }
    }
}

impl std::fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify `score` against `max`.
///
/// Total over all inputs: a non-positive `max`, NaN or negative score yields
/// a ratio that never clears the mid threshold and lands in `Low`.
pub fn classify(score: f64, max: f64) -> ScoreTier {
    if max.is_nan() || max <= 0.0 {
        return ScoreTier::Low;
    }
    let ratio = score / max;
    if ratio >= HIGH_THRESHOLD {
        ScoreTier::High
    } else if ratio >= MID_THRESHOLD {
        ScoreTier::Mid
    } else {
        ScoreTier::Low
    }
}

/// Classify on the default 0-10 scale
pub fn classify_default(score: f64) -> ScoreTier {
    classify(score, DEFAULT_MAX)
}

/// Color token for a score on the given scale
pub fn score_color(score: f64, max: f64) -> &'static str {
    classify(score, max).color_token()
}

/// One-decimal display form of a score
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Relevance of a system output as a whole percentage (`8.2` -> `82`)
pub fn relevance_percent(score: f64) -> i64 {
    (score * 10.0).round() as i64
}

/// Headline average shown on the listing page.
///
/// Always divides by [`COMPONENTS_PER_REPORT`], not by the number of
/// components actually present in the record.
pub fn headline_average(total_score: f64) -> f64 {
    total_score / COMPONENTS_PER_REPORT
}

/// Width of a 0-10 score bar as a CSS percentage, clamped to the bar
pub fn bar_width_percent(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    (score / DEFAULT_MAX * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(classify_default(7.0), ScoreTier::High);
        assert_eq!(classify_default(6.99), ScoreTier::Mid);
        assert_eq!(classify_default(5.0), ScoreTier::Mid);
        assert_eq!(classify_default(4.99), ScoreTier::Low);
        assert_eq!(classify(35.0, 50.0), ScoreTier::High);
    }

    #[test]
    fn test_total_over_odd_inputs() {
        assert_eq!(classify_default(0.0), ScoreTier::Low);
        assert_eq!(classify_default(-3.0), ScoreTier::Low);
        assert_eq!(classify_default(11.2), ScoreTier::High);
        assert_eq!(classify_default(f64::NAN), ScoreTier::Low);
        assert_eq!(classify(5.0, 0.0), ScoreTier::Low);
        assert_eq!(classify(5.0, -10.0), ScoreTier::Low);
    }

    #[test]
    fn test_monotonic_in_score() {
        let mut previous = ScoreTier::Low;
        for step in -20..=140 {
            let tier = classify_default(step as f64 / 10.0);
            assert!(tier >= previous, "tier dropped at {}", step);
            previous = tier;
        }
    }

    #[test]
    fn test_color_tokens() {
        assert_eq!(score_color(8.0, 10.0), "var(--gdt-score-high)");
        assert_eq!(score_color(6.0, 10.0), "var(--gdt-score-mid)");
        assert_eq!(score_color(1.0, 10.0), "var(--gdt-score-low)");
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(format_score(6.0), "6.0");
        assert_eq!(format_score(6.16), "6.2");
        assert_eq!(relevance_percent(8.2), 82);
        assert_eq!(relevance_percent(4.7), 47);
        assert_eq!(format_score(headline_average(63.7)), "7.1");
        assert_eq!(bar_width_percent(11.2), 100.0);
        assert_eq!(bar_width_percent(-1.0), 0.0);
    }
}
