//! Safety: crime, political stability and health alerts.
//!
//! Any single disqualifying signal zeroes the score: a crime index above
//! the disqualify threshold, political instability, or an active health
//! alert. Otherwise a crime index above the caution threshold halves it.

use wanderscore_core::SafetyMetrics;

use crate::ScoringConfig;

const SAFE: f64 = 1.0;
const CAUTION: f64 = 0.5;
const UNSAFE: f64 = 0.0;

pub(crate) const fn score(safety: &SafetyMetrics, config: &ScoringConfig) -> f64 {
    let crime_index = safety.crime_index();
    if crime_index > config.crime_disqualify_threshold
        || !safety.political_stable()
        || safety.has_health_alert()
    {
        UNSAFE
    } else if crime_index > config.crime_caution_threshold {
        CAUTION
    } else {
        SAFE
    }
}
