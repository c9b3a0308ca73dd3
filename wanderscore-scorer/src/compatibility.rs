//! Compatibility: whether a destination suits the traveller group.

use wanderscore_core::{FitMetrics, TravelerProfile};

use crate::ScoringConfig;

const MISMATCH: f64 = 0.0;

/// Award [`ScoringConfig::compatibility_reward`] on an exact label match.
pub(crate) fn score(fit: &FitMetrics, profile: &TravelerProfile, config: &ScoringConfig) -> f64 {
    if fit.type_fit() == profile.traveler_type() {
        config.compatibility_reward
    } else {
        MISMATCH
    }
}
