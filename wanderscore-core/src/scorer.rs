//! Score candidate destinations for a traveller.
//!
//! The `Scorer` trait turns a [`TravelerProfile`](crate::TravelerProfile)
//! and one destination's [`DestinationMetrics`](crate::DestinationMetrics)
//! into a [`ScoreBreakdown`](crate::ScoreBreakdown).

use crate::{DestinationMetrics, MetricsError, MetricsPayload, ScoreBreakdown, TravelerProfile};

/// Calculate a score breakdown for one destination.
///
/// Implementations must be pure: the same inputs always give the same
/// breakdown, and no state is shared between calls. Scorers must be
/// `Send + Sync` so callers can score many destinations in parallel against
/// one shared profile.
///
/// Scoring validated metrics is infallible. Raw provider data goes through
/// [`Scorer::score_payload`], which validates first and never returns a
/// partial breakdown.
///
/// # Examples
///
/// ```rust
/// use wanderscore_core::{DestinationMetrics, ScoreBreakdown, Scorer, TravelerProfile};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn total(&self, _profile: &TravelerProfile, _metrics: &DestinationMetrics) -> ScoreBreakdown {
///         ScoreBreakdown::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0)
///     }
/// }
///
/// let profile = TravelerProfile::new(500.0, 4, "May", "solo", "Chile").unwrap();
/// let payload = wanderscore_core::MetricsPayload::default();
/// assert!(FlatScorer.score_payload(&profile, &payload).is_err());
/// ```
pub trait Scorer: Send + Sync {
    /// Return the breakdown for `metrics` according to `profile`.
    fn total(&self, profile: &TravelerProfile, metrics: &DestinationMetrics) -> ScoreBreakdown;

    /// Validate a raw payload and score it.
    ///
    /// # Errors
    /// Returns the first [`MetricsError`] found in `payload`; nothing is
    /// scored in that case.
    fn score_payload(
        &self,
        profile: &TravelerProfile,
        payload: &MetricsPayload,
    ) -> Result<ScoreBreakdown, MetricsError> {
        let metrics = payload.validate()?;
        Ok(self.total(profile, &metrics))
    }
}
