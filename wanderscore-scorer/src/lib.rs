//! Destination scoring for Wanderscore.
//!
//! [`DestinationScorer`] implements the [`Scorer`](wanderscore_core::Scorer)
//! trait by summing seven independent sub-scores:
//!
//! | sub-score | range | driven by |
//! |---|---|---|
//! | accessibility | `0.4..=2.0` | travel time against trip length, layovers |
//! | affordability | `0.0..=1.0` | budget margin after total cost |
//! | seasonality | `0.2..=1.5` | ideal/bad season, festive season |
//! | compatibility | `0.0..=1.5` | traveller group match |
//! | visa | `0.0..=1.0` | visa requirement for the citizenship |
//! | safety | `0.0..=1.0` | crime index, stability, health alerts |
//! | language | `0.3..=1.0` | English, tourist support |
//!
//! Ranges assume the default [`ScoringConfig`]. No sub-scorer reads another's
//! output, so they can be evaluated in any order. The scorer holds only its
//! immutable configuration and can be shared freely across threads.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use wanderscore_core::{MetricsPayload, Scorer, TravelerProfile};
//! use wanderscore_scorer::DestinationScorer;
//!
//! let scorer = DestinationScorer::from_config_file(Utf8Path::new("scoring.json"))
//!     .expect("load scoring configuration");
//! let profile = TravelerProfile::new(1_000.0, 10, "July", "solo", "South Korea")
//!     .expect("valid profile");
//! let payload: MetricsPayload = serde_json::from_str("{}").expect("decode payload");
//! match scorer.score_payload(&profile, &payload) {
//!     Ok(breakdown) => println!("total {}", breakdown.total()),
//!     Err(err) => println!("excluded: {err}"),
//! }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use camino::Utf8Path;
use wanderscore_core::{DestinationMetrics, ScoreBreakdown, Scorer, SubScore, TravelerProfile};

mod accessibility;
mod affordability;
mod compatibility;
mod config;
mod error;
mod language;
mod safety;
mod seasonality;
mod visa;

pub use config::{ScoringConfig, load_scoring_config};
pub use error::ScoringConfigError;

/// Scorer summing the seven destination sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DestinationScorer {
    config: ScoringConfig,
}

impl DestinationScorer {
    /// Construct a scorer from a validated configuration.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError::InvalidValue`] when `config` fails
    /// [`ScoringConfig::validate`].
    pub fn new(config: ScoringConfig) -> Result<Self, ScoringConfigError> {
        let validated = config.validate()?;
        log::debug!("destination scorer configured with {validated:?}");
        Ok(Self { config: validated })
    }

    /// Construct a scorer from a JSON configuration file.
    ///
    /// # Errors
    /// Propagates [`load_scoring_config`] failures.
    pub fn from_config_file(path: &Utf8Path) -> Result<Self, ScoringConfigError> {
        load_scoring_config(path).map(|config| Self { config })
    }

    /// Configuration applied by this scorer.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Compute a single sub-score.
    #[must_use]
    pub fn sub_score(
        &self,
        sub_score: SubScore,
        profile: &TravelerProfile,
        metrics: &DestinationMetrics,
    ) -> f64 {
        let config = &self.config;
        match sub_score {
            SubScore::Accessibility => accessibility::score(metrics.travel(), profile, config),
            SubScore::Affordability => affordability::score(metrics.budget(), profile, config),
            SubScore::Seasonality => seasonality::score(metrics.season(), profile),
            SubScore::Compatibility => compatibility::score(metrics.fit(), profile, config),
            SubScore::Visa => visa::score(metrics.visa(), profile),
            SubScore::Safety => safety::score(metrics.safety(), config),
            SubScore::Language => language::score(metrics.language()),
        }
    }
}

impl Scorer for DestinationScorer {
    fn total(&self, profile: &TravelerProfile, metrics: &DestinationMetrics) -> ScoreBreakdown {
        let part = |sub_score| self.sub_score(sub_score, profile, metrics);
        let breakdown = ScoreBreakdown::new(
            part(SubScore::Accessibility),
            part(SubScore::Affordability),
            part(SubScore::Seasonality),
            part(SubScore::Compatibility),
            part(SubScore::Visa),
            part(SubScore::Safety),
            part(SubScore::Language),
        );
        log::debug!("scored destination: {breakdown:?}");
        breakdown
    }
}
