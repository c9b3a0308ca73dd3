//! Facade crate for the Wanderscore destination scoring engine.
//!
//! This crate re-exports the core domain types and exposes the default
//! destination scorer behind the `scorer` feature.

#![forbid(unsafe_code)]

pub use wanderscore_core::{
    BudgetMetrics, DestinationMetrics, FitMetrics, LanguageMetrics, MetricRecord, MetricsError,
    MetricsPayload, ProfileError, SafetyMetrics, ScoreBreakdown, Scorer, SeasonMetrics, SubScore,
    TravelMetrics, TravelerProfile, VisaMetrics,
};

#[cfg(feature = "scorer")]
pub use wanderscore_scorer::{
    DestinationScorer, ScoringConfig, ScoringConfigError, load_scoring_config,
};
