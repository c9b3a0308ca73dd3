//! Core domain types for the Wanderscore destination scoring engine.
//!
//! The crate separates what a traveller wants from what a destination
//! offers:
//! - [`TravelerProfile`] holds the traveller's budget, trip length, travel
//!   window, group type and citizenship.
//! - [`DestinationMetrics`] bundles the measurable attributes of one
//!   candidate destination, one sub-record per sub-scorer.
//! - [`ScoreBreakdown`] reports the seven sub-scores of one destination and
//!   their sum.
//!
//! Constructors return `Result` so invalid input surfaces at the boundary
//! instead of inside the scoring arithmetic. Raw provider data enters
//! through [`MetricsPayload`], which validates into [`DestinationMetrics`].
//! Scoring itself lives behind the [`Scorer`] trait.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod breakdown;
pub mod metrics;
pub mod payload;
pub mod profile;
pub mod scorer;

pub use breakdown::{ScoreBreakdown, SubScore};
pub use metrics::{
    BudgetMetrics, DestinationMetrics, FitMetrics, LanguageMetrics, MetricRecord, MetricsError,
    SafetyMetrics, SeasonMetrics, TravelMetrics, VisaMetrics,
};
pub use payload::{
    BudgetPayload, FitPayload, LanguagePayload, MetricsPayload, SafetyPayload, SeasonPayload,
    TravelPayload, VisaPayload,
};
pub use profile::{ProfileError, ProfilePayload, TravelerProfile};
pub use scorer::Scorer;
