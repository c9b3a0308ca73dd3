//! Validated per-destination metrics.
//!
//! Each sub-record feeds exactly one sub-scorer. Constructors check the
//! shape of their fields so that scoring never has to guard against
//! negative layovers, out-of-range crime indices or NaN costs.

use std::collections::BTreeSet;

use thiserror::Error;

/// Highest value accepted for [`SafetyMetrics::crime_index`].
pub const CRIME_INDEX_MAX: f64 = 100.0;

/// Names of the sub-records inside [`DestinationMetrics`].
///
/// # Examples
/// ```
/// use wanderscore_core::MetricRecord;
///
/// assert_eq!(MetricRecord::Safety.as_str(), "safety");
/// assert_eq!(MetricRecord::Travel.to_string(), "travel");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricRecord {
    /// Travel time and layovers.
    Travel,
    /// Daily and travel costs.
    Budget,
    /// Ideal, bad and festive seasons.
    Season,
    /// Traveller group fit.
    Fit,
    /// Visa requirements.
    Visa,
    /// Crime, stability and health alerts.
    Safety,
    /// Language support.
    Language,
}

impl MetricRecord {
    /// Return the record name as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Travel => "travel",
            Self::Budget => "budget",
            Self::Season => "season",
            Self::Fit => "fit",
            Self::Visa => "visa",
            Self::Safety => "safety",
            Self::Language => "language",
        }
    }
}

impl std::fmt::Display for MetricRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while validating destination metrics.
///
/// Every variant is a local, non-retryable data problem. A destination that
/// produces one of these errors must be left out of ranking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// A whole sub-record was absent from the payload.
    #[error("missing {record} metrics")]
    MissingRecord {
        /// The absent sub-record.
        record: MetricRecord,
    },
    /// A required field was absent from a sub-record.
    #[error("missing metric {record}.{field}")]
    MissingMetric {
        /// Sub-record containing the field.
        record: MetricRecord,
        /// Name of the absent field.
        field: &'static str,
    },
    /// A field was present but had the wrong shape.
    #[error("metric {record}.{field} must be {expected}, found {found}")]
    TypeMismatch {
        /// Sub-record containing the field.
        record: MetricRecord,
        /// Name of the offending field.
        field: &'static str,
        /// Description of the accepted values.
        expected: &'static str,
        /// Rendering of the rejected value.
        found: String,
    },
}

impl MetricsError {
    /// Report whether the error describes absent data rather than bad data.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::MissingRecord { .. } | Self::MissingMetric { .. })
    }

    /// Return the sub-record the error refers to.
    #[must_use]
    pub const fn record(&self) -> MetricRecord {
        match self {
            Self::MissingRecord { record }
            | Self::MissingMetric { record, .. }
            | Self::TypeMismatch { record, .. } => *record,
        }
    }
}

fn non_negative(
    record: MetricRecord,
    field: &'static str,
    value: f64,
) -> Result<f64, MetricsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(MetricsError::TypeMismatch {
            record,
            field,
            expected: "a finite, non-negative number",
            found: value.to_string(),
        })
    }
}

/// Travel time and connection count for reaching a destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelMetrics {
    travel_time_hours: f64,
    layover_count: u32,
}

impl TravelMetrics {
    /// Validates and constructs [`TravelMetrics`].
    ///
    /// # Errors
    /// Returns [`MetricsError::TypeMismatch`] when the travel time is
    /// negative or not finite.
    pub fn new(travel_time_hours: f64, layover_count: u32) -> Result<Self, MetricsError> {
        let hours = non_negative(MetricRecord::Travel, "travel_time_hours", travel_time_hours)?;
        Ok(Self {
            travel_time_hours: hours,
            layover_count,
        })
    }

    /// One-way travel time in hours.
    #[must_use]
    pub const fn travel_time_hours(&self) -> f64 {
        self.travel_time_hours
    }

    /// Number of layovers on the way.
    #[must_use]
    pub const fn layover_count(&self) -> u32 {
        self.layover_count
    }
}

/// Cost estimates for a destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetMetrics {
    daily_cost: f64,
    travel_cost: f64,
}

impl BudgetMetrics {
    /// Validates and constructs [`BudgetMetrics`].
    ///
    /// # Errors
    /// Returns [`MetricsError::TypeMismatch`] when either cost is negative
    /// or not finite.
    pub fn new(daily_cost: f64, travel_cost: f64) -> Result<Self, MetricsError> {
        Ok(Self {
            daily_cost: non_negative(MetricRecord::Budget, "daily_cost", daily_cost)?,
            travel_cost: non_negative(MetricRecord::Budget, "travel_cost", travel_cost)?,
        })
    }

    /// Expected spend per day on site.
    #[must_use]
    pub const fn daily_cost(&self) -> f64 {
        self.daily_cost
    }

    /// Cost of getting there.
    #[must_use]
    pub const fn travel_cost(&self) -> f64 {
        self.travel_cost
    }
}

/// Season labels describing when a destination is worth visiting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeasonMetrics {
    ideal_season: BTreeSet<String>,
    bad_season: BTreeSet<String>,
    festive_season: BTreeSet<String>,
}

impl SeasonMetrics {
    /// Construct [`SeasonMetrics`] from its three label sets.
    #[must_use]
    pub const fn new(
        ideal_season: BTreeSet<String>,
        bad_season: BTreeSet<String>,
        festive_season: BTreeSet<String>,
    ) -> Self {
        Self {
            ideal_season,
            bad_season,
            festive_season,
        }
    }

    /// Timeslots with the best conditions.
    #[must_use]
    pub const fn ideal_season(&self) -> &BTreeSet<String> {
        &self.ideal_season
    }

    /// Timeslots to avoid.
    #[must_use]
    pub const fn bad_season(&self) -> &BTreeSet<String> {
        &self.bad_season
    }

    /// Timeslots with festivals or events.
    #[must_use]
    pub const fn festive_season(&self) -> &BTreeSet<String> {
        &self.festive_season
    }
}

/// The traveller group a destination suits best.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitMetrics {
    type_fit: String,
}

impl FitMetrics {
    /// Construct [`FitMetrics`] for a traveller group label.
    #[must_use]
    pub fn new(type_fit: impl Into<String>) -> Self {
        Self {
            type_fit: type_fit.into(),
        }
    }

    /// Traveller group label, compared against
    /// [`TravelerProfile::traveler_type`](crate::TravelerProfile::traveler_type).
    #[must_use]
    pub const fn type_fit(&self) -> &str {
        self.type_fit.as_str()
    }
}

/// Nationalities that need a visa to enter.
///
/// The set is the complete authority: any citizenship not listed is treated
/// as visa-free.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisaMetrics {
    requires_visa_for: BTreeSet<String>,
}

impl VisaMetrics {
    /// Construct [`VisaMetrics`] from the restricted nationalities.
    #[must_use]
    pub const fn new(requires_visa_for: BTreeSet<String>) -> Self {
        Self { requires_visa_for }
    }

    /// Report whether holders of `citizenship` need a visa.
    #[must_use]
    pub fn requires_visa(&self, citizenship: &str) -> bool {
        self.requires_visa_for.contains(citizenship)
    }

    /// Restricted nationalities.
    #[must_use]
    pub const fn requires_visa_for(&self) -> &BTreeSet<String> {
        &self.requires_visa_for
    }
}

/// Safety signals for a destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafetyMetrics {
    crime_index: f64,
    political_stable: bool,
    has_health_alert: bool,
}

impl SafetyMetrics {
    /// Validates and constructs [`SafetyMetrics`].
    ///
    /// # Errors
    /// Returns [`MetricsError::TypeMismatch`] when `crime_index` lies outside
    /// `0.0..=100.0` or is not finite.
    pub fn new(
        crime_index: f64,
        political_stable: bool,
        has_health_alert: bool,
    ) -> Result<Self, MetricsError> {
        if !(0.0..=CRIME_INDEX_MAX).contains(&crime_index) {
            return Err(MetricsError::TypeMismatch {
                record: MetricRecord::Safety,
                field: "crime_index",
                expected: "a number between 0 and 100",
                found: crime_index.to_string(),
            });
        }
        Ok(Self {
            crime_index,
            political_stable,
            has_health_alert,
        })
    }

    /// Crime index in `0.0..=100.0`; higher is worse.
    #[must_use]
    pub const fn crime_index(&self) -> f64 {
        self.crime_index
    }

    /// Whether the political situation is stable.
    #[must_use]
    pub const fn political_stable(&self) -> bool {
        self.political_stable
    }

    /// Whether a health alert is in force.
    #[must_use]
    pub const fn has_health_alert(&self) -> bool {
        self.has_health_alert
    }
}

/// Language support available to visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageMetrics {
    speaks_english: bool,
    has_tourist_support: bool,
}

impl LanguageMetrics {
    /// Construct [`LanguageMetrics`].
    #[must_use]
    pub const fn new(speaks_english: bool, has_tourist_support: bool) -> Self {
        Self {
            speaks_english,
            has_tourist_support,
        }
    }

    /// Whether English is widely spoken.
    #[must_use]
    pub const fn speaks_english(&self) -> bool {
        self.speaks_english
    }

    /// Whether tourist-facing services help non-speakers.
    #[must_use]
    pub const fn has_tourist_support(&self) -> bool {
        self.has_tourist_support
    }
}

/// All validated metrics for one candidate destination.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use wanderscore_core::{
///     BudgetMetrics, DestinationMetrics, FitMetrics, LanguageMetrics, SafetyMetrics,
///     SeasonMetrics, TravelMetrics, VisaMetrics,
/// };
///
/// # fn main() -> Result<(), wanderscore_core::MetricsError> {
/// let metrics = DestinationMetrics::new(
///     TravelMetrics::new(6.5, 1)?,
///     BudgetMetrics::new(80.0, 450.0)?,
///     SeasonMetrics::new(BTreeSet::from(["July".to_owned()]), BTreeSet::new(), BTreeSet::new()),
///     FitMetrics::new("duo"),
///     VisaMetrics::default(),
///     SafetyMetrics::new(25.0, true, false)?,
///     LanguageMetrics::new(true, true),
/// );
/// assert_eq!(metrics.travel().layover_count(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationMetrics {
    travel: TravelMetrics,
    budget: BudgetMetrics,
    season: SeasonMetrics,
    fit: FitMetrics,
    visa: VisaMetrics,
    safety: SafetyMetrics,
    language: LanguageMetrics,
}

impl DestinationMetrics {
    /// Assemble a bundle from already validated sub-records.
    #[must_use]
    pub const fn new(
        travel: TravelMetrics,
        budget: BudgetMetrics,
        season: SeasonMetrics,
        fit: FitMetrics,
        visa: VisaMetrics,
        safety: SafetyMetrics,
        language: LanguageMetrics,
    ) -> Self {
        Self {
            travel,
            budget,
            season,
            fit,
            visa,
            safety,
            language,
        }
    }

    /// Travel sub-record.
    #[must_use]
    pub const fn travel(&self) -> &TravelMetrics {
        &self.travel
    }

    /// Budget sub-record.
    #[must_use]
    pub const fn budget(&self) -> &BudgetMetrics {
        &self.budget
    }

    /// Season sub-record.
    #[must_use]
    pub const fn season(&self) -> &SeasonMetrics {
        &self.season
    }

    /// Fit sub-record.
    #[must_use]
    pub const fn fit(&self) -> &FitMetrics {
        &self.fit
    }

    /// Visa sub-record.
    #[must_use]
    pub const fn visa(&self) -> &VisaMetrics {
        &self.visa
    }

    /// Safety sub-record.
    #[must_use]
    pub const fn safety(&self) -> &SafetyMetrics {
        &self.safety
    }

    /// Language sub-record.
    #[must_use]
    pub const fn language(&self) -> &LanguageMetrics {
        &self.language
    }
}
