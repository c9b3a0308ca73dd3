//! Raw destination metrics as delivered by an external data provider.
//!
//! Every field is optional so that incomplete provider records can still be
//! decoded and then rejected with a precise [`MetricsError`] naming the
//! absent field. No default is ever substituted for a missing value.

use std::collections::BTreeSet;

use crate::metrics::{
    BudgetMetrics, DestinationMetrics, FitMetrics, LanguageMetrics, MetricRecord, MetricsError,
    SafetyMetrics, SeasonMetrics, TravelMetrics, VisaMetrics,
};

/// Unvalidated travel fields.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TravelPayload {
    /// One-way travel time in hours.
    pub travel_time_hours: Option<f64>,
    /// Number of layovers; signed so negative counts can be reported.
    pub layover_count: Option<i64>,
}

/// Unvalidated cost fields.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BudgetPayload {
    /// Expected spend per day.
    pub daily_cost: Option<f64>,
    /// Cost of getting there.
    pub travel_cost: Option<f64>,
}

/// Unvalidated season label sets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SeasonPayload {
    /// Timeslots with the best conditions.
    pub ideal_season: Option<BTreeSet<String>>,
    /// Timeslots to avoid.
    pub bad_season: Option<BTreeSet<String>>,
    /// Timeslots with festivals or events.
    pub festive_season: Option<BTreeSet<String>>,
}

/// Unvalidated traveller group fit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FitPayload {
    /// Traveller group label the destination suits.
    pub type_fit: Option<String>,
}

/// Unvalidated visa restrictions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct VisaPayload {
    /// Nationalities that need a visa.
    pub requires_visa_for: Option<BTreeSet<String>>,
}

/// Unvalidated safety signals.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SafetyPayload {
    /// Crime index, expected in `0..=100`.
    pub crime_index: Option<f64>,
    /// Whether the political situation is stable.
    pub political_stable: Option<bool>,
    /// Whether a health alert is in force.
    pub has_health_alert: Option<bool>,
}

/// Unvalidated language support.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LanguagePayload {
    /// Whether English is widely spoken.
    pub speaks_english: Option<bool>,
    /// Whether tourist-facing services help non-speakers.
    pub has_tourist_support: Option<bool>,
}

/// Provider record for one destination, prior to validation.
///
/// # Examples
///
/// ```
/// use wanderscore_core::{MetricRecord, MetricsError, MetricsPayload};
///
/// let payload = MetricsPayload::default();
/// let err = payload.validate().unwrap_err();
/// assert_eq!(err, MetricsError::MissingRecord { record: MetricRecord::Travel });
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MetricsPayload {
    /// Travel sub-record.
    pub travel: Option<TravelPayload>,
    /// Budget sub-record.
    pub budget: Option<BudgetPayload>,
    /// Season sub-record.
    pub season: Option<SeasonPayload>,
    /// Fit sub-record.
    pub fit: Option<FitPayload>,
    /// Visa sub-record.
    pub visa: Option<VisaPayload>,
    /// Safety sub-record.
    pub safety: Option<SafetyPayload>,
    /// Language sub-record.
    pub language: Option<LanguagePayload>,
}

fn sub_record<T>(value: Option<&T>, record: MetricRecord) -> Result<&T, MetricsError> {
    value.ok_or(MetricsError::MissingRecord { record })
}

fn required<T: Clone>(
    value: Option<&T>,
    record: MetricRecord,
    field: &'static str,
) -> Result<T, MetricsError> {
    value
        .cloned()
        .ok_or(MetricsError::MissingMetric { record, field })
}

impl TravelPayload {
    fn validate(&self) -> Result<TravelMetrics, MetricsError> {
        let record = MetricRecord::Travel;
        let hours = required(self.travel_time_hours.as_ref(), record, "travel_time_hours")?;
        let raw_layovers = required(self.layover_count.as_ref(), record, "layover_count")?;
        let layovers =
            u32::try_from(raw_layovers).map_err(|_| MetricsError::TypeMismatch {
                record,
                field: "layover_count",
                expected: "a non-negative integer",
                found: raw_layovers.to_string(),
            })?;
        TravelMetrics::new(hours, layovers)
    }
}

impl BudgetPayload {
    fn validate(&self) -> Result<BudgetMetrics, MetricsError> {
        let record = MetricRecord::Budget;
        BudgetMetrics::new(
            required(self.daily_cost.as_ref(), record, "daily_cost")?,
            required(self.travel_cost.as_ref(), record, "travel_cost")?,
        )
    }
}

impl SeasonPayload {
    fn validate(&self) -> Result<SeasonMetrics, MetricsError> {
        let record = MetricRecord::Season;
        Ok(SeasonMetrics::new(
            required(self.ideal_season.as_ref(), record, "ideal_season")?,
            required(self.bad_season.as_ref(), record, "bad_season")?,
            required(self.festive_season.as_ref(), record, "festive_season")?,
        ))
    }
}

impl FitPayload {
    fn validate(&self) -> Result<FitMetrics, MetricsError> {
        required(self.type_fit.as_ref(), MetricRecord::Fit, "type_fit").map(FitMetrics::new)
    }
}

impl VisaPayload {
    fn validate(&self) -> Result<VisaMetrics, MetricsError> {
        required(
            self.requires_visa_for.as_ref(),
            MetricRecord::Visa,
            "requires_visa_for",
        )
        .map(VisaMetrics::new)
    }
}

impl SafetyPayload {
    fn validate(&self) -> Result<SafetyMetrics, MetricsError> {
        let record = MetricRecord::Safety;
        SafetyMetrics::new(
            required(self.crime_index.as_ref(), record, "crime_index")?,
            required(self.political_stable.as_ref(), record, "political_stable")?,
            required(self.has_health_alert.as_ref(), record, "has_health_alert")?,
        )
    }
}

impl LanguagePayload {
    fn validate(&self) -> Result<LanguageMetrics, MetricsError> {
        let record = MetricRecord::Language;
        Ok(LanguageMetrics::new(
            required(self.speaks_english.as_ref(), record, "speaks_english")?,
            required(self.has_tourist_support.as_ref(), record, "has_tourist_support")?,
        ))
    }
}

impl MetricsPayload {
    /// Validate every sub-record and assemble [`DestinationMetrics`].
    ///
    /// Sub-records are checked in a fixed order (travel, budget, season,
    /// fit, visa, safety, language) and the first failure is returned.
    ///
    /// # Errors
    /// Returns [`MetricsError::MissingRecord`] or
    /// [`MetricsError::MissingMetric`] for absent data and
    /// [`MetricsError::TypeMismatch`] for malformed values.
    pub fn validate(&self) -> Result<DestinationMetrics, MetricsError> {
        Ok(DestinationMetrics::new(
            sub_record(self.travel.as_ref(), MetricRecord::Travel)?.validate()?,
            sub_record(self.budget.as_ref(), MetricRecord::Budget)?.validate()?,
            sub_record(self.season.as_ref(), MetricRecord::Season)?.validate()?,
            sub_record(self.fit.as_ref(), MetricRecord::Fit)?.validate()?,
            sub_record(self.visa.as_ref(), MetricRecord::Visa)?.validate()?,
            sub_record(self.safety.as_ref(), MetricRecord::Safety)?.validate()?,
            sub_record(self.language.as_ref(), MetricRecord::Language)?.validate()?,
        ))
    }
}

impl TryFrom<MetricsPayload> for DestinationMetrics {
    type Error = MetricsError;

    fn try_from(payload: MetricsPayload) -> Result<Self, Self::Error> {
        payload.validate()
    }
}

impl From<&DestinationMetrics> for MetricsPayload {
    fn from(metrics: &DestinationMetrics) -> Self {
        let travel = metrics.travel();
        let budget = metrics.budget();
        let season = metrics.season();
        let safety = metrics.safety();
        let language = metrics.language();
        Self {
            travel: Some(TravelPayload {
                travel_time_hours: Some(travel.travel_time_hours()),
                layover_count: Some(i64::from(travel.layover_count())),
            }),
            budget: Some(BudgetPayload {
                daily_cost: Some(budget.daily_cost()),
                travel_cost: Some(budget.travel_cost()),
            }),
            season: Some(SeasonPayload {
                ideal_season: Some(season.ideal_season().clone()),
                bad_season: Some(season.bad_season().clone()),
                festive_season: Some(season.festive_season().clone()),
            }),
            fit: Some(FitPayload {
                type_fit: Some(metrics.fit().type_fit().to_owned()),
            }),
            visa: Some(VisaPayload {
                requires_visa_for: Some(metrics.visa().requires_visa_for().clone()),
            }),
            safety: Some(SafetyPayload {
                crime_index: Some(safety.crime_index()),
                political_stable: Some(safety.political_stable()),
                has_health_alert: Some(safety.has_health_alert()),
            }),
            language: Some(LanguagePayload {
                speaks_english: Some(language.speaks_english()),
                has_tourist_support: Some(language.has_tourist_support()),
            }),
        }
    }
}

impl From<DestinationMetrics> for MetricsPayload {
    fn from(metrics: DestinationMetrics) -> Self {
        Self::from(&metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn complete() -> MetricsPayload {
        MetricsPayload {
            travel: Some(TravelPayload {
                travel_time_hours: Some(12.0),
                layover_count: Some(1),
            }),
            budget: Some(BudgetPayload {
                daily_cost: Some(60.0),
                travel_cost: Some(400.0),
            }),
            season: Some(SeasonPayload {
                ideal_season: Some(BTreeSet::from(["July".to_owned()])),
                bad_season: Some(BTreeSet::new()),
                festive_season: Some(BTreeSet::new()),
            }),
            fit: Some(FitPayload {
                type_fit: Some("solo".to_owned()),
            }),
            visa: Some(VisaPayload {
                requires_visa_for: Some(BTreeSet::new()),
            }),
            safety: Some(SafetyPayload {
                crime_index: Some(30.0),
                political_stable: Some(true),
                has_health_alert: Some(false),
            }),
            language: Some(LanguagePayload {
                speaks_english: Some(false),
                has_tourist_support: Some(true),
            }),
        }
    }

    #[rstest]
    fn complete_payload_validates(complete: MetricsPayload) {
        let metrics = complete.validate().expect("complete payload");
        assert_eq!(metrics.travel().layover_count(), 1);
        assert_eq!(metrics.fit().type_fit(), "solo");
        assert!(metrics.language().has_tourist_support());
    }

    #[rstest]
    fn missing_record_is_reported(mut complete: MetricsPayload) {
        complete.visa = None;
        assert_eq!(
            complete.validate(),
            Err(MetricsError::MissingRecord {
                record: MetricRecord::Visa
            })
        );
    }

    #[rstest]
    fn missing_visa_list_is_not_defaulted(mut complete: MetricsPayload) {
        complete.visa = Some(VisaPayload::default());
        assert_eq!(
            complete.validate(),
            Err(MetricsError::MissingMetric {
                record: MetricRecord::Visa,
                field: "requires_visa_for",
            })
        );
    }

    #[rstest]
    fn missing_field_is_reported(mut complete: MetricsPayload) {
        complete.safety = Some(SafetyPayload {
            crime_index: Some(30.0),
            political_stable: None,
            has_health_alert: Some(false),
        });
        assert_eq!(
            complete.validate(),
            Err(MetricsError::MissingMetric {
                record: MetricRecord::Safety,
                field: "political_stable",
            })
        );
    }

    #[rstest]
    fn negative_layovers_are_a_type_mismatch(mut complete: MetricsPayload) {
        complete.travel = Some(TravelPayload {
            travel_time_hours: Some(3.0),
            layover_count: Some(-1),
        });
        let err = complete.validate().expect_err("negative layovers");
        assert_eq!(
            err,
            MetricsError::TypeMismatch {
                record: MetricRecord::Travel,
                field: "layover_count",
                expected: "a non-negative integer",
                found: "-1".to_owned(),
            }
        );
    }

    #[rstest]
    fn crime_index_above_hundred_is_a_type_mismatch(mut complete: MetricsPayload) {
        complete.safety = Some(SafetyPayload {
            crime_index: Some(140.0),
            political_stable: Some(true),
            has_health_alert: Some(false),
        });
        let err = complete.validate().expect_err("crime index out of range");
        assert!(matches!(
            err,
            MetricsError::TypeMismatch {
                field: "crime_index",
                ..
            }
        ));
    }

    #[rstest]
    fn first_failing_record_wins(mut complete: MetricsPayload) {
        complete.budget = None;
        complete.language = None;
        let err = complete.validate().expect_err("two missing records");
        assert_eq!(err.record(), MetricRecord::Budget);
    }

    #[rstest]
    fn validated_metrics_convert_back_to_payload(complete: MetricsPayload) {
        let metrics = complete.validate().expect("complete payload");
        assert_eq!(MetricsPayload::from(&metrics), complete);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn absent_json_fields_decode_as_missing() {
        let payload: MetricsPayload =
            serde_json::from_str(r#"{"travel":{"travel_time_hours":4.0}}"#).expect("decode");
        assert_eq!(
            payload.validate(),
            Err(MetricsError::MissingMetric {
                record: MetricRecord::Travel,
                field: "layover_count",
            })
        );
    }
}
