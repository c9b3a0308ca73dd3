//! Tunable thresholds and rewards for destination scoring.
#![forbid(unsafe_code)]

use std::io::BufReader;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use wanderscore_core::metrics::CRIME_INDEX_MAX;
use wanderscore_fs::open_utf8_file;

use crate::ScoringConfigError;

/// Thresholds and rewards applied by the sub-scorers.
///
/// The defaults reproduce the reference tiers: a travel-time budget of 25%
/// of the trip's hours split into buckets at 30% and 60% of that budget, a
/// 20% budget slack for full affordability, a 1.5 reward for a matching
/// traveller group, and crime thresholds at 40 and 60.
///
/// Missing JSON fields fall back to their defaults; unknown fields are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Share of the trip's total hours a traveller tolerates spending in
    /// transit.
    pub travel_time_ratio: f64,
    /// Fraction of the travel-time limit under which travel counts as short.
    pub near_travel_fraction: f64,
    /// Fraction of the travel-time limit under which travel counts as
    /// acceptable.
    pub far_travel_fraction: f64,
    /// Share of the budget that must remain unspent for full affordability.
    pub budget_slack_ratio: f64,
    /// Score awarded when the destination suits the traveller group.
    pub compatibility_reward: f64,
    /// Crime index above which safety is halved.
    pub crime_caution_threshold: f64,
    /// Crime index above which safety drops to zero.
    pub crime_disqualify_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            travel_time_ratio: 0.25,
            near_travel_fraction: 0.3,
            far_travel_fraction: 0.6,
            budget_slack_ratio: 0.2,
            compatibility_reward: 1.5,
            crime_caution_threshold: 40.0,
            crime_disqualify_threshold: 60.0,
        }
    }
}

const fn invalid(field: &'static str, reason: &'static str) -> ScoringConfigError {
    ScoringConfigError::InvalidValue { field, reason }
}

impl ScoringConfig {
    /// Validate the configuration and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError::InvalidValue`] when a value is not
    /// finite, a ratio is negative, the travel buckets are out of order, or
    /// the crime thresholds fall outside `0..=100` or are out of order.
    pub fn validate(self) -> Result<Self, ScoringConfigError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
            if value < 0.0 {
                return Err(invalid(field, "must not be negative"));
            }
        }
        if self.travel_time_ratio == 0.0 {
            return Err(invalid("travel_time_ratio", "must be positive"));
        }
        if self.near_travel_fraction > self.far_travel_fraction {
            return Err(invalid(
                "near_travel_fraction",
                "must not exceed far_travel_fraction",
            ));
        }
        if self.crime_disqualify_threshold > CRIME_INDEX_MAX {
            return Err(invalid("crime_disqualify_threshold", "must not exceed 100"));
        }
        if self.crime_caution_threshold > self.crime_disqualify_threshold {
            return Err(invalid(
                "crime_caution_threshold",
                "must not exceed crime_disqualify_threshold",
            ));
        }
        Ok(self)
    }

    const fn fields(&self) -> [(&'static str, f64); 7] {
        [
            ("travel_time_ratio", self.travel_time_ratio),
            ("near_travel_fraction", self.near_travel_fraction),
            ("far_travel_fraction", self.far_travel_fraction),
            ("budget_slack_ratio", self.budget_slack_ratio),
            ("compatibility_reward", self.compatibility_reward),
            ("crime_caution_threshold", self.crime_caution_threshold),
            ("crime_disqualify_threshold", self.crime_disqualify_threshold),
        ]
    }
}

/// Load and validate a JSON scoring configuration from disk.
///
/// # Errors
/// Returns [`ScoringConfigError::ReadFile`] when the file cannot be opened,
/// [`ScoringConfigError::Parse`] when it is not a valid configuration, and
/// [`ScoringConfigError::InvalidValue`] when validation fails.
pub fn load_scoring_config(path: &Utf8Path) -> Result<ScoringConfig, ScoringConfigError> {
    let file = open_utf8_file(path).map_err(|source| ScoringConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ScoringConfig = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        ScoringConfigError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    log::debug!("loaded scoring configuration from {path}");
    config.validate()
}

#[cfg(test)]
mod tests {
    //! Unit coverage for scoring configuration.

    use camino::Utf8PathBuf;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn write_config(dir: &TempDir, contents: &str) -> Utf8PathBuf {
        let path =
            Utf8PathBuf::from_path_buf(dir.path().join("scoring.json")).expect("utf8 config path");
        std::fs::write(path.as_std_path(), contents).expect("write config fixture");
        path
    }

    #[rstest]
    fn defaults_are_valid() {
        let config = ScoringConfig::default();
        assert_eq!(config.validate().expect("defaults validate"), config);
    }

    #[rstest]
    #[case::nan_ratio(ScoringConfig { travel_time_ratio: f64::NAN, ..ScoringConfig::default() }, "travel_time_ratio")]
    #[case::zero_ratio(ScoringConfig { travel_time_ratio: 0.0, ..ScoringConfig::default() }, "travel_time_ratio")]
    #[case::negative_reward(ScoringConfig { compatibility_reward: -1.0, ..ScoringConfig::default() }, "compatibility_reward")]
    #[case::inverted_buckets(ScoringConfig { near_travel_fraction: 0.7, ..ScoringConfig::default() }, "near_travel_fraction")]
    #[case::crime_above_scale(ScoringConfig { crime_disqualify_threshold: 120.0, ..ScoringConfig::default() }, "crime_disqualify_threshold")]
    #[case::inverted_crime(ScoringConfig { crime_caution_threshold: 70.0, ..ScoringConfig::default() }, "crime_caution_threshold")]
    fn validation_rejects_unusable_values(
        #[case] config: ScoringConfig,
        #[case] expected_field: &str,
    ) {
        let err = config.validate().expect_err("config should be rejected");
        match err {
            ScoringConfigError::InvalidValue { field, .. } => assert_eq!(field, expected_field),
            other => panic!("expected InvalidValue, found {other:?}"),
        }
    }

    #[rstest]
    fn partial_files_fall_back_to_defaults() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_config(&dir, r#"{"compatibility_reward": 2.0}"#);

        let config = load_scoring_config(&path).expect("load partial config");

        assert_eq!(config.compatibility_reward, 2.0);
        assert_eq!(config.travel_time_ratio, 0.25);
    }

    #[rstest]
    fn unknown_fields_are_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_config(&dir, r#"{"popularity_weight": 1.0}"#);

        let err = load_scoring_config(&path).expect_err("unknown field");
        assert!(matches!(err, ScoringConfigError::Parse { .. }));
    }

    #[rstest]
    fn loaded_values_are_validated() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_config(&dir, r#"{"crime_caution_threshold": 80.0}"#);

        let err = load_scoring_config(&path).expect_err("inverted thresholds");
        assert!(matches!(err, ScoringConfigError::InvalidValue { .. }));
    }

    #[rstest]
    fn missing_file_reports_read_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.json")).expect("utf8 path");

        let err = load_scoring_config(&path).expect_err("missing file");
        assert!(matches!(err, ScoringConfigError::ReadFile { .. }));
    }
}
