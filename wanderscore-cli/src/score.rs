//! Score command implementation for the Wanderscore CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};
use wanderscore_core::{MetricsPayload, ProfilePayload, ScoreBreakdown, Scorer, TravelerProfile};
use wanderscore_fs::open_utf8_file;
use wanderscore_scorer::DestinationScorer;

use crate::{ARG_SCORE_REQUEST, ARG_SCORING_CONFIG, CliError, ENV_SCORE_REQUEST};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every destination in a JSON request against the \
                 request's traveller profile. Destinations with incomplete \
                 or malformed metrics are reported as excluded. Scoring \
                 thresholds can be tuned with a JSON scoring configuration.",
    about = "Score destinations for a traveller"
)]
#[ortho_config(prefix = "WANDERSCORE")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing a score request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON scoring configuration overriding the default thresholds.
    #[arg(long = ARG_SCORING_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) scoring_config: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Optional path to a scoring configuration file.
    pub(crate) scoring_config: Option<Utf8PathBuf>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_SCORE_REQUEST)?;
        if let Some(path) = &self.scoring_config {
            Self::require_existing(path, ARG_SCORING_CONFIG)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match wanderscore_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn build_scorer(&self) -> Result<DestinationScorer, CliError> {
        match &self.scoring_config {
            Some(path) => Ok(DestinationScorer::from_config_file(path)?),
            None => Ok(DestinationScorer::default()),
        }
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SCORE_REQUEST,
            env: ENV_SCORE_REQUEST,
        })?;
        Ok(Self {
            request_path,
            scoring_config: args.scoring_config,
        })
    }
}

/// JSON request read by the `score` command.
#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) profile: ProfilePayload,
    #[serde(default)]
    pub(crate) destinations: Vec<DestinationEntry>,
}

/// One named destination with its raw provider metrics.
///
/// Metrics stay undecoded until scoring so that a malformed entry excludes
/// only its own destination.
#[derive(Debug, Deserialize)]
pub(crate) struct DestinationEntry {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) metrics: Option<serde_json::Value>,
}

/// Report written by the `score` command.
#[derive(Debug, Serialize)]
pub(crate) struct ScoreReport {
    pub(crate) destinations: Vec<DestinationReport>,
}

/// Scoring outcome for a single destination.
#[derive(Debug, Serialize)]
pub(crate) struct DestinationReport {
    pub(crate) name: String,
    #[serde(flatten)]
    pub(crate) outcome: Outcome,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub(crate) enum Outcome {
    Scored { breakdown: ScoreBreakdown },
    Excluded {
        reason: String,
        /// Sub-record at fault, absent when the metrics could not be decoded.
        #[serde(skip_serializing_if = "Option::is_none")]
        record: Option<&'static str>,
    },
}

pub(super) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

pub(super) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_score_config(args)?;
    let scorer = config.build_scorer()?;
    let request = load_score_request(&config.request_path)?;
    let profile =
        TravelerProfile::try_from(request.profile).map_err(|source| CliError::InvalidProfile {
            path: config.request_path.clone(),
            source,
        })?;
    let report = score_destinations(&scorer, &profile, request.destinations);
    write_score_report(writer, &report)
}

fn resolve_score_config(args: ScoreArgs) -> Result<ScoreConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`ScoreRequest`] from disk.
pub(super) fn load_score_request(path: &Utf8Path) -> Result<ScoreRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenScoreRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseScoreRequest {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn score_destinations(
    scorer: &dyn Scorer,
    profile: &TravelerProfile,
    destinations: Vec<DestinationEntry>,
) -> ScoreReport {
    let reports: Vec<DestinationReport> = destinations
        .into_iter()
        .map(|entry| {
            let outcome = score_entry(scorer, profile, entry.metrics);
            if let Outcome::Excluded { reason, .. } = &outcome {
                log::warn!("excluding destination {}: {reason}", entry.name);
            }
            DestinationReport {
                name: entry.name,
                outcome,
            }
        })
        .collect();
    log::info!("scored {} destinations", reports.len());
    ScoreReport {
        destinations: reports,
    }
}

fn score_entry(
    scorer: &dyn Scorer,
    profile: &TravelerProfile,
    metrics: Option<serde_json::Value>,
) -> Outcome {
    let payload = match metrics.map(serde_json::from_value::<MetricsPayload>) {
        None => MetricsPayload::default(),
        Some(Ok(payload)) => payload,
        Some(Err(err)) => {
            return Outcome::Excluded {
                reason: format!("malformed metrics: {err}"),
                record: None,
            };
        }
    };
    match scorer.score_payload(profile, &payload) {
        Ok(breakdown) => Outcome::Scored { breakdown },
        Err(err) => Outcome::Excluded {
            reason: err.to_string(),
            record: Some(err.record().as_str()),
        },
    }
}

fn write_score_report(writer: &mut dyn Write, report: &ScoreReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseScoreReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteScoreReport)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteScoreReport)?;
    Ok(())
}
