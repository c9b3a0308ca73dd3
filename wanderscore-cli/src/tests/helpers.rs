//! Test helpers for composing score requests on disk.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

pub(super) fn utf8_root(dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace")
}

/// Profile for a solo South Korean traveller on a ten-day July trip.
pub(super) fn solo_profile() -> Value {
    json!({
        "per_person_budget": 1000.0,
        "trip_length_days": 10,
        "trip_timeslot": "July",
        "traveler_type": "solo",
        "citizenship": "South Korea",
    })
}

/// Metrics that earn every sub-score maximum for [`solo_profile`].
pub(super) fn ideal_metrics() -> Value {
    json!({
        "travel": { "travel_time_hours": 18.0, "layover_count": 0 },
        "budget": { "daily_cost": 50.0, "travel_cost": 300.0 },
        "season": {
            "ideal_season": ["July"],
            "bad_season": ["January"],
            "festive_season": ["July"],
        },
        "fit": { "type_fit": "solo" },
        "visa": { "requires_visa_for": ["China"] },
        "safety": { "crime_index": 20.0, "political_stable": true, "has_health_alert": false },
        "language": { "speaks_english": true, "has_tourist_support": true },
    })
}

/// Metrics for [`ideal_metrics`] with one sub-record removed.
pub(super) fn metrics_without(record: &str) -> Value {
    let mut metrics = ideal_metrics();
    if let Some(object) = metrics.as_object_mut() {
        object.remove(record);
    }
    metrics
}
