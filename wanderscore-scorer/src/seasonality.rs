//! Seasonality: how well the travel window matches a destination's seasons.

use wanderscore_core::{SeasonMetrics, TravelerProfile};

const IDEAL: f64 = 1.0;
const NEUTRAL: f64 = 0.5;
const BAD: f64 = 0.1;

const FESTIVE: f64 = 0.5;
const NOT_FESTIVE: f64 = 0.1;

#[expect(
    clippy::float_arithmetic,
    reason = "seasonality is the sum of two component scores"
)]
pub(crate) fn score(season: &SeasonMetrics, profile: &TravelerProfile) -> f64 {
    let timeslot = profile.trip_timeslot();
    season_fit_score(season, timeslot) + festive_score(season, timeslot)
}

// Ideal wins over bad when a timeslot appears in both sets.
pub(crate) fn season_fit_score(season: &SeasonMetrics, timeslot: &str) -> f64 {
    if season.ideal_season().contains(timeslot) {
        IDEAL
    } else if season.bad_season().contains(timeslot) {
        BAD
    } else {
        NEUTRAL
    }
}

pub(crate) fn festive_score(season: &SeasonMetrics, timeslot: &str) -> f64 {
    if season.festive_season().contains(timeslot) {
        FESTIVE
    } else {
        NOT_FESTIVE
    }
}
