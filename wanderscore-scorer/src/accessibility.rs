//! Accessibility: how quickly and directly a destination can be reached.
//!
//! The traveller's travel-time limit is a share of the trip's total hours
//! ([`ScoringConfig::travel_time_ratio`]). Travel within the near bucket of
//! that limit scores 1.0, within the far bucket 0.5, and anything longer
//! 0.1. Bucket boundaries are inclusive. Layovers add 1.0 for a direct
//! route, 0.7 for one stop and 0.3 for two or more.

use wanderscore_core::{TravelMetrics, TravelerProfile};

use crate::ScoringConfig;

const HOURS_PER_DAY: f64 = 24.0;

const SHORT_TRAVEL: f64 = 1.0;
const ACCEPTABLE_TRAVEL: f64 = 0.5;
const LONG_TRAVEL: f64 = 0.1;

const DIRECT: f64 = 1.0;
const ONE_LAYOVER: f64 = 0.7;
const MANY_LAYOVERS: f64 = 0.3;

#[expect(
    clippy::float_arithmetic,
    reason = "accessibility is the sum of two component scores"
)]
pub(crate) fn score(
    travel: &TravelMetrics,
    profile: &TravelerProfile,
    config: &ScoringConfig,
) -> f64 {
    travel_time_score(
        travel.travel_time_hours(),
        profile.trip_length_days(),
        config,
    ) + layover_score(travel.layover_count())
}

#[expect(
    clippy::float_arithmetic,
    reason = "the travel-time limit scales the trip length by configured ratios"
)]
pub(crate) fn travel_time_score(
    travel_time_hours: f64,
    trip_length_days: u32,
    config: &ScoringConfig,
) -> f64 {
    let limit = f64::from(trip_length_days) * HOURS_PER_DAY * config.travel_time_ratio;
    if travel_time_hours <= limit * config.near_travel_fraction {
        SHORT_TRAVEL
    } else if travel_time_hours <= limit * config.far_travel_fraction {
        ACCEPTABLE_TRAVEL
    } else {
        LONG_TRAVEL
    }
}

pub(crate) const fn layover_score(layover_count: u32) -> f64 {
    match layover_count {
        0 => DIRECT,
        1 => ONE_LAYOVER,
        _ => MANY_LAYOVERS,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(18.0, 1.0)]
    #[case(18.000_001, 0.5)]
    #[case(36.0, 0.5)]
    #[case(36.5, 0.1)]
    fn ten_day_trip_buckets(#[case] hours: f64, #[case] expected: f64) {
        let config = ScoringConfig::default();
        assert_eq!(travel_time_score(hours, 10, &config), expected);
    }

    #[rstest]
    #[case(0, 1.0)]
    #[case(1, 0.7)]
    #[case(2, 0.3)]
    #[case(9, 0.3)]
    fn layovers(#[case] count: u32, #[case] expected: f64) {
        assert_eq!(layover_score(count), expected);
    }

    #[rstest]
    fn custom_ratio_widens_the_limit() {
        let config = ScoringConfig {
            travel_time_ratio: 0.5,
            ..ScoringConfig::default()
        };
        // Limit is 120h for a ten-day trip, so 36h sits in the near bucket.
        assert_eq!(travel_time_score(36.0, 10, &config), 1.0);
    }
}
