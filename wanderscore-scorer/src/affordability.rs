//! Affordability: budget slack left after the estimated trip cost.

use wanderscore_core::{BudgetMetrics, TravelerProfile};

use crate::ScoringConfig;

const COMFORTABLE: f64 = 1.0;
const TIGHT: f64 = 0.5;
const UNAFFORDABLE: f64 = 0.0;

/// Score the margin between budget and total cost.
///
/// The total cost is the daily cost over the whole trip plus the travel
/// cost. A margin of at least [`ScoringConfig::budget_slack_ratio`] of the
/// budget scores 1.0, any non-negative margin 0.5, and an overrun 0.0.
#[expect(
    clippy::float_arithmetic,
    reason = "cost and margin are computed from currency amounts"
)]
pub(crate) fn score(
    budget: &BudgetMetrics,
    profile: &TravelerProfile,
    config: &ScoringConfig,
) -> f64 {
    let per_person_budget = profile.per_person_budget();
    let total_cost =
        budget.daily_cost() * f64::from(profile.trip_length_days()) + budget.travel_cost();
    let margin = per_person_budget - total_cost;
    if margin >= per_person_budget * config.budget_slack_ratio {
        COMFORTABLE
    } else if margin >= 0.0 {
        TIGHT
    } else {
        UNAFFORDABLE
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use wanderscore_core::{BudgetMetrics, TravelerProfile};

    use super::*;

    #[rstest]
    #[case(50.0, 300.0, 1.0)]
    #[case(50.0, 301.0, 0.5)]
    #[case(50.0, 500.0, 0.5)]
    #[case(50.0, 500.5, 0.0)]
    fn thousand_budget_ten_days(
        #[case] daily_cost: f64,
        #[case] travel_cost: f64,
        #[case] expected: f64,
    ) {
        let profile =
            TravelerProfile::new(1_000.0, 10, "July", "solo", "Peru").expect("valid profile");
        let budget = BudgetMetrics::new(daily_cost, travel_cost).expect("valid budget");
        assert_eq!(score(&budget, &profile, &ScoringConfig::default()), expected);
    }

    #[rstest]
    fn zero_budget_with_free_trip_is_comfortable() {
        let profile = TravelerProfile::new(0.0, 3, "May", "solo", "Peru").expect("valid profile");
        let budget = BudgetMetrics::new(0.0, 0.0).expect("valid budget");
        assert_eq!(score(&budget, &profile, &ScoringConfig::default()), 1.0);
    }
}
