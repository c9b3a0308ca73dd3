#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for destination scoring.

use std::cell::RefCell;
use std::collections::BTreeSet;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wanderscore_core::{
    BudgetPayload, FitPayload, LanguagePayload, MetricRecord, MetricsError, MetricsPayload,
    SafetyPayload, ScoreBreakdown, Scorer, SeasonPayload, TravelPayload, TravelerProfile,
    VisaPayload,
};
use wanderscore_scorer::DestinationScorer;

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    profile: RefCell<Option<TravelerProfile>>,
    payload: RefCell<MetricsPayload>,
    outcome: RefCell<Option<Result<ScoreBreakdown, MetricsError>>>,
}

fn labels(values: &[&str]) -> Option<BTreeSet<String>> {
    Some(values.iter().map(|&value| value.to_owned()).collect())
}

fn baseline_payload() -> MetricsPayload {
    MetricsPayload {
        travel: Some(TravelPayload {
            travel_time_hours: Some(4.0),
            layover_count: Some(0),
        }),
        budget: Some(BudgetPayload {
            daily_cost: Some(10.0),
            travel_cost: Some(10.0),
        }),
        season: Some(SeasonPayload {
            ideal_season: labels(&["July"]),
            bad_season: labels(&["January"]),
            festive_season: labels(&["July"]),
        }),
        fit: Some(FitPayload {
            type_fit: Some("solo".to_owned()),
        }),
        visa: Some(VisaPayload {
            requires_visa_for: labels(&["China"]),
        }),
        safety: Some(SafetyPayload {
            crime_index: Some(20.0),
            political_stable: Some(true),
            has_health_alert: Some(false),
        }),
        language: Some(LanguagePayload {
            speaks_english: Some(true),
            has_tourist_support: Some(true),
        }),
    }
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        profile: RefCell::new(None),
        payload: RefCell::new(baseline_payload()),
        outcome: RefCell::new(None),
    }
}

#[given("a solo South Korean traveller with 1000 to spend over 10 days in July")]
fn solo_traveller(context: &TestContext) {
    let profile = TravelerProfile::new(1_000.0, 10, "July", "solo", "South Korea")
        .expect("valid traveller profile");
    *context.profile.borrow_mut() = Some(profile);
}

#[given("a destination reachable in 18 hours with no layovers")]
fn eighteen_hours_direct(context: &TestContext) {
    set_travel(context, 18.0);
}

#[given("a destination reachable in 18.000001 hours with no layovers")]
fn just_over_eighteen_hours_direct(context: &TestContext) {
    set_travel(context, 18.000_001);
}

#[given("the destination costs 50 per day plus 300 to get there")]
fn fifty_per_day(context: &TestContext) {
    context.payload.borrow_mut().budget = Some(BudgetPayload {
        daily_cost: Some(50.0),
        travel_cost: Some(300.0),
    });
}

#[given("the destination requires visas for South Korea and China")]
fn visa_for_korea(context: &TestContext) {
    context.payload.borrow_mut().visa = Some(VisaPayload {
        requires_visa_for: labels(&["South Korea", "China"]),
    });
}

#[given("the destination has no safety data")]
fn no_safety_data(context: &TestContext) {
    context.payload.borrow_mut().safety = None;
}

#[when("I score the destination")]
fn score_destination(context: &TestContext) {
    let borrowed = context.profile.borrow();
    let profile = borrowed.as_ref().expect("profile must be initialised");
    let outcome = DestinationScorer::default().score_payload(profile, &context.payload.borrow());
    *context.outcome.borrow_mut() = Some(outcome);
}

#[then("the total score is 9.0")]
fn total_is_nine(context: &TestContext) {
    assert_eq!(scored(context).total(), 9.0);
}

#[then("the accessibility score is 1.5")]
fn accessibility_drops_a_bucket(context: &TestContext) {
    assert_eq!(scored(context).accessibility(), 1.5);
}

#[then("the visa score is 0.0")]
fn visa_required(context: &TestContext) {
    assert_eq!(scored(context).visa(), 0.0);
}

#[then("the destination is excluded for missing safety metrics")]
fn excluded_for_safety(context: &TestContext) {
    let outcome = context.outcome.borrow();
    let err = outcome
        .as_ref()
        .expect("outcome recorded")
        .as_ref()
        .expect_err("destination should be excluded");
    assert_eq!(
        *err,
        MetricsError::MissingRecord {
            record: MetricRecord::Safety
        }
    );
}

fn set_travel(context: &TestContext, hours: f64) {
    context.payload.borrow_mut().travel = Some(TravelPayload {
        travel_time_hours: Some(hours),
        layover_count: Some(0),
    });
}

fn scored(context: &TestContext) -> ScoreBreakdown {
    *context
        .outcome
        .borrow()
        .as_ref()
        .expect("outcome recorded")
        .as_ref()
        .expect("destination should be scored")
}

#[scenario(path = "tests/features/destination_scoring.feature", index = 0)]
fn comfortable_destination(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/destination_scoring.feature", index = 1)]
fn travel_beyond_short_bucket(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/destination_scoring.feature", index = 2)]
fn visa_required_for_citizenship(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/destination_scoring.feature", index = 3)]
fn incomplete_data_is_excluded(context: TestContext) {
    let _ = context;
}
