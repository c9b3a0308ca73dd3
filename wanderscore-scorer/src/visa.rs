//! Visa: whether the traveller can enter without a visa.

use wanderscore_core::{TravelerProfile, VisaMetrics};

const VISA_FREE: f64 = 1.0;
const VISA_REQUIRED: f64 = 0.0;

pub(crate) fn score(visa: &VisaMetrics, profile: &TravelerProfile) -> f64 {
    if visa.requires_visa(profile.citizenship()) {
        VISA_REQUIRED
    } else {
        VISA_FREE
    }
}
