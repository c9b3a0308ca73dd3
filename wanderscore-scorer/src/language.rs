//! Language: English fluency first, tourist support as a fallback.

use wanderscore_core::LanguageMetrics;

const ENGLISH: f64 = 1.0;
const TOURIST_SUPPORT: f64 = 0.7;
const NO_SUPPORT: f64 = 0.3;

pub(crate) const fn score(language: &LanguageMetrics) -> f64 {
    if language.speaks_english() {
        ENGLISH
    } else if language.has_tourist_support() {
        TOURIST_SUPPORT
    } else {
        NO_SUPPORT
    }
}
