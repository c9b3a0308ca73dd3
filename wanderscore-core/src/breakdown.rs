//! Per-destination scoring results.

/// The seven independent components of a destination score.
///
/// # Examples
/// ```
/// use std::str::FromStr;
/// use wanderscore_core::SubScore;
///
/// assert_eq!(SubScore::Visa.as_str(), "visa");
/// assert_eq!(SubScore::from_str("Safety"), Ok(SubScore::Safety));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubScore {
    /// Travel time and layovers.
    Accessibility,
    /// Budget slack after estimated costs.
    Affordability,
    /// Fit of the travel window with the destination's seasons.
    Seasonality,
    /// Fit of the traveller group.
    Compatibility,
    /// Visa-free entry.
    Visa,
    /// Crime, stability and health alerts.
    Safety,
    /// Language support.
    Language,
}

impl SubScore {
    /// Every sub-score in reporting order.
    pub const ALL: [Self; 7] = [
        Self::Accessibility,
        Self::Affordability,
        Self::Seasonality,
        Self::Compatibility,
        Self::Visa,
        Self::Safety,
        Self::Language,
    ];

    /// Return the sub-score name as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accessibility => "accessibility",
            Self::Affordability => "affordability",
            Self::Seasonality => "seasonality",
            Self::Compatibility => "compatibility",
            Self::Visa => "visa",
            Self::Safety => "safety",
            Self::Language => "language",
        }
    }
}

impl std::fmt::Display for SubScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubScore {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == wanted)
            .ok_or_else(|| format!("unknown sub-score '{s}'"))
    }
}

/// The seven sub-scores of one destination and their sum.
///
/// The total is computed once at construction; the value is never mutated
/// afterwards.
///
/// # Examples
/// ```
/// use wanderscore_core::{ScoreBreakdown, SubScore};
///
/// let breakdown = ScoreBreakdown::new(2.0, 1.0, 1.5, 1.5, 1.0, 1.0, 1.0);
/// assert_eq!(breakdown.total(), 9.0);
/// assert_eq!(breakdown.get(SubScore::Seasonality), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreBreakdown {
    accessibility: f64,
    affordability: f64,
    seasonality: f64,
    compatibility: f64,
    visa: f64,
    safety: f64,
    language: f64,
    total: f64,
}

impl ScoreBreakdown {
    /// Build a breakdown from the seven sub-scores, computing the total.
    #[expect(
        clippy::float_arithmetic,
        reason = "the total is the plain sum of the sub-scores"
    )]
    #[must_use]
    pub fn new(
        accessibility: f64,
        affordability: f64,
        seasonality: f64,
        compatibility: f64,
        visa: f64,
        safety: f64,
        language: f64,
    ) -> Self {
        let total =
            accessibility + affordability + seasonality + compatibility + visa + safety + language;
        Self {
            accessibility,
            affordability,
            seasonality,
            compatibility,
            visa,
            safety,
            language,
            total,
        }
    }

    /// Return the value of one sub-score.
    #[must_use]
    pub const fn get(&self, sub_score: SubScore) -> f64 {
        match sub_score {
            SubScore::Accessibility => self.accessibility,
            SubScore::Affordability => self.affordability,
            SubScore::Seasonality => self.seasonality,
            SubScore::Compatibility => self.compatibility,
            SubScore::Visa => self.visa,
            SubScore::Safety => self.safety,
            SubScore::Language => self.language,
        }
    }

    /// Iterate over `(sub-score, value)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (SubScore, f64)> + '_ {
        SubScore::ALL
            .into_iter()
            .map(|sub_score| (sub_score, self.get(sub_score)))
    }

    /// Sum of all sub-scores.
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }

    /// Accessibility sub-score.
    #[must_use]
    pub const fn accessibility(&self) -> f64 {
        self.accessibility
    }

    /// Affordability sub-score.
    #[must_use]
    pub const fn affordability(&self) -> f64 {
        self.affordability
    }

    /// Seasonality sub-score.
    #[must_use]
    pub const fn seasonality(&self) -> f64 {
        self.seasonality
    }

    /// Compatibility sub-score.
    #[must_use]
    pub const fn compatibility(&self) -> f64 {
        self.compatibility
    }

    /// Visa sub-score.
    #[must_use]
    pub const fn visa(&self) -> f64 {
        self.visa
    }

    /// Safety sub-score.
    #[must_use]
    pub const fn safety(&self) -> f64 {
        self.safety
    }

    /// Language sub-score.
    #[must_use]
    pub const fn language(&self) -> f64 {
        self.language
    }
}
