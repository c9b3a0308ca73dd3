//! Traveller preferences driving destination scoring.
//!
//! A [`TravelerProfile`] is validated once at construction and never mutated
//! afterwards, so a single profile can be shared by reference across every
//! destination scored for the same traveller.

use thiserror::Error;

/// A traveller's stated preferences.
///
/// # Examples
///
/// ```
/// use wanderscore_core::TravelerProfile;
///
/// # fn main() -> Result<(), wanderscore_core::ProfileError> {
/// let profile = TravelerProfile::new(1_000.0, 10, "July", "solo", "South Korea")?;
/// assert_eq!(profile.trip_length_days(), 10);
/// assert_eq!(profile.trip_timeslot(), "July");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ProfilePayload")
)]
pub struct TravelerProfile {
    per_person_budget: f64,
    trip_length_days: u32,
    trip_timeslot: String,
    traveler_type: String,
    citizenship: String,
}

/// Errors returned when a [`TravelerProfile`] fails validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// The trip must last at least one day.
    #[error("trip length must be at least one day, got {days}")]
    NonPositiveTripLength {
        /// Requested trip length.
        days: i64,
    },
    /// The trip length does not fit the supported range.
    #[error("trip length of {days} days is outside the supported range")]
    TripLengthOutOfRange {
        /// Requested trip length.
        days: i64,
    },
    /// The per-person budget was below zero.
    #[error("per-person budget must not be negative, got {budget}")]
    NegativeBudget {
        /// Requested budget.
        budget: f64,
    },
    /// The per-person budget was NaN or infinite.
    #[error("per-person budget must be a finite number")]
    NonFiniteBudget,
}

impl TravelerProfile {
    /// Validates and constructs a [`TravelerProfile`].
    ///
    /// # Errors
    /// Returns [`ProfileError`] when `trip_length_days` is zero or the
    /// budget is negative or not finite.
    pub fn new(
        per_person_budget: f64,
        trip_length_days: u32,
        trip_timeslot: impl Into<String>,
        traveler_type: impl Into<String>,
        citizenship: impl Into<String>,
    ) -> Result<Self, ProfileError> {
        if trip_length_days == 0 {
            return Err(ProfileError::NonPositiveTripLength { days: 0 });
        }
        if !per_person_budget.is_finite() {
            return Err(ProfileError::NonFiniteBudget);
        }
        if per_person_budget < 0.0 {
            return Err(ProfileError::NegativeBudget {
                budget: per_person_budget,
            });
        }
        Ok(Self {
            per_person_budget,
            trip_length_days,
            trip_timeslot: trip_timeslot.into(),
            traveler_type: traveler_type.into(),
            citizenship: citizenship.into(),
        })
    }

    /// Budget available to each traveller, in currency units.
    #[must_use]
    pub const fn per_person_budget(&self) -> f64 {
        self.per_person_budget
    }

    /// Length of the trip in days; always at least one.
    #[must_use]
    pub const fn trip_length_days(&self) -> u32 {
        self.trip_length_days
    }

    /// Season or month label of the travel window, e.g. `"July"`.
    #[must_use]
    pub const fn trip_timeslot(&self) -> &str {
        self.trip_timeslot.as_str()
    }

    /// Traveller group label, e.g. `"solo"`, `"duo"` or `"group"`.
    #[must_use]
    pub const fn traveler_type(&self) -> &str {
        self.traveler_type.as_str()
    }

    /// Nationality label used for visa lookups.
    #[must_use]
    pub const fn citizenship(&self) -> &str {
        self.citizenship.as_str()
    }
}

/// Unvalidated profile fields as received from a caller.
///
/// The trip length is signed so that negative requests can be reported as
/// validation failures rather than decoding failures.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfilePayload {
    /// Budget available to each traveller.
    pub per_person_budget: f64,
    /// Trip length in days.
    pub trip_length_days: i64,
    /// Season or month label of the travel window.
    pub trip_timeslot: String,
    /// Traveller group label.
    pub traveler_type: String,
    /// Nationality label.
    pub citizenship: String,
}

impl TryFrom<ProfilePayload> for TravelerProfile {
    type Error = ProfileError;

    fn try_from(payload: ProfilePayload) -> Result<Self, Self::Error> {
        let days = payload.trip_length_days;
        if days <= 0 {
            return Err(ProfileError::NonPositiveTripLength { days });
        }
        let trip_length_days =
            u32::try_from(days).map_err(|_| ProfileError::TripLengthOutOfRange { days })?;
        Self::new(
            payload.per_person_budget,
            trip_length_days,
            payload.trip_timeslot,
            payload.traveler_type,
            payload.citizenship,
        )
    }
}

impl From<TravelerProfile> for ProfilePayload {
    fn from(profile: TravelerProfile) -> Self {
        Self {
            per_person_budget: profile.per_person_budget,
            trip_length_days: i64::from(profile.trip_length_days),
            trip_timeslot: profile.trip_timeslot,
            traveler_type: profile.traveler_type,
            citizenship: profile.citizenship,
        }
    }
}
