//! Error type for the jalali_calendar crate.

/// Error type for all fallible operations in the crate.
///
/// The conversion functions themselves never fail; errors come from the
/// checked constructors, from collaborators and from configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A locale table has no entry for a required key.
    #[error("missing translation for key '{key}'")]
    MissingTranslation {
        /// The key that could not be resolved.
        key: String,
    },

    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(i32),

    /// Day outside the valid range for its month and year.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    /// Requested year range with `min > max`.
    #[error("Invalid year range: {min} is after {max}")]
    InvalidYearRange { min: i32, max: i32 },

    /// Configuration that cannot be applied.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CalendarError {
    pub(crate) fn missing(key: impl Into<String>) -> Self {
        Self::MissingTranslation { key: key.into() }
    }
}
