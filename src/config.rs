use crate::consts::{MAX_YEAR, MIN_YEAR};
use crate::error::CalendarError;
use serde::{Deserialize, Serialize};

/// Site-level settings for calendar queries and formatting.
///
/// Deserializes from any serde format; missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// First year offered by year pickers
    pub min_year: i32,
    /// Last year offered by year pickers (inclusive)
    pub max_year: i32,
    /// When false, `fix_day` requests are ignored and days are always zero-padded
    pub fix_day_enabled: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            min_year: MIN_YEAR,
            max_year: MAX_YEAR,
            fix_day_enabled: true,
        }
    }
}

impl CalendarConfig {
    /// Checks the settings can be applied
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidConfig` if `min_year > max_year`.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.min_year > self.max_year {
            return Err(CalendarError::InvalidConfig(format!(
                "min_year {} is after max_year {}",
                self.min_year, self.max_year
            )));
        }
        Ok(())
    }

    /// Applies the site switch to a caller's `fix_day` request
    pub const fn effective_fix_day(&self, fix_day: bool) -> bool {
        fix_day && self.fix_day_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_covers_supported_range() {
        let config = CalendarConfig::default();
        assert_eq!(config.min_year, 1278);
        assert_eq!(config.max_year, 1429);
        assert!(config.fix_day_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: CalendarConfig = serde_json::from_str(r#"{"max_year": 1410}"#).unwrap();
        assert_eq!(config.min_year, 1278);
        assert_eq!(config.max_year, 1410);
        assert!(config.fix_day_enabled);
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let config = CalendarConfig {
            min_year: 1400,
            max_year: 1300,
            ..CalendarConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CalendarError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_effective_fix_day() {
        let config = CalendarConfig::default();
        assert!(config.effective_fix_day(true));
        assert!(!config.effective_fix_day(false));

        let config = CalendarConfig {
            fix_day_enabled: false,
            ..CalendarConfig::default()
        };
        assert!(!config.effective_fix_day(true));
    }
}
