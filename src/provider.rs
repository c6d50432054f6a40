//! Capabilities supplied by the host application.
//!
//! The calendar core holds no locale data, preferences or timezone rules.
//! It reaches them only through these traits.

use crate::convert::gregorian_weekday;
use crate::error::CalendarError;
use crate::types::{GregorianDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Resolves translation keys (`month3`, `weekday0`, `am`, ...) to display text.
///
/// Tables must cover `month1`..`month12`, `wday0`..`wday6`,
/// `weekday0`..`weekday6`, `am`, `pm`, `am_caps`, `pm_caps` and
/// `firstdayofweek`.
pub trait LocaleProvider {
    /// Returns the text for `key`, or `None` if the table has no entry
    fn translation(&self, key: &str) -> Option<String>;

    /// Returns the text for `key`
    ///
    /// # Errors
    /// Returns `CalendarError::MissingTranslation` if the key is unknown.
    fn name_for(&self, key: &str) -> Result<String, CalendarError> {
        self.translation(key)
            .ok_or_else(|| CalendarError::missing(key))
    }
}

/// Resolves site or user configuration overrides by name.
pub trait PreferenceProvider {
    /// Returns the configured value for `name`, or `None` if unset
    fn preference(&self, name: &str) -> Option<String>;

    /// Returns the configured value for `name`, or `default` if unset
    fn get_preference(&self, name: &str, default: &str) -> String {
        self.preference(name)
            .unwrap_or_else(|| default.to_owned())
    }
}

/// Gregorian fields of a timestamp under some timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GregorianDateArray {
    pub date: GregorianDate,
    pub weekday: Weekday,
}

/// The host's Gregorian calendar: timestamp decomposition and residual
/// strftime-style formatting.
pub trait GregorianService {
    /// Splits a UTC timestamp into Gregorian fields under `timezone`
    fn timestamp_to_date_array(&self, time: i64, timezone: &str) -> GregorianDateArray;

    /// Formats `time` using `template`, substituting whatever tokens remain
    fn format(&self, time: i64, template: &str, timezone: &str, fix_day: bool, fix_hour: bool) -> String;

    /// Weekday of a Gregorian date
    fn weekday(&self, date: &GregorianDate) -> Weekday {
        gregorian_weekday(date)
    }
}

impl<S: BuildHasher> LocaleProvider for HashMap<String, String, S> {
    fn translation(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl LocaleProvider for BTreeMap<String, String> {
    fn translation(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<S: BuildHasher> PreferenceProvider for HashMap<String, String, S> {
    fn preference(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl PreferenceProvider for BTreeMap<String, String> {
    fn preference(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T: LocaleProvider + ?Sized> LocaleProvider for &T {
    fn translation(&self, key: &str) -> Option<String> {
        (**self).translation(key)
    }
}

impl<T: PreferenceProvider + ?Sized> PreferenceProvider for &T {
    fn preference(&self, name: &str) -> Option<String> {
        (**self).preference(name)
    }
}
