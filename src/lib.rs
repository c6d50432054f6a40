//! Gregorian <-> Jalali (Persian solar Hijri) date conversion.
//!
//! The crate is a set of pure functions: conversion between the two
//! calendars, the Jalali leap rule and month lengths, navigation helpers
//! for calendar views, and a strftime-style formatter. Locale strings,
//! preferences and timestamp decomposition are supplied by the caller
//! through [`LocaleProvider`], [`PreferenceProvider`] and
//! [`GregorianService`].
//!
//! Conversions are exact for Jalali years [`MIN_YEAR`]..=[`MAX_YEAR`].
//! Inputs are not validated: out-of-range months and days produce
//! deterministic but meaningless dates. Use [`JalaliDate::new`] or
//! [`GregorianDate::new`] to reject them up front.

mod config;
mod consts;
mod convert;
mod error;
mod format;
mod metadata;
mod prelude;
mod provider;
mod query;
mod types;

pub use config::CalendarConfig;
pub use consts::*;
pub use convert::{gregorian_to_jalali, gregorian_weekday, jalali_to_gregorian, to_gregorian, to_jalali};
pub use error::CalendarError;
pub use format::DateFormatter;
pub use metadata::{
    day_of_year, days_in_gregorian_month, days_in_jalali_month, days_in_jalali_year,
    is_gregorian_leap_year, is_jalali_leap_year,
};
pub use provider::{GregorianDateArray, GregorianService, LocaleProvider, PreferenceProvider};
pub use query::{
    configured_year_range, days_in_month, max_year, min_year, month_names, next_month,
    num_weekdays, previous_month, starting_weekday, timestamp_to_date_array, valid_days, weekday,
    weekday_index, weekdays, year_range,
};
pub use types::{GregorianDate, JalaliDate, JalaliDateArray, JalaliMonth, Weekday, WeekdayName};
