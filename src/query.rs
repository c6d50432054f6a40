//! Read-only calendar queries used to present and navigate Jalali dates.

use std::collections::BTreeMap;

use tracing::warn;

use crate::config::CalendarConfig;
use crate::consts::{
    DAYS_IN_WEEK, DEFAULT_STARTING_WEEKDAY, FIRST_DAY_OF_WEEK_KEY, FIRST_MONTH, LAST_MONTH,
    MAX_DAY_OF_MONTH, MAX_YEAR, MIN_DAY_OF_MONTH, MIN_YEAR, STARTING_WEEKDAY_PREFERENCE,
    WEEKDAY_PROBE_HOUR,
};
use crate::convert::{gregorian_to_jalali, jalali_to_gregorian};
use crate::error::CalendarError;
use crate::metadata::{day_of_year, days_in_jalali_month};
use crate::provider::{GregorianService, LocaleProvider, PreferenceProvider};
use crate::types::{JalaliDateArray, JalaliMonth, Weekday, WeekdayName};

/// Every day-of-month value any month can have, for populating pickers.
/// Not the length of a particular month.
pub fn valid_days() -> Vec<i32> {
    (MIN_DAY_OF_MONTH..=MAX_DAY_OF_MONTH).collect()
}

/// Localized month names keyed by month number
///
/// # Errors
/// Returns `CalendarError::MissingTranslation` if any `month{n}` key is missing.
pub fn month_names<L: LocaleProvider>(locale: &L) -> Result<BTreeMap<i32, String>, CalendarError> {
    JalaliMonth::ALL
        .iter()
        .map(|month| Ok((month.number(), locale.name_for(&month.translation_key())?)))
        .collect()
}

/// Earliest year offered by default
pub const fn min_year() -> i32 {
    MIN_YEAR
}

/// Latest year offered by default (inclusive)
pub const fn max_year() -> i32 {
    MAX_YEAR
}

/// Years from `min` to `max` inclusive, each mapped to itself.
/// Bounds default to the supported range.
///
/// # Errors
/// Returns `CalendarError::InvalidYearRange` if `min > max`.
pub fn year_range(min: Option<i32>, max: Option<i32>) -> Result<BTreeMap<i32, i32>, CalendarError> {
    let min = min.unwrap_or(MIN_YEAR);
    let max = max.unwrap_or(MAX_YEAR);
    if min > max {
        return Err(CalendarError::InvalidYearRange { min, max });
    }
    Ok((min..=max).map(|year| (year, year)).collect())
}

/// [`year_range`] over the bounds of a [`CalendarConfig`]
///
/// # Errors
/// Returns `CalendarError::InvalidYearRange` if the configured bounds are inverted.
pub fn configured_year_range(config: &CalendarConfig) -> Result<BTreeMap<i32, i32>, CalendarError> {
    year_range(Some(config.min_year), Some(config.max_year))
}

/// Number of days in a Jalali month
pub const fn days_in_month(year: i32, month: i32) -> i32 {
    days_in_jalali_month(year, month)
}

/// Month before `(year, month)`, returned as `(month, year)`
pub const fn previous_month(year: i32, month: i32) -> (i32, i32) {
    if month == FIRST_MONTH {
        (LAST_MONTH, year - 1)
    } else {
        (month - 1, year)
    }
}

/// Month after `(year, month)`, returned as `(month, year)`
pub const fn next_month(year: i32, month: i32) -> (i32, i32) {
    if month == LAST_MONTH {
        (FIRST_MONTH, year + 1)
    } else {
        (month + 1, year)
    }
}

/// Weekday of a Jalali date.
///
/// The Gregorian service is asked about local noon so that a day boundary
/// shift can't move the answer to a neighbouring day.
pub fn weekday<G: GregorianService>(gregorian: &G, year: i32, month: i32, day: i32) -> Weekday {
    let date = jalali_to_gregorian(year, month, day, WEEKDAY_PROBE_HOUR, 0);
    gregorian.weekday(&date)
}

/// Weekday index (0 = Sunday .. 6 = Saturday) of a Jalali date
pub fn weekday_index<G: GregorianService>(gregorian: &G, year: i32, month: i32, day: i32) -> u8 {
    weekday(gregorian, year, month, day).index()
}

/// Number of days in a week
pub const fn num_weekdays() -> u8 {
    DAYS_IN_WEEK
}

/// Short and full localized names for each weekday, Sunday first
///
/// # Errors
/// Returns `CalendarError::MissingTranslation` if a `wday{n}` or `weekday{n}` key is missing.
pub fn weekdays<L: LocaleProvider>(locale: &L) -> Result<Vec<WeekdayName>, CalendarError> {
    Weekday::ALL
        .iter()
        .map(|day| {
            Ok(WeekdayName {
                short: locale.name_for(&day.short_key())?,
                full: locale.name_for(&day.full_key())?,
            })
        })
        .collect()
}

/// Parses a numeric preference the way loosely typed settings are stored:
/// integers or decimals (truncated), surrounding whitespace ignored.
#[allow(clippy::cast_possible_truncation)]
fn parse_weekday(value: &str) -> Option<Weekday> {
    let trimmed = value.trim();
    let index = trimmed.parse::<i64>().ok().or_else(|| {
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v.trunc() as i64)
    })?;
    Some(Weekday::from_index(index))
}

/// First day of the week for calendar views.
///
/// The site setting wins over the language's `firstdayofweek`; a
/// non-numeric value falls back to Saturday. A user preference, when set,
/// overrides the result.
///
/// # Errors
/// Returns `CalendarError::MissingTranslation` if no site setting exists and
/// the locale lacks `firstdayofweek`.
pub fn starting_weekday<S, U, L>(site: &S, user: &U, locale: &L) -> Result<Weekday, CalendarError>
where
    S: PreferenceProvider,
    U: PreferenceProvider,
    L: LocaleProvider,
{
    let configured = match site.preference(STARTING_WEEKDAY_PREFERENCE) {
        Some(value) => value,
        None => locale.name_for(FIRST_DAY_OF_WEEK_KEY)?,
    };

    let default = parse_weekday(&configured).unwrap_or_else(|| {
        warn!(value = %configured, "non-numeric first day of week, using Saturday");
        Weekday::from_index(i64::from(DEFAULT_STARTING_WEEKDAY))
    });

    let chosen = user.get_preference(STARTING_WEEKDAY_PREFERENCE, &default.index().to_string());
    Ok(parse_weekday(&chosen).unwrap_or_else(|| {
        warn!(value = %chosen, "non-numeric user first day of week, ignoring");
        default
    }))
}

/// Jalali fields of a UTC timestamp under `timezone`.
///
/// Hour, minute and weekday come straight from the Gregorian service.
pub fn timestamp_to_date_array<G: GregorianService>(gregorian: &G, time: i64, timezone: &str) -> JalaliDateArray {
    let array = gregorian.timestamp_to_date_array(time, timezone);
    let g = array.date;
    let date = gregorian_to_jalali(g.year, g.month, g.day, g.hour, g.minute);
    JalaliDateArray {
        date,
        weekday: array.weekday,
        yday: day_of_year(date.month, date.day),
    }
}
