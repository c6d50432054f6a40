use crate::consts::{DAYS_IN_WEEK, FIRST_MONTH, LAST_MONTH, MIN_DAY_OF_MONTH};
use crate::error::CalendarError;
use crate::metadata::{days_in_gregorian_month, days_in_jalali_month};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A date (with hour and minute) in the proleptic Gregorian calendar.
///
/// Fields are plain integers: the conversion functions accept and produce
/// out-of-range values without complaint. Use [`GregorianDate::new`] when
/// validation is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    #[serde(default)]
    pub hour: u8,
    #[serde(default)]
    pub minute: u8,
}

/// A date (with hour and minute) in the Jalali calendar.
///
/// Structurally identical to [`GregorianDate`] but a separate
/// type; moving between the two always goes through a conversion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct JalaliDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    #[serde(default)]
    pub hour: u8,
    #[serde(default)]
    pub minute: u8,
}

fn check_month(month: i32) -> Result<(), CalendarError> {
    if (FIRST_MONTH..=LAST_MONTH).contains(&month) {
        Ok(())
    } else {
        Err(CalendarError::InvalidMonth(month))
    }
}

impl GregorianDate {
    /// Creates a validated Gregorian date at midnight
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` or `CalendarError::InvalidDate`
    /// if the month or day is out of range.
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        check_month(month)?;
        if !(MIN_DAY_OF_MONTH..=days_in_gregorian_month(year, month)).contains(&day) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Self::from_parts(year, month, day, 0, 0))
    }

    /// Builds a date from raw fields without any validation
    pub const fn from_parts(year: i32, month: i32, day: i32, hour: u8, minute: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Returns a copy with the given hour and minute
    #[must_use]
    pub const fn with_time(self, hour: u8, minute: u8) -> Self {
        Self {
            hour,
            minute,
            ..self
        }
    }

    /// Returns `(year, month, day)`
    pub const fn ymd(&self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }
}

impl JalaliDate {
    /// Creates a validated Jalali date at midnight
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` or `CalendarError::InvalidDate`
    /// if the month or day is out of range.
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        check_month(month)?;
        if !(MIN_DAY_OF_MONTH..=days_in_jalali_month(year, month)).contains(&day) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Self::from_parts(year, month, day, 0, 0))
    }

    /// Builds a date from raw fields without any validation
    pub const fn from_parts(year: i32, month: i32, day: i32, hour: u8, minute: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Returns a copy with the given hour and minute
    #[must_use]
    pub const fn with_time(self, hour: u8, minute: u8) -> Self {
        Self {
            hour,
            minute,
            ..self
        }
    }

    /// Returns `(year, month, day)`
    pub const fn ymd(&self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }
}

/// Day of the week, numbered from Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// All weekdays in index order
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Maps any integer onto a weekday, wrapping modulo 7
    pub const fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(DAYS_IN_WEEK as i64) as usize]
    }

    /// Returns the weekday index (0 = Sunday)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Locale key for the short name (`wday0`..`wday6`)
    pub fn short_key(self) -> String {
        format!("wday{}", self.index())
    }

    /// Locale key for the full name (`weekday0`..`weekday6`)
    pub fn full_key(self) -> String {
        format!("weekday{}", self.index())
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < DAYS_IN_WEEK {
            Ok(Self::from_index(i64::from(value)))
        } else {
            Err(CalendarError::InvalidConfig(format!(
                "weekday index {value} is not in 0-6"
            )))
        }
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

/// Month of the Jalali year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(u8)]
pub enum JalaliMonth {
    Farvardin = 1,
    Ordibehesht = 2,
    Khordad = 3,
    Tir = 4,
    Mordad = 5,
    Shahrivar = 6,
    Mehr = 7,
    Aban = 8,
    Azar = 9,
    Dey = 10,
    Bahman = 11,
    Esfand = 12,
}

impl JalaliMonth {
    /// All months in calendar order
    pub const ALL: [Self; 12] = [
        Self::Farvardin,
        Self::Ordibehesht,
        Self::Khordad,
        Self::Tir,
        Self::Mordad,
        Self::Shahrivar,
        Self::Mehr,
        Self::Aban,
        Self::Azar,
        Self::Dey,
        Self::Bahman,
        Self::Esfand,
    ];

    /// Creates a month from its number
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `number` is not in `1..=12`.
    pub fn new(number: i32) -> Result<Self, CalendarError> {
        check_month(number)?;
        // check_month guarantees 1..=12
        #[allow(clippy::cast_sign_loss)]
        let index = (number - FIRST_MONTH) as usize;
        Ok(Self::ALL[index])
    }

    /// Returns the month number (1 = Farvardin)
    #[inline]
    pub const fn number(self) -> i32 {
        self as i32
    }

    /// Locale key for the month name (`month1`..`month12`)
    pub fn translation_key(self) -> String {
        format!("month{}", self.number())
    }

    /// Number of days in this month of `year`
    pub fn days(self, year: i32) -> i32 {
        days_in_jalali_month(year, self.number())
    }
}

impl TryFrom<i32> for JalaliMonth {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JalaliMonth> for i32 {
    fn from(month: JalaliMonth) -> Self {
        month.number()
    }
}

/// Short and full localized names of one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekdayName {
    pub short: String,
    pub full: String,
}

/// Jalali fields of a timestamp, as resolved through the Gregorian service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JalaliDateArray {
    pub date: JalaliDate,
    pub weekday: Weekday,
    /// Zero-based day of the Jalali year
    pub yday: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jalali_new_valid() {
        let date = JalaliDate::new(1402, 1, 31).unwrap();
        assert_eq!(date.ymd(), (1402, 1, 31));
        assert_eq!((date.hour, date.minute), (0, 0));
    }

    #[test]
    fn test_jalali_new_rejects_day_31_after_shahrivar() {
        let result = JalaliDate::new(1402, 7, 31);
        assert!(matches!(
            result,
            Err(CalendarError::InvalidDate {
                year: 1402,
                month: 7,
                day: 31
            })
        ));
    }

    #[test]
    fn test_jalali_new_esfand_30_only_in_leap_year() {
        assert!(JalaliDate::new(1403, 12, 30).is_ok());
        assert!(JalaliDate::new(1402, 12, 30).is_err());
        assert!(JalaliDate::new(1402, 12, 29).is_ok());
    }

    #[test]
    fn test_jalali_new_invalid_month() {
        assert!(matches!(
            JalaliDate::new(1402, 13, 1),
            Err(CalendarError::InvalidMonth(13))
        ));
        assert!(matches!(
            JalaliDate::new(1402, 0, 1),
            Err(CalendarError::InvalidMonth(0))
        ));
    }

    #[test]
    fn test_jalali_new_invalid_day_zero() {
        assert!(JalaliDate::new(1402, 1, 0).is_err());
    }

    #[test]
    fn test_gregorian_new_february() {
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert!(GregorianDate::new(2023, 2, 29).is_err());
        assert!(GregorianDate::new(1900, 2, 29).is_err());
        assert!(GregorianDate::new(2000, 2, 29).is_ok());
    }

    #[test]
    fn test_with_time() {
        let date = JalaliDate::new(1402, 1, 1).unwrap().with_time(13, 45);
        assert_eq!((date.hour, date.minute), (13, 45));
        assert_eq!(date.ymd(), (1402, 1, 1));
    }

    #[test]
    fn test_display() {
        let date = JalaliDate::from_parts(1402, 1, 5, 0, 0);
        assert_eq!(date.to_string(), "1402-01-05");
        let date = GregorianDate::from_parts(622, 3, 22, 0, 0);
        assert_eq!(date.to_string(), "0622-03-22");
    }

    #[test]
    fn test_date_serde() {
        let date = JalaliDate::from_parts(1402, 1, 5, 9, 30);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(
            json,
            r#"{"year":1402,"month":1,"day":5,"hour":9,"minute":30}"#
        );

        let parsed: JalaliDate = serde_json::from_str(r#"{"year":1402,"month":1,"day":5}"#).unwrap();
        assert_eq!(parsed, JalaliDate::from_parts(1402, 1, 5, 0, 0));
    }

    #[test]
    fn test_weekday_from_index_wraps() {
        assert_eq!(Weekday::from_index(0), Weekday::Sunday);
        assert_eq!(Weekday::from_index(6), Weekday::Saturday);
        assert_eq!(Weekday::from_index(7), Weekday::Sunday);
        assert_eq!(Weekday::from_index(-1), Weekday::Saturday);
    }

    #[test]
    fn test_weekday_keys() {
        assert_eq!(Weekday::Sunday.short_key(), "wday0");
        assert_eq!(Weekday::Saturday.full_key(), "weekday6");
    }

    #[test]
    fn test_weekday_serde() {
        let json = serde_json::to_string(&Weekday::Friday).unwrap();
        assert_eq!(json, "5");
        let parsed: Weekday = serde_json::from_str("5").unwrap();
        assert_eq!(parsed, Weekday::Friday);
        assert!(serde_json::from_str::<Weekday>("7").is_err());
    }

    #[test]
    fn test_month_new() {
        assert_eq!(JalaliMonth::new(1).unwrap(), JalaliMonth::Farvardin);
        assert_eq!(JalaliMonth::new(12).unwrap(), JalaliMonth::Esfand);
        assert!(matches!(
            JalaliMonth::new(13),
            Err(CalendarError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_month_key_and_days() {
        assert_eq!(JalaliMonth::Khordad.translation_key(), "month3");
        assert_eq!(JalaliMonth::Shahrivar.days(1402), 31);
        assert_eq!(JalaliMonth::Mehr.days(1402), 30);
        assert_eq!(JalaliMonth::Esfand.days(1402), 29);
        assert_eq!(JalaliMonth::Esfand.days(1403), 30);
    }

    #[test]
    fn test_month_serde() {
        let json = serde_json::to_string(&JalaliMonth::Dey).unwrap();
        assert_eq!(json, "10");
        assert!(serde_json::from_str::<JalaliMonth>("0").is_err());
    }
}
