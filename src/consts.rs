/// Earliest Jalali year for which conversions are guaranteed to round-trip
pub const MIN_YEAR: i32 = 1278;

/// Latest Jalali year for which conversions are guaranteed to round-trip (inclusive)
pub const MAX_YEAR: i32 = 1429;

/// Number of days in a week
pub const DAYS_IN_WEEK: u8 = 7;

/// First day of every month
pub const MIN_DAY_OF_MONTH: i32 = 1;

/// Largest day-of-month value any month can reach
pub const MAX_DAY_OF_MONTH: i32 = 31;

/// Month number for the first month of the year
pub const FIRST_MONTH: i32 = 1;
/// Month number for the last month of the year
pub const LAST_MONTH: i32 = 12;

/// Weekday index used when no numeric first-day preference is configured (Saturday)
pub const DEFAULT_STARTING_WEEKDAY: u8 = 6;

/// Hour used when asking for the weekday of a date, clear of midnight rounding
pub const WEEKDAY_PROBE_HOUR: u8 = 12;

/// Gregorian month lengths in a common year (index 0 = January).
/// February is leap-adjusted where it is used.
pub const GREGORIAN_MONTH_LENGTHS: [i64; 12] = [
    31, // January
    28, // February
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Jalali month lengths in a common year (index 0 = Farvardin).
/// Esfand is leap-adjusted where it is used.
pub const JALALI_MONTH_LENGTHS: [i64; 12] = [
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand
];

// Day-number frame constants. Both conversion directions share them and must
// change together.

/// Gregorian year at the origin of the day-number frame
pub(crate) const GREGORIAN_EPOCH_YEAR: i64 = 1600;
/// Jalali year at the origin of the day-number frame
pub(crate) const JALALI_EPOCH_YEAR: i64 = 979;
/// Days between the Gregorian and Jalali frame origins
pub(crate) const JALALI_FRAME_OFFSET: i64 = 79;

/// Days in a 33-year Jalali cycle
pub(crate) const JALALI_CYCLE_DAYS: i64 = 12_053;
/// Years in a Jalali leap cycle
pub(crate) const JALALI_CYCLE_YEARS: i64 = 33;
/// Leap years in each Jalali cycle
pub(crate) const JALALI_CYCLE_LEAPS: i64 = 8;

/// Days in a 400-year Gregorian cycle
pub(crate) const GREGORIAN_CYCLE_DAYS: i64 = 146_097;
/// Days in the first (leading leap) century of a 400-year cycle
pub(crate) const LEADING_CENTURY_DAYS: i64 = 36_525;
/// Days in a regular Gregorian century
pub(crate) const CENTURY_DAYS: i64 = 36_524;
/// Days in a four-year block containing one leap day
pub(crate) const FOUR_YEAR_DAYS: i64 = 1_461;
/// Days in a common year
pub(crate) const COMMON_YEAR_DAYS: i64 = 365;
/// Days in a leap year
pub(crate) const LEAP_YEAR_DAYS: i64 = 366;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Marker that introduces a format token
pub const TOKEN_MARKER: char = '%';

/// Site and user preference holding the first day of the week
pub const STARTING_WEEKDAY_PREFERENCE: &str = "calendar_startwday";
/// Locale key holding the language's first day of the week
pub const FIRST_DAY_OF_WEEK_KEY: &str = "firstdayofweek";
/// Locale key holding the default date-time template
pub const DEFAULT_TEMPLATE_KEY: &str = "strftimedaydatetime";
/// Locale key for the lowercase morning marker
pub const AM_KEY: &str = "am";
/// Locale key for the lowercase afternoon marker
pub const PM_KEY: &str = "pm";
/// Locale key for the uppercase morning marker
pub const AM_CAPS_KEY: &str = "am_caps";
/// Locale key for the uppercase afternoon marker
pub const PM_CAPS_KEY: &str = "pm_caps";
