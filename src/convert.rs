//! Gregorian <-> Jalali conversion through a shared day-number frame.
//!
//! Both directions reduce a date to a signed day count from a common origin
//! (Gregorian 1600-01-01 shifted by [`JALALI_FRAME_OFFSET`] days onto Jalali
//! 979-01-01), then rebuild the date in the other calendar by peeling off
//! leap cycles. The two halves mirror each other constant for constant.
//!
//! All divisions truncate toward zero. Intermediate values go negative for
//! dates before the origin, and floor division would shift those results.

use crate::consts::{
    CENTURY_DAYS, COMMON_YEAR_DAYS, FOUR_YEAR_DAYS, GREGORIAN_CYCLE_DAYS, GREGORIAN_EPOCH_YEAR,
    GREGORIAN_MONTH_LENGTHS, JALALI_CYCLE_DAYS, JALALI_CYCLE_LEAPS, JALALI_CYCLE_YEARS,
    JALALI_EPOCH_YEAR, JALALI_FRAME_OFFSET, JALALI_MONTH_LENGTHS, LEADING_CENTURY_DAYS,
    LEAP_YEAR_DAYS,
};
use crate::metadata::is_gregorian_leap_year;
use crate::types::{GregorianDate, JalaliDate, Weekday};

/// Weekday of 1970-01-01
const UNIX_EPOCH_WEEKDAY: i64 = 4;
/// Days from 0000-03-01 to 1970-01-01
const UNIX_EPOCH_CIVIL_DAYS: i64 = 719_468;
/// Years in a 400-year Gregorian era
const ERA_YEARS: i64 = 400;

/// Integer division truncating toward zero.
///
/// Rust's `/` already truncates for signed integers; the helper keeps the
/// requirement visible at every call site.
#[inline]
const fn idiv(a: i64, b: i64) -> i64 {
    a / b
}

/// Sum of the first `count` entries of a month table, clamped to `0..=12`
fn preceding_days(table: &[i64; 12], count: i64) -> i64 {
    let count = usize::try_from(count).unwrap_or(0);
    table.iter().take(count).sum()
}

/// Walks a month table, consuming whole months while `days` covers them.
///
/// Returns the zero-based month index and the remaining zero-based day.
fn split_months(mut days: i64, length: impl Fn(usize) -> i64) -> (i64, i64) {
    let mut index = 0;
    while index < 11 && days >= length(index) {
        days -= length(index);
        index += 1;
    }
    (index as i64, days)
}

/// Days from Gregorian 1600-01-01 to the given (year, zero-based month, zero-based day)
fn gregorian_day_number(year: i64, month0: i64, day0: i64) -> i64 {
    let gy = year - GREGORIAN_EPOCH_YEAR;
    let mut days = 365 * gy + idiv(gy + 3, 4) - idiv(gy + 99, 100) + idiv(gy + 399, 400);
    days += preceding_days(&GREGORIAN_MONTH_LENGTHS, month0);
    if month0 > 1 && is_gregorian_leap_year(gy) {
        days += 1;
    }
    days + day0
}

/// Days from Jalali 979-01-01 to the given (year, zero-based month, zero-based day)
fn jalali_day_number(year: i64, month0: i64, day0: i64) -> i64 {
    let jy = year - JALALI_EPOCH_YEAR;
    let mut days = 365 * jy
        + idiv(jy, JALALI_CYCLE_YEARS) * JALALI_CYCLE_LEAPS
        + idiv(jy % JALALI_CYCLE_YEARS + 3, 4);
    days += preceding_days(&JALALI_MONTH_LENGTHS, month0);
    days + day0
}

/// Converts a Gregorian date to the Jalali calendar.
///
/// Exact for Jalali years 1278..=1429. Outside that range, and for
/// out-of-range months or days, the result is deterministic but unspecified.
/// Hour and minute pass through untouched.
#[allow(clippy::cast_possible_truncation)]
pub fn gregorian_to_jalali(year: i32, month: i32, day: i32, hour: u8, minute: u8) -> JalaliDate {
    let g_day_no = gregorian_day_number(i64::from(year), i64::from(month) - 1, i64::from(day) - 1);

    let mut j_day_no = g_day_no - JALALI_FRAME_OFFSET;

    let j_np = idiv(j_day_no, JALALI_CYCLE_DAYS);
    j_day_no %= JALALI_CYCLE_DAYS;

    let mut jy = JALALI_EPOCH_YEAR + JALALI_CYCLE_YEARS * j_np + 4 * idiv(j_day_no, FOUR_YEAR_DAYS);
    j_day_no %= FOUR_YEAR_DAYS;

    if j_day_no >= LEAP_YEAR_DAYS {
        jy += idiv(j_day_no - 1, COMMON_YEAR_DAYS);
        j_day_no = (j_day_no - 1) % COMMON_YEAR_DAYS;
    }

    let (month0, day0) = split_months(j_day_no, |i| JALALI_MONTH_LENGTHS[i]);

    JalaliDate::from_parts(jy as i32, month0 as i32 + 1, day0 as i32 + 1, hour, minute)
}

/// Converts a Jalali date to the Gregorian calendar.
///
/// Inverse of [`gregorian_to_jalali`] over the supported range, with the
/// same permissive handling of out-of-range input.
#[allow(clippy::cast_possible_truncation)]
pub fn jalali_to_gregorian(year: i32, month: i32, day: i32, hour: u8, minute: u8) -> GregorianDate {
    let j_day_no = jalali_day_number(i64::from(year), i64::from(month) - 1, i64::from(day) - 1);

    let mut g_day_no = j_day_no + JALALI_FRAME_OFFSET;

    let mut gy = GREGORIAN_EPOCH_YEAR + 400 * idiv(g_day_no, GREGORIAN_CYCLE_DAYS);
    g_day_no %= GREGORIAN_CYCLE_DAYS;

    let mut leap = true;
    if g_day_no >= LEADING_CENTURY_DAYS {
        g_day_no -= 1;
        gy += 100 * idiv(g_day_no, CENTURY_DAYS);
        g_day_no %= CENTURY_DAYS;

        if g_day_no >= COMMON_YEAR_DAYS {
            g_day_no += 1;
        } else {
            leap = false;
        }
    }

    gy += 4 * idiv(g_day_no, FOUR_YEAR_DAYS);
    g_day_no %= FOUR_YEAR_DAYS;

    if g_day_no >= LEAP_YEAR_DAYS {
        leap = false;
        g_day_no -= 1;
        gy += idiv(g_day_no, COMMON_YEAR_DAYS);
        g_day_no %= COMMON_YEAR_DAYS;
    }

    let (month0, day0) = split_months(g_day_no, |i| {
        GREGORIAN_MONTH_LENGTHS[i] + i64::from(i == 1 && leap)
    });

    GregorianDate::from_parts(gy as i32, month0 as i32 + 1, day0 as i32 + 1, hour, minute)
}

/// Converts a [`GregorianDate`] value, keeping its time fields
pub fn to_jalali(date: &GregorianDate) -> JalaliDate {
    gregorian_to_jalali(date.year, date.month, date.day, date.hour, date.minute)
}

/// Converts a [`JalaliDate`] value, keeping its time fields
pub fn to_gregorian(date: &JalaliDate) -> GregorianDate {
    jalali_to_gregorian(date.year, date.month, date.day, date.hour, date.minute)
}

/// Days since 1970-01-01 in the proleptic Gregorian calendar (floor arithmetic)
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(ERA_YEARS);
    let yoe = y - era * ERA_YEARS;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * GREGORIAN_CYCLE_DAYS + doe - UNIX_EPOCH_CIVIL_DAYS
}

/// Weekday of a Gregorian date, computed from its day count
pub fn gregorian_weekday(date: &GregorianDate) -> Weekday {
    let days = days_from_civil(
        i64::from(date.year),
        i64::from(date.month),
        i64::from(date.day),
    );
    Weekday::from_index(days + UNIX_EPOCH_WEEKDAY)
}
