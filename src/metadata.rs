use crate::consts::{
    CENTURY_CYCLE, COMMON_YEAR_DAYS, FIRST_MONTH, GREGORIAN_CYCLE, GREGORIAN_MONTH_LENGTHS,
    JALALI_CYCLE_LEAPS, JALALI_CYCLE_YEARS, JALALI_MONTH_LENGTHS, LAST_MONTH, LEAP_YEAR_CYCLE,
    LEAP_YEAR_DAYS,
};

/// Months up to and including Shahrivar have 31 days
const LAST_LONG_MONTH: i32 = 6;
/// Offset aligning the 33-year leap cycle with Jalali year numbering
const LEAP_CYCLE_SHIFT: i64 = 16;

/// Jalali leap year predicate, using the 33-year cyclic approximation.
///
/// The conversion formulas assume exactly this rule; swapping in an
/// astronomical rule would make them disagree.
pub const fn is_jalali_leap_year(year: i32) -> bool {
    let y = year as i64;
    let phase = ((y + LEAP_CYCLE_SHIFT) % JALALI_CYCLE_YEARS + JALALI_CYCLE_YEARS) % JALALI_CYCLE_YEARS;
    phase * JALALI_CYCLE_LEAPS % JALALI_CYCLE_YEARS < JALALI_CYCLE_LEAPS
}

/// Gregorian leap year predicate (4/100/400 rule)
pub const fn is_gregorian_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in a Jalali month.
///
/// Not validated: any month `<= 6` reports 31 and any month other than 12
/// reports 30.
pub const fn days_in_jalali_month(year: i32, month: i32) -> i32 {
    if month <= LAST_LONG_MONTH {
        31
    } else if month != LAST_MONTH || is_jalali_leap_year(year) {
        30
    } else {
        29
    }
}

/// Days in a Gregorian month, 0 for a month outside `1..=12`
pub const fn days_in_gregorian_month(year: i32, month: i32) -> i32 {
    if !matches!(month, FIRST_MONTH..=LAST_MONTH) {
        return 0;
    }
    let base = GREGORIAN_MONTH_LENGTHS[(month - FIRST_MONTH) as usize] as i32;
    if month == 2 && is_gregorian_leap_year(year as i64) {
        base + 1
    } else {
        base
    }
}

/// Days in a Jalali year (365 or 366)
pub const fn days_in_jalali_year(year: i32) -> i32 {
    if is_jalali_leap_year(year) {
        LEAP_YEAR_DAYS as i32
    } else {
        COMMON_YEAR_DAYS as i32
    }
}

/// Zero-based ordinal of a Jalali date within its year
pub fn day_of_year(month: i32, day: i32) -> i32 {
    let preceding = usize::try_from(month - FIRST_MONTH).unwrap_or(0);
    let elapsed: i64 = JALALI_MONTH_LENGTHS.iter().take(preceding).sum();
    // at most 365
    #[allow(clippy::cast_possible_truncation)]
    let elapsed = elapsed as i32;
    elapsed + day - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_YEAR, MIN_YEAR};

    #[test]
    fn test_leap_years_follow_33_year_cycle() {
        let leaps: Vec<i32> = (1370..1410).filter(|&y| is_jalali_leap_year(y)).collect();
        assert_eq!(
            leaps,
            vec![1370, 1375, 1379, 1383, 1387, 1391, 1395, 1399, 1403, 1408]
        );
    }

    #[test]
    fn test_leap_sample_years() {
        // (1375 + 16) % 33 = 5, 5 * 8 % 33 = 7
        assert!(is_jalali_leap_year(1375));
        // (1379 + 16) % 33 = 9, 9 * 8 % 33 = 6
        assert!(is_jalali_leap_year(1379));
        // (1402 + 16) % 33 = 32, 32 * 8 % 33 = 25
        assert!(!is_jalali_leap_year(1402));
    }

    #[test]
    fn test_leap_negative_years() {
        // (-16 + 16) % 33 = 0
        assert!(is_jalali_leap_year(-16));
        // (-17 + 16) wraps to 32
        assert!(!is_jalali_leap_year(-17));
    }

    #[test]
    fn test_eight_leaps_per_cycle() {
        let count = (1300..1333).filter(|&y| is_jalali_leap_year(y)).count();
        assert_eq!(count, 8);
    }

    #[test]
    fn test_month_lengths() {
        for month in 1..=6 {
            assert_eq!(days_in_jalali_month(1402, month), 31);
        }
        for month in 7..=11 {
            assert_eq!(days_in_jalali_month(1402, month), 30);
        }
        assert_eq!(days_in_jalali_month(1402, 12), 29);
        assert_eq!(days_in_jalali_month(1403, 12), 30);
    }

    #[test]
    fn test_month_lengths_sum_to_year_length() {
        for year in MIN_YEAR..=MAX_YEAR {
            let total: i32 = (1..=12).map(|m| days_in_jalali_month(year, m)).sum();
            let expected = if is_jalali_leap_year(year) { 366 } else { 365 };
            assert_eq!(total, expected, "year {year}");
            assert_eq!(days_in_jalali_year(year), expected);
        }
    }

    #[test]
    fn test_out_of_range_month_is_permissive() {
        assert_eq!(days_in_jalali_month(1402, 0), 31);
        assert_eq!(days_in_jalali_month(1402, 13), 30);
    }

    #[test]
    fn test_gregorian_leap_years() {
        assert!(is_gregorian_leap_year(2000));
        assert!(is_gregorian_leap_year(2024));
        assert!(!is_gregorian_leap_year(1900));
        assert!(!is_gregorian_leap_year(2023));
    }

    #[test]
    fn test_gregorian_month_lengths() {
        assert_eq!(days_in_gregorian_month(2024, 2), 29);
        assert_eq!(days_in_gregorian_month(2023, 2), 28);
        assert_eq!(days_in_gregorian_month(2023, 12), 31);
        assert_eq!(days_in_gregorian_month(2023, 13), 0);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(1, 1), 0);
        assert_eq!(day_of_year(7, 1), 186);
        assert_eq!(day_of_year(12, 29), 364);
        assert_eq!(day_of_year(12, 30), 365);
    }
}
