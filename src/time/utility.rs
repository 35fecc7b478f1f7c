use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

pub const ONE_DAY: Days = Days::new(1);

#[inline]
pub const fn is_leap(year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

#[inline]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap(year) { 366 } else { 365 }
}

#[inline]
pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Number of weekdays in `(earlier, later]`. Holidays are not considered.
///
/// Friday to the following Monday is one business day, Monday to Friday is four.
/// Returns 0 when `later <= earlier`.
pub fn business_days_between(earlier: NaiveDate, later: NaiveDate) -> u32 {
    if later <= earlier {
        return 0;
    }

    let total_days = (later - earlier).num_days() as u32;
    let full_weeks = total_days / 7;
    let mut count = full_weeks * 5;

    let mut d = earlier + Days::new((full_weeks * 7) as u64);
    while d < later {
        d = d + ONE_DAY;
        count += !is_weekend(d) as u32;
    }
    count
}

/// Signed calendar-day distance `later - earlier`.
#[inline]
pub fn calendar_days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(ymd(2024, 5, 10), ymd(2024, 5, 13), 1)] // Fri -> Mon
    #[case(ymd(2024, 5, 6), ymd(2024, 5, 10), 4)]  // Mon -> Fri
    #[case(ymd(2024, 5, 10), ymd(2024, 5, 11), 0)] // Fri -> Sat
    #[case(ymd(2024, 5, 1), ymd(2024, 5, 9), 6)]   // Wed -> Thu next week
    #[case(ymd(2024, 5, 9), ymd(2024, 5, 1), 0)]
    #[case(ymd(2024, 1, 1), ymd(2024, 1, 29), 20)]
    fn test_business_days_between(#[case] earlier: NaiveDate, #[case] later: NaiveDate, #[case] expected: u32) {
        assert_eq!(business_days_between(earlier, later), expected);
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2025), 365);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(ymd(2024, 5, 11)));
        assert!(is_weekend(ymd(2024, 5, 12)));
        assert!(!is_weekend(ymd(2024, 5, 10)));
    }
}
