use chrono::NaiveDate;

use crate::holiday::holiday::Holiday;
use crate::time::utility::is_weekend;

/// Single definition of "already off without spending vacation".
pub trait FreeDayClassifier: Send + Sync {
    fn is_free_day(&self, d: NaiveDate) -> bool;

    /// A weekday covered by a public holiday.
    fn is_public_holiday(&self, d: NaiveDate) -> bool {
        !is_weekend(d) && self.is_free_day(d)
    }

    /// A day that has to be booked to be off.
    fn is_workday(&self, d: NaiveDate) -> bool {
        !self.is_free_day(d)
    }
}

/// Weekend, or covered by any holiday of category `public`.
pub fn is_free_day(d: NaiveDate, holidays: &[Holiday]) -> bool {
    is_weekend(d) || covered_by_public_holiday(d, holidays)
}

/// Weekday covered by a public holiday. Weekends never count.
pub fn is_public_holiday(d: NaiveDate, holidays: &[Holiday]) -> bool {
    !is_weekend(d) && covered_by_public_holiday(d, holidays)
}

pub fn is_in_school_holiday(d: NaiveDate, holidays: &[Holiday]) -> bool {
    holidays.iter().any(|h| h.is_school() && h.covers(d))
}

#[inline]
fn covered_by_public_holiday(d: NaiveDate, holidays: &[Holiday]) -> bool {
    holidays.iter().any(|h| h.is_public() && h.covers(d))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::holiday::holiday::HolidayCategory;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn holidays() -> Vec<Holiday> {
        vec![
            Holiday::single_day("Christi Himmelfahrt", HolidayCategory::Public, ymd(2024, 5, 9)),
            Holiday::multi_day("Pfingstferien", HolidayCategory::School, ymd(2024, 5, 21), ymd(2024, 5, 31)).unwrap(),
            Holiday::multi_day("Betriebsruhe", HolidayCategory::Public, ymd(2024, 12, 23), ymd(2024, 12, 27)).unwrap(),
            Holiday::single_day("Rosenmontag", HolidayCategory::Optional, ymd(2024, 2, 12)),
        ]
    }

    #[rstest]
    #[case(ymd(2024, 5, 9), true)]    // public, Thursday
    #[case(ymd(2024, 5, 10), false)]  // plain Friday
    #[case(ymd(2024, 5, 11), true)]   // Saturday
    #[case(ymd(2024, 5, 22), false)]  // school holidays are not free for adults
    #[case(ymd(2024, 12, 23), true)]  // multi-day public, first day
    #[case(ymd(2024, 12, 27), true)]  // multi-day public, last day
    #[case(ymd(2024, 2, 12), false)]  // optional category
    fn test_is_free_day(#[case] d: NaiveDate, #[case] expected: bool) {
        assert_eq!(is_free_day(d, &holidays()), expected);
    }

    #[test]
    fn test_public_holiday_excludes_weekends() {
        let hs = vec![Holiday::single_day("Tag der Deutschen Einheit", HolidayCategory::Public, ymd(2021, 10, 3))];
        assert!(!is_public_holiday(ymd(2021, 10, 3), &hs));
        assert!(is_free_day(ymd(2021, 10, 3), &hs));
    }

    #[test]
    fn test_school_holiday_interval() {
        let hs = holidays();
        assert!(is_in_school_holiday(ymd(2024, 5, 21), &hs));
        assert!(is_in_school_holiday(ymd(2024, 5, 31), &hs));
        assert!(!is_in_school_holiday(ymd(2024, 6, 1), &hs));
    }
}
