use chrono::{
    Datelike,
    NaiveDate
};

use crate::holiday::holiday::Holiday;
use crate::time::freedayclassifier::{
    FreeDayClassifier,
    is_free_day
};
use crate::time::utility::days_in_year;

/// Free days of one year, one bit per day of year.
/// 3 × u128 covers 384 bits, enough for leap years.
#[derive(Clone)]
struct YearBitset {
    bits: [u128; 3]
}

impl YearBitset {
    fn new() -> Self {
        YearBitset { bits: [0; 3] }
    }

    #[inline]
    fn set(&mut self, day_of_year: u32) {
        let block = (day_of_year / 128) as usize;
        let bit = day_of_year % 128;
        if block < 3 {
            self.bits[block] |= 1u128 << bit;
        }
    }

    #[inline]
    fn is_set(&self, day_of_year: u32) -> bool {
        let block = (day_of_year / 128) as usize;
        let bit = day_of_year % 128;
        block < 3 && (self.bits[block] & (1u128 << bit)) != 0
    }

    fn from_holidays(holidays: &[Holiday], year: i32) -> Self {
        let mut bitset = YearBitset::new();
        for day_num in 1..=days_in_year(year) {
            if let Some(date) = NaiveDate::from_yo_opt(year, day_num) {
                if is_free_day(date, holidays) {
                    bitset.set(date.ordinal0());
                }
            }
        }
        bitset
    }
}

/// Free-day lookup precomputed per year.
///
/// Covers every year touched by the holiday set plus one year on each side,
/// so window searches that cross New Year stay on the fast path. Dates outside
/// the precomputed range fall back to scanning the holiday list, with the
/// same result.
pub struct FreeDayCalendar {
    holidays: Vec<Holiday>,
    start_year: i32,
    precomputed_bits: Vec<YearBitset>
}

impl FreeDayCalendar {
    pub fn new(holidays: &[Holiday]) -> FreeDayCalendar {
        let years = holidays
            .iter()
            .filter(|h| h.is_public())
            .flat_map(|h| [h.date().year(), h.end_date().year()]);
        let (min_year, max_year) = years.fold(None, |acc: Option<(i32, i32)>, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y)))
        }).unwrap_or((0, -1));

        if max_year < min_year {
            return FreeDayCalendar::with_range(holidays, 0, -1);
        }
        FreeDayCalendar::with_range(holidays, min_year - 1, max_year + 1)
    }

    /// Precomputes `[start_year, end_year]` inclusive. An empty range is allowed.
    pub fn with_range(holidays: &[Holiday], start_year: i32, end_year: i32) -> FreeDayCalendar {
        let n_years = (end_year - start_year + 1).max(0) as usize;
        let mut precomputed_bits = Vec::with_capacity(n_years);
        for year in start_year..=end_year {
            precomputed_bits.push(YearBitset::from_holidays(holidays, year));
        }

        FreeDayCalendar {
            holidays: holidays.to_vec(),
            start_year,
            precomputed_bits
        }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.start_year + (self.precomputed_bits.len() as i32) - 1
    }

    pub fn in_precomputation_range(&self, year: i32) -> bool {
        !self.precomputed_bits.is_empty() && year >= self.start_year && year <= self.end_year()
    }
}

impl FreeDayClassifier for FreeDayCalendar {
    #[inline]
    fn is_free_day(&self, d: NaiveDate) -> bool {
        if self.in_precomputation_range(d.year()) {
            let index = (d.year() - self.start_year) as usize;
            self.precomputed_bits[index].is_set(d.ordinal0())
        } else {
            is_free_day(d, &self.holidays)
        }
    }
}
