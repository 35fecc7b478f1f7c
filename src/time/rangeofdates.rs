use chrono::{
    Days,
    NaiveDate
};

/// Inclusive, ordered range of calendar days.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(d1: NaiveDate, d2: NaiveDate) -> RangeOfDates {
        if d1 > d2 {
            RangeOfDates { start_date: d2, end_date: d1 }
        } else {
            RangeOfDates { start_date: d1, end_date: d2 }
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    pub fn overlaps(&self, other: &RangeOfDates) -> bool {
        self.start_date <= other.end_date && self.end_date >= other.start_date
    }

    pub fn iter(&self) -> RangeOfDatesIterator {
        RangeOfDatesIterator {
            start_date: self.start_date,
            len: self.len(),
            index: 0
        }
    }

    pub fn to_vec(&self) -> Vec<NaiveDate> {
        self.iter().collect()
    }
}

impl IntoIterator for RangeOfDates {
    type Item = NaiveDate;
    type IntoIter = RangeOfDatesIterator;

    fn into_iter(self) -> RangeOfDatesIterator {
        self.iter()
    }
}

pub struct RangeOfDatesIterator {
    start_date: NaiveDate,
    len: usize,
    index: usize
}

impl Iterator for RangeOfDatesIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.len {
            let d = self.start_date + Days::new(self.index as u64);
            self.index += 1;
            Some(d)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_is_ordered_and_inclusive() {
        let range = RangeOfDates::new(ymd(2024, 12, 31), ymd(2024, 12, 29));
        assert_eq!(range.start_date(), ymd(2024, 12, 29));
        assert_eq!(range.len(), 3);
        assert_eq!(range.to_vec(), vec![ymd(2024, 12, 29), ymd(2024, 12, 30), ymd(2024, 12, 31)]);
    }

    #[test]
    fn test_overlaps_touching_ranges() {
        let a = RangeOfDates::new(ymd(2024, 5, 9), ymd(2024, 5, 12));
        let b = RangeOfDates::new(ymd(2024, 5, 12), ymd(2024, 5, 20));
        let c = RangeOfDates::new(ymd(2024, 5, 13), ymd(2024, 5, 20));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }
}
