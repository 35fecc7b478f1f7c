use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize
};

use super::region::Region;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayCategory {
    Public,
    School,
    Regional,
    Bridge,
    Optional
}

/// Which days a holiday occupies.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum HolidaySpan {
    SingleDay(NaiveDate),
    MultiDay { start: NaiveDate, end: NaiveDate }
}

impl HolidaySpan {
    /// Builds a span, collapsing `start == end` to a single day.
    /// Returns `None` when `end < start`.
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Option<HolidaySpan> {
        match end {
            None => Some(HolidaySpan::SingleDay(start)),
            Some(e) if e < start => None,
            Some(e) if e == start => Some(HolidaySpan::SingleDay(start)),
            Some(e) => Some(HolidaySpan::MultiDay { start, end: e })
        }
    }

    pub fn start(&self) -> NaiveDate {
        match *self {
            HolidaySpan::SingleDay(d) => d,
            HolidaySpan::MultiDay { start, .. } => start
        }
    }

    pub fn end(&self) -> NaiveDate {
        match *self {
            HolidaySpan::SingleDay(d) => d,
            HolidaySpan::MultiDay { end, .. } => end
        }
    }

    pub fn covers(&self, d: NaiveDate) -> bool {
        match *self {
            HolidaySpan::SingleDay(day) => day == d,
            HolidaySpan::MultiDay { start, end } => start <= d && d <= end
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct HolidayDetails {
    pub description: String,
    #[serde(default)]
    pub traditions: Vec<String>
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Holiday {
    name: String,
    category: HolidayCategory,
    span: HolidaySpan,
    region: Option<Region>,
    is_regional: bool,
    details: Option<HolidayDetails>
}

impl Holiday {
    pub fn new(name: String, category: HolidayCategory, span: HolidaySpan) -> Holiday {
        Holiday {
            name,
            category,
            span,
            region: None,
            is_regional: false,
            details: None
        }
    }

    pub fn single_day(name: &str, category: HolidayCategory, date: NaiveDate) -> Holiday {
        Holiday::new(name.to_owned(), category, HolidaySpan::SingleDay(date))
    }

    /// `None` if `end < start`.
    pub fn multi_day(name: &str, category: HolidayCategory, start: NaiveDate, end: NaiveDate) -> Option<Holiday> {
        HolidaySpan::new(start, Some(end)).map(|span| Holiday::new(name.to_owned(), category, span))
    }

    pub fn with_region(mut self, region: Region, is_regional: bool) -> Holiday {
        self.region = Some(region);
        self.is_regional = is_regional;
        self
    }

    pub fn with_details(mut self, details: HolidayDetails) -> Holiday {
        self.details = Some(details);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> HolidayCategory {
        self.category
    }

    pub fn span(&self) -> HolidaySpan {
        self.span
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }

    pub fn is_regional(&self) -> bool {
        self.is_regional
    }

    pub fn details(&self) -> Option<&HolidayDetails> {
        self.details.as_ref()
    }

    pub fn is_public(&self) -> bool {
        self.category == HolidayCategory::Public
    }

    pub fn is_school(&self) -> bool {
        self.category == HolidayCategory::School
    }

    /// The representative date: the day itself, or the first day of a period.
    pub fn date(&self) -> NaiveDate {
        self.span.start()
    }

    /// Last day of the holiday. Equal to [`Holiday::date`] for single days.
    pub fn end_date(&self) -> NaiveDate {
        self.span.end()
    }

    pub fn covers(&self, d: NaiveDate) -> bool {
        self.span.covers(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day_dates_coincide() {
        let h = Holiday::single_day("Neujahr", HolidayCategory::Public, ymd(2024, 1, 1));
        assert_eq!(h.date(), ymd(2024, 1, 1));
        assert_eq!(h.end_date(), ymd(2024, 1, 1));
        assert!(h.covers(ymd(2024, 1, 1)));
        assert!(!h.covers(ymd(2024, 1, 2)));
    }

    #[test]
    fn test_multi_day_covers_inclusive_interval() {
        let h = Holiday::multi_day("Osterferien", HolidayCategory::School, ymd(2024, 3, 25), ymd(2024, 4, 6)).unwrap();
        assert_eq!(h.date(), ymd(2024, 3, 25));
        assert_eq!(h.end_date(), ymd(2024, 4, 6));
        assert!(h.covers(ymd(2024, 3, 25)));
        assert!(h.covers(ymd(2024, 4, 6)));
        assert!(!h.covers(ymd(2024, 4, 7)));
        assert!(!h.is_public());
        assert!(h.is_school());
    }

    #[test]
    fn test_inverted_span_is_rejected() {
        assert!(HolidaySpan::new(ymd(2024, 5, 2), Some(ymd(2024, 5, 1))).is_none());
        assert_eq!(
            HolidaySpan::new(ymd(2024, 5, 1), Some(ymd(2024, 5, 1))),
            Some(HolidaySpan::SingleDay(ymd(2024, 5, 1)))
        );
    }
}
