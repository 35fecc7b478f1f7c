use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::holiday::holiday::Holiday;
use crate::time::rangeofdates::RangeOfDates;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    /// One vacation day.
    Bridge,
    /// More than one vacation day.
    Extended
}

impl RecommendationKind {
    pub fn from_required_days(required_days: u32) -> RecommendationKind {
        if required_days == 1 {
            RecommendationKind::Bridge
        } else {
            RecommendationKind::Extended
        }
    }
}

/// A vacation window found by the window search.
///
/// `[start_date, end_date]` is the span that has to be booked,
/// `[period_start, period_end]` the whole contiguous free stretch around it.
/// Always `period_start <= start_date <= end_date <= period_end`.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Recommendation {
    start_date: NaiveDate,
    end_date: NaiveDate,
    period_start: NaiveDate,
    period_end: NaiveDate,
    required_days: u32,
    gained_days: u32,
    efficiency: f64,
    kind: RecommendationKind,
    involved_public_holidays: Vec<Holiday>,
    vacation_days: Vec<NaiveDate>
}

impl Recommendation {
    /// `vacation_days` must not be empty; its length is the required day count.
    pub(crate) fn new(
        booked: RangeOfDates,
        period: RangeOfDates,
        gained_days: u32,
        involved_public_holidays: Vec<Holiday>,
        vacation_days: Vec<NaiveDate>
    ) -> Recommendation {
        let required_days = vacation_days.len() as u32;
        Recommendation {
            start_date: booked.start_date(),
            end_date: booked.end_date(),
            period_start: period.start_date(),
            period_end: period.end_date(),
            required_days,
            gained_days,
            efficiency: gained_days as f64 / required_days as f64,
            kind: RecommendationKind::from_required_days(required_days),
            involved_public_holidays,
            vacation_days
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn period_start(&self) -> NaiveDate {
        self.period_start
    }

    pub fn period_end(&self) -> NaiveDate {
        self.period_end
    }

    pub fn period(&self) -> RangeOfDates {
        RangeOfDates::new(self.period_start, self.period_end)
    }

    pub fn required_days(&self) -> u32 {
        self.required_days
    }

    pub fn gained_days(&self) -> u32 {
        self.gained_days
    }

    /// Gained days per vacation day.
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    pub fn kind(&self) -> RecommendationKind {
        self.kind
    }

    pub fn involved_public_holidays(&self) -> &[Holiday] {
        &self.involved_public_holidays
    }

    pub fn vacation_days(&self) -> &[NaiveDate] {
        &self.vacation_days
    }

    /// `"2d = 5d, +150%"`
    pub fn efficiency_label(&self) -> String {
        let gain_percent = ((self.efficiency - 1.0) * 100.0).round() as i64;
        format!("{}d = {}d, +{}%", self.required_days, self.gained_days, gain_percent)
    }

    /// `"09.05. - 12.05.24"`, or `"09.05.24"` for a single day.
    pub fn display_range(&self) -> String {
        format_date_range(self.period_start, self.period_end)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_range(), self.efficiency_label())
    }
}

pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        start.format("%d.%m.%y").to_string()
    } else {
        format!("{} - {}", start.format("%d.%m."), end.format("%d.%m.%y"))
    }
}
