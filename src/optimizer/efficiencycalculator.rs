use chrono::NaiveDate;
use tracing::trace;

use crate::holiday::holiday::Holiday;
use crate::optimizer::recommendation::Recommendation;
use crate::time::freedaycalendar::FreeDayCalendar;
use crate::time::freedayclassifier::FreeDayClassifier;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::utility::{
    ONE_DAY,
    is_weekend
};

/// Scores candidate vacation windows against one holiday set.
///
/// Built once per holiday set; the free-day lookup is precomputed so the
/// brute-force window enumeration only pays for bit lookups.
pub struct EfficiencyCalculator<'a> {
    holidays: &'a [Holiday],
    free_days: FreeDayCalendar
}

impl<'a> EfficiencyCalculator<'a> {
    pub fn new(holidays: &'a [Holiday]) -> EfficiencyCalculator<'a> {
        EfficiencyCalculator {
            holidays,
            free_days: FreeDayCalendar::new(holidays)
        }
    }

    pub fn holidays(&self) -> &'a [Holiday] {
        self.holidays
    }

    pub fn free_days(&self) -> &FreeDayCalendar {
        &self.free_days
    }

    /// Weekdays in `[start, end]` that are not public holidays.
    pub fn count_required_workdays(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        RangeOfDates::new(start, end)
            .iter()
            .filter(|&d| self.free_days.is_workday(d))
            .count() as u32
    }

    /// Grows `[start, end]` outwards over adjoining free days.
    pub fn expand_to_free_period(&self, start: NaiveDate, end: NaiveDate) -> RangeOfDates {
        let mut period_start = start;
        while self.free_days.is_free_day(period_start - ONE_DAY) {
            period_start = period_start - ONE_DAY;
        }

        let mut period_end = end;
        while self.free_days.is_free_day(period_end + ONE_DAY) {
            period_end = period_end + ONE_DAY;
        }

        RangeOfDates::new(period_start, period_end)
    }

    /// Scores the window `[start, end]`.
    ///
    /// Returns `None` when nothing has to be booked, when the window does not
    /// gain more days than it costs, or when no public holiday falls on a
    /// workday inside it.
    pub fn evaluate_window(&self, start: NaiveDate, end: NaiveDate) -> Option<Recommendation> {
        if end < start {
            return None;
        }
        let booked = RangeOfDates::new(start, end);

        let vacation_days: Vec<NaiveDate> = booked.iter().filter(|&d| self.free_days.is_workday(d)).collect();
        if vacation_days.is_empty() {
            return None;
        }

        let gained_days = booked.len() as u32;
        let efficiency = gained_days as f64 / vacation_days.len() as f64;
        if efficiency <= 1.0 {
            return None;
        }

        let involved_public_holidays = self.public_holidays_on_workdays(&booked);
        if involved_public_holidays.is_empty() {
            return None;
        }

        let period = self.expand_to_free_period(start, end);
        trace!(%start, %end, efficiency, "accepted window");

        Some(Recommendation::new(booked, period, gained_days, involved_public_holidays, vacation_days))
    }

    fn public_holidays_on_workdays(&self, booked: &RangeOfDates) -> Vec<Holiday> {
        self.holidays
            .iter()
            .filter(|h| h.is_public())
            .filter(|h| booked.iter().any(|d| !is_weekend(d) && h.covers(d)))
            .cloned()
            .collect()
    }
}

/// One-shot form of [`EfficiencyCalculator::count_required_workdays`].
pub fn count_required_workdays(start: NaiveDate, end: NaiveDate, holidays: &[Holiday]) -> u32 {
    EfficiencyCalculator::new(holidays).count_required_workdays(start, end)
}

/// One-shot form of [`EfficiencyCalculator::evaluate_window`].
pub fn evaluate_window(start: NaiveDate, end: NaiveDate, holidays: &[Holiday]) -> Option<Recommendation> {
    EfficiencyCalculator::new(holidays).evaluate_window(start, end)
}
