use chrono::{
    Datelike,
    Duration,
    NaiveDate,
    Weekday
};
use serde::Serialize;
use tracing::debug;

use crate::configuration::OptimizerConfiguration;
use crate::holiday::holiday::Holiday;
use crate::optimizer::recommendation::format_date_range;
use crate::optimizer::recommendationranker::rank_bridge_opportunities;
use crate::plan::vacationplan::VacationPlan;
use crate::time::freedaycalendar::FreeDayCalendar;
use crate::time::freedayclassifier::{
    FreeDayClassifier,
    is_in_school_holiday
};
use crate::time::rangeofdates::RangeOfDates;

/// Fixed bridging templates, keyed by the weekday of a single holiday.
///
/// | holiday   | book            | free span | ratio |
/// |-----------|-----------------|-----------|-------|
/// | Thursday  | Friday after    | Thu-Sun   | 1:4   |
/// | Tuesday   | Monday before   | Sat-Tue   | 1:4   |
/// | Friday    | Thursday before | Thu-Sun   | 1:4   |
/// | Monday    | Friday before   | Fri-Mon   | 1:4   |
/// | Wednesday | Mon + Tue       | Sat-Wed   | 2:5   |
/// | Wednesday | Thu + Fri       | Wed-Sun   | 2:5   |
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
pub enum BridgePattern {
    ThursdayFriday,
    TuesdayMonday,
    FridayThursday,
    MondayFriday,
    WednesdayLeading,
    WednesdayTrailing
}

impl BridgePattern {
    pub fn for_weekday(weekday: Weekday) -> &'static [BridgePattern] {
        match weekday {
            Weekday::Mon => &[BridgePattern::MondayFriday],
            Weekday::Tue => &[BridgePattern::TuesdayMonday],
            Weekday::Wed => &[BridgePattern::WednesdayLeading, BridgePattern::WednesdayTrailing],
            Weekday::Thu => &[BridgePattern::ThursdayFriday],
            Weekday::Fri => &[BridgePattern::FridayThursday],
            Weekday::Sat | Weekday::Sun => &[]
        }
    }

    /// Days to book, as offsets from the holiday.
    fn bridge_offsets(&self) -> &'static [i64] {
        match self {
            BridgePattern::ThursdayFriday => &[1],
            BridgePattern::TuesdayMonday => &[-1],
            BridgePattern::FridayThursday => &[-1],
            BridgePattern::MondayFriday => &[-3],
            BridgePattern::WednesdayLeading => &[-2, -1],
            BridgePattern::WednesdayTrailing => &[1, 2]
        }
    }

    /// First and last day of the resulting free span, as offsets from the holiday.
    fn span_offsets(&self) -> (i64, i64) {
        match self {
            BridgePattern::ThursdayFriday => (0, 3),
            BridgePattern::TuesdayMonday => (-3, 0),
            BridgePattern::FridayThursday => (-1, 2),
            BridgePattern::MondayFriday => (-3, 0),
            BridgePattern::WednesdayLeading => (-4, 0),
            BridgePattern::WednesdayTrailing => (0, 4)
        }
    }

    pub fn bridge_days(&self, holiday: NaiveDate) -> Vec<NaiveDate> {
        self.bridge_offsets()
            .iter()
            .map(|&offset| holiday + Duration::days(offset))
            .collect()
    }

    pub fn free_span(&self, holiday: NaiveDate) -> RangeOfDates {
        let (first, last) = self.span_offsets();
        RangeOfDates::new(holiday + Duration::days(first), holiday + Duration::days(last))
    }
}

/// A template match: book `dates`, get `[period_start, period_end]` off.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct BridgeOpportunity {
    holiday_name: String,
    holiday_date: NaiveDate,
    pattern: BridgePattern,
    dates: Vec<NaiveDate>,
    period_start: NaiveDate,
    period_end: NaiveDate,
    required_vacation_days: u32,
    gained_free_days: u32,
    efficiency: f64,
    is_optimal: bool,
    description: String
}

impl BridgeOpportunity {
    /// Applies `pattern` to `holiday` without checking the bridging days.
    pub fn from_pattern(holiday: &Holiday, pattern: BridgePattern) -> BridgeOpportunity {
        let holiday_date = holiday.date();
        let dates = pattern.bridge_days(holiday_date);
        let span = pattern.free_span(holiday_date);
        let required_vacation_days = dates.len() as u32;
        let gained_free_days = span.len() as u32;
        let efficiency = (gained_free_days - required_vacation_days) as f64 / required_vacation_days as f64 * 100.0;

        let bridge_list: Vec<String> = dates.iter().map(|d| d.format("%d.%m.").to_string()).collect();
        let description = format!(
            "{} ({}d = {}d, +{}%) ({})",
            format_date_range(span.start_date(), span.end_date()),
            required_vacation_days,
            gained_free_days,
            efficiency.round() as i64,
            bridge_list.join(" + ")
        );

        BridgeOpportunity {
            holiday_name: holiday.name().to_owned(),
            holiday_date,
            pattern,
            dates,
            period_start: span.start_date(),
            period_end: span.end_date(),
            required_vacation_days,
            gained_free_days,
            efficiency,
            is_optimal: true,
            description
        }
    }

    pub fn holiday_name(&self) -> &str {
        &self.holiday_name
    }

    pub fn holiday_date(&self) -> NaiveDate {
        self.holiday_date
    }

    pub fn pattern(&self) -> BridgePattern {
        self.pattern
    }

    /// Days to book, chronological.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn period_start(&self) -> NaiveDate {
        self.period_start
    }

    pub fn period_end(&self) -> NaiveDate {
        self.period_end
    }

    pub fn required_vacation_days(&self) -> u32 {
        self.required_vacation_days
    }

    pub fn gained_free_days(&self) -> u32 {
        self.gained_free_days
    }

    /// Extra free days per vacation day, in percent: 300 for 1 -> 4.
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    pub fn is_optimal(&self) -> bool {
        self.is_optimal
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn period(&self) -> RangeOfDates {
        RangeOfDates::new(self.period_start, self.period_end)
    }
}

/// Matches workday public holidays against [`BridgePattern`]s.
///
/// A template is dropped when one of its bridging days is already free, lies
/// inside school holidays, or is already booked in a visible vacation plan.
pub struct HeuristicBridgeFinder<'a> {
    holidays: &'a [Holiday],
    existing_vacations: &'a [VacationPlan],
    free_days: FreeDayCalendar
}

impl<'a> HeuristicBridgeFinder<'a> {
    pub fn new(holidays: &'a [Holiday], existing_vacations: &'a [VacationPlan]) -> HeuristicBridgeFinder<'a> {
        HeuristicBridgeFinder {
            holidays,
            existing_vacations,
            free_days: FreeDayCalendar::new(holidays)
        }
    }

    fn is_bridgeable(&self, d: NaiveDate) -> bool {
        !self.free_days.is_free_day(d)
            && !is_in_school_holiday(d, self.holidays)
            && !self.existing_vacations.iter().any(|v| v.is_visible() && v.covers(d))
    }

    /// All template matches for holidays dated within `[start_date, end_date]`, unranked.
    pub fn find(&self, start_date: NaiveDate, end_date: NaiveDate) -> Vec<BridgeOpportunity> {
        let range = RangeOfDates::new(start_date, end_date);
        let mut public: Vec<&Holiday> = self.holidays
            .iter()
            .filter(|h| h.is_public() && range.contain(h.date()))
            .collect();
        public.sort_by_key(|h| h.date());

        let mut opportunities = Vec::new();
        for holiday in public {
            for &pattern in BridgePattern::for_weekday(holiday.date().weekday()) {
                if pattern.bridge_days(holiday.date()).into_iter().all(|d| self.is_bridgeable(d)) {
                    opportunities.push(BridgeOpportunity::from_pattern(holiday, pattern));
                }
            }
        }
        debug!(matches = opportunities.len(), %start_date, %end_date, "bridge templates matched");
        opportunities
    }
}

/// Ranked template matches, at most 10.
pub fn find_heuristic_bridge_opportunities(
    holidays: &[Holiday],
    existing_vacations: &[VacationPlan],
    start_date: NaiveDate,
    end_date: NaiveDate
) -> Vec<BridgeOpportunity> {
    find_heuristic_bridge_opportunities_with(
        holidays,
        existing_vacations,
        start_date,
        end_date,
        &OptimizerConfiguration::default()
    )
}

pub fn find_heuristic_bridge_opportunities_with(
    holidays: &[Holiday],
    existing_vacations: &[VacationPlan],
    start_date: NaiveDate,
    end_date: NaiveDate,
    config: &OptimizerConfiguration
) -> Vec<BridgeOpportunity> {
    let opportunities = HeuristicBridgeFinder::new(holidays, existing_vacations).find(start_date, end_date);
    rank_bridge_opportunities(opportunities, config.bridge_result_limit)
}
