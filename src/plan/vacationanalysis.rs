use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::holiday::holiday::Holiday;
use crate::optimizer::heuristicbridgefinder::{
    BridgeOpportunity,
    find_heuristic_bridge_opportunities
};
use crate::plan::vacationplan::VacationPlan;
use crate::time::utility::is_weekend;

/// Below this share of plan days inside school holidays, families get a hint.
const SCHOOL_OVERLAP_HINT_PERCENT: f64 = 30.0;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize)]
pub struct VacationTally {
    /// Weekdays inside the plans.
    pub used_days: u32,
    /// Calendar days inside the plans.
    pub gained_days: u32
}

#[derive(Debug, PartialEq, Clone, Copy, Default, Serialize)]
pub struct SchoolHolidayOverlap {
    pub overlapping_days: u32,
    /// Share of plan days inside school holidays, 0 to 100.
    pub percentage: f64
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum PlanningHint {
    OptimalBridgesFound(usize),
    BridgesFound(usize),
    IncludeMoreHolidays,
    ConsiderSchoolHolidays
}

impl fmt::Display for PlanningHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanningHint::OptimalBridgesFound(n) => write!(f, "{n} particularly efficient bridge day opportunities found"),
            PlanningHint::BridgesFound(n) => write!(f, "{n} bridge day opportunities found"),
            PlanningHint::IncludeMoreHolidays => write!(f, "try to include more holidays and weekends in your vacation"),
            PlanningHint::ConsiderSchoolHolidays => write!(f, "check school holidays for family-friendly vacation periods")
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct VacationAnalysis {
    pub bridge_opportunities: Vec<BridgeOpportunity>,
    pub school_overlap: SchoolHolidayOverlap,
    /// Extra free days per booked weekday across all visible plans.
    pub efficiency_score: f64,
    pub hints: Vec<PlanningHint>
}

fn visible(plans: &[VacationPlan]) -> impl Iterator<Item = &VacationPlan> {
    plans.iter().filter(|p| p.is_visible())
}

/// Vacation used and time off gained by the visible plans.
pub fn calculate_vacation_days(plans: &[VacationPlan]) -> VacationTally {
    visible(plans).fold(VacationTally::default(), |mut tally, plan| {
        for d in plan.range().iter() {
            tally.gained_days += 1;
            if !is_weekend(d) {
                tally.used_days += 1;
            }
        }
        tally
    })
}

/// How many plan days fall inside `school_holidays`. Non-school entries are
/// ignored.
pub fn analyze_school_holiday_overlap(plans: &[VacationPlan], school_holidays: &[Holiday]) -> SchoolHolidayOverlap {
    let mut total_days = 0u32;
    let mut overlapping_days = 0u32;

    for plan in visible(plans) {
        for d in plan.range().iter() {
            total_days += 1;
            if school_holidays.iter().any(|h| h.is_school() && h.covers(d)) {
                overlapping_days += 1;
            }
        }
    }

    let percentage = if total_days > 0 {
        overlapping_days as f64 / total_days as f64 * 100.0
    } else {
        0.0
    };
    SchoolHolidayOverlap { overlapping_days, percentage }
}

/// Reviews the visible plans against `holidays` and suggests bridge days
/// within `[start_date, end_date]`.
pub fn analyze_vacation_efficiency(
    plans: &[VacationPlan],
    holidays: &[Holiday],
    start_date: NaiveDate,
    end_date: NaiveDate
) -> VacationAnalysis {
    let bridge_opportunities = find_heuristic_bridge_opportunities(holidays, plans, start_date, end_date);

    let school_holidays: Vec<Holiday> = holidays.iter().filter(|h| h.is_school()).cloned().collect();
    let school_overlap = analyze_school_holiday_overlap(plans, &school_holidays);

    let tally = calculate_vacation_days(plans);
    let efficiency_score = if tally.used_days > 0 {
        (tally.gained_days as f64 - tally.used_days as f64) / tally.used_days as f64
    } else {
        0.0
    };

    let mut hints = Vec::new();
    if !bridge_opportunities.is_empty() {
        let optimal = bridge_opportunities.iter().filter(|o| o.is_optimal()).count();
        if optimal > 0 {
            hints.push(PlanningHint::OptimalBridgesFound(optimal));
        } else {
            hints.push(PlanningHint::BridgesFound(bridge_opportunities.len()));
        }
    }
    if efficiency_score < 1.0 {
        hints.push(PlanningHint::IncludeMoreHolidays);
    }
    if school_overlap.percentage < SCHOOL_OVERLAP_HINT_PERCENT && !school_holidays.is_empty() {
        hints.push(PlanningHint::ConsiderSchoolHolidays);
    }

    debug!(
        plans = plans.len(),
        bridges = bridge_opportunities.len(),
        efficiency_score,
        "vacation analysis finished"
    );

    VacationAnalysis {
        bridge_opportunities,
        school_overlap,
        efficiency_score,
        hints
    }
}
