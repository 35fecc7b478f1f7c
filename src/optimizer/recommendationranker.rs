use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;

use crate::optimizer::heuristicbridgefinder::BridgeOpportunity;
use crate::optimizer::recommendation::Recommendation;
use crate::time::rangeofdates::RangeOfDates;

// ─────────────────────────────────────────────────────────────────────────────
// Window search results
// ─────────────────────────────────────────────────────────────────────────────

/// Ranking order of window candidates.
///
/// Higher efficiency first. When two efficiencies are closer than `tolerance`
/// the longer free period wins instead. Remaining ties go to the earlier window.
pub fn compare_windows(a: &Recommendation, b: &Recommendation, tolerance: f64) -> Ordering {
    let diff = b.efficiency() - a.efficiency();
    let primary = if diff.abs() < tolerance {
        b.gained_days().cmp(&a.gained_days())
    } else if diff > 0.0 {
        Ordering::Greater
    } else {
        Ordering::Less
    };

    primary
        .then_with(|| a.start_date().cmp(&b.start_date()))
        .then_with(|| a.end_date().cmp(&b.end_date()))
}

/// Stable insertion by [`compare_windows`].
///
/// The tolerance rule is not transitive, so a library sort is not allowed to
/// assume a total order here. Each candidate is placed before the first ranked
/// entry it beats; equal candidates keep their input order.
fn sort_windows(candidates: Vec<Recommendation>, tolerance: f64) -> Vec<Recommendation> {
    let mut ranked: Vec<Recommendation> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let position = ranked
            .iter()
            .position(|r| compare_windows(&candidate, r, tolerance) == Ordering::Less)
            .unwrap_or(ranked.len());
        ranked.insert(position, candidate);
    }
    ranked
}

/// Greedy pass over an already ranked list: keeps the first candidate for each
/// distinct key, then drops any candidate whose interval overlaps a kept one,
/// unless `coexist` holds against every kept candidate it overlaps.
fn keep_greedy<T, K, I, C>(ranked: Vec<T>, key: K, interval: I, coexist: C) -> Vec<T>
where
    K: Fn(&T) -> Vec<NaiveDate>,
    I: Fn(&T) -> RangeOfDates,
    C: Fn(&T, &T) -> bool
{
    let mut seen: HashSet<Vec<NaiveDate>> = HashSet::new();
    let mut accepted: Vec<T> = Vec::new();

    for candidate in ranked {
        if !seen.insert(key(&candidate)) {
            continue;
        }
        let candidate_interval = interval(&candidate);
        let blocked = accepted
            .iter()
            .filter(|kept| interval(kept).overlaps(&candidate_interval))
            .any(|kept| !coexist(kept, &candidate));
        if !blocked {
            accepted.push(candidate);
        }
    }
    accepted
}

/// Ranks window candidates, removes duplicates and overlaps, and returns the
/// survivors in chronological order.
///
/// Duplicates share the exact same set of vacation days. Overlap is judged on
/// the full free period `[period_start, period_end]`; the higher ranked
/// candidate wins. This is greedy interval selection, not an optimal cover.
pub fn rank_windows(candidates: Vec<Recommendation>, tolerance: f64) -> Vec<Recommendation> {
    let ranked = sort_windows(candidates, tolerance);
    let mut accepted = keep_greedy(ranked, |r| r.vacation_days().to_vec(), |r| r.period(), |_, _| false);
    accepted.sort_by(|a, b| a.start_date().cmp(&b.start_date()).then_with(|| a.end_date().cmp(&b.end_date())));
    accepted
}

// ─────────────────────────────────────────────────────────────────────────────
// Heuristic bridge opportunities
// ─────────────────────────────────────────────────────────────────────────────

/// Higher efficiency first, then fewer vacation days, then earlier dates.
pub fn compare_bridge_opportunities(a: &BridgeOpportunity, b: &BridgeOpportunity) -> Ordering {
    b.efficiency()
        .total_cmp(&a.efficiency())
        .then_with(|| a.required_vacation_days().cmp(&b.required_vacation_days()))
        .then_with(|| a.dates().cmp(b.dates()))
}

/// Ranks heuristic opportunities and keeps at most `limit`.
///
/// Overlap is judged on the free period `[period_start, period_end]`. The only
/// overlap tolerated is between variants of the same holiday, so both
/// Wednesday templates can survive.
pub fn rank_bridge_opportunities(mut opportunities: Vec<BridgeOpportunity>, limit: usize) -> Vec<BridgeOpportunity> {
    opportunities.sort_by(compare_bridge_opportunities);
    let mut accepted = keep_greedy(
        opportunities,
        |o| o.dates().to_vec(),
        |o| o.period(),
        |kept, candidate| kept.holiday_date() == candidate.holiday_date()
    );
    accepted.truncate(limit);
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::holiday::{
        Holiday,
        HolidayCategory
    };
    use crate::optimizer::heuristicbridgefinder::BridgePattern;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window(start: NaiveDate, end: NaiveDate, period: (NaiveDate, NaiveDate), gained: u32, vacation: Vec<NaiveDate>) -> Recommendation {
        Recommendation::new(
            RangeOfDates::new(start, end),
            RangeOfDates::new(period.0, period.1),
            gained,
            vec![],
            vacation
        )
    }

    #[test]
    fn test_overlapping_lower_efficiency_is_dropped() {
        let period = (ymd(2024, 5, 8), ymd(2024, 5, 12));
        let better = window(ymd(2024, 5, 9), ymd(2024, 5, 11), period, 3, vec![ymd(2024, 5, 10)]);
        let worse = window(ymd(2024, 5, 8), ymd(2024, 5, 12), period, 5, vec![ymd(2024, 5, 8), ymd(2024, 5, 10)]);
        assert_eq!(better.efficiency(), 3.0);
        assert_eq!(worse.efficiency(), 2.5);

        let ranked = rank_windows(vec![worse, better.clone()], 0.1);
        assert_eq!(ranked, vec![better]);
    }

    #[test]
    fn test_similar_efficiency_prefers_longer_period() {
        // both 2.0, the six-day window wins on gained days despite starting later
        let short = window(ymd(2024, 5, 1), ymd(2024, 5, 4), (ymd(2024, 5, 1), ymd(2024, 5, 5)), 4, vec![ymd(2024, 5, 2), ymd(2024, 5, 3)]);
        let long = window(ymd(2024, 5, 8), ymd(2024, 5, 13), (ymd(2024, 5, 8), ymd(2024, 5, 13)), 6, vec![ymd(2024, 5, 8), ymd(2024, 5, 10), ymd(2024, 5, 13)]);
        assert_eq!(compare_windows(&long, &short, 0.1), Ordering::Less);

        let a = window(ymd(2024, 5, 1), ymd(2024, 5, 4), (ymd(2024, 5, 1), ymd(2024, 5, 5)), 4, vec![ymd(2024, 5, 2), ymd(2024, 5, 3)]);
        let b = window(ymd(2024, 5, 1), ymd(2024, 5, 5), (ymd(2024, 5, 1), ymd(2024, 5, 5)), 5, vec![ymd(2024, 5, 2), ymd(2024, 5, 3)]);
        // 2.0 vs 2.5 is not similar: efficiency decides
        assert_eq!(compare_windows(&b, &a, 0.1), Ordering::Less);
        // with a wide tolerance the longer one still wins, now by gained days
        assert_eq!(compare_windows(&b, &a, 1.0), Ordering::Less);
        assert_eq!(compare_windows(&a, &b, 1.0), Ordering::Greater);
    }

    #[test]
    fn test_exact_duplicates_and_chronological_output() {
        let may = window(ymd(2024, 5, 9), ymd(2024, 5, 12), (ymd(2024, 5, 9), ymd(2024, 5, 12)), 4, vec![ymd(2024, 5, 10)]);
        let may_same_days = window(ymd(2024, 5, 10), ymd(2024, 5, 12), (ymd(2024, 5, 9), ymd(2024, 5, 12)), 3, vec![ymd(2024, 5, 10)]);
        let jan = window(ymd(2024, 1, 1), ymd(2024, 1, 2), (ymd(2023, 12, 30), ymd(2024, 1, 2)), 2, vec![ymd(2024, 1, 2)]);

        let ranked = rank_windows(vec![may_same_days, jan.clone(), may.clone()], 0.1);
        assert_eq!(ranked, vec![jan, may]);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let a = window(ymd(2024, 5, 9), ymd(2024, 5, 12), (ymd(2024, 5, 9), ymd(2024, 5, 12)), 4, vec![ymd(2024, 5, 10)]);
        let b = window(ymd(2024, 10, 3), ymd(2024, 10, 6), (ymd(2024, 10, 3), ymd(2024, 10, 6)), 4, vec![ymd(2024, 10, 4)]);
        let first = rank_windows(vec![a.clone(), b.clone()], 0.1);
        let second = rank_windows(vec![b, a], 0.1);
        assert_eq!(first, second);
    }

    fn opportunity(holiday: NaiveDate, pattern: BridgePattern) -> BridgeOpportunity {
        let h = Holiday::single_day("H", HolidayCategory::Public, holiday);
        BridgeOpportunity::from_pattern(&h, pattern)
    }

    #[test]
    fn test_bridge_opportunities_rank_and_cap() {
        let opportunities = vec![
            opportunity(ymd(2024, 5, 1), BridgePattern::WednesdayLeading),
            opportunity(ymd(2024, 5, 1), BridgePattern::WednesdayTrailing),
            opportunity(ymd(2024, 5, 9), BridgePattern::ThursdayFriday),
            opportunity(ymd(2024, 10, 3), BridgePattern::ThursdayFriday),
        ];
        let ranked = rank_bridge_opportunities(opportunities.clone(), 10);
        assert_eq!(ranked.len(), 4);
        assert_eq!(ranked[0].dates(), &[ymd(2024, 5, 10)]);
        assert_eq!(ranked[1].dates(), &[ymd(2024, 10, 4)]);
        assert_eq!(ranked[2].efficiency(), 150.0);

        let capped = rank_bridge_opportunities(opportunities, 2);
        assert_eq!(capped.len(), 2);
        assert!(capped.iter().all(|o| o.efficiency() == 300.0));
    }

    #[test]
    fn test_bridge_periods_of_different_holidays_do_not_overlap() {
        // Thu 9 May frees 9..12 May, Tue 14 May frees 11..14 May
        let thursday = opportunity(ymd(2024, 5, 9), BridgePattern::ThursdayFriday);
        let tuesday = opportunity(ymd(2024, 5, 14), BridgePattern::TuesdayMonday);
        assert!(thursday.period().overlaps(&tuesday.period()));

        let ranked = rank_bridge_opportunities(vec![tuesday, thursday.clone()], 10);
        assert_eq!(ranked, vec![thursday]);
    }

    #[test]
    fn test_wednesday_variants_block_a_neighbour() {
        // Wed 1 May variants free 27 Apr..1 May and 1..5 May; Mon 6 May needs Fri 3 May
        let monday = opportunity(ymd(2024, 5, 6), BridgePattern::MondayFriday);
        let ranked = rank_bridge_opportunities(
            vec![
                opportunity(ymd(2024, 5, 1), BridgePattern::WednesdayTrailing),
                opportunity(ymd(2024, 5, 1), BridgePattern::WednesdayLeading),
                monday.clone(),
            ],
            10
        );
        // Monday ranks first at 300%; it overlaps the trailing variant only
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0], monday);
        assert_eq!(ranked[1].pattern(), BridgePattern::WednesdayLeading);
    }

    #[test]
    fn test_bridge_duplicates_are_removed() {
        let ranked = rank_bridge_opportunities(
            vec![
                opportunity(ymd(2024, 5, 9), BridgePattern::ThursdayFriday),
                opportunity(ymd(2024, 5, 9), BridgePattern::ThursdayFriday),
            ],
            10
        );
        assert_eq!(ranked.len(), 1);
    }
}
