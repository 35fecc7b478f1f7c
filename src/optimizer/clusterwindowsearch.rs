use chrono::{
    Days,
    NaiveDate
};
use tracing::debug;

use crate::configuration::{
    ClusterSettings,
    GapMeasure,
    OptimizerConfiguration
};
use crate::holiday::holiday::Holiday;
use crate::holiday::region::Region;
use crate::optimizer::efficiencycalculator::EfficiencyCalculator;
use crate::optimizer::recommendation::Recommendation;
use crate::optimizer::recommendationranker::rank_windows;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::utility::{
    business_days_between,
    calendar_days_between
};

/// Run of public holidays close enough to be planned around together.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct HolidayCluster {
    first_date: NaiveDate,
    last_date: NaiveDate,
    len: usize
}

impl HolidayCluster {
    fn new(holiday: &Holiday) -> HolidayCluster {
        HolidayCluster {
            first_date: holiday.date(),
            last_date: holiday.end_date(),
            len: 1
        }
    }

    pub fn first_date(&self) -> NaiveDate {
        self.first_date
    }

    /// End date of the latest-ending holiday in the cluster.
    pub fn last_date(&self) -> NaiveDate {
        self.last_date
    }

    pub fn len(&self) -> usize {
        self.len
    }

    fn gap_to(&self, next: &Holiday, measure: GapMeasure) -> i64 {
        match measure {
            GapMeasure::BusinessDays => business_days_between(self.last_date, next.date()) as i64,
            GapMeasure::CalendarDays => calendar_days_between(self.last_date, next.date())
        }
    }

    fn absorb(&mut self, next: &Holiday) {
        self.last_date = self.last_date.max(next.end_date());
        self.len += 1;
    }
}

/// Groups the public holidays of `holidays` chronologically. A holiday joins
/// the current cluster when its gap to the cluster's last day is at most
/// `settings.max_gap_days`.
pub fn cluster_public_holidays(holidays: &[Holiday], settings: &ClusterSettings) -> Vec<HolidayCluster> {
    let mut public: Vec<&Holiday> = holidays.iter().filter(|h| h.is_public()).collect();
    public.sort_by_key(|h| (h.date(), h.end_date()));

    let mut clusters: Vec<HolidayCluster> = Vec::new();
    let mut current: Option<HolidayCluster> = None;

    for holiday in public {
        current = match current {
            None => Some(HolidayCluster::new(holiday)),
            Some(mut cluster) => {
                if cluster.gap_to(holiday, settings.gap_measure) <= settings.max_gap_days as i64 {
                    cluster.absorb(holiday);
                    Some(cluster)
                } else {
                    clusters.push(cluster);
                    Some(HolidayCluster::new(holiday))
                }
            }
        };
    }
    clusters.extend(current);
    clusters
}

/// Brute-force window enumeration around holiday clusters.
///
/// Two passes run over the same holiday set: tight bridge clusters and loose
/// holiday-period clusters (see [`ClusterSettings`]). Every accepted window of
/// both passes is returned unranked; overlaps are resolved by the ranker.
pub struct ClusterWindowSearch<'c, 'a> {
    calculator: &'c EfficiencyCalculator<'a>,
    bridge_cluster: ClusterSettings,
    period_cluster: ClusterSettings
}

impl<'c, 'a> ClusterWindowSearch<'c, 'a> {
    pub fn new(calculator: &'c EfficiencyCalculator<'a>, config: &OptimizerConfiguration) -> ClusterWindowSearch<'c, 'a> {
        ClusterWindowSearch {
            calculator,
            bridge_cluster: config.bridge_cluster,
            period_cluster: config.period_cluster
        }
    }

    pub fn bridge_pass(&self) -> Vec<Recommendation> {
        self.run_pass(&self.bridge_cluster)
    }

    pub fn period_pass(&self) -> Vec<Recommendation> {
        self.run_pass(&self.period_cluster)
    }

    /// Bridge pass candidates followed by period pass candidates.
    pub fn candidates(&self) -> Vec<Recommendation> {
        let mut candidates = self.bridge_pass();
        candidates.extend(self.period_pass());
        candidates
    }

    fn run_pass(&self, settings: &ClusterSettings) -> Vec<Recommendation> {
        let clusters = cluster_public_holidays(self.calculator.holidays(), settings);
        let mut candidates = Vec::new();
        for cluster in clusters.iter() {
            self.search_cluster(cluster, settings.search_radius_days, &mut candidates);
        }
        debug!(
            clusters = clusters.len(),
            candidates = candidates.len(),
            max_gap = settings.max_gap_days,
            radius = settings.search_radius_days,
            "window search pass finished"
        );
        candidates
    }

    /// Every `(start, end)` with `start` in `[first - radius, first]` and
    /// `end` in `[last, last + radius]`.
    fn search_cluster(&self, cluster: &HolidayCluster, radius: u32, candidates: &mut Vec<Recommendation>) {
        let radius = Days::new(radius as u64);
        let (Some(window_start), Some(window_end)) = (
            cluster.first_date.checked_sub_days(radius),
            cluster.last_date.checked_add_days(radius)
        ) else {
            return;
        };

        for start in RangeOfDates::new(window_start, cluster.first_date).iter() {
            for end in RangeOfDates::new(cluster.last_date, window_end).iter() {
                if let Some(rec) = self.calculator.evaluate_window(start, end) {
                    candidates.push(rec);
                }
            }
        }
    }
}

/// Holidays usable for `region`: untagged ones and those tagged with `region`.
fn holidays_for_region(holidays: &[Holiday], region: Region) -> Vec<Holiday> {
    holidays
        .iter()
        .filter(|h| h.region().is_none_or(|r| r == region))
        .cloned()
        .collect()
}

/// Ranked, non-overlapping vacation windows in chronological order.
pub fn find_window_recommendations(holidays: &[Holiday], region: Region) -> Vec<Recommendation> {
    find_window_recommendations_with(holidays, region, &OptimizerConfiguration::default())
}

pub fn find_window_recommendations_with(
    holidays: &[Holiday],
    region: Region,
    config: &OptimizerConfiguration
) -> Vec<Recommendation> {
    let usable = holidays_for_region(holidays, region);
    let calculator = EfficiencyCalculator::new(&usable);
    let candidates = ClusterWindowSearch::new(&calculator, config).candidates();
    rank_windows(candidates, config.similar_efficiency_tolerance)
}
