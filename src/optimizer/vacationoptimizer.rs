use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{
    debug,
    info
};

use crate::configuration::OptimizerConfiguration;
use crate::error::CatalogError;
use crate::holiday::holidaycatalog::{
    HolidayCatalog,
    HolidaySet
};
use crate::holiday::region::Region;
use crate::optimizer::cachebackend::{
    CacheBackend,
    CachedWindows,
    RefCellBackend,
    RwLockBackend
};
use crate::optimizer::clusterwindowsearch::find_window_recommendations_with;
use crate::optimizer::heuristicbridgefinder::{
    BridgeOpportunity,
    find_heuristic_bridge_opportunities_with
};
use crate::plan::vacationanalysis::{
    VacationAnalysis,
    analyze_vacation_efficiency
};
use crate::plan::vacationplan::VacationPlan;

/// Catalog lookup plus both finders behind one handle. Window searches are
/// memoised per (region, year); `B` decides whether the memo is shareable
/// across threads.
pub struct VacationOptimizer<C: HolidayCatalog, B: CacheBackend> {
    catalog: C,
    config: OptimizerConfiguration,
    backend: B
}

impl<C: HolidayCatalog, B: CacheBackend> VacationOptimizer<C, B> {
    fn new_with_backend(catalog: C, config: OptimizerConfiguration, backend: B) -> Self {
        Self { catalog, config, backend }
    }
}

impl<C: HolidayCatalog> VacationOptimizer<C, RefCellBackend> {
    pub fn new(catalog: C, config: OptimizerConfiguration) -> Self {
        Self::new_with_backend(catalog, config, RefCellBackend::new())
    }
}

impl<C: HolidayCatalog> VacationOptimizer<C, RwLockBackend> {
    pub fn new_threadsafe(catalog: C, config: OptimizerConfiguration) -> Self {
        Self::new_with_backend(catalog, config, RwLockBackend::new())
    }
}

impl<C: HolidayCatalog, B: CacheBackend> VacationOptimizer<C, B> {
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn config(&self) -> &OptimizerConfiguration {
        &self.config
    }

    /// Number of memoised (region, year) searches.
    pub fn cached_entries(&self) -> usize {
        self.backend.len()
    }

    pub fn invalidate(&self) {
        debug!(entries = self.backend.len(), "clearing window memo");
        self.backend.invalidate();
    }

    fn holidays(&self, region: Region, year: i32) -> Result<HolidaySet, CatalogError> {
        let set = self.catalog.get_holidays(region, year)?;
        if !set.warnings().is_empty() {
            debug!(%region, year, skipped = set.warnings().len(), "holiday set has skipped records");
        }
        Ok(set)
    }

    /// Ranked, non-overlapping windows for `region` in `year`, chronological.
    pub fn window_recommendations(&self, region: Region, year: i32) -> Result<CachedWindows, CatalogError> {
        self.backend.get_or_compute((region, year), || {
            let set = self.holidays(region, year)?;
            let windows = find_window_recommendations_with(set.holidays(), region, &self.config);
            info!(%region, year, windows = windows.len(), "window search finished");
            Ok(Arc::new(windows))
        })
    }

    /// Template bridge days for `region` in `year`, skipping days already
    /// covered by `existing` plans of that region.
    pub fn bridge_opportunities(
        &self,
        region: Region,
        year: i32,
        existing: &[VacationPlan]
    ) -> Result<Vec<BridgeOpportunity>, CatalogError> {
        let set = self.holidays(region, year)?;
        let (start, end) = year_bounds(region, year)?;
        let plans: Vec<VacationPlan> = existing.iter().filter(|p| p.region() == region).cloned().collect();
        Ok(find_heuristic_bridge_opportunities_with(set.holidays(), &plans, start, end, &self.config))
    }

    /// Efficiency review of `plans` for `region` in `year`.
    pub fn analyze(&self, region: Region, year: i32, plans: &[VacationPlan]) -> Result<VacationAnalysis, CatalogError> {
        let set = self.holidays(region, year)?;
        let (start, end) = year_bounds(region, year)?;
        let plans: Vec<VacationPlan> = plans.iter().filter(|p| p.region() == region).cloned().collect();
        Ok(analyze_vacation_efficiency(&plans, set.holidays(), start, end))
    }
}

fn year_bounds(region: Region, year: i32) -> Result<(NaiveDate, NaiveDate), CatalogError> {
    match (NaiveDate::from_ymd_opt(year, 1, 1), NaiveDate::from_ymd_opt(year, 12, 31)) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(CatalogError::NoHolidaysAvailable { region, year })
    }
}
