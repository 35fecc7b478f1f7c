use chrono::NaiveDate;

use bridgedays::configuration::OptimizerConfiguration;
use bridgedays::error::CatalogError;
use bridgedays::holiday::holidaycatalog::HolidayCatalog;
use bridgedays::holiday::holiday::{
    Holiday,
    HolidayCategory
};
use bridgedays::holiday::jsonholidaycatalog::JsonHolidayCatalog;
use bridgedays::holiday::region::Region;
use bridgedays::optimizer::efficiencycalculator::evaluate_window;
use bridgedays::optimizer::recommendationranker::rank_windows;
use bridgedays::optimizer::vacationoptimizer::VacationOptimizer;
use bridgedays::plan::vacationplan::VacationPlan;
use bridgedays::time::freedayclassifier::is_free_day;
use bridgedays::time::rangeofdates::RangeOfDates;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn catalog() -> JsonHolidayCatalog {
    JsonHolidayCatalog::from_reader(concat!(env!("CARGO_MANIFEST_DIR"), "/data/holidays.json")).unwrap()
}

#[test]
fn test_sample_catalog_loads_without_warnings() {
    let catalog = catalog();
    assert_eq!(catalog.years(), vec![2024, 2025]);
    for region in [Region::BY, Region::NW, Region::BE] {
        let set = catalog.get_holidays(region, 2024).unwrap();
        assert!(set.warnings().is_empty());
        assert!(set.public_holidays().count() >= 9);
    }
    let nw = catalog.get_holidays(Region::NW, 2024).unwrap();
    assert!(nw.holidays().iter().all(|h| h.name() != "Heilige Drei Könige"));

    let unity = nw.holidays().iter().find(|h| h.name() == "Tag der Deutschen Einheit").unwrap();
    assert_eq!(unity.details().unwrap().description, "Jahrestag der Wiedervereinigung 1990");
}

#[test]
fn test_window_recommendations_hold_invariants() {
    let catalog = catalog();
    let holidays = catalog.get_holidays(Region::BY, 2024).unwrap().into_holidays();
    let optimizer = VacationOptimizer::new(catalog, OptimizerConfiguration::default());
    let windows = optimizer.window_recommendations(Region::BY, 2024).unwrap();
    assert!(!windows.is_empty());

    for w in windows.iter() {
        assert!(w.efficiency() > 1.0);
        assert!(w.required_days() >= 1);
        assert!(w.period_start() <= w.start_date() && w.end_date() <= w.period_end());
        assert!(!w.involved_public_holidays().is_empty());

        let workdays = RangeOfDates::new(w.start_date(), w.end_date())
            .iter()
            .filter(|&d| !is_free_day(d, &holidays))
            .count() as u32;
        assert_eq!(w.required_days(), workdays);
    }

    for pair in windows.windows(2) {
        assert!(pair[0].start_date() <= pair[1].start_date());
        assert!(!pair[0].period().overlaps(&pair[1].period()));
    }

    // Ascension Thursday: the Friday alone buys a four-day weekend.
    assert!(windows.iter().any(|w| w.vacation_days() == [ymd(2024, 5, 10)]));
}

#[test]
fn test_window_recommendations_are_deterministic() {
    let optimizer = VacationOptimizer::new(catalog(), OptimizerConfiguration::default());
    let first = optimizer.window_recommendations(Region::NW, 2025).unwrap();
    optimizer.invalidate();
    let second = optimizer.window_recommendations(Region::NW, 2025).unwrap();
    assert_eq!(*first, *second);
}

#[test]
fn test_bridge_opportunities_from_catalog() {
    let optimizer = VacationOptimizer::new_threadsafe(catalog(), OptimizerConfiguration::default());
    let opportunities = optimizer.bridge_opportunities(Region::BY, 2024, &[]).unwrap();
    assert!(opportunities.len() <= 10);

    let ascension = opportunities
        .iter()
        .find(|o| o.dates() == [ymd(2024, 5, 10)])
        .unwrap();
    assert_eq!(ascension.required_vacation_days(), 1);
    assert_eq!(ascension.gained_free_days(), 4);
    assert_eq!(ascension.efficiency(), 300.0);
    assert!(ascension.is_optimal());

    for pair in opportunities.windows(2) {
        assert!(pair[0].efficiency() >= pair[1].efficiency());
    }
    for (i, a) in opportunities.iter().enumerate() {
        for b in opportunities.iter().skip(i + 1) {
            assert!(a.holiday_date() == b.holiday_date() || !a.period().overlaps(&b.period()));
        }
    }

    let booked = VacationPlan::new(Region::BY, ymd(2024, 5, 10), ymd(2024, 5, 10));
    let remaining = optimizer.bridge_opportunities(Region::BY, 2024, &[booked]).unwrap();
    assert!(remaining.iter().all(|o| o.dates() != [ymd(2024, 5, 10)]));
}

#[test]
fn test_missing_year_is_not_a_crash() {
    let optimizer = VacationOptimizer::new(catalog(), OptimizerConfiguration::default());
    assert!(matches!(
        optimizer.window_recommendations(Region::BY, 2031),
        Err(CatalogError::NoHolidaysAvailable { region: Region::BY, year: 2031 })
    ));

    let empty = VacationOptimizer::new(JsonHolidayCatalog::empty(), OptimizerConfiguration::default());
    assert!(empty.bridge_opportunities(Region::BE, 2024, &[]).is_err());
}

#[test]
fn test_overlapping_windows_keep_the_more_efficient() {
    let holidays = vec![Holiday::single_day("Christi Himmelfahrt", HolidayCategory::Public, ymd(2024, 5, 9))];
    // Thu..Sat: 1 day for 3, efficiency 3.0
    let better = evaluate_window(ymd(2024, 5, 9), ymd(2024, 5, 11), &holidays).unwrap();
    // Wed..Sun: 2 days for 5, efficiency 2.5
    let worse = evaluate_window(ymd(2024, 5, 8), ymd(2024, 5, 12), &holidays).unwrap();
    assert_eq!(better.efficiency(), 3.0);
    assert_eq!(worse.efficiency(), 2.5);
    assert!(better.period().overlaps(&worse.period()));

    let ranked = rank_windows(vec![worse, better.clone()], 0.1);
    assert_eq!(ranked, vec![better]);
}
