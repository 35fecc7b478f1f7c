use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{
    CatalogError,
    HolidayRecordError
};
use super::holiday::{
    Holiday,
    HolidayCategory,
    HolidayDetails,
    HolidaySpan
};
use super::region::Region;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read-only source of holiday records keyed by region and year.
pub trait HolidayCatalog {
    fn get_holidays(&self, region: Region, year: i32) -> Result<HolidaySet, CatalogError>;
}

/// Result of a catalog lookup.
///
/// `holidays` is chronological; records that could not be parsed are left out
/// and listed in `warnings` instead.
#[derive(Debug, Clone)]
pub struct HolidaySet {
    region: Region,
    year: i32,
    holidays: Vec<Holiday>,
    warnings: Vec<HolidayRecordError>
}

impl HolidaySet {
    pub fn new(region: Region, year: i32, mut holidays: Vec<Holiday>, warnings: Vec<HolidayRecordError>) -> HolidaySet {
        holidays.sort_by(|a, b| {
            a.date()
                .cmp(&b.date())
                .then_with(|| b.is_public().cmp(&a.is_public()))
                .then_with(|| a.name().cmp(b.name()))
        });
        HolidaySet { region, year, holidays, warnings }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn warnings(&self) -> &[HolidayRecordError] {
        &self.warnings
    }

    pub fn into_holidays(self) -> Vec<Holiday> {
        self.holidays
    }

    pub fn public_holidays(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.iter().filter(|h| h.is_public())
    }

    pub fn school_holidays(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.iter().filter(|h| h.is_school())
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

/// Record shape of the holiday data tables. A record without `end` is a single day.
#[derive(Deserialize)]
pub(crate) struct RawHoliday {
    name: String,
    start: Option<String>,
    end: Option<String>,
    #[serde(default)]
    nationwide: Option<bool>,
    #[serde(default)]
    details: Option<HolidayDetails>
}

impl RawHoliday {
    pub(crate) fn nationwide(&self) -> Option<bool> {
        self.nationwide
    }
}

fn parse_date(name: &str, field: &'static str, value: &str) -> Result<NaiveDate, HolidayRecordError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| HolidayRecordError::InvalidDate {
        name: name.to_owned(),
        field,
        value: value.to_owned()
    })
}

/// Turns a raw record into a typed [`Holiday`].
pub(crate) fn parse_raw_holiday(raw: &RawHoliday, category: HolidayCategory) -> Result<Holiday, HolidayRecordError> {
    let start_value = raw.start.as_deref().ok_or_else(|| HolidayRecordError::MissingBound {
        name: raw.name.clone(),
        field: "start"
    })?;
    let start = parse_date(&raw.name, "start", start_value)?;

    let end = match raw.end.as_deref() {
        None => None,
        Some(value) if value.trim().is_empty() => {
            return Err(HolidayRecordError::MissingBound {
                name: raw.name.clone(),
                field: "end"
            });
        },
        Some(value) => Some(parse_date(&raw.name, "end", value)?)
    };

    let span = HolidaySpan::new(start, end).ok_or_else(|| HolidayRecordError::InvertedRange {
        name: raw.name.clone(),
        start: start_value.to_owned(),
        end: raw.end.clone().unwrap_or_default()
    })?;

    let holiday = Holiday::new(raw.name.clone(), category, span);
    Ok(match &raw.details {
        Some(details) => holiday.with_details(details.clone()),
        None => holiday
    })
}

/// Decodes one untyped record, reporting shape errors the same way as date errors.
pub(crate) fn raw_holiday_from_json(json_value: &serde_json::Value) -> Result<RawHoliday, HolidayRecordError> {
    RawHoliday::deserialize(json_value).map_err(|error| HolidayRecordError::Malformed {
        name: json_value
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("<unnamed>")
            .to_owned(),
        reason: error.to_string()
    })
}
