use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::{
    debug,
    warn
};

use crate::error::{
    CatalogError,
    HolidayRecordError
};
use super::holiday::{
    Holiday,
    HolidayCategory
};
use super::holidaycatalog::{
    HolidayCatalog,
    HolidaySet,
    parse_raw_holiday,
    raw_holiday_from_json
};
use super::region::{
    NATIONWIDE_KEY,
    Region
};

/// year -> region code (or `ALL`) -> raw records
type RawTable = HashMap<String, HashMap<String, Vec<serde_json::Value>>>;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct HolidayDataJsonProp {
    #[serde(default)]
    public_holidays: RawTable,
    #[serde(default)]
    school_holidays: RawTable
}

/// Holiday catalog backed by the JSON holiday data tables.
///
/// ```json
/// {
///   "publicHolidays": { "2024": { "ALL": [{ "name": "Neujahr", "start": "2024-01-01" }],
///                                 "BY":  [{ "name": "Heilige Drei Könige", "start": "2024-01-06" }] } },
///   "schoolHolidays": { "2024": { "BY":  [{ "name": "Osterferien", "start": "2024-03-25", "end": "2024-04-06" }] } }
/// }
/// ```
///
/// A record may also carry `"details": { "description", "traditions" }`.
/// Records are parsed on every lookup. A malformed record is dropped from the
/// result and reported as a warning; it never fails the lookup.
pub struct JsonHolidayCatalog {
    data: HolidayDataJsonProp
}

impl JsonHolidayCatalog {
    pub fn from_json_value(json_value: serde_json::Value) -> Result<JsonHolidayCatalog, CatalogError> {
        let data: HolidayDataJsonProp = serde_json::from_value(json_value)?;
        Ok(JsonHolidayCatalog { data })
    }

    pub fn from_json_str(json: &str) -> Result<JsonHolidayCatalog, CatalogError> {
        let data: HolidayDataJsonProp = serde_json::from_str(json)?;
        Ok(JsonHolidayCatalog { data })
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<JsonHolidayCatalog, CatalogError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let data: HolidayDataJsonProp = serde_json::from_reader(reader)?;
        Ok(JsonHolidayCatalog { data })
    }

    pub fn empty() -> JsonHolidayCatalog {
        JsonHolidayCatalog { data: HolidayDataJsonProp::default() }
    }

    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.data.public_holidays
            .keys()
            .chain(self.data.school_holidays.keys())
            .filter_map(|y| y.parse().ok())
            .collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    fn records<'a>(table: &'a RawTable, year: i32, key: &str) -> &'a [serde_json::Value] {
        table
            .get(&year.to_string())
            .and_then(|by_region| by_region.get(key))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    fn collect(
        records: &[serde_json::Value],
        category: HolidayCategory,
        region: Region,
        is_regional: bool,
        holidays: &mut Vec<Holiday>,
        warnings: &mut Vec<HolidayRecordError>
    ) {
        for json_value in records {
            let parsed = raw_holiday_from_json(json_value).and_then(|raw| {
                let regional = is_regional && !raw.nationwide().unwrap_or(false);
                parse_raw_holiday(&raw, category).map(|h| h.with_region(region, regional))
            });
            match parsed {
                Ok(holiday) => holidays.push(holiday),
                Err(error) => {
                    warn!(%region, %error, "skipping holiday record");
                    warnings.push(error);
                }
            }
        }
    }
}

impl HolidayCatalog for JsonHolidayCatalog {
    fn get_holidays(&self, region: Region, year: i32) -> Result<HolidaySet, CatalogError> {
        let regional_public = Self::records(&self.data.public_holidays, year, region.code());
        let nationwide_public = Self::records(&self.data.public_holidays, year, NATIONWIDE_KEY);
        let school = Self::records(&self.data.school_holidays, year, region.code());

        if regional_public.is_empty() && nationwide_public.is_empty() && school.is_empty() {
            return Err(CatalogError::NoHolidaysAvailable { region, year });
        }

        let mut holidays = Vec::with_capacity(regional_public.len() + nationwide_public.len() + school.len());
        let mut warnings = Vec::new();
        Self::collect(regional_public, HolidayCategory::Public, region, true, &mut holidays, &mut warnings);
        Self::collect(nationwide_public, HolidayCategory::Public, region, false, &mut holidays, &mut warnings);
        Self::collect(school, HolidayCategory::School, region, true, &mut holidays, &mut warnings);

        debug!(%region, year, holidays = holidays.len(), skipped = warnings.len(), "loaded holiday set");
        Ok(HolidaySet::new(region, year, holidays, warnings))
    }
}
