use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize
};
use uuid::Uuid;

use crate::holiday::region::Region;
use crate::time::rangeofdates::RangeOfDates;

/// A booked (or drafted) vacation. Hidden plans are kept but ignored by
/// planning.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct VacationPlan {
    id: Uuid,
    region: Region,
    start_date: NaiveDate,
    end_date: NaiveDate,
    is_visible: bool
}

impl VacationPlan {
    pub fn new(region: Region, d1: NaiveDate, d2: NaiveDate) -> VacationPlan {
        let range = RangeOfDates::new(d1, d2);
        VacationPlan {
            id: Uuid::new_v4(),
            region,
            start_date: range.start_date(),
            end_date: range.end_date(),
            is_visible: true
        }
    }

    pub fn with_visibility(mut self, is_visible: bool) -> VacationPlan {
        self.is_visible = is_visible;
        self
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn range(&self) -> RangeOfDates {
        RangeOfDates::new(self.start_date, self.end_date)
    }

    pub fn covers(&self, d: NaiveDate) -> bool {
        self.start_date <= d && d <= self.end_date
    }
}
