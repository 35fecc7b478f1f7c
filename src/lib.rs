pub mod configuration;
pub mod error;

pub mod holiday {
    pub mod holiday;
    pub mod region;
    pub mod holidaycatalog;
    pub mod jsonholidaycatalog;
}

pub mod optimizer {
    pub mod recommendation;
    pub mod efficiencycalculator;
    pub mod clusterwindowsearch;
    pub mod heuristicbridgefinder;
    pub mod recommendationranker;
    pub mod cachebackend;
    pub mod vacationoptimizer;
}

pub mod plan {
    pub mod vacationplan;
    pub mod vacationanalysis;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;
    pub mod freedayclassifier;
    pub mod freedaycalendar;
}
