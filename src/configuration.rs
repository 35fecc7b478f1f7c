use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize
};

use crate::error::ConfigurationError;

/// How the distance between two neighbouring holidays is measured when clustering.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum GapMeasure {
    /// Weekdays between the two dates, see [`business_days_between`].
    ///
    /// [`business_days_between`]: crate::time::utility::business_days_between
    BusinessDays,
    CalendarDays
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct ClusterSettings {
    pub max_gap_days: u32,
    pub search_radius_days: u32,
    pub gap_measure: GapMeasure
}

impl ClusterSettings {
    /// Tight clusters around single bridge gaps.
    pub const fn bridge() -> ClusterSettings {
        ClusterSettings {
            max_gap_days: 3,
            search_radius_days: 3,
            gap_measure: GapMeasure::BusinessDays
        }
    }

    /// Loose clusters around longer holiday periods (Easter, Christmas).
    pub const fn period() -> ClusterSettings {
        ClusterSettings {
            max_gap_days: 5,
            search_radius_days: 5,
            gap_measure: GapMeasure::CalendarDays
        }
    }
}

fn default_bridge_cluster() -> ClusterSettings {
    ClusterSettings::bridge()
}

fn default_period_cluster() -> ClusterSettings {
    ClusterSettings::period()
}

fn default_similar_efficiency_tolerance() -> f64 {
    0.1
}

fn default_bridge_result_limit() -> usize {
    10
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OptimizerConfiguration {
    #[serde(default = "default_bridge_cluster")]
    pub bridge_cluster: ClusterSettings,
    #[serde(default = "default_period_cluster")]
    pub period_cluster: ClusterSettings,
    /// Efficiencies closer than this are ranked by gained days instead.
    #[serde(default = "default_similar_efficiency_tolerance")]
    pub similar_efficiency_tolerance: f64,
    /// Cap on heuristic bridge opportunities returned.
    #[serde(default = "default_bridge_result_limit")]
    pub bridge_result_limit: usize
}

impl Default for OptimizerConfiguration {
    fn default() -> Self {
        OptimizerConfiguration {
            bridge_cluster: ClusterSettings::bridge(),
            period_cluster: ClusterSettings::period(),
            similar_efficiency_tolerance: default_similar_efficiency_tolerance(),
            bridge_result_limit: default_bridge_result_limit()
        }
    }
}

impl OptimizerConfiguration {
    pub fn from_json_value(json_value: serde_json::Value) -> Result<OptimizerConfiguration, ConfigurationError> {
        let config: OptimizerConfiguration = serde_json::from_value(json_value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<OptimizerConfiguration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let config: OptimizerConfiguration = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.similar_efficiency_tolerance >= 0.0 && self.similar_efficiency_tolerance.is_finite()) {
            return Err(ConfigurationError::InvalidValue {
                field: "similar_efficiency_tolerance",
                reason: format!("must be a finite non-negative number, got {}", self.similar_efficiency_tolerance)
            });
        }
        if self.bridge_result_limit == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "bridge_result_limit",
                reason: "must be at least 1".to_owned()
            });
        }
        Ok(())
    }
}
