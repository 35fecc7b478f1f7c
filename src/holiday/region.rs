use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize
};

use crate::error::CatalogError;

/// Catalog key under which nationwide records are stored.
pub const NATIONWIDE_KEY: &str = "ALL";

/// German federal states. Every holiday lookup is keyed by one of these.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Region {
    BW,
    BY,
    BE,
    BB,
    HB,
    HH,
    HE,
    MV,
    NI,
    NW,
    RP,
    SL,
    SN,
    ST,
    SH,
    TH
}

impl Region {
    pub const ALL: [Region; 16] = [
        Region::BW, Region::BY, Region::BE, Region::BB,
        Region::HB, Region::HH, Region::HE, Region::MV,
        Region::NI, Region::NW, Region::RP, Region::SL,
        Region::SN, Region::ST, Region::SH, Region::TH
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Region::BW => "BW",
            Region::BY => "BY",
            Region::BE => "BE",
            Region::BB => "BB",
            Region::HB => "HB",
            Region::HH => "HH",
            Region::HE => "HE",
            Region::MV => "MV",
            Region::NI => "NI",
            Region::NW => "NW",
            Region::RP => "RP",
            Region::SL => "SL",
            Region::SN => "SN",
            Region::ST => "ST",
            Region::SH => "SH",
            Region::TH => "TH"
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Region::BW => "Baden-Württemberg",
            Region::BY => "Bayern",
            Region::BE => "Berlin",
            Region::BB => "Brandenburg",
            Region::HB => "Bremen",
            Region::HH => "Hamburg",
            Region::HE => "Hessen",
            Region::MV => "Mecklenburg-Vorpommern",
            Region::NI => "Niedersachsen",
            Region::NW => "Nordrhein-Westfalen",
            Region::RP => "Rheinland-Pfalz",
            Region::SL => "Saarland",
            Region::SN => "Sachsen",
            Region::ST => "Sachsen-Anhalt",
            Region::SH => "Schleswig-Holstein",
            Region::TH => "Thüringen"
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Region {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Region::ALL
            .iter()
            .find(|r| r.code() == code)
            .copied()
            .ok_or_else(|| CatalogError::UnknownRegion(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_region_code() {
        assert_eq!("by".parse::<Region>().unwrap(), Region::BY);
        assert_eq!(" NW ".parse::<Region>().unwrap(), Region::NW);
        assert!(matches!("XX".parse::<Region>(), Err(CatalogError::UnknownRegion(_))));
    }

    #[test]
    fn test_codes_round_trip() {
        for region in Region::ALL {
            assert_eq!(region.code().parse::<Region>().unwrap(), region);
        }
    }
}
