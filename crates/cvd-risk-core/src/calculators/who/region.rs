//! WHO Global Burden of Disease regions and their calibration factors.

use serde::{Deserialize, Serialize};

macro_rules! who_regions {
    ($($variant:ident => $wire:literal, $factor:expr;)+) => {
        /// One of the 21 regions the WHO charts are calibrated for.
        #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub enum WhoRegion {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl WhoRegion {
            /// Every region, in table order.
            pub const ALL: &'static [WhoRegion] = &[$(WhoRegion::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(WhoRegion::$variant => $wire,)+
                }
            }

            /// Multiplier applied to the combined CHD + stroke risk.
            pub fn calibration(&self) -> f64 {
                match self {
                    $(WhoRegion::$variant => $factor,)+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value.trim() {
                    $($wire => Some(WhoRegion::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

who_regions! {
    AndeanLatinAmerica => "andean_latin_america", 0.7;
    Australasia => "australasia", 0.9;
    Caribbean => "caribbean", 1.0;
    CentralAsia => "central_asia", 1.35;
    CentralEurope => "central_europe", 1.1;
    CentralLatinAmerica => "central_latin_america", 0.85;
    EastAsia => "east_asia", 0.75;
    EasternEurope => "eastern_europe", 1.2;
    NorthAfricaMiddleEast => "north_africa_middle_east", 1.15;
    NorthAmericaHighIncome => "north_america_high_income", 1.0;
    Oceania => "oceania", 1.05;
    SouthAsia => "south_asia", 1.1;
    SoutheastAsia => "southeast_asia", 0.9;
    SouthernLatinAmerica => "southern_latin_america", 0.85;
    SubsaharanAfricaCentral => "subsaharan_africa_central", 0.8;
    SubsaharanAfricaEast => "subsaharan_africa_east", 0.75;
    SubsaharanAfricaSouthern => "subsaharan_africa_southern", 0.9;
    SubsaharanAfricaWest => "subsaharan_africa_west", 0.8;
    TropicalLatinAmerica => "tropical_latin_america", 0.85;
    WesternEurope => "western_europe", 0.95;
    HighIncomeAsiaPacific => "high_income_asia_pacific", 0.85;
}

impl Default for WhoRegion {
    fn default() -> Self {
        WhoRegion::NorthAmericaHighIncome
    }
}

impl std::fmt::Display for WhoRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
