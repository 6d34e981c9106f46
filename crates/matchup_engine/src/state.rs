//! Session state shared by a matchup: weather and major status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Major status condition (only one at a time).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    None,
    Paralysis,
    Burn,
    Poison,
    Sleep,
    Freeze,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::None => "none",
            Status::Paralysis => "paralysis",
            Status::Burn => "burn",
            Status::Poison => "poison",
            Status::Sleep => "sleep",
            Status::Freeze => "freeze",
        }
    }
}

/// Weather for the whole session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    None,
    Sun,
    Rain,
    Sand,
    /// Tracked but has no effect on damage here
    Hail,
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weather::None => "none",
            Weather::Sun => "sun",
            Weather::Rain => "rain",
            Weather::Sand => "sand",
            Weather::Hail => "hail",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
