use crate::models::normalize_label;
use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Where the work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum EmploymentMode {
    #[serde(rename = "Remote")]
    Remote,
    #[serde(rename = "On-site")]
    OnSite,
    #[serde(rename = "Hybrid")]
    Hybrid,
}

impl EmploymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "Remote",
            Self::OnSite => "On-site",
            Self::Hybrid => "Hybrid",
        }
    }
}

impl FromStr for EmploymentMode {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match normalize_label(s).as_str() {
            "remote" => Ok(Self::Remote),
            "onsite" => Ok(Self::OnSite),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err(CoreError::InvalidEmploymentMode {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl TryFrom<String> for EmploymentMode {
    type Error = CoreError;

    fn try_from(value: String) -> CoreResult<Self> {
        value.parse()
    }
}

impl std::fmt::Display for EmploymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
