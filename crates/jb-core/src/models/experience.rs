use crate::{CoreError, CoreResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

const EXPERIENCE_FORMAT: &str = "title|company|location|start[|end][|description]";

/// One entry of a user's work history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    /// None while the position is current
    pub end_date: Option<String>,
    pub description: String,
}

/// Parses `title|company|location|start[|end][|description]`.
///
/// An empty end means the position is current. The description keeps any
/// further `|`. Content rules are left to `Registration::validate`.
impl FromStr for Experience {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        if s.matches('|').count() < 3 {
            return Err(CoreError::validation(
                "experience",
                format!("Experience must look like {EXPERIENCE_FORMAT}"),
            ));
        }

        let mut parts = s.splitn(6, '|').map(str::trim);
        let mut next = || parts.next().unwrap_or_default().to_string();

        Ok(Self {
            job_title: next(),
            company: next(),
            location: next(),
            start_date: next(),
            end_date: Some(next()).filter(|end| !end.is_empty()),
            description: next(),
        })
    }
}
