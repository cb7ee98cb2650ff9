use crate::tier::file_tier::{read_optional, remove_if_present, write_atomic};
use crate::{IDENTITY_KEY, IdentityError, IdentityResult, IdentityTier};

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

const COOKIE_FILENAME: &str = "cookie.json";

/// What the cookie jar file holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl CookieRecord {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Lowest-priority tier: a named value with an expiry.
///
/// Every write restamps the expiry to now + max age. An expired copy reads
/// as empty and is deleted on the way out.
#[derive(Debug, Clone)]
pub struct CookieTier {
    path: PathBuf,
    max_age: TimeDelta,
}

impl CookieTier {
    pub fn new(dir: impl Into<PathBuf>, max_age_days: u32) -> Self {
        Self::with_max_age(dir, TimeDelta::days(i64::from(max_age_days)))
    }

    /// A zero or negative `max_age` writes records that are already expired.
    pub fn with_max_age(dir: impl Into<PathBuf>, max_age: TimeDelta) -> Self {
        Self {
            path: dir.into().join(COOKIE_FILENAME),
            max_age,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_age(&self) -> TimeDelta {
        self.max_age
    }

    /// The stored record as-is, expired or not.
    pub fn record(&self) -> IdentityResult<Option<CookieRecord>> {
        let Some(contents) = read_optional(&self.path)? else {
            return Ok(None);
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| IdentityError::corrupted(self.path.clone(), e.to_string()))
    }
}

impl IdentityTier for CookieTier {
    fn name(&self) -> &str {
        "cookie"
    }

    fn read(&self) -> IdentityResult<Option<String>> {
        let Some(record) = self.record()? else {
            return Ok(None);
        };

        if record.name != IDENTITY_KEY {
            debug!("Ignoring cookie named '{}'", record.name);
            return Ok(None);
        }

        if record.is_expired(Utc::now()) {
            info!("Identity cookie expired at {}", record.expires_at);
            remove_if_present(&self.path)?;
            return Ok(None);
        }

        Ok(Some(record.value))
    }

    fn write(&self, value: &str) -> IdentityResult<()> {
        let record = CookieRecord {
            name: String::from(IDENTITY_KEY),
            value: value.to_string(),
            expires_at: Utc::now() + self.max_age,
        };

        let json = serde_json::to_string_pretty(&record)?;
        write_atomic(&self.path, &json)?;
        debug!("Wrote identity cookie (expires {})", record.expires_at);
        Ok(())
    }

    fn remove(&self) -> IdentityResult<()> {
        remove_if_present(&self.path)
    }
}
