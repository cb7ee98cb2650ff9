pub mod application;
pub mod application_status;
pub mod employment_mode;
pub mod experience;
pub mod job;
pub mod job_draft;
pub mod job_status;
pub mod job_type;
pub mod notification;
pub mod profile_update;
pub mod registration;
pub mod role;
pub mod social_links;
pub mod user;
pub mod visitor;

use serde::{Deserialize, Deserializer};

/// The API sends `null` for list and object fields it never filled in.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Folds case and separators so "Full-Time", "full time" and "fulltime" compare equal.
pub(crate) fn normalize_label(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
