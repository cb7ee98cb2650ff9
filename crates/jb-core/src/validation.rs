//! Field checks shared by the form payloads.
//!
//! Each helper fails with `CoreError::Validation` naming the field, so the
//! caller can stop at the first problem and show it before any request goes out.

use crate::{CoreError, CoreResult};

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX pattern is valid")
});

/// Length in characters, not bytes
fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[track_caller]
pub fn min_chars(field: &str, value: &str, min: usize, message: &str) -> CoreResult<()> {
    if char_len(value.trim()) < min {
        return Err(CoreError::validation(field, message));
    }
    Ok(())
}

#[track_caller]
pub fn max_chars(field: &str, value: &str, max: usize, message: &str) -> CoreResult<()> {
    if char_len(value) > max {
        return Err(CoreError::validation(field, message));
    }
    Ok(())
}

#[track_caller]
pub fn email(field: &str, value: &str, message: &str) -> CoreResult<()> {
    if !EMAIL_REGEX.is_match(value) {
        return Err(CoreError::validation(field, message));
    }
    Ok(())
}

/// Absolute http(s) URL.
#[track_caller]
pub fn http_url(field: &str, value: &str, message: &str) -> CoreResult<()> {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(CoreError::validation(field, message)),
    }
}

/// Every entry at least `min` characters, and at least `required` entries.
#[track_caller]
pub fn string_list(
    field: &str,
    values: &[String],
    required: usize,
    min: usize,
    message: &str,
) -> CoreResult<()> {
    if values.len() < required {
        return Err(CoreError::validation(field, message));
    }
    for (index, value) in values.iter().enumerate() {
        min_chars(
            &format!("{field}[{index}]"),
            value,
            min,
            &format!("Each entry must be at least {min} characters"),
        )?;
    }
    Ok(())
}
