pub(crate) mod cookie_tier;
pub(crate) mod file_tier;
pub(crate) mod memory_tier;

use crate::IdentityResult;

/// Key every tier files the serialized user under.
pub const IDENTITY_KEY: &str = "user";

/// One place a copy of the signed-in user can live.
///
/// Tiers store opaque text. Parsing and reconciling is the store's job, so a
/// tier only reports what it holds.
pub trait IdentityTier: Send {
    /// Short label used in log lines ("session", "durable", "cookie").
    fn name(&self) -> &str;

    /// `Ok(None)` when the tier holds nothing (or its copy has expired).
    fn read(&self) -> IdentityResult<Option<String>>;

    fn write(&self, value: &str) -> IdentityResult<()>;

    /// Removing from an empty tier succeeds.
    fn remove(&self) -> IdentityResult<()>;

    /// Called when the held value could not be parsed as a user.
    ///
    /// Default drops it. Tiers backed by files may keep a copy aside.
    fn discard_corrupted(&self) -> IdentityResult<()> {
        self.remove()
    }
}
