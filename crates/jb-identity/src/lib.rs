//! Identity Store: who the current visitor is, across process restarts.
//!
//! The signed-in user is duplicated across ordered storage tiers (session,
//! durable, cookie). Resolving reads them highest priority first and copies
//! the first good record back into the tiers that missed.

pub(crate) mod error;
pub(crate) mod store;
pub(crate) mod tier;

#[cfg(test)]
mod tests;

pub use error::{IdentityError, Result as IdentityResult};
pub use store::IdentityStore;
pub use tier::{
    IDENTITY_KEY, IdentityTier,
    cookie_tier::{CookieRecord, CookieTier},
    file_tier::FileTier,
    memory_tier::MemoryTier,
};
