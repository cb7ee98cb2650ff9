use crate::{IdentityResult, IdentityTier};

use std::sync::{Arc, Mutex, MutexGuard};

/// In-process tier.
///
/// Clones share the same slot, which is how tests model two stores looking
/// at the same storage.
#[derive(Debug, Clone)]
pub struct MemoryTier {
    name: String,
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Tier pre-filled with `value`, stored verbatim.
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        let tier = Self::new(name);
        *tier.lock() = Some(value.into());
        tier
    }

    /// Raw stored value, for inspection.
    pub fn peek(&self) -> Option<String> {
        self.lock().clone()
    }

    // A panic while holding the lock cannot leave a half-written String
    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl IdentityTier for MemoryTier {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> IdentityResult<Option<String>> {
        Ok(self.lock().clone())
    }

    fn write(&self, value: &str) -> IdentityResult<()> {
        *self.lock() = Some(value.to_string());
        Ok(())
    }

    fn remove(&self) -> IdentityResult<()> {
        *self.lock() = None;
        Ok(())
    }
}
