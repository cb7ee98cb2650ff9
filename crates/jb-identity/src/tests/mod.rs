mod memory_tier;

use crate::{IdentityResult, IdentityTier};

use jb_core::{Role, User};

pub(crate) fn employer() -> User {
    User::new("u1", "Ada Employer", "ada@example.com", Role::Employer)
}

pub(crate) fn jobseeker() -> User {
    User::new("u2", "Sam Seeker", "sam@example.com", Role::Jobseeker)
}

pub(crate) fn to_raw(user: &User) -> String {
    serde_json::to_string(user).unwrap()
}

/// Tier whose every operation fails, like storage that is switched off.
pub(crate) struct UnavailableTier;

impl IdentityTier for UnavailableTier {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn read(&self) -> IdentityResult<Option<String>> {
        Err(unavailable())
    }

    fn write(&self, _value: &str) -> IdentityResult<()> {
        Err(unavailable())
    }

    fn remove(&self) -> IdentityResult<()> {
        Err(unavailable())
    }
}

fn unavailable() -> crate::IdentityError {
    crate::IdentityError::file_read(
        "/unavailable".into(),
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "storage disabled"),
    )
}
