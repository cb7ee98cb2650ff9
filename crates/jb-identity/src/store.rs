use crate::{CookieTier, FileTier, IdentityError, IdentityResult, IdentityTier};

use jb_config::Config;
use jb_core::{Role, User, Visitor};

use log::{debug, info, warn};

/// Reconciles the signed-in user across ordered tiers.
///
/// Tier order is priority order. `resolve` takes the first tier holding a
/// parseable user and copies it into every tier before it that came up
/// empty or unreadable. Writes go to every tier. A failing tier is logged
/// and skipped; identity operations themselves never fail.
///
/// The store keeps its own view of the visitor. Another store over the same
/// tiers does not see a sign-in or sign-out until it resolves again.
pub struct IdentityStore {
    tiers: Vec<Box<dyn IdentityTier>>,
    current: Visitor,
}

impl IdentityStore {
    pub fn new(tiers: Vec<Box<dyn IdentityTier>>) -> Self {
        Self {
            tiers,
            current: Visitor::Anonymous,
        }
    }

    /// Session, durable and cookie tiers at the configured locations.
    pub fn from_config(config: &Config) -> IdentityResult<Self> {
        let identity_dir = config
            .identity_dir()
            .map_err(|e| IdentityError::app_data_dir(e.to_string()))?;

        Ok(Self::new(vec![
            Box::new(FileTier::new("session", config.session_dir())),
            Box::new(FileTier::new("durable", &identity_dir)),
            Box::new(CookieTier::new(
                identity_dir,
                config.storage.cookie_max_age_days,
            )),
        ]))
    }

    pub fn tier_names(&self) -> Vec<&str> {
        self.tiers.iter().map(|tier| tier.name()).collect()
    }

    /// Recompute the visitor from the tiers.
    pub fn resolve(&mut self) -> &Visitor {
        let mut missed = Vec::new();
        let mut found = None;

        for (index, tier) in self.tiers.iter().enumerate() {
            match tier.read() {
                Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                    Ok(user) => {
                        debug!("Found identity {} in {} tier", user.id, tier.name());
                        found = Some(user);
                        break;
                    }
                    Err(e) => {
                        warn!("Discarding malformed identity in {} tier: {e}", tier.name());
                        Self::discard(tier.as_ref());
                        missed.push(index);
                    }
                },
                Ok(None) => missed.push(index),
                Err(e @ IdentityError::Corrupted { .. }) => {
                    warn!("{e}");
                    Self::discard(tier.as_ref());
                    missed.push(index);
                }
                Err(e) => {
                    warn!("Skipping unreadable {} tier: {e}", tier.name());
                    missed.push(index);
                }
            }
        }

        let Some(user) = found else {
            self.current = Visitor::Anonymous;
            return &self.current;
        };

        if !missed.is_empty() {
            match serde_json::to_string(&user) {
                Ok(raw) => {
                    for index in missed {
                        let tier = &self.tiers[index];
                        match tier.write(&raw) {
                            Ok(()) => {
                                info!("Restored identity {} to {} tier", user.id, tier.name())
                            }
                            Err(e) => warn!("Failed to restore {} tier: {e}", tier.name()),
                        }
                    }
                }
                Err(e) => warn!("Failed to serialize identity {}: {e}", user.id),
            }
        }

        self.current = Visitor::SignedIn(user);
        &self.current
    }

    /// Record a sign-in (or a refreshed profile) in every tier.
    pub fn set(&mut self, user: User) {
        match serde_json::to_string(&user) {
            Ok(raw) => {
                for tier in &self.tiers {
                    if let Err(e) = tier.write(&raw) {
                        warn!("Failed to write {} tier: {e}", tier.name());
                    }
                }
                info!("Signed in as {} ({})", user.id, user.role);
            }
            Err(e) => warn!("Failed to serialize identity {}: {e}", user.id),
        }

        self.current = Visitor::SignedIn(user);
    }

    /// Sign out: every tier is emptied.
    pub fn clear(&mut self) {
        for tier in &self.tiers {
            if let Err(e) = tier.remove() {
                warn!("Failed to clear {} tier: {e}", tier.name());
            }
        }

        if let Some(user) = self.current.user() {
            info!("Signed out {}", user.id);
        }
        self.current = Visitor::Anonymous;
    }

    /// The visitor as of the last resolve, set or clear.
    pub fn current(&self) -> &Visitor {
        &self.current
    }

    #[track_caller]
    pub fn require_signed_in(&self) -> IdentityResult<&User> {
        self.current.user().ok_or_else(IdentityError::not_signed_in)
    }

    #[track_caller]
    pub fn require_role(&self, role: Role) -> IdentityResult<&User> {
        let user = self.require_signed_in()?;
        if user.role != role {
            return Err(IdentityError::role_required(role, user.role));
        }
        Ok(user)
    }

    fn discard(tier: &dyn IdentityTier) {
        if let Err(e) = tier.discard_corrupted() {
            warn!("Failed to discard {} tier: {e}", tier.name());
        }
    }
}
