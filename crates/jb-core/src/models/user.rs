//! Identity record - the signed-in visitor as the client knows them.

use crate::models::null_as_default;
use crate::{Experience, Notification, Role, SocialLinks};

use serde::{Deserialize, Serialize};

/// Profile of an authenticated user.
///
/// Serialized as the flat camelCase object the API returns from sign-in and
/// profile updates. The same JSON is what the identity tiers persist.
/// Fields the API adds beyond these (`jobs`, `applications`, ...) are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub qualifications: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub social_links: SocialLinks,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notifications: Vec<Notification>,
}

impl User {
    /// Create a user with only the required attributes set
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
            role,
            phone_number: None,
            bio: None,
            location: None,
            skills: Vec::new(),
            qualifications: Vec::new(),
            social_links: SocialLinks::default(),
            experience: Vec::new(),
            notifications: Vec::new(),
        }
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Notifications ordered newest first. Undated ones go last.
    pub fn notifications_newest_first(&self) -> Vec<&Notification> {
        let mut sorted: Vec<&Notification> = self.notifications.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted
    }
}
