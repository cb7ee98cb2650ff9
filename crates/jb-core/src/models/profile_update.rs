use crate::validation::{email, http_url, max_chars, min_chars};
use crate::{CoreResult, SocialLinks, User};

use serde::{Deserialize, Serialize};

const MIN_NAME_CHARS: usize = 2;
const MAX_NAME_CHARS: usize = 50;
const MAX_BIO_CHARS: usize = 500;

/// Body of the profile edit call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
}

impl ProfileUpdate {
    pub fn validate(&self) -> CoreResult<()> {
        min_chars(
            "fullName",
            &self.full_name,
            MIN_NAME_CHARS,
            "Name must be at least 2 characters",
        )?;
        max_chars(
            "fullName",
            &self.full_name,
            MAX_NAME_CHARS,
            "Name cannot exceed 50 characters",
        )?;
        email("email", &self.email, "Please enter a valid email address")?;
        if let Some(bio) = &self.bio {
            max_chars("bio", bio, MAX_BIO_CHARS, "Bio cannot exceed 500 characters")?;
        }

        // Empty string means "remove the link"
        for (field, link) in self.social_links.entries() {
            if let Some(link) = link.filter(|l| !l.is_empty()) {
                http_url(field, link, "Please enter a valid URL")?;
            }
        }

        Ok(())
    }
}

impl From<&User> for ProfileUpdate {
    fn from(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            location: user.location.clone(),
            bio: user.bio.clone(),
            skills: user.skills.clone(),
            qualifications: user.qualifications.clone(),
            social_links: user.social_links.clone(),
        }
    }
}
