use crate::validation::{email, http_url, max_chars, min_chars};
use crate::{CoreResult, Experience, Role, SocialLinks};

use serde::Serialize;

const MIN_NAME_CHARS: usize = 2;
const MIN_PASSWORD_CHARS: usize = 4;
const MAX_BIO_CHARS: usize = 160;
const MAX_EXPERIENCE_DESCRIPTION_CHARS: usize = 1000;

/// Sign-up payload
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub location: String,
    pub qualifications: Vec<String>,
    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
    pub social_links: SocialLinks,
}

impl Registration {
    pub fn validate(&self) -> CoreResult<()> {
        min_chars(
            "fullName",
            &self.full_name,
            MIN_NAME_CHARS,
            "Full name must be at least 2 characters.",
        )?;
        email("email", &self.email, "Email is required.")?;
        min_chars(
            "password",
            &self.password,
            MIN_PASSWORD_CHARS,
            "Password must be at least 4 characters.",
        )?;
        if let Some(bio) = &self.bio {
            max_chars(
                "bio",
                bio,
                MAX_BIO_CHARS,
                "Bio must not be longer than 160 characters.",
            )?;
        }

        for (index, entry) in self.experience.iter().enumerate() {
            let field = |name: &str| format!("experience[{index}].{name}");
            min_chars(&field("jobTitle"), &entry.job_title, 1, "Job title is required")?;
            min_chars(&field("company"), &entry.company, 1, "Company name is required")?;
            min_chars(&field("location"), &entry.location, 1, "Location is required")?;
            min_chars(&field("startDate"), &entry.start_date, 1, "Start date is required")?;
            max_chars(
                &field("description"),
                &entry.description,
                MAX_EXPERIENCE_DESCRIPTION_CHARS,
                "Description must be under 1000 characters",
            )?;
        }

        for (field, link) in self.social_links.entries() {
            if let Some(link) = link {
                http_url(field, link, "Please enter a valid URL")?;
            }
        }

        Ok(())
    }
}

// Hand-written so the password never reaches a log line.
impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}
