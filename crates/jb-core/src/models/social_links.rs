use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
}

impl SocialLinks {
    /// Field name and value for every link, set or not.
    pub fn entries(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("socialLinks.linkedIn", self.linked_in.as_deref()),
            ("socialLinks.github", self.github.as_deref()),
            ("socialLinks.portfolio", self.portfolio.as_deref()),
        ]
    }
}
