use crate::commands::to_output;
use crate::context::AppContext;
use crate::upload::ProfilePicture;
use crate::CliResult;

use jb_core::{ProfileUpdate, User};

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde_json::{Value, json};

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show your own profile as this machine remembers it
    Show,

    /// Fetch another user's public profile
    Get {
        /// User ID
        user_id: String,
    },

    /// Edit your profile. Omitted fields keep their value.
    Update {
        #[command(flatten)]
        profile: UpdateProfileArgs,
    },

    /// Upload a new profile picture (PNG or JPEG)
    Picture {
        /// Image file
        file: PathBuf,
    },
}

#[derive(Args)]
pub struct UpdateProfileArgs {
    #[arg(long)]
    pub full_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone_number: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub bio: Option<String>,

    /// Replaces the whole list when given
    #[arg(long = "skill")]
    pub skills: Vec<String>,

    /// Replaces the whole list when given
    #[arg(long = "qualification")]
    pub qualifications: Vec<String>,

    /// Pass an empty string to remove the link
    #[arg(long)]
    pub linked_in: Option<String>,

    #[arg(long)]
    pub github: Option<String>,

    #[arg(long)]
    pub portfolio: Option<String>,
}

impl UpdateProfileArgs {
    /// Overlay the given fields on the current profile
    pub fn apply_to(self, update: &mut ProfileUpdate) {
        if let Some(full_name) = self.full_name {
            update.full_name = full_name;
        }
        if let Some(email) = self.email {
            update.email = email;
        }
        if self.phone_number.is_some() {
            update.phone_number = self.phone_number;
        }
        if self.location.is_some() {
            update.location = self.location;
        }
        if self.bio.is_some() {
            update.bio = self.bio;
        }
        if !self.skills.is_empty() {
            update.skills = self.skills;
        }
        if !self.qualifications.is_empty() {
            update.qualifications = self.qualifications;
        }
        if self.linked_in.is_some() {
            update.social_links.linked_in = self.linked_in;
        }
        if self.github.is_some() {
            update.social_links.github = self.github;
        }
        if self.portfolio.is_some() {
            update.social_links.portfolio = self.portfolio;
        }
    }
}

impl ProfileCommands {
    pub async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        match self {
            ProfileCommands::Show => {
                let user = ctx.identity.require_signed_in()?;
                own_profile_output(user, ctx.client.profile_picture_url(&user.id))
            }

            ProfileCommands::Get { user_id } => {
                let user = ctx.client.get_user(&user_id).await?;
                let mut output = to_output(&user)?;
                output["profilePictureUrl"] = json!(ctx.client.profile_picture_url(&user.id));
                Ok(output)
            }

            ProfileCommands::Update { profile } => {
                let current = ctx.identity.require_signed_in()?;
                let mut update = ProfileUpdate::from(current);
                profile.apply_to(&mut update);
                update.validate()?;

                let user = ctx.client.update_profile(&update).await?;
                let output = to_output(&user)?;
                ctx.identity.set(user);
                eprintln!("Profile updated successfully!");
                Ok(output)
            }

            ProfileCommands::Picture { file } => {
                let user_id = ctx.identity.require_signed_in()?.id.clone();
                let picture = ProfilePicture::from_path(&file)?;
                ctx.client.update_profile_picture(&picture).await?;
                eprintln!("Profile picture updated successfully!");
                Ok(json!({
                    "profilePictureUrl": ctx.client.profile_picture_url(&user_id),
                }))
            }
        }
    }
}

/// Own profile as printed by `profile show`: notifications newest first,
/// with the unread count and picture URL alongside.
pub(crate) fn own_profile_output(user: &User, picture_url: String) -> CliResult<Value> {
    let mut output = to_output(user)?;
    output["notifications"] = to_output(&user.notifications_newest_first())?;
    output["unreadNotifications"] = json!(user.unread_notifications());
    output["profilePictureUrl"] = json!(picture_url);
    Ok(output)
}
