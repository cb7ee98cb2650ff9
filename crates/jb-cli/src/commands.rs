use crate::{
    CliResult, ClientError, application_commands::ApplicationCommands,
    auth_commands::AuthCommands, context::AppContext, job_commands::JobCommands,
    profile_commands::ProfileCommands,
};

use clap::Subcommand;
use serde::Serialize;
use serde_json::Value;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign up, sign in and out
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Job postings
    Job {
        #[command(subcommand)]
        action: JobCommands,
    },

    /// Resume submissions and their review
    Application {
        #[command(subcommand)]
        action: ApplicationCommands,
    },

    /// Your profile and other users' profiles
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
}

impl Commands {
    pub async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        match self {
            Commands::Auth { action } => action.run(ctx).await,
            Commands::Job { action } => action.run(ctx).await,
            Commands::Application { action } => action.run(ctx).await,
            Commands::Profile { action } => action.run(ctx).await,
        }
    }
}

/// Serialize a typed response for printing
pub(crate) fn to_output<T: Serialize>(value: &T) -> CliResult<Value> {
    serde_json::to_value(value).map_err(|e| ClientError::from_json(e).into())
}
