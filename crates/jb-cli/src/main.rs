//! jb - job board CLI
//!
//! Browse and post jobs, apply with a resume, and manage your profile from
//! the terminal. Output is JSON on stdout; notices go to stderr.
//!
//! # Examples
//!
//! ```bash
//! # Sign in once; the identity survives new shells
//! jb auth login --email ada@example.com --password secret
//!
//! # Find a job and apply
//! jb job list --search rust --pretty
//! jb application apply 665f0c2e9b1d resume.pdf
//!
//! # Post a job as an employer
//! jb job create --title "Backend Engineer" --company Acme --location Berlin \
//!     --job-type full-time --employment-mode remote \
//!     --description "Build the API that powers everything" \
//!     --responsibility "Ship code" --requirement "Rust"
//! ```

use jb_cli::{CliResult, cli::Cli, context::AppContext, logger};

use jb_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    let value = match run(cli).await {
        Ok(value) => value,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    let output = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    let mut ctx = AppContext::from_config(&config, cli.api.as_deref())?;
    cli.command.run(&mut ctx).await
}
