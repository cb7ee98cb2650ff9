use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "jb")]
#[command(about = "Job board client: browse jobs, post them, and apply with a resume")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API root URL (overrides api.base_url and JB_API_BASE_URL)
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
