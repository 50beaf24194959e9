//! CLI for the surl routing-path inspector.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{run_check, run_split};

/// Top-level CLI for the surl routing-path inspector.
#[derive(Debug, Parser)]
#[command(name = "surl")]
#[command(
    about = "surl: split request URLs into script path, base path, and path info",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a request URL around its script path.
    Split {
        /// Absolute request URL (scheme and host included).
        url: String,

        /// Script path of the entry point (e.g. /admin/index.php). When
        /// omitted, the whole URL path counts as the script.
        #[arg(long, value_name = "PATH")]
        script_path: Option<String>,

        /// Emit the report as JSON instead of aligned text.
        #[arg(long)]
        json: bool,
    },

    /// Verify that a script path is a prefix of the URL path.
    Check {
        /// Absolute request URL (scheme and host included).
        url: String,

        /// Script path the deployment claims for this URL.
        #[arg(long, value_name = "PATH")]
        script_path: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Split {
                url,
                script_path,
                json,
            } => run_split(&url, script_path.as_deref(), json)?,
            CliCommand::Check { url, script_path } => run_check(&url, &script_path)?,
        }

        Ok(())
    }
}
