//! Bristle CLI - Environment checks and staff bootstrap.
//!
//! # Usage
//!
//! ```bash
//! # Verify environment configuration and Platform API reachability
//! bristle check
//!
//! # Create a staff account (the Platform API sends the invitation)
//! bristle staff create -e ops@example.com -n "Ops Person" -r manager
//! ```
//!
//! # Commands
//!
//! - `check` - Validate env vars for both services and ping the Platform API
//! - `staff create` - Create staff accounts using the service token

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bristle")]
#[command(author, version, about = "Bristle CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate environment configuration and Platform API connectivity
    Check,
    /// Manage staff accounts
    Staff {
        #[command(subcommand)]
        action: StaffAction,
    },
}

#[derive(Subcommand)]
enum StaffAction {
    /// Create a new staff account
    Create {
        /// Staff email address
        #[arg(short, long)]
        email: String,

        /// Staff display name
        #[arg(short, long)]
        name: String,

        /// Staff role (`manager`, `staff`, `viewer`)
        #[arg(short, long, default_value = "staff")]
        role: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Check => commands::check::run().await?,
        Commands::Staff { action } => match action {
            StaffAction::Create { email, name, role } => {
                commands::staff::create(&email, &name, &role).await?;
            }
        },
    }
    Ok(())
}
