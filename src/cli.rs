use clap::{Parser, Subcommand};

/// profile-exec — diagnostics for the Doris profile credential hook
#[derive(Parser)]
#[command(name = "profile-exec", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show whether the hook is enabled and which endpoint it calls
    Status,

    /// Run one credential lookup for a user
    Probe {
        /// User name to look up
        #[arg(short, long)]
        user: String,
        /// Override SKYROC_PROFILE_TIMEOUT_SECS for this lookup
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}
