use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use profile_executor::config::{self, Config};
use profile_executor::profile::{client::profile_endpoint, ProfileClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "profile_executor=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::load()?;
    let args = cli::Cli::parse();

    let result = match args.command {
        Some(cli::Commands::Probe { user, timeout_secs }) => {
            let cfg = Config {
                timeout_secs: timeout_secs.unwrap_or(cfg.timeout_secs),
                ..cfg
            };
            probe(&cfg, &user).await
        }
        Some(cli::Commands::Status) | None => {
            status(&cfg);
            Ok(())
        }
    };

    if let Err(ref e) = result {
        tracing::error!("command failed: {:#}", e);
    }
    result
}

fn status(cfg: &Config) {
    match cfg.base_url() {
        Some(base) if cfg.is_enabled() => {
            println!("profile credential hook: enabled");
            println!("endpoint:                {}", profile_endpoint(base));
            println!("timeout:                 {}s", cfg.timeout_secs);
        }
        _ => {
            println!("profile credential hook: disabled");
            if cfg.base_url().is_none() {
                println!("  SKYROC_BASE_URL is not set");
            }
            if cfg.internal_token().is_none() {
                println!("  SKYROC_INTERNAL_TOKEN is not set");
            }
        }
    }
}

async fn probe(cfg: &Config, user: &str) -> anyhow::Result<()> {
    let (base, token) = match (cfg.base_url(), cfg.internal_token()) {
        (Some(b), Some(t)) => (b, t),
        _ => anyhow::bail!("hook is disabled: set SKYROC_BASE_URL and SKYROC_INTERNAL_TOKEN"),
    };

    let client = ProfileClient::new(base, token, cfg.timeout())?;
    let credentials = client
        .fetch(user)
        .await
        .with_context(|| format!("lookup for '{}' via {} failed", user, client.endpoint()))?;

    println!("user:         {}", user);
    println!("profile user: {}", credentials.user_name);
    println!("password:     ***");
    Ok(())
}
