//! CLI for the refetch demo driver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use refetch_core::config::{self, RetryConfig};
use refetch_core::retry::RetryPolicy;
use std::time::Duration;

use commands::{run_demo, run_fetch};

/// Top-level CLI for refetch.
#[derive(Debug, Parser)]
#[command(name = "refetch")]
#[command(about = "Fetch data through a bounded-retry decorator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run one fetch against the built-in repository through the retry decorator.
    Fetch {
        /// Fetch parameters as KEY=VALUE pairs. May be empty (the repository
        /// rejects an empty request, which exercises the retry path).
        params: Vec<String>,

        /// Maximum number of attempts, including the first (overrides config).
        #[arg(long, value_name = "N")]
        attempts: Option<u32>,

        /// Fixed wait between failed attempts, in milliseconds (overrides config).
        #[arg(long, value_name = "MS")]
        wait_ms: Option<u64>,

        /// Inject N transient failures before the repository answers.
        #[arg(long, default_value = "0", value_name = "N")]
        flaky: u32,

        /// Print the fetched data as JSON instead of key=value lines.
        #[arg(long)]
        json: bool,
    },

    /// Walk through direct and decorated fetches against the built-in repository.
    Demo {
        /// Maximum number of attempts, including the first (overrides config).
        #[arg(long, value_name = "N")]
        attempts: Option<u32>,

        /// Fixed wait between failed attempts, in milliseconds (overrides config).
        #[arg(long, value_name = "MS")]
        wait_ms: Option<u64>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                params,
                attempts,
                wait_ms,
                flaky,
                json,
            } => {
                let policy = resolve_policy(cfg.retry.as_ref(), attempts, wait_ms)?;
                run_fetch(policy, &params, flaky, json)?;
            }
            CliCommand::Demo { attempts, wait_ms } => {
                let policy = resolve_policy(cfg.retry.as_ref(), attempts, wait_ms)?;
                run_demo(policy)?;
            }
        }

        Ok(())
    }
}

/// Resolve the effective policy: CLI flags override the config file, which
/// overrides built-in defaults.
fn resolve_policy(
    cfg: Option<&RetryConfig>,
    attempts: Option<u32>,
    wait_ms: Option<u64>,
) -> Result<RetryPolicy> {
    let base = match cfg {
        Some(retry) => retry.to_policy()?,
        None => RetryPolicy::default(),
    };
    let max_attempts = attempts.unwrap_or_else(|| base.max_attempts());
    let wait = wait_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| base.wait_interval());
    Ok(RetryPolicy::new(max_attempts, wait)?)
}

#[cfg(test)]
mod tests;
