//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout only ever carries command output.

use tracing_subscriber::EnvFilter;

use crate::app::AppContext;

const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber.
///
/// Filter precedence: `--verbose`, then `EXPENSES_LOG`, then the config
/// file's `logging.level`, then `warn`.
pub fn init(ctx: &AppContext<'_>) -> anyhow::Result<()> {
    let directive = filter_directive(
        ctx.cli().verbose,
        std::env::var("EXPENSES_LOG").ok(),
        ctx.config()?.logging.level.clone(),
    );
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| anyhow::anyhow!("Invalid log filter '{}': {}", directive, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn filter_directive(verbose: bool, env: Option<String>, configured: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    env.filter(|value| !value.trim().is_empty())
        .or(configured)
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}
