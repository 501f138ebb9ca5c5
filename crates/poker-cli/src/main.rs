// CLI entry point: record one win read from stdin.
//
// Usage: echo "Chris wins" | poker-cli

use anyhow::Context;
use poker_cli::Cli;
use poker_core::{config, store};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = config::load_config().context("failed to load configuration")?;
    let store = store::open(&config.database).context("problem creating player store")?;

    let stdin = std::io::stdin();
    Cli::new(store, stdin.lock())
        .play_poker()
        .context("failed to record win from stdin")?;

    info!("Win recorded");
    Ok(())
}

/// Logs go to stderr so stdout stays empty.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("poker_cli=info,poker_core=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
