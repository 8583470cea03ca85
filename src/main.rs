//! `croptool-replay` - run a recorded event script through the editor.
//!
//! Usage: `croptool-replay <script.json>`. The final selection and every
//! callback are printed to stdout as JSON; logs go to stderr (`RUST_LOG`).

use anyhow::{Context, Result};
use croptool::replay::{ReplayScript, run_script};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .context("Usage: croptool-replay <script.json>")?;

    let script = ReplayScript::load(&path)
        .with_context(|| format!("Failed to load replay script {path}"))?;
    let outcome = run_script(&script).context("Replay failed")?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
