mod commands;
mod pipeline;
mod replay;

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

pub use pipeline::{Analysis, Pipeline};
pub use replay::ReplayStatus;

const USAGE: &str = "Usage:
  arena-coach analyze <snapshot.json>
  arena-coach replay <snapshots.jsonl> [interval_ms]";

/// Default pause between replayed snapshots
const DEFAULT_SNAPSHOT_INTERVAL_MS: u64 = 500;

pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "arena_coach_lib=info,arena_advisor=info,arena_data=info".into()
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        bail!("{}", USAGE);
    }

    let data_dir = commands::resolve_data_dir();
    tracing::info!("Data directory: {}", data_dir.display());
    let advisor = commands::load_advisor(&data_dir)?;

    let input = PathBuf::from(&args[2]);
    match args[1].as_str() {
        "analyze" => commands::analyze_snapshot(&advisor, &input),
        "replay" => {
            let interval_ms = match args.get(3) {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("Invalid interval: {}", raw))?,
                None => DEFAULT_SNAPSHOT_INTERVAL_MS,
            };
            commands::replay(advisor, &input, interval_ms)
        }
        other => bail!("Unknown command: {}\n{}", other, USAGE),
    }
}
