use anyhow::Context;
use arena_state::GameState;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{info, warn};

/// Progress of a snapshot replay
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplayStatus {
    pub is_running: bool,
    pub lines_read: u64,
    pub snapshots_sent: u64,
    pub lines_skipped: u64,
    pub last_game_time: Option<f64>,
}

/// Read one JSON snapshot per line and publish each through the watch
/// channel, pausing `snapshot_interval` between them. Malformed lines are
/// skipped.
pub async fn replay_loop(
    path: &Path,
    snapshot_tx: watch::Sender<Option<Arc<GameState>>>,
    status_tx: watch::Sender<ReplayStatus>,
    snapshot_interval: Duration,
    stop: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    info!("Replay starting: {}", path.display());

    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();

    let mut status = ReplayStatus {
        is_running: true,
        ..ReplayStatus::default()
    };
    let _ = status_tx.send(status.clone());

    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read snapshot line")?
    {
        if stop.load(Ordering::Relaxed) {
            info!("Replay stopping (stop signal)");
            break;
        }

        status.lines_read += 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match GameState::from_json(line) {
            Ok(state) => {
                status.snapshots_sent += 1;
                status.last_game_time = Some(state.game_time);
                let _ = snapshot_tx.send(Some(Arc::new(state)));
            }
            Err(e) => {
                warn!("Skipping line {}: {:#}", status.lines_read, e);
                status.lines_skipped += 1;
            }
        }
        let _ = status_tx.send(status.clone());

        tokio::time::sleep(snapshot_interval).await;
    }

    status.is_running = false;
    info!(
        "Replay finished: {} snapshot(s), {} skipped",
        status.snapshots_sent, status.lines_skipped
    );
    let _ = status_tx.send(status);
    Ok(())
}
