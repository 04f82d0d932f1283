use anyhow::{bail, Context, Result};
use arena_advisor::{Advisor, AdvisorConfig, BotRecommendation};
use arena_data::CardCatalog;
use arena_state::GameState;
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::pipeline::Pipeline;

/// Env var overriding the data directory
pub const DATA_DIR_ENV: &str = "ARENA_COACH_DATA";

/// Resolve the data directory holding cards.json and advisor.json
pub fn resolve_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));
    if let Some(dir) = exe_dir {
        // target/<profile>/arena-coach -> project root
        let project_root = dir.parent().and_then(|p| p.parent());
        if let Some(root) = project_root {
            let data = root.join("data");
            if data.exists() {
                return data;
            }
        }
    }
    PathBuf::from("data")
}

/// Build an advisor from the catalog and tuning found in `data_dir`
pub fn load_advisor(data_dir: &Path) -> Result<Advisor> {
    let catalog = CardCatalog::load(data_dir)?;

    let config_path = data_dir.join("advisor.json");
    let config = if config_path.exists() {
        let config = AdvisorConfig::load(&config_path)?;
        info!("Loaded advisor config from {}", config_path.display());
        config
    } else {
        AdvisorConfig::default()
    };

    Ok(Advisor::with_config(catalog, config))
}

/// Analyze a single snapshot file
pub fn analyze_file(advisor: &Advisor, path: &Path) -> Result<Vec<BotRecommendation>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let state = GameState::from_json(&content)
        .with_context(|| format!("Invalid snapshot in {}", path.display()))?;
    Ok(advisor.analyze(&state))
}

/// Analyze a single snapshot file and print the recommendations as JSON
pub fn analyze_snapshot(advisor: &Advisor, path: &Path) -> Result<()> {
    let recommendations = analyze_file(advisor, path)?;
    info!("{} recommendation(s) for {}", recommendations.len(), path.display());
    println!("{}", serde_json::to_string_pretty(&recommendations)?);
    Ok(())
}

/// Replay a JSON-lines snapshot file through the advisor, printing one
/// JSON line per analysis. Ctrl-C stops the replay early.
pub fn replay(advisor: Advisor, path: &Path, snapshot_interval_ms: u64) -> Result<()> {
    if !path.exists() {
        bail!("Snapshot file not found: {}", path.display());
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    let status = runtime.block_on(async {
        let mut pipeline = Pipeline::start_replay(
            Arc::new(advisor),
            path.to_path_buf(),
            Duration::from_millis(snapshot_interval_ms),
            |analysis| match serde_json::to_string(analysis) {
                Ok(line) => println!("{}", line),
                Err(e) => tracing::warn!("Failed to serialize analysis: {}", e),
            },
        );

        let stop = pipeline.stop_flag();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                stop.store(true, Ordering::Relaxed);
            }
        });

        let status = pipeline.wait().await;
        if let Some(last) = pipeline.latest_analysis() {
            info!(
                "Last analysis at {:.1}s: {} recommendation(s)",
                last.game_time,
                last.recommendations.len()
            );
        }
        status
    });

    info!(
        "Replay done: {} line(s), {} snapshot(s), {} skipped",
        status.lines_read, status.snapshots_sent, status.lines_skipped
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_advisor::{Action, Priority};

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("arena_coach_{}_{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_advisor_defaults() {
        let advisor = load_advisor(Path::new("/nonexistent")).unwrap();
        assert_eq!(advisor.catalog().len(), 8);
        assert_eq!(advisor.config().defense_radius, 5.0);
    }

    #[test]
    fn test_load_advisor_with_config() {
        let dir = temp_dir("config");
        std::fs::write(dir.join("advisor.json"), r#"{"elixirWasteLevel": 8.0}"#).unwrap();
        let advisor = load_advisor(&dir).unwrap();
        let _ = std::fs::remove_dir_all(&dir);
        assert_eq!(advisor.config().elixir_waste_level, 8.0);
        assert_eq!(advisor.config().cluster_radius, 3.0);
    }

    #[test]
    fn test_analyze_file() {
        let dir = temp_dir("snapshot");
        let path = dir.join("snapshot.json");
        std::fs::write(
            &path,
            r#"{"elixir": 2, "enemyElixir": 4, "hand": [1, 2, 3, 4], "nextCard": 5,
                "units": [], "towers": [], "gameTime": 12.5, "isMyTurn": true,
                "matchType": "ladder"}"#,
        )
        .unwrap();

        let recs = analyze_file(&Advisor::default(), &path).unwrap();
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].action, Action::Wait);
        assert_eq!(recs[0].priority, Priority::Low);
    }

    #[test]
    fn test_analyze_file_errors() {
        assert!(analyze_file(&Advisor::default(), Path::new("/nonexistent.json")).is_err());

        let dir = temp_dir("bad_snapshot");
        let path = dir.join("snapshot.json");
        std::fs::write(&path, "[]").unwrap();
        let result = analyze_file(&Advisor::default(), &path);
        let _ = std::fs::remove_dir_all(&dir);
        assert!(result.is_err());
    }

    #[test]
    fn test_replay_missing_file_fails_fast() {
        let err = replay(Advisor::default(), Path::new("/nonexistent.jsonl"), 10).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
