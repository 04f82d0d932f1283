use arena_advisor::{Advisor, BotRecommendation};
use arena_state::GameState;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::replay::{self, ReplayStatus};

/// Recommendations for one snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub game_time: f64,
    pub recommendations: Vec<BotRecommendation>,
}

/// Manages the snapshot → advisor → output pipeline
pub struct Pipeline {
    stop: Arc<AtomicBool>,
    status_rx: watch::Receiver<ReplayStatus>,
    analysis_rx: watch::Receiver<Option<Analysis>>,
    tasks: Vec<JoinHandle<()>>,
}

impl Pipeline {
    /// Spawn the advisor loop and the emitter. Must be called inside a
    /// tokio runtime.
    fn spawn_downstream(
        advisor: Arc<Advisor>,
        snapshot_rx: watch::Receiver<Option<Arc<GameState>>>,
        analysis_tx: watch::Sender<Option<Analysis>>,
        analysis_rx: &watch::Receiver<Option<Analysis>>,
        stop: &Arc<AtomicBool>,
        emit: impl Fn(&Analysis) + Send + 'static,
    ) -> Vec<JoinHandle<()>> {
        // Advisor loop, analyzing at most once per analysis interval.
        // Snapshots arriving in between collapse into the latest one.
        let mut snapshot_rx = snapshot_rx;
        let stop_advisor = stop.clone();
        let min_gap = Duration::from_millis(advisor.config().analysis_interval_ms);
        let advisor_task = tokio::spawn(async move {
            let mut last_analysis: Option<Instant> = None;
            loop {
                if stop_advisor.load(Ordering::Relaxed) {
                    break;
                }

                if snapshot_rx.changed().await.is_err() {
                    break;
                }

                if let Some(last) = last_analysis {
                    let elapsed = last.elapsed();
                    if elapsed < min_gap {
                        tokio::time::sleep(min_gap - elapsed).await;
                    }
                }

                let snapshot = snapshot_rx.borrow_and_update().clone();
                if let Some(state) = snapshot {
                    let recommendations = advisor.analyze(&state);
                    last_analysis = Some(Instant::now());
                    debug!(
                        "t={:.1}s: {} recommendation(s)",
                        state.game_time,
                        recommendations.len()
                    );
                    let _ = analysis_tx.send(Some(Analysis {
                        game_time: state.game_time,
                        recommendations,
                    }));
                }
            }
        });

        let mut analysis_rx_clone = analysis_rx.clone();
        let emitter_task = tokio::spawn(async move {
            loop {
                if analysis_rx_clone.changed().await.is_err() {
                    break;
                }
                let result = analysis_rx_clone.borrow_and_update().clone();
                if let Some(analysis) = result {
                    emit(&analysis);
                }
            }
        });

        vec![advisor_task, emitter_task]
    }

    /// Start replaying a file of JSON-lines snapshots through the advisor
    pub fn start_replay(
        advisor: Arc<Advisor>,
        path: PathBuf,
        snapshot_interval: Duration,
        emit: impl Fn(&Analysis) + Send + 'static,
    ) -> Self {
        let stop = Arc::new(AtomicBool::new(false));

        let (snapshot_tx, snapshot_rx) = watch::channel::<Option<Arc<GameState>>>(None);
        let (status_tx, status_rx) = watch::channel(ReplayStatus::default());
        let (analysis_tx, analysis_rx) = watch::channel::<Option<Analysis>>(None);

        let stop_clone = stop.clone();
        let source_task = tokio::spawn(async move {
            if let Err(e) =
                replay::replay_loop(&path, snapshot_tx, status_tx, snapshot_interval, stop_clone)
                    .await
            {
                warn!("Replay error: {:#}", e);
            }
        });

        let mut tasks = vec![source_task];
        tasks.extend(Self::spawn_downstream(
            advisor,
            snapshot_rx,
            analysis_tx,
            &analysis_rx,
            &stop,
            emit,
        ));

        info!("Pipeline started (replay)");

        Self {
            stop,
            status_rx,
            analysis_rx,
            tasks,
        }
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
        info!("Pipeline stop requested");
    }

    /// Shared stop flag, for signal handlers
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }

    /// Most recent analysis, if any snapshot has been analyzed yet
    pub fn latest_analysis(&self) -> Option<Analysis> {
        self.analysis_rx.borrow().clone()
    }

    /// Wait for every task to finish and return the final replay status
    pub async fn wait(&mut self) -> ReplayStatus {
        for task in std::mem::take(&mut self.tasks) {
            if let Err(e) = task.await {
                warn!("Pipeline task panicked: {}", e);
            }
        }
        self.status_rx.borrow().clone()
    }
}
