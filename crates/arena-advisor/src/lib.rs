//! Rule-based recommendation engine for arena battles.
//!
//! `Advisor::analyze` runs four independent analyzers over a snapshot
//! (defense, attack opportunity, elixir management, counter-play), each
//! contributing at most one recommendation, then ranks the results by
//! priority. The snapshot is passed explicitly to every analyzer so an
//! `Advisor` holds no per-call state.

mod attack;
pub mod config;
mod counter;
mod defense;
mod elixir;
pub mod geometry;
pub mod positioning;
pub mod recommendation;
pub mod selection;

#[cfg(test)]
mod testutil;

use arena_data::CardCatalog;
use arena_state::GameState;
use std::cmp::Reverse;
use tracing::{debug, warn};

pub use config::AdvisorConfig;
pub use counter::identify_push;
pub use recommendation::{Action, BotRecommendation, Priority};
pub use selection::Hand;

/// Everything an analyzer may look at during one `analyze` call
pub(crate) struct AnalysisContext<'a> {
    pub state: &'a GameState,
    pub config: &'a AdvisorConfig,
    pub hand: Hand<'a>,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(state: &'a GameState, catalog: &'a CardCatalog, config: &'a AdvisorConfig) -> Self {
        Self {
            state,
            config,
            hand: Hand::resolve(state, catalog),
        }
    }
}

type Analyzer = fn(&AnalysisContext<'_>) -> Option<BotRecommendation>;

/// Emission order, which is also the tie-break order after ranking
const ANALYZERS: [(&str, Analyzer); 4] = [
    ("defense", defense::analyze),
    ("attack", attack::analyze),
    ("elixir", elixir::analyze),
    ("counter", counter::analyze),
];

pub struct Advisor {
    catalog: CardCatalog,
    config: AdvisorConfig,
}

impl Advisor {
    pub fn new(catalog: CardCatalog) -> Self {
        Self::with_config(catalog, AdvisorConfig::default())
    }

    pub fn with_config(catalog: CardCatalog, config: AdvisorConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Produce ranked recommendations for a snapshot, highest priority
    /// first. Equal priorities keep analyzer order.
    pub fn analyze(&self, state: &GameState) -> Vec<BotRecommendation> {
        for problem in state.validate() {
            warn!("Snapshot at {:.1}s: {}", state.game_time, problem);
        }

        let ctx = AnalysisContext::new(state, &self.catalog, &self.config);

        let mut recommendations: Vec<BotRecommendation> = ANALYZERS
            .iter()
            .filter_map(|(name, analyzer)| {
                let rec = analyzer(&ctx);
                if let Some(ref r) = rec {
                    debug!("{} analyzer: {:?} ({})", name, r.action, r.reason);
                }
                rec
            })
            .collect();

        // sort_by_key is stable
        recommendations.sort_by_key(|r| Reverse(r.priority.weight()));

        debug!(
            "Analyzed snapshot at {:.1}s: {} recommendation(s)",
            state.game_time,
            recommendations.len()
        );
        recommendations
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new(CardCatalog::builtin())
    }
}
