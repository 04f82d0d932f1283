use crate::positioning::safe_position;
use crate::recommendation::{BotRecommendation, Priority};
use crate::AnalysisContext;

/// Spend elixir before it caps out, or bank it while the board is quiet.
pub(crate) fn analyze(ctx: &AnalysisContext) -> Option<BotRecommendation> {
    let state = ctx.state;
    let config = ctx.config;

    if state.elixir >= config.elixir_waste_level {
        if let Some(card) = ctx.hand.cheapest() {
            return Some(BotRecommendation::play_card(
                card.id,
                safe_position(config),
                Priority::Medium,
                "Prevent elixir waste (9+ elixir)".to_string(),
                0.6,
            ));
        }
    }

    if state.elixir < config.low_elixir_level && !state.has_enemy_units() {
        return Some(BotRecommendation::wait(
            Priority::Low,
            "Build elixir advantage".to_string(),
            0.7,
        ));
    }

    None
}
