use tracing::debug;

use crate::positioning::{attack_position, push_position};
use crate::recommendation::{BotRecommendation, Priority};
use crate::AnalysisContext;

/// Finish off a weak enemy tower, or press an elixir lead.
pub(crate) fn analyze(ctx: &AnalysisContext) -> Option<BotRecommendation> {
    let state = ctx.state;
    let config = ctx.config;

    let weak_tower = state
        .enemy_towers()
        .find(|t| t.health < t.max_health * config.weak_tower_ratio);

    if let Some(tower) = weak_tower {
        if state.elixir >= config.min_attack_elixir {
            if let Some(card) = ctx.hand.best_attack(config.attack_min_damage) {
                let hp_percent = (tower.health_ratio() * 100.0).round();
                debug!("Weak {} tower {} at {}% HP", tower.tower_type, tower.id, hp_percent);
                return Some(BotRecommendation::play_card(
                    card.id,
                    attack_position(&tower.position, config),
                    Priority::High,
                    format!("Attack weak {} tower ({}% HP)", tower.tower_type, hp_percent),
                    0.85,
                ));
            }
        }
    }

    if state.elixir > state.enemy_elixir + config.elixir_advantage_margin {
        if let Some(card) = ctx.hand.best_push() {
            return Some(BotRecommendation::play_card(
                card.id,
                push_position(config),
                Priority::Medium,
                format!(
                    "Elixir advantage push ({} vs {})",
                    state.elixir, state.enemy_elixir
                ),
                0.75,
            ));
        }
    }

    None
}
