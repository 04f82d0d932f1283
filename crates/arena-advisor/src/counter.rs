use arena_state::Unit;
use tracing::debug;

use crate::geometry::distance;
use crate::positioning::counter_position;
use crate::recommendation::{BotRecommendation, Priority};
use crate::AnalysisContext;

/// Enemy units with at least one other enemy unit within `radius`.
///
/// Membership is pairwise, not transitive: a unit joins when it has any
/// neighbor within the radius, whatever the rest of the group looks like.
pub fn identify_push<'a>(enemies: &[&'a Unit], radius: f64) -> Vec<&'a Unit> {
    enemies
        .iter()
        .enumerate()
        .filter(|(i, unit)| {
            enemies
                .iter()
                .enumerate()
                .any(|(j, other)| *i != j && distance(&unit.position, &other.position) < radius)
        })
        .map(|(_, unit)| *unit)
        .collect()
}

/// Answer a grouped enemy push.
pub(crate) fn analyze(ctx: &AnalysisContext) -> Option<BotRecommendation> {
    let enemies: Vec<&Unit> = ctx.state.enemy_units().collect();
    let push = identify_push(&enemies, ctx.config.cluster_radius);
    if push.is_empty() {
        return None;
    }

    let facing_tank = push.iter().any(|u| u.health > ctx.config.tank_health);
    debug!(
        "Enemy push of {} unit(s), tank: {}",
        push.len(),
        facing_tank
    );

    let card = ctx
        .hand
        .best_counter(facing_tank, ctx.config.counter_min_damage)?;

    Some(BotRecommendation::play_card(
        card.id,
        counter_position(&push, ctx.config),
        Priority::High,
        format!("Counter enemy push with {}", card.name),
        0.8,
    ))
}
