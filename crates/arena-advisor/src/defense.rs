use arena_state::Unit;
use tracing::debug;

use crate::geometry::distance;
use crate::positioning::defense_position;
use crate::recommendation::{BotRecommendation, Priority};
use crate::AnalysisContext;

/// Protect the first own tower that has living enemy units inside the
/// defense radius.
pub(crate) fn analyze(ctx: &AnalysisContext) -> Option<BotRecommendation> {
    for tower in ctx.state.own_towers() {
        let threats: Vec<&Unit> = ctx
            .state
            .enemy_units()
            .filter(|u| {
                distance(&u.position, &tower.position) < ctx.config.defense_radius
                    && u.is_alive()
            })
            .collect();

        if threats.is_empty() {
            continue;
        }

        debug!(
            "{} tower {} threatened by {} unit(s)",
            tower.tower_type,
            tower.id,
            threats.len()
        );

        if let Some(card) = ctx.hand.best_defense(threats.len(), ctx.config.swarm_size) {
            return Some(BotRecommendation::play_card(
                card.id,
                defense_position(&threats, &tower.position),
                Priority::Critical,
                format!(
                    "Defend {} tower from {} enemy units",
                    tower.tower_type,
                    threats.len()
                ),
                0.95,
            ));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::*;
    use crate::AdvisorConfig;
    use arena_data::CardCatalog;
    use arena_state::{Position, TowerType};

    fn run(state: &arena_state::GameState) -> Option<BotRecommendation> {
        let catalog = CardCatalog::builtin();
        let config = AdvisorConfig::default();
        analyze(&AnalysisContext::new(state, &catalog, &config))
    }

    #[test]
    fn test_defends_threatened_tower() {
        let mut s = state(5.0, 5.0, &[1, 2]);
        s.towers.push(own_tower(0.0, 0.0));
        s.units.push(enemy_unit(0.0, 4.0, 100.0));

        let rec = run(&s).expect("tower is threatened");
        assert_eq!(rec.priority, Priority::Critical);
        // Knight: 137 + 1344 beats Archers
        assert_eq!(rec.card_id, Some(1));
        assert_eq!(rec.position, Some(Position::new(0.0, 2.0)));
        assert_eq!(rec.reason, "Defend princess tower from 1 enemy units");
        assert_eq!(rec.confidence, 0.95);
    }

    #[test]
    fn test_ignores_distant_and_dead_units() {
        let mut s = state(5.0, 5.0, &[1]);
        s.towers.push(own_tower(0.0, 0.0));
        s.units.push(enemy_unit(0.0, 5.0, 100.0));
        s.units.push(enemy_unit(1.0, 1.0, 0.0));
        s.units.push(own_unit(0.0, 1.0));
        assert!(run(&s).is_none());
    }

    #[test]
    fn test_ignores_enemy_towers() {
        let mut s = state(5.0, 5.0, &[1]);
        s.towers
            .push(tower(0.0, 0.0, 2534.0, 2534.0, true, TowerType::Princess));
        s.units.push(enemy_unit(0.0, 1.0, 100.0));
        assert!(run(&s).is_none());
    }

    #[test]
    fn test_first_threatened_tower_wins() {
        let mut s = state(10.0, 5.0, &[3, 5, 1]);
        s.towers.push(own_tower(-20.0, 0.0));
        s.towers
            .push(tower(0.0, 0.0, 4000.0, 4000.0, false, TowerType::King));
        s.towers.push(own_tower(20.0, 0.0));
        for x in [19.0, 20.0, 21.0] {
            s.units.push(enemy_unit(x, 2.0, 300.0));
        }
        s.units.push(enemy_unit(0.0, 3.0, 300.0));

        let rec = run(&s).unwrap();
        assert_eq!(rec.reason, "Defend king tower from 1 enemy units");
        // Single threat: Fireball 572 vs Wizard 938 vs Knight 1481
        assert_eq!(rec.card_id, Some(1));
    }

    #[test]
    fn test_swarm_uses_area_damage() {
        let mut s = state(10.0, 5.0, &[1, 3, 7]);
        s.towers.push(own_tower(0.0, 0.0));
        for x in [-1.0, 0.0, 1.0] {
            s.units.push(enemy_unit(x, 3.0, 80.0));
        }
        let rec = run(&s).unwrap();
        // Lightning out-damages Fireball
        assert_eq!(rec.card_id, Some(7));
        assert_eq!(rec.position, Some(Position::new(0.0, 1.5)));
    }

    #[test]
    fn test_no_affordable_card() {
        let mut s = state(1.0, 5.0, &[1, 2]);
        s.towers.push(own_tower(0.0, 0.0));
        s.units.push(enemy_unit(0.0, 1.0, 100.0));
        assert!(run(&s).is_none());
    }
}
