//! Placement for recommended cards.

use arena_state::{Position, Unit};

use crate::config::AdvisorConfig;
use crate::geometry::centroid;

/// Halfway between the threats' centre and the tower they threaten
pub fn defense_position(threats: &[&Unit], tower: &Position) -> Position {
    let center = centroid(threats).unwrap_or(*tower);
    Position::new((center.x + tower.x) / 2.0, (center.y + tower.y) / 2.0)
}

/// In front of an enemy tower, stepping back toward our side of the bridge.
/// Towers at positive y step down, everything else steps up.
pub fn attack_position(tower: &Position, config: &AdvisorConfig) -> Position {
    let offset = if tower.y > 0.0 {
        -config.attack_offset
    } else {
        config.attack_offset
    };
    Position::new(tower.x, tower.y + offset)
}

pub fn push_position(config: &AdvisorConfig) -> Position {
    config.bridge_position
}

/// Back of the arena
pub fn safe_position(config: &AdvisorConfig) -> Position {
    config.safe_position
}

/// Just past the centre of an enemy push
pub fn counter_position(push: &[&Unit], config: &AdvisorConfig) -> Position {
    let center = centroid(push).unwrap_or_default();
    Position::new(center.x, center.y + config.counter_offset)
}
