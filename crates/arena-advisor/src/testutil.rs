use arena_state::{GameState, Position, Tower, TowerType, Unit};

pub fn enemy_unit(x: f64, y: f64, health: f64) -> Unit {
    Unit {
        id: format!("enemy@{},{}", x, y),
        card_id: 1,
        position: Position::new(x, y),
        health,
        max_health: health.max(1.0),
        is_enemy: true,
        target: None,
        level: 11,
    }
}

pub fn own_unit(x: f64, y: f64) -> Unit {
    Unit {
        is_enemy: false,
        id: format!("own@{},{}", x, y),
        ..enemy_unit(x, y, 500.0)
    }
}

pub fn tower(x: f64, y: f64, health: f64, max_health: f64, is_enemy: bool, tower_type: TowerType) -> Tower {
    Tower {
        id: format!("tower@{},{}", x, y),
        position: Position::new(x, y),
        health,
        max_health,
        is_enemy,
        tower_type,
    }
}

pub fn own_tower(x: f64, y: f64) -> Tower {
    tower(x, y, 2534.0, 2534.0, false, TowerType::Princess)
}

pub fn state(elixir: f64, enemy_elixir: f64, hand: &[u32]) -> GameState {
    GameState {
        elixir,
        enemy_elixir,
        hand: hand.to_vec(),
        next_card: 2,
        ..GameState::default()
    }
}
