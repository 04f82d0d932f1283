use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Number of cards playable at once
pub const HAND_SIZE: usize = 4;

/// Elixir cap
pub const MAX_ELIXIR: f64 = 10.0;

/// Point on the arena grid
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A deployed troop or building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub card_id: u32,
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    pub is_enemy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Position>,
    pub level: u32,
}

impl Unit {
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TowerType {
    King,
    Princess,
}

impl TowerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TowerType::King => "king",
            TowerType::Princess => "princess",
        }
    }
}

impl std::fmt::Display for TowerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tower {
    pub id: String,
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    pub is_enemy: bool,
    #[serde(rename = "type")]
    pub tower_type: TowerType,
}

impl Tower {
    /// Remaining health as a fraction of max health (0.0 when max is zero)
    pub fn health_ratio(&self) -> f64 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    #[default]
    Ladder,
    Tournament,
    Challenge,
}

/// Battle snapshot handed to the advisor
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub elixir: f64,
    pub enemy_elixir: f64,
    pub hand: Vec<u32>,
    pub next_card: u32,
    pub units: Vec<Unit>,
    pub towers: Vec<Tower>,
    /// Elapsed match time in seconds
    pub game_time: f64,
    pub is_my_turn: bool,
    pub match_type: MatchType,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse game state")
    }

    pub fn enemy_units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(|u| u.is_enemy)
    }

    pub fn own_units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(|u| !u.is_enemy)
    }

    pub fn enemy_towers(&self) -> impl Iterator<Item = &Tower> {
        self.towers.iter().filter(|t| t.is_enemy)
    }

    pub fn own_towers(&self) -> impl Iterator<Item = &Tower> {
        self.towers.iter().filter(|t| !t.is_enemy)
    }

    pub fn has_enemy_units(&self) -> bool {
        self.units.iter().any(|u| u.is_enemy)
    }

    /// Sanity problems with the snapshot. None of these prevent analysis.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.hand.len() > HAND_SIZE {
            problems.push(format!(
                "hand has {} cards (max {})",
                self.hand.len(),
                HAND_SIZE
            ));
        }
        for (label, value) in [("elixir", self.elixir), ("enemy elixir", self.enemy_elixir)] {
            if !(0.0..=MAX_ELIXIR).contains(&value) {
                problems.push(format!("{} {} outside 0-{}", label, value, MAX_ELIXIR));
            }
        }
        for unit in &self.units {
            if unit.health > unit.max_health {
                problems.push(format!(
                    "unit {} health {} exceeds max {}",
                    unit.id, unit.health, unit.max_health
                ));
            }
        }
        for tower in &self.towers {
            if tower.health > tower.max_health {
                problems.push(format!(
                    "tower {} health {} exceeds max {}",
                    tower.id, tower.health, tower.max_health
                ));
            }
        }

        problems
    }
}
