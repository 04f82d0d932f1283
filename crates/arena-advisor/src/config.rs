use anyhow::{Context, Result};
use arena_state::Position;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning knobs for the analyzers. Missing fields in a config file take the
/// default value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdvisorConfig {
    /// Enemy units closer than this to an own tower are threats
    pub defense_radius: f64,
    /// Enemy units closer than this to another enemy unit form a push
    pub cluster_radius: f64,
    /// Enemy tower below this fraction of max health is considered weak
    pub weak_tower_ratio: f64,
    pub min_attack_elixir: f64,
    /// Attack cards must deal strictly more than this
    pub attack_min_damage: u32,
    /// Own elixir must exceed enemy elixir by more than this to push
    pub elixir_advantage_margin: f64,
    pub elixir_waste_level: f64,
    /// Below this, with no enemies on the board, the advice is to wait
    pub low_elixir_level: f64,
    /// Enemy units above this health call for a high-damage counter
    pub tank_health: f64,
    pub counter_min_damage: u32,
    /// More threats than this prefers spells and splash damage
    pub swarm_size: usize,
    /// Vertical distance in front of a weak tower to place attackers
    pub attack_offset: f64,
    pub counter_offset: f64,
    pub bridge_position: Position,
    pub safe_position: Position,
    /// Minimum time between analyses when fed a stream of snapshots
    pub analysis_interval_ms: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            defense_radius: 5.0,
            cluster_radius: 3.0,
            weak_tower_ratio: 0.3,
            min_attack_elixir: 4.0,
            attack_min_damage: 200,
            elixir_advantage_margin: 2.0,
            elixir_waste_level: 9.0,
            low_elixir_level: 4.0,
            tank_health: 2000.0,
            counter_min_damage: 300,
            swarm_size: 2,
            attack_offset: 2.0,
            counter_offset: 1.0,
            bridge_position: Position::new(0.0, -2.0),
            safe_position: Position::new(0.0, 4.0),
            analysis_interval_ms: 100,
        }
    }
}

impl AdvisorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}
