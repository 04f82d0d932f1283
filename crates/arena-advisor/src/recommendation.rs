use arena_state::Position;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    PlayCard,
    Wait,
    Defend,
    Attack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Sort weight, higher ranks first
    pub fn weight(&self) -> u8 {
        match self {
            Priority::Critical => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// A single suggested action with its justification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotRecommendation {
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    pub priority: Priority,
    pub reason: String,
    /// 0.0 - 1.0
    pub confidence: f64,
}

impl BotRecommendation {
    pub fn play_card(
        card_id: u32,
        position: Position,
        priority: Priority,
        reason: String,
        confidence: f64,
    ) -> Self {
        Self {
            action: Action::PlayCard,
            card_id: Some(card_id),
            position: Some(position),
            priority,
            reason,
            confidence,
        }
    }

    pub fn wait(priority: Priority, reason: String, confidence: f64) -> Self {
        Self {
            action: Action::Wait,
            card_id: None,
            position: None,
            priority,
            reason,
            confidence,
        }
    }
}
