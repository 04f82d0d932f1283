//! Card selection over the affordable part of the hand.
//!
//! Every picker returns the first card in hand order among those tied on the
//! ranking key, and None when no card qualifies.

use arena_data::{Card, CardCatalog};
use arena_state::GameState;
use std::cmp::Reverse;
use tracing::debug;

/// Cards in hand that resolve in the catalog and cost no more than the
/// current elixir, in hand order.
#[derive(Debug, Clone)]
pub struct Hand<'a> {
    affordable: Vec<&'a Card>,
}

impl<'a> Hand<'a> {
    pub fn resolve(state: &GameState, catalog: &'a CardCatalog) -> Self {
        let affordable = state
            .hand
            .iter()
            .filter_map(|&id| {
                let card = catalog.get(id);
                if card.is_none() {
                    debug!("Card {} in hand is not in the catalog, skipping", id);
                }
                card
            })
            .filter(|card| (card.cost as f64) <= state.elixir)
            .collect();
        Self { affordable }
    }

    pub fn cards(&self) -> &[&'a Card] {
        &self.affordable
    }

    pub fn is_empty(&self) -> bool {
        self.affordable.is_empty()
    }

    /// Above `swarm_size` threats, the hardest-hitting spell or splash card;
    /// otherwise (or if there is none) the card with most damage + health.
    pub fn best_defense(&self, threat_count: usize, swarm_size: usize) -> Option<&'a Card> {
        if threat_count > swarm_size {
            let area = self
                .affordable
                .iter()
                .copied()
                .filter(|c| c.is_spell() || c.splash_damage)
                .min_by_key(|c| Reverse(c.damage));
            if area.is_some() {
                return area;
            }
        }

        self.affordable
            .iter()
            .copied()
            .min_by_key(|c| Reverse(c.damage as u64 + c.health as u64))
    }

    /// Highest-damage troop dealing more than `min_damage`
    pub fn best_attack(&self, min_damage: u32) -> Option<&'a Card> {
        self.affordable
            .iter()
            .copied()
            .filter(|c| c.is_troop() && c.damage > min_damage)
            .min_by_key(|c| Reverse(c.damage))
    }

    /// Tankiest card
    pub fn best_push(&self) -> Option<&'a Card> {
        self.affordable
            .iter()
            .copied()
            .min_by_key(|c| Reverse(c.health))
    }

    pub fn cheapest(&self) -> Option<&'a Card> {
        self.affordable.iter().copied().min_by_key(|c| c.cost)
    }

    /// Against a tank, the first card dealing more than `min_damage`; in
    /// every other case the first affordable card.
    pub fn best_counter(&self, facing_tank: bool, min_damage: u32) -> Option<&'a Card> {
        if facing_tank {
            if let Some(card) = self.affordable.iter().copied().find(|c| c.damage > min_damage) {
                return Some(card);
            }
        }
        self.affordable.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand_of<'a>(ids: &[u32], elixir: f64, catalog: &'a CardCatalog) -> Hand<'a> {
        let state = GameState {
            elixir,
            hand: ids.to_vec(),
            ..GameState::default()
        };
        Hand::resolve(&state, catalog)
    }

    fn name(card: Option<&Card>) -> Option<&str> {
        card.map(|c| c.name.as_str())
    }

    #[test]
    fn test_affordability_filter() {
        let catalog = CardCatalog::builtin();
        // Knight 3, Fireball 4, Giant 5, Lightning 6
        let hand = hand_of(&[1, 3, 4, 7], 4.0, &catalog);
        let names: Vec<&str> = hand.cards().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Knight", "Fireball"]);
    }

    #[test]
    fn test_unknown_ids_skipped() {
        let catalog = CardCatalog::builtin();
        let hand = hand_of(&[99, 2, 100], 10.0, &catalog);
        assert_eq!(hand.cards().len(), 1);
        assert_eq!(name(hand.cheapest()), Some("Archers"));
    }

    #[test]
    fn test_best_defense_swarm_prefers_area() {
        let catalog = CardCatalog::builtin();
        // Knight, Dragon, Giant, Archers
        let hand = hand_of(&[1, 6, 4, 2], 10.0, &catalog);
        assert_eq!(name(hand.best_defense(3, 2)), Some("Dragon"));
        // Few threats: max damage + health -> Giant (3486)
        assert_eq!(name(hand.best_defense(2, 2)), Some("Giant"));
    }

    #[test]
    fn test_best_defense_swarm_without_area_cards() {
        let catalog = CardCatalog::builtin();
        let hand = hand_of(&[2, 1], 10.0, &catalog);
        assert_eq!(name(hand.best_defense(5, 2)), Some("Knight"));
    }

    #[test]
    fn test_best_attack() {
        let catalog = CardCatalog::builtin();
        // Knight 137, Giant 211, Fireball (spell), Prince 633
        let hand = hand_of(&[1, 4, 3, 8], 10.0, &catalog);
        assert_eq!(name(hand.best_attack(200)), Some("Prince"));

        let hand = hand_of(&[1, 2, 3], 10.0, &catalog);
        assert_eq!(name(hand.best_attack(200)), None);
    }

    #[test]
    fn test_ties_keep_hand_order() {
        let catalog = CardCatalog::builtin();
        // Knight and Archers both cost 3
        let hand = hand_of(&[2, 1], 10.0, &catalog);
        assert_eq!(name(hand.cheapest()), Some("Archers"));
        let hand = hand_of(&[1, 2], 10.0, &catalog);
        assert_eq!(name(hand.cheapest()), Some("Knight"));

        let tied = CardCatalog::from_cards(
            ["A", "B"].iter().enumerate().map(|(i, n)| {
                let mut card = catalog.get(1).unwrap().clone();
                card.id = 100 + i as u32;
                card.name = n.to_string();
                card
            }),
        );
        let hand = hand_of(&[101, 100], 10.0, &tied);
        assert_eq!(name(hand.best_push()), Some("B"));
        assert_eq!(name(hand.best_defense(1, 2)), Some("B"));
    }

    #[test]
    fn test_best_counter() {
        let catalog = CardCatalog::builtin();
        // Knight 137, Archers 127, Wizard 340
        let hand = hand_of(&[1, 2, 5], 10.0, &catalog);
        assert_eq!(name(hand.best_counter(true, 300)), Some("Wizard"));
        assert_eq!(name(hand.best_counter(false, 300)), Some("Knight"));

        let hand = hand_of(&[2, 1], 10.0, &catalog);
        assert_eq!(name(hand.best_counter(true, 300)), Some("Archers"));
    }

    #[test]
    fn test_empty_hand() {
        let catalog = CardCatalog::builtin();
        let hand = hand_of(&[4, 5], 2.0, &catalog);
        assert!(hand.is_empty());
        assert!(hand.best_push().is_none());
        assert!(hand.best_counter(true, 300).is_none());
        assert!(hand.best_defense(4, 2).is_none());
    }
}
