use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Troop,
    Spell,
    Building,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Static card definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: u32,
    pub name: String,
    /// Elixir price
    pub cost: u32,
    pub damage: u32,
    pub health: u32,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub rarity: Rarity,
    pub description: String,
    pub image: String,
    /// Deals area damage, useful against swarms
    #[serde(default)]
    pub splash_damage: bool,
}

impl Card {
    pub fn is_troop(&self) -> bool {
        self.card_type == CardType::Troop
    }

    pub fn is_spell(&self) -> bool {
        self.card_type == CardType::Spell
    }
}

/// Raw cards.json file format
#[derive(Debug, Deserialize)]
struct CardsFile {
    #[allow(dead_code)]
    version: String,
    cards: Vec<Card>,
}

/// Card catalog keyed by id. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct CardCatalog {
    cards: HashMap<u32, Card>,
}

impl CardCatalog {
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    /// The standard eight-card set
    pub fn builtin() -> Self {
        Self::from_cards(builtin_cards())
    }

    /// Load the catalog from `data_dir/cards.json`, falling back to the
    /// built-in set when the file does not exist.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let cards_path = data_dir.join("cards.json");
        if !cards_path.exists() {
            tracing::warn!(
                "No cards.json found at {}, using built-in catalog",
                cards_path.display()
            );
            return Ok(Self::builtin());
        }

        let content =
            std::fs::read_to_string(&cards_path).context("Failed to read cards.json")?;
        let file: CardsFile =
            serde_json::from_str(&content).context("Failed to parse cards.json")?;

        let catalog = Self::from_cards(file.cards);
        tracing::info!("Loaded {} cards from {}", catalog.len(), cards_path.display());
        Ok(catalog)
    }

    pub fn get(&self, id: u32) -> Option<&Card> {
        self.cards.get(&id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }
}

#[allow(clippy::too_many_arguments)]
fn card(
    id: u32,
    name: &str,
    cost: u32,
    damage: u32,
    health: u32,
    card_type: CardType,
    rarity: Rarity,
    description: &str,
    image: &str,
    splash_damage: bool,
) -> Card {
    Card {
        id,
        name: name.to_string(),
        cost,
        damage,
        health,
        card_type,
        rarity,
        description: description.to_string(),
        image: image.to_string(),
        splash_damage,
    }
}

fn builtin_cards() -> Vec<Card> {
    use CardType::*;
    use Rarity::*;

    vec![
        card(1, "Knight", 3, 137, 1344, Troop, Common, "A tough melee fighter", "🛡️", false),
        card(
            2,
            "Archers",
            3,
            127,
            304,
            Troop,
            Common,
            "A pair of lightly armored ranged attackers",
            "🏹",
            false,
        ),
        card(
            3,
            "Fireball",
            4,
            572,
            0,
            Spell,
            Rare,
            "Annihilates hordes of enemies with explosive damage",
            "🔥",
            false,
        ),
        card(
            4,
            "Giant",
            5,
            211,
            3275,
            Troop,
            Rare,
            "Slow but durable, only attacks buildings",
            "👹",
            false,
        ),
        card(
            5,
            "Wizard",
            5,
            340,
            598,
            Troop,
            Rare,
            "The most awesome man to ever set foot in the arena",
            "🧙‍♂️",
            true,
        ),
        card(
            6,
            "Dragon",
            4,
            310,
            1070,
            Troop,
            Epic,
            "Flying troop that attacks both air and ground",
            "🐲",
            true,
        ),
        card(
            7,
            "Lightning",
            6,
            864,
            0,
            Spell,
            Epic,
            "Strikes the 3 enemies with the highest HP",
            "⚡",
            false,
        ),
        card(
            8,
            "Prince",
            5,
            633,
            1615,
            Troop,
            Epic,
            "Don't let the little pony fool you",
            "🤴",
            false,
        ),
    ]
}
