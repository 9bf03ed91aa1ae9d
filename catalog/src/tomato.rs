use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Collectible tomato variety.
///
/// The contract stores the variety as a small integer; `from_index` is
/// the typed decoration. Normal plants can mutate into any other variety
/// when watered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum TomatoType {
    Normal,
    Yellow,
    Purple,
    Flame,
    Ice,
    Rainbow,
}

/// How rare a tomato variety is
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Encode,
    Decode,
    TypeInfo,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl TomatoType {
    /// Number of variety variants
    pub const COUNT: usize = 6;

    /// All varieties, ordered by contract index
    pub const ALL: [TomatoType; Self::COUNT] = [
        TomatoType::Normal,
        TomatoType::Yellow,
        TomatoType::Purple,
        TomatoType::Flame,
        TomatoType::Ice,
        TomatoType::Rainbow,
    ];

    /// Map a contract variety index to its variant
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(TomatoType::Normal),
            1 => Some(TomatoType::Yellow),
            2 => Some(TomatoType::Purple),
            3 => Some(TomatoType::Flame),
            4 => Some(TomatoType::Ice),
            5 => Some(TomatoType::Rainbow),
            _ => None,
        }
    }

    /// Numeric variety as the contract represents it
    pub fn index(self) -> u8 {
        match self {
            TomatoType::Normal => 0,
            TomatoType::Yellow => 1,
            TomatoType::Purple => 2,
            TomatoType::Flame => 3,
            TomatoType::Ice => 4,
            TomatoType::Rainbow => 5,
        }
    }

    /// Only the default variety can mutate through watering
    pub fn can_mutate(self) -> bool {
        self == TomatoType::Normal
    }

    pub fn rarity(self) -> Rarity {
        tomato_profile(self).rarity
    }
}

/// Display profile of a tomato variety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TomatoProfile {
    pub name: &'static str,
    pub emoji: &'static str,
    pub rarity: Rarity,
    pub description: &'static str,
    pub mutation_possible: bool,
}

/// Probability that a watering mutates a Normal tomato
pub const MUTATION_RATE: f32 = 0.05;

/// Mutation probability of a variety (zero for everything but Normal)
pub fn mutation_probability(tomato_type: TomatoType) -> f32 {
    if tomato_type.can_mutate() {
        MUTATION_RATE
    } else {
        0.0
    }
}

/// Static display profile for a variety
pub fn tomato_profile(tomato_type: TomatoType) -> &'static TomatoProfile {
    match tomato_type {
        TomatoType::Normal => &TomatoProfile {
            name: "Normal",
            emoji: "🍅",
            rarity: Rarity::Common,
            description: "Default tomato type, can mutate into other types through watering",
            mutation_possible: true,
        },
        TomatoType::Yellow => &TomatoProfile {
            name: "Yellow",
            emoji: "🟡",
            rarity: Rarity::Uncommon,
            description: "Yellow mutant tomato, radiating warm golden light",
            mutation_possible: false,
        },
        TomatoType::Purple => &TomatoProfile {
            name: "Purple",
            emoji: "🟣",
            rarity: Rarity::Uncommon,
            description: "Purple mutant tomato, mysterious and elegant",
            mutation_possible: false,
        },
        TomatoType::Flame => &TomatoProfile {
            name: "Flame",
            emoji: "🔥",
            rarity: Rarity::Rare,
            description: "Flame tomato, burning with intense energy",
            mutation_possible: false,
        },
        TomatoType::Ice => &TomatoProfile {
            name: "Ice",
            emoji: "❄️",
            rarity: Rarity::Epic,
            description: "Frost tomato, emanating icy coldness",
            mutation_possible: false,
        },
        TomatoType::Rainbow => &TomatoProfile {
            name: "Rainbow",
            emoji: "🌈",
            rarity: Rarity::Legendary,
            description: "Rainbow tomato, with colorful brilliance, extremely rare",
            mutation_possible: false,
        },
    }
}
