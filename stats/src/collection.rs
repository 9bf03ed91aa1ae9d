use alloc::vec::Vec;

use garden_catalog::TomatoType;
use serde::{Deserialize, Serialize};

/// Rarest-first scan order; Normal is never counted as "rarest"
const RARITY_ORDER: [TomatoType; 5] = [
    TomatoType::Rainbow,
    TomatoType::Ice,
    TomatoType::Flame,
    TomatoType::Purple,
    TomatoType::Yellow,
];

/// Collection value of a garden, weighted by variety rarity.
///
/// Yellow and Purple score 1, Flame 3, Ice 5, Rainbow 10; Normal plants
/// score nothing.
pub fn collection_score(plants_by_type: &[u32; TomatoType::COUNT]) -> u32 {
    let count = |t: TomatoType| plants_by_type[t.index() as usize];
    count(TomatoType::Yellow)
        + count(TomatoType::Purple)
        + count(TomatoType::Flame) * 3
        + count(TomatoType::Ice) * 5
        + count(TomatoType::Rainbow) * 10
}

/// Collector rank derived from the collection score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionLevel {
    Novice,
    Beginner,
    Intermediate,
    Advanced,
    Legendary,
}

impl CollectionLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            0 => CollectionLevel::Novice,
            1..=4 => CollectionLevel::Beginner,
            5..=14 => CollectionLevel::Intermediate,
            15..=29 => CollectionLevel::Advanced,
            _ => CollectionLevel::Legendary,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CollectionLevel::Novice => "Novice Collector 🌱",
            CollectionLevel::Beginner => "Beginner Collector 🌿",
            CollectionLevel::Intermediate => "Intermediate Collector 🍃",
            CollectionLevel::Advanced => "Advanced Collector 🌺",
            CollectionLevel::Legendary => "Legendary Collector 👑",
        }
    }
}

/// How far along a user's variety collection is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionProgress {
    pub total_types: u32,
    pub collected_types: u32,
    /// Rarest variety the user owns at least one of
    pub rarest: Option<TomatoType>,
    /// Collected share of all varieties, in percent
    pub completion_rate: f32,
    pub missing_types: Vec<TomatoType>,
}

/// Derive collection progress from per-variety plant counts
pub fn collection_progress(plants_by_type: &[u32; TomatoType::COUNT]) -> CollectionProgress {
    let collected_types = plants_by_type.iter().filter(|&&count| count > 0).count() as u32;

    let missing_types: Vec<TomatoType> = TomatoType::ALL
        .into_iter()
        .filter(|t| plants_by_type[t.index() as usize] == 0)
        .collect();

    let rarest = RARITY_ORDER
        .into_iter()
        .find(|t| plants_by_type[t.index() as usize] > 0);

    CollectionProgress {
        total_types: TomatoType::COUNT as u32,
        collected_types,
        rarest,
        completion_rate: collected_types as f32 / TomatoType::COUNT as f32 * 100.0,
        missing_types,
    }
}
