use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Discrete growth phase of a plant.
///
/// The contract reports stages as small integers; `from_index` is the
/// typed decoration for them. Ordering follows growth: `Seed < Mature`.
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
pub enum GrowthStage {
    Seed,
    Seedling,
    Growing,
    Flowering,
    Mature,
}

impl GrowthStage {
    /// Number of stage variants
    pub const COUNT: usize = 5;

    /// All stages in growth order
    pub const ALL: [GrowthStage; Self::COUNT] = [
        GrowthStage::Seed,
        GrowthStage::Seedling,
        GrowthStage::Growing,
        GrowthStage::Flowering,
        GrowthStage::Mature,
    ];

    /// Map a numeric stage to its variant, clamping past-terminal
    /// indices to `Mature`.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => GrowthStage::Seed,
            1 => GrowthStage::Seedling,
            2 => GrowthStage::Growing,
            3 => GrowthStage::Flowering,
            _ => GrowthStage::Mature,
        }
    }

    /// Numeric stage as the contract represents it
    pub fn index(self) -> u8 {
        match self {
            GrowthStage::Seed => 0,
            GrowthStage::Seedling => 1,
            GrowthStage::Growing => 2,
            GrowthStage::Flowering => 3,
            GrowthStage::Mature => 4,
        }
    }

    /// The stage that follows this one, if any
    pub fn next(self) -> Option<Self> {
        match self {
            GrowthStage::Seed => Some(GrowthStage::Seedling),
            GrowthStage::Seedling => Some(GrowthStage::Growing),
            GrowthStage::Growing => Some(GrowthStage::Flowering),
            GrowthStage::Flowering => Some(GrowthStage::Mature),
            GrowthStage::Mature => None,
        }
    }

    /// Only mature plants can be harvested into collectibles
    pub fn is_harvestable(self) -> bool {
        self == GrowthStage::Mature
    }
}

impl Default for GrowthStage {
    fn default() -> Self {
        GrowthStage::Seed
    }
}
