use garden_growth::GrowthStage;
use serde::Serialize;

/// Display profile of a growth stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageProfile {
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub harvestable: bool,
}

/// Static display profile for a growth stage
pub fn stage_profile(stage: GrowthStage) -> &'static StageProfile {
    match stage {
        GrowthStage::Seed => &StageProfile {
            name: "Seed",
            emoji: "🌱",
            description: "Tomato just planted, still a seed",
            harvestable: false,
        },
        GrowthStage::Seedling => &StageProfile {
            name: "Seedling",
            emoji: "🌿",
            description: "Seed has sprouted, growing small seedlings",
            harvestable: false,
        },
        GrowthStage::Growing => &StageProfile {
            name: "Growing",
            emoji: "🍃",
            description: "Seedling growing vigorously, more and more leaves",
            harvestable: false,
        },
        GrowthStage::Flowering => &StageProfile {
            name: "Flowering",
            emoji: "🌺",
            description: "Plant starts flowering, about to bear fruit",
            harvestable: false,
        },
        GrowthStage::Mature => &StageProfile {
            name: "Mature",
            emoji: "🍅",
            description: "Tomato fully mature, can be harvested as a collectible",
            harvestable: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_harvestable_matches_stage() {
        for stage in GrowthStage::ALL {
            assert_eq!(stage_profile(stage).harvestable, stage.is_harvestable());
        }
    }

    #[test]
    fn test_every_stage_has_a_name() {
        for stage in GrowthStage::ALL {
            assert!(!stage_profile(stage).name.is_empty());
            assert!(!stage_profile(stage).emoji.is_empty());
        }
    }
}
