use garden_catalog::TomatoType;
use garden_growth::{
    can_water, compute_growth, GrowthConfig, GrowthResult, GrowthStage, WATERING_COOLDOWN,
};
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// One plant as the contract-query layer reports it.
///
/// `last_watered == 0` means never watered; `harvested_at == 0` means not
/// harvested. `staked_amount` is in wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    pub id: u64,
    pub tomato_type: TomatoType,
    pub planted_at: u64,
    pub last_watered: u64,
    pub harvested_at: u64,
    pub staked_amount: u128,
    pub is_harvested: bool,
}

/// A plant record joined with its growth projection at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantStatus {
    pub record: PlantRecord,
    pub stage: u8,
    pub time_to_next_stage: Option<u64>,
    pub is_harvestable: bool,
    pub can_water: bool,
}

/// Project a single plant's current status
pub fn plant_status(
    record: &PlantRecord,
    now: u64,
    config: &GrowthConfig,
) -> GrowthResult<PlantStatus> {
    let growth = compute_growth(record.planted_at, record.last_watered, now, config)?;
    Ok(PlantStatus {
        record: *record,
        stage: growth.stage,
        time_to_next_stage: growth.time_to_next_stage,
        is_harvestable: growth.is_mature(),
        can_water: can_water(record.last_watered, now, WATERING_COOLDOWN),
    })
}

/// Aggregate statistics over a user's garden
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenStats {
    pub total_plants: u32,
    pub harvestable_plants: u32,
    /// Plant counts indexed by `TomatoType::index()`
    pub plants_by_type: [u32; TomatoType::COUNT],
    /// Plant counts indexed by `GrowthStage::index()`
    pub plants_by_stage: [u32; GrowthStage::COUNT],
    /// Percentage of plants that mutated away from Normal
    pub mutation_rate: f32,
    pub collection_score: u32,
    /// Total staked across all plants, in wei
    pub total_staked: u128,
}

/// Fold a user's plant records into garden statistics
pub fn garden_stats(
    records: &[PlantRecord],
    now: u64,
    config: &GrowthConfig,
) -> GrowthResult<GardenStats> {
    log::debug!("garden_stats: folding {} plants at now={}", records.len(), now);

    let mut plants_by_type = [0u32; TomatoType::COUNT];
    let mut plants_by_stage = [0u32; GrowthStage::COUNT];
    let mut harvestable_plants = 0u32;
    let mut total_staked = 0u128;

    for record in records {
        let growth = compute_growth(record.planted_at, record.last_watered, now, config)?;

        plants_by_type[record.tomato_type.index() as usize] += 1;
        plants_by_stage[GrowthStage::from_index(growth.stage).index() as usize] += 1;
        if growth.is_mature() {
            harvestable_plants += 1;
        }
        total_staked = total_staked.saturating_add(record.staked_amount);
    }

    let total_plants = records.len() as u32;
    let mutated = total_plants - plants_by_type[TomatoType::Normal.index() as usize];
    let mutation_rate = if total_plants == 0 {
        0.0
    } else {
        mutated as f32 / total_plants as f32 * 100.0
    };

    Ok(GardenStats {
        total_plants,
        harvestable_plants,
        collection_score: crate::collection::collection_score(&plants_by_type),
        plants_by_type,
        plants_by_stage,
        mutation_rate,
        total_staked,
    })
}
