//! View types for UI serialization
//!
//! Decorated, camelCase-serialized projections of plant records for the
//! React frontend: catalog names and emoji, within-stage progress, and
//! countdown labels.

use garden_catalog::{stage_profile, tomato_profile};
use garden_growth::{effective_elapsed, GrowthConfig, GrowthResult, GrowthStage};
use garden_stats::{
    collection_progress, format_token, garden_stats, plant_status, CollectionLevel, PlantRecord,
    PlantStatus,
};
use serde::{Deserialize, Serialize};

/// One plant decorated for display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantView {
    pub id: u64,
    pub tomato_type: String,
    pub type_emoji: String,
    pub rarity: String,
    pub stage: u8,
    pub stage_name: String,
    pub stage_emoji: String,
    /// Progress through the current stage, 0-100
    pub progress_percent: u8,
    pub is_harvestable: bool,
    pub can_water: bool,
    pub time_to_next_stage: Option<u64>,
    pub countdown: String,
    /// Staked amount formatted as a token string
    pub staked: String,
}

impl PlantView {
    /// Decorate a computed status. `config` must be the configuration
    /// the status was computed with.
    pub fn from_status(status: &PlantStatus, now: u64, config: &GrowthConfig) -> Self {
        let stage = GrowthStage::from_index(status.stage);
        let tomato = tomato_profile(status.record.tomato_type);
        let stage_info = stage_profile(stage);

        Self {
            id: status.record.id,
            tomato_type: tomato.name.to_string(),
            type_emoji: tomato.emoji.to_string(),
            rarity: tomato.rarity.label().to_string(),
            stage: status.stage,
            stage_name: stage_info.name.to_string(),
            stage_emoji: stage_info.emoji.to_string(),
            progress_percent: stage_progress_percent(status, now, config),
            is_harvestable: status.is_harvestable,
            can_water: status.can_water,
            time_to_next_stage: status.time_to_next_stage,
            countdown: status
                .time_to_next_stage
                .map(format_countdown)
                .unwrap_or_else(|| "Ready".to_string()),
            staked: format_token(status.record.staked_amount),
        }
    }
}

/// The whole garden decorated for display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenView {
    pub plants: Vec<PlantView>,
    pub total_plants: u32,
    pub harvestable_plants: u32,
    pub mutation_rate: f32,
    pub collection_score: u32,
    pub collection_level: String,
    pub completion_rate: f32,
    pub rarest: Option<String>,
    pub missing_types: Vec<String>,
    pub total_staked: String,
}

impl GardenView {
    /// Fold plant records into the garden view the frontend renders
    pub fn from_records(
        records: &[PlantRecord],
        now: u64,
        config: &GrowthConfig,
    ) -> GrowthResult<Self> {
        let stats = garden_stats(records, now, config)?;
        let progress = collection_progress(&stats.plants_by_type);

        let plants = records
            .iter()
            .map(|record| {
                plant_status(record, now, config)
                    .map(|status| PlantView::from_status(&status, now, config))
            })
            .collect::<GrowthResult<Vec<_>>>()?;

        Ok(Self {
            plants,
            total_plants: stats.total_plants,
            harvestable_plants: stats.harvestable_plants,
            mutation_rate: stats.mutation_rate,
            collection_score: stats.collection_score,
            collection_level: CollectionLevel::from_score(stats.collection_score)
                .label()
                .to_string(),
            completion_rate: progress.completion_rate,
            rarest: progress
                .rarest
                .map(|t| tomato_profile(t).name.to_string()),
            missing_types: progress
                .missing_types
                .iter()
                .map(|&t| tomato_profile(t).name.to_string())
                .collect(),
            total_staked: format_token(stats.total_staked),
        })
    }
}

/// Countdown label for the UI: "2h 30m", "5m 10s", "42s", or "Ready"
pub fn format_countdown(seconds: u64) -> String {
    if seconds == 0 {
        return "Ready".to_string();
    }
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

fn stage_progress_percent(status: &PlantStatus, now: u64, config: &GrowthConfig) -> u8 {
    if status.is_harvestable {
        return 100;
    }
    let elapsed = effective_elapsed(
        status.record.planted_at,
        status.record.last_watered,
        now,
        config.watering_acceleration,
    );
    let within = elapsed % config.growth_time_per_stage;
    (within * 100 / config.growth_time_per_stage) as u8
}
