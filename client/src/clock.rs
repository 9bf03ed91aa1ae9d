//! Garden clock for browser WASM builds
//!
//! This module provides the growth clock exposed to JavaScript via
//! wasm-bindgen. The contract-query layer on the JS side fetches plant
//! records and timestamps; everything here is synchronous computation
//! over those inputs.

use garden_growth::{
    can_water, compute_growth, stage_reached_at, GrowthConfig, WATERING_COOLDOWN,
};
use garden_stats::{plant_status, PlantRecord};
use wasm_bindgen::prelude::*;

use crate::view::{GardenView, PlantView};

/// The growth clock exposed to WASM
#[wasm_bindgen]
pub struct GardenClock {
    config: GrowthConfig,
}

#[wasm_bindgen]
impl GardenClock {
    /// Create a clock; omitted options fall back to the deployed
    /// contract's constants (3600s stages, max stage 4, 3x watering).
    #[wasm_bindgen(constructor)]
    pub fn new(
        growth_time_per_stage: Option<u64>,
        max_growth_stage: Option<u8>,
        watering_acceleration: Option<u64>,
    ) -> Result<GardenClock, String> {
        let defaults = GrowthConfig::default();
        let config = GrowthConfig {
            growth_time_per_stage: growth_time_per_stage
                .unwrap_or(defaults.growth_time_per_stage),
            max_growth_stage: max_growth_stage.unwrap_or(defaults.max_growth_stage),
            watering_acceleration: watering_acceleration
                .unwrap_or(defaults.watering_acceleration),
        };
        config.validate().map_err(|e| e.to_string())?;
        log::info!("garden clock initialized: {:?}", config);
        Ok(GardenClock { config })
    }

    /// Current growth stage of a plant
    #[wasm_bindgen]
    pub fn growth_stage(
        &self,
        planted_at: u64,
        last_watered: u64,
        now: u64,
    ) -> Result<u8, String> {
        compute_growth(planted_at, last_watered, now, &self.config)
            .map(|growth| growth.stage)
            .map_err(|e| e.to_string())
    }

    /// Effective seconds until the next stage, or undefined once mature
    #[wasm_bindgen]
    pub fn seconds_to_next_stage(
        &self,
        planted_at: u64,
        last_watered: u64,
        now: u64,
    ) -> Result<Option<u64>, String> {
        compute_growth(planted_at, last_watered, now, &self.config)
            .map(|growth| growth.time_to_next_stage)
            .map_err(|e| e.to_string())
    }

    /// Wall-clock timestamp at which `stage` is reached under the
    /// current watering regime, or undefined if unreachable
    #[wasm_bindgen]
    pub fn stage_eta(
        &self,
        planted_at: u64,
        last_watered: u64,
        stage: u8,
    ) -> Result<Option<u64>, String> {
        stage_reached_at(planted_at, last_watered, stage, &self.config)
            .map_err(|e| e.to_string())
    }

    /// Whether the watering cooldown has passed
    #[wasm_bindgen]
    pub fn can_water(&self, last_watered: u64, now: u64) -> bool {
        can_water(last_watered, now, WATERING_COOLDOWN)
    }

    /// Build the decorated view for one plant record (JSON in, JSON out)
    #[wasm_bindgen]
    pub fn plant_view(&self, record: JsValue, now: u64) -> Result<JsValue, String> {
        log::debug!("plant_view: now={}", now);
        let record: PlantRecord = serde_wasm_bindgen::from_value(record)
            .map_err(|e| format!("Failed to parse plant record: {:?}", e))?;

        let status = plant_status(&record, now, &self.config).map_err(|e| e.to_string())?;
        let view = PlantView::from_status(&status, now, &self.config);
        serde_wasm_bindgen::to_value(&view).map_err(|e| format!("{:?}", e))
    }

    /// Build the whole-garden view from a list of plant records
    #[wasm_bindgen]
    pub fn garden_view(&self, records: JsValue, now: u64) -> Result<JsValue, String> {
        log::debug!("garden_view: now={}", now);
        let records: Vec<PlantRecord> = serde_wasm_bindgen::from_value(records)
            .map_err(|e| format!("Failed to parse plant records: {:?}", e))?;

        let view =
            GardenView::from_records(&records, now, &self.config).map_err(|e| e.to_string())?;
        serde_wasm_bindgen::to_value(&view).map_err(|e| format!("{:?}", e))
    }
}
