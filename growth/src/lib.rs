//! Growth-stage clock for Tomato Garden plants.
//!
//! The contract owns the authoritative plant state; this crate is the
//! read-side projection the UI uses to estimate a plant's current growth
//! stage and the countdown to the next one. Everything here is a pure
//! function of the caller-supplied timestamps and configuration.

#![cfg_attr(not(feature = "std"), no_std)]

mod clock;
mod config;
mod error;
mod stage;

#[cfg(test)]
mod tests;

pub use clock::{can_water, compute_growth, effective_elapsed, stage_reached_at, Growth};
pub use config::{
    GrowthConfig, DEFAULT_GROWTH_TIME_PER_STAGE, DEFAULT_MAX_GROWTH_STAGE,
    DEFAULT_WATERING_ACCELERATION, WATERING_COOLDOWN,
};
pub use error::{GrowthError, GrowthResult};
pub use stage::GrowthStage;
