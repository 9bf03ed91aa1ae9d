//! Garden aggregation for Tomato Garden.
//!
//! Pure projections over plant records the contract-query layer already
//! fetched: per-plant status, whole-garden statistics, and collection
//! scoring. Discovery (which token ids a user owns) happens outside this
//! crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod amounts;
mod collection;
mod garden;

#[cfg(test)]
mod tests;

pub use amounts::{format_token, parse_token, TOKEN_DECIMALS};
pub use collection::{collection_progress, collection_score, CollectionLevel, CollectionProgress};
pub use garden::{garden_stats, plant_status, GardenStats, PlantRecord, PlantStatus};
