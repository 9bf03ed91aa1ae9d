//! Static game content for Tomato Garden.
//!
//! Display profiles for tomato types and growth stages, mirroring the
//! metadata the contract's collectibles are minted with. Everything here
//! is `&'static` data behind plain lookup functions.

#![cfg_attr(not(feature = "std"), no_std)]

mod stages;
mod tomato;

pub use stages::{stage_profile, StageProfile};
pub use tomato::{
    mutation_probability, tomato_profile, Rarity, TomatoProfile, TomatoType, MUTATION_RATE,
};
