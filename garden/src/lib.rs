//! Tomato Garden client logic under one roof.
//!
//! Re-exports the growth clock, the static content catalog, and the
//! garden aggregation crates.

#![cfg_attr(not(feature = "std"), no_std)]

pub use garden_catalog as catalog;
pub use garden_growth as growth;
pub use garden_stats as stats;
