mod config;

use crate::{compute_growth, Growth, GrowthConfig};

// ==========================================
// HELPER FUNCTIONS
// ==========================================

/// Project growth under the default config (3600s stages, max 4, 3x water)
fn grow(planted_at: u64, last_watered: u64, now: u64) -> Growth {
    compute_growth(planted_at, last_watered, now, &GrowthConfig::default())
        .expect("default config is valid")
}
