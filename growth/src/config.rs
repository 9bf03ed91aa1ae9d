use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::error::{GrowthError, GrowthResult};

/// Seconds of effective growth required to advance one stage
pub const DEFAULT_GROWTH_TIME_PER_STAGE: u64 = 3600;
/// Index of the terminal (harvestable) stage
pub const DEFAULT_MAX_GROWTH_STAGE: u8 = 4;
/// Multiplier applied to time elapsed after the latest watering
pub const DEFAULT_WATERING_ACCELERATION: u64 = 3;
/// Seconds a plant must wait between waterings
pub const WATERING_COOLDOWN: u64 = 3600;

/// Growth timing configuration.
///
/// Passed explicitly into every computation so the clock stays a pure
/// function of its arguments. `Default` yields the deployed contract's
/// constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthConfig {
    /// Effective seconds required per stage transition
    pub growth_time_per_stage: u64,
    /// Stage index at which growth stops and the plant is harvestable
    pub max_growth_stage: u8,
    /// Multiplier for time elapsed after the most recent watering
    pub watering_acceleration: u64,
}

impl GrowthConfig {
    /// Reject configurations with an undefined growth rate.
    ///
    /// A zero `growth_time_per_stage` is a programming error, not an
    /// input anomaly; it must never reach the stage division.
    pub fn validate(&self) -> GrowthResult<()> {
        if self.growth_time_per_stage == 0 {
            return Err(GrowthError::ZeroGrowthTime);
        }
        Ok(())
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            growth_time_per_stage: DEFAULT_GROWTH_TIME_PER_STAGE,
            max_growth_stage: DEFAULT_MAX_GROWTH_STAGE,
            watering_acceleration: DEFAULT_WATERING_ACCELERATION,
        }
    }
}
