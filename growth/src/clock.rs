//! Growth projection
//!
//! The clock maps `(planted_at, last_watered, now)` to a discrete growth
//! stage and the remaining time until the next one. Watering accelerates
//! only the span after it was applied; time already elapsed before the
//! watering keeps its 1x weight. Callers pass the timestamp of the most
//! recent watering only — re-watering moves the acceleration anchor and
//! forfeits the accelerated credit of the previous span, matching the
//! contract's observable behavior.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::config::GrowthConfig;
use crate::error::GrowthResult;

/// Projected growth of a single plant at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Growth {
    /// Current stage, in `[0, max_growth_stage]`
    pub stage: u8,
    /// Effective seconds until the next stage; `None` once terminal.
    ///
    /// A `Some(0)` means "ready now" for a non-terminal stage and is
    /// distinct from the terminal `None`. The value assumes the current
    /// acceleration regime holds until the boundary; a later watering
    /// invalidates the estimate.
    pub time_to_next_stage: Option<u64>,
}

impl Growth {
    /// Terminal-stage check. Holds exactly when `time_to_next_stage`
    /// is absent.
    pub fn is_mature(&self) -> bool {
        self.time_to_next_stage.is_none()
    }
}

/// Effective seconds of growth accumulated since planting.
///
/// The span after `last_watered` counts at `acceleration` times its real
/// duration; everything before it counts 1x. `last_watered <= planted_at`
/// (including the 0 "never watered" sentinel) means no acceleration.
/// Timestamp anomalies are normalized, never surfaced: `now < planted_at`
/// yields 0, and a `last_watered` still in the future contributes no
/// accelerated span, so the result stays monotonic in `now`.
pub fn effective_elapsed(planted_at: u64, last_watered: u64, now: u64, acceleration: u64) -> u64 {
    if now <= planted_at {
        return 0;
    }
    if last_watered > planted_at {
        let pre_water = last_watered.min(now) - planted_at;
        let post_water = now.saturating_sub(last_watered);
        pre_water.saturating_add(post_water.saturating_mul(acceleration))
    } else {
        now - planted_at
    }
}

/// Project the growth stage and the countdown to the next one.
///
/// The stage is `floor(effective / growth_time_per_stage)` clamped to
/// `max_growth_stage`. The countdown is the remaining *effective* time,
/// which coincides with wall-clock seconds only while no further watering
/// occurs.
pub fn compute_growth(
    planted_at: u64,
    last_watered: u64,
    now: u64,
    config: &GrowthConfig,
) -> GrowthResult<Growth> {
    config.validate()?;

    let elapsed = effective_elapsed(planted_at, last_watered, now, config.watering_acceleration);
    let stage = (elapsed / config.growth_time_per_stage).min(config.max_growth_stage as u64) as u8;

    let time_to_next_stage = if stage >= config.max_growth_stage {
        None
    } else {
        let required = (stage as u64 + 1).saturating_mul(config.growth_time_per_stage);
        Some(required.saturating_sub(elapsed))
    };

    Ok(Growth {
        stage,
        time_to_next_stage,
    })
}

/// Real wall-clock timestamp at which `stage` is first reached, assuming
/// the current acceleration regime holds.
///
/// Returns `None` for stages past `max_growth_stage`, and for stages a
/// zero acceleration can never reach. Timestamps in the past are returned
/// as-is; the projection is valid on both sides of `now`.
pub fn stage_reached_at(
    planted_at: u64,
    last_watered: u64,
    stage: u8,
    config: &GrowthConfig,
) -> GrowthResult<Option<u64>> {
    config.validate()?;

    if stage > config.max_growth_stage {
        return Ok(None);
    }
    let required = (stage as u64).saturating_mul(config.growth_time_per_stage);

    if last_watered > planted_at {
        let pre_water = last_watered - planted_at;
        if required <= pre_water {
            return Ok(Some(planted_at.saturating_add(required)));
        }
        if config.watering_acceleration == 0 {
            // Growth stalls at the watering point.
            return Ok(None);
        }
        let span = (required - pre_water).div_ceil(config.watering_acceleration);
        Ok(Some(last_watered.saturating_add(span)))
    } else {
        Ok(Some(planted_at.saturating_add(required)))
    }
}

/// Watering cooldown gate: a plant may be watered again once `cooldown`
/// seconds have passed since the previous watering.
pub fn can_water(last_watered: u64, now: u64, cooldown: u64) -> bool {
    now.saturating_sub(last_watered) >= cooldown
}
