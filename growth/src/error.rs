//! Error types for growth computations
//!
//! This module provides no_std compatible error types using enums
//! instead of String-based errors.

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Errors that can occur while projecting growth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GrowthError {
    /// `growth_time_per_stage` is zero, the growth rate is undefined
    ZeroGrowthTime,
}

impl core::fmt::Display for GrowthError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GrowthError::ZeroGrowthTime => {
                write!(f, "growth_time_per_stage must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GrowthError {}

/// Result type alias for growth operations
pub type GrowthResult<T> = Result<T, GrowthError>;
