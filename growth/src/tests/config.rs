use super::*;
use crate::{GrowthError, DEFAULT_GROWTH_TIME_PER_STAGE, DEFAULT_MAX_GROWTH_STAGE};

#[test]
fn test_default_config_matches_contract_constants() {
    let config = GrowthConfig::default();
    assert_eq!(config.growth_time_per_stage, DEFAULT_GROWTH_TIME_PER_STAGE);
    assert_eq!(config.growth_time_per_stage, 3600);
    assert_eq!(config.max_growth_stage, DEFAULT_MAX_GROWTH_STAGE);
    assert_eq!(config.max_growth_stage, 4);
    assert_eq!(config.watering_acceleration, 3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_growth_time_fails_validation() {
    let config = GrowthConfig {
        growth_time_per_stage: 0,
        ..GrowthConfig::default()
    };
    assert_eq!(config.validate(), Err(GrowthError::ZeroGrowthTime));
}

#[test]
fn test_zero_max_stage_is_instantly_terminal() {
    let config = GrowthConfig {
        max_growth_stage: 0,
        ..GrowthConfig::default()
    };
    let growth = compute_growth(0, 0, 50000, &config).unwrap();
    assert_eq!(growth.stage, 0);
    assert_eq!(growth.time_to_next_stage, None);
    assert!(growth.is_mature());
}
