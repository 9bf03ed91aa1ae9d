use garden_catalog::TomatoType;
use garden_growth::GrowthConfig;

use crate::*;

// ==========================================
// HELPER FUNCTIONS
// ==========================================

fn record(id: u64, tomato_type: TomatoType, planted_at: u64, last_watered: u64) -> PlantRecord {
    PlantRecord {
        id,
        tomato_type,
        planted_at,
        last_watered,
        harvested_at: 0,
        staked_amount: 1_000_000_000_000_000_000, // 1 token
        is_harvested: false,
    }
}

#[test]
fn test_plant_status_projects_growth() {
    let config = GrowthConfig::default();
    let plant = record(1, TomatoType::Normal, 0, 1800);

    let status = plant_status(&plant, 3600, &config).unwrap();
    assert_eq!(status.stage, 2);
    assert_eq!(status.time_to_next_stage, Some(3600));
    assert!(!status.is_harvestable);
    // Watered 1800s ago, cooldown is 3600s
    assert!(!status.can_water);

    let status = plant_status(&plant, 1800 + 3600, &config).unwrap();
    assert!(status.can_water);
}

#[test]
fn test_plant_status_mature_plant_is_harvestable() {
    let config = GrowthConfig::default();
    let plant = record(7, TomatoType::Flame, 0, 0);

    let status = plant_status(&plant, 14400, &config).unwrap();
    assert_eq!(status.stage, 4);
    assert_eq!(status.time_to_next_stage, None);
    assert!(status.is_harvestable);
}

#[test]
fn test_garden_stats_folds_a_mixed_garden() {
    let config = GrowthConfig::default();
    let records = [
        record(1, TomatoType::Normal, 0, 0),    // stage 4 at now
        record(2, TomatoType::Normal, 12000, 0), // stage 0
        record(3, TomatoType::Yellow, 0, 0),    // stage 4
        record(4, TomatoType::Rainbow, 9000, 0), // stage 1
    ];

    let stats = garden_stats(&records, 14400, &config).unwrap();
    assert_eq!(stats.total_plants, 4);
    assert_eq!(stats.harvestable_plants, 2);
    assert_eq!(stats.plants_by_type[TomatoType::Normal.index() as usize], 2);
    assert_eq!(stats.plants_by_type[TomatoType::Yellow.index() as usize], 1);
    assert_eq!(stats.plants_by_type[TomatoType::Rainbow.index() as usize], 1);
    assert_eq!(stats.plants_by_stage[0], 1);
    assert_eq!(stats.plants_by_stage[1], 1);
    assert_eq!(stats.plants_by_stage[4], 2);
    assert_eq!(stats.plants_by_stage[2], 0);
    // 2 of 4 plants mutated away from Normal
    assert_eq!(stats.mutation_rate, 50.0);
    // Yellow 1 + Rainbow 10
    assert_eq!(stats.collection_score, 11);
    assert_eq!(stats.total_staked, 4_000_000_000_000_000_000);
}

#[test]
fn test_empty_garden_has_zeroed_stats() {
    let stats = garden_stats(&[], 14400, &GrowthConfig::default()).unwrap();
    assert_eq!(stats.total_plants, 0);
    assert_eq!(stats.harvestable_plants, 0);
    assert_eq!(stats.mutation_rate, 0.0);
    assert_eq!(stats.collection_score, 0);
    assert_eq!(stats.total_staked, 0);
}

// ==========================================
// COLLECTION SCORING
// ==========================================

#[test]
fn test_collection_score_weights() {
    let mut by_type = [0u32; TomatoType::COUNT];
    by_type[TomatoType::Normal.index() as usize] = 100; // worth nothing
    by_type[TomatoType::Yellow.index() as usize] = 2;
    by_type[TomatoType::Purple.index() as usize] = 1;
    by_type[TomatoType::Flame.index() as usize] = 1;
    by_type[TomatoType::Ice.index() as usize] = 1;
    by_type[TomatoType::Rainbow.index() as usize] = 1;
    assert_eq!(collection_score(&by_type), 2 + 1 + 3 + 5 + 10);
}

#[test]
fn test_collection_level_thresholds() {
    assert_eq!(CollectionLevel::from_score(0), CollectionLevel::Novice);
    assert_eq!(CollectionLevel::from_score(1), CollectionLevel::Beginner);
    assert_eq!(CollectionLevel::from_score(4), CollectionLevel::Beginner);
    assert_eq!(CollectionLevel::from_score(5), CollectionLevel::Intermediate);
    assert_eq!(CollectionLevel::from_score(14), CollectionLevel::Intermediate);
    assert_eq!(CollectionLevel::from_score(15), CollectionLevel::Advanced);
    assert_eq!(CollectionLevel::from_score(29), CollectionLevel::Advanced);
    assert_eq!(CollectionLevel::from_score(30), CollectionLevel::Legendary);
    assert!(CollectionLevel::Novice < CollectionLevel::Legendary);
}

#[test]
fn test_collection_progress_tracks_missing_and_rarest() {
    let mut by_type = [0u32; TomatoType::COUNT];
    by_type[TomatoType::Normal.index() as usize] = 3;
    by_type[TomatoType::Ice.index() as usize] = 1;

    let progress = collection_progress(&by_type);
    assert_eq!(progress.total_types, 6);
    assert_eq!(progress.collected_types, 2);
    assert_eq!(progress.rarest, Some(TomatoType::Ice));
    assert_eq!(
        progress.missing_types,
        vec![
            TomatoType::Yellow,
            TomatoType::Purple,
            TomatoType::Flame,
            TomatoType::Rainbow
        ]
    );
    assert!((progress.completion_rate - 100.0 * 2.0 / 6.0).abs() < 1e-4);
}

#[test]
fn test_all_normal_garden_has_no_rarest() {
    let mut by_type = [0u32; TomatoType::COUNT];
    by_type[TomatoType::Normal.index() as usize] = 10;

    let progress = collection_progress(&by_type);
    assert_eq!(progress.rarest, None);
    assert_eq!(progress.collected_types, 1);
}

// ==========================================
// TOKEN AMOUNTS
// ==========================================

#[test]
fn test_format_token_shows_six_decimals() {
    assert_eq!(format_token(0), "0.000000");
    assert_eq!(format_token(1_500_000_000_000_000_000), "1.500000");
    assert_eq!(format_token(123_456_789_000_000_000_000), "123.456789");
    // Dust below the display precision is truncated
    assert_eq!(format_token(999_999_999_999), "0.000000");
}

#[test]
fn test_parse_token_round_trips() {
    assert_eq!(parse_token("1.5"), Some(1_500_000_000_000_000_000));
    assert_eq!(parse_token("0.000001"), Some(1_000_000_000_000));
    assert_eq!(parse_token(".25"), Some(250_000_000_000_000_000));
    assert_eq!(parse_token("3."), Some(3_000_000_000_000_000_000));
    assert_eq!(parse_token("42"), Some(42_000_000_000_000_000_000));
}

#[test]
fn test_parse_token_rejects_garbage() {
    assert_eq!(parse_token(""), None);
    assert_eq!(parse_token("."), None);
    assert_eq!(parse_token("1.2.3"), None);
    assert_eq!(parse_token("-1"), None);
    assert_eq!(parse_token("+1"), None);
    assert_eq!(parse_token("1e18"), None);
    // More fractional digits than the token carries
    assert_eq!(parse_token("0.0000000000000000001"), None);
}
