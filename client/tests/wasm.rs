#![cfg(target_arch = "wasm32")]

use garden_client::clock::GardenClock;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn clock_projects_stages_across_the_boundary() {
    let clock = GardenClock::new(None, None, None).unwrap();
    assert_eq!(clock.growth_stage(0, 0, 0).unwrap(), 0);
    assert_eq!(clock.growth_stage(0, 0, 3600).unwrap(), 1);
    assert_eq!(clock.seconds_to_next_stage(0, 0, 0).unwrap(), Some(3600));
    assert_eq!(clock.seconds_to_next_stage(0, 0, 14400).unwrap(), None);
}

#[wasm_bindgen_test]
fn clock_rejects_zero_growth_time() {
    assert!(GardenClock::new(Some(0), None, None).is_err());
}
