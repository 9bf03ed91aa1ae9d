//! Offline growth timeline simulator.
//!
//! Projects a plant's current stage and the wall-clock timestamp of every
//! stage transition under the current watering regime. `now` defaults to
//! the system clock, the same fallback the client uses when no block
//! timestamp is available.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use garden_catalog::stage_profile;
use garden_growth::{
    compute_growth, stage_reached_at, GrowthConfig, GrowthStage, DEFAULT_GROWTH_TIME_PER_STAGE,
    DEFAULT_MAX_GROWTH_STAGE, DEFAULT_WATERING_ACCELERATION,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "garden-sim",
    about = "Project a Tomato Garden plant's growth timeline"
)]
struct Args {
    /// Planting timestamp, seconds since epoch
    #[arg(long)]
    planted_at: u64,

    /// Most recent watering timestamp (0 = never watered)
    #[arg(long, default_value_t = 0)]
    last_watered: u64,

    /// Evaluation timestamp; defaults to the system clock
    #[arg(long)]
    now: Option<u64>,

    /// Effective seconds required per stage
    #[arg(long, default_value_t = DEFAULT_GROWTH_TIME_PER_STAGE)]
    growth_time: u64,

    /// Terminal stage index
    #[arg(long, default_value_t = DEFAULT_MAX_GROWTH_STAGE)]
    max_stage: u8,

    /// Multiplier for time elapsed after the latest watering
    #[arg(long, default_value_t = DEFAULT_WATERING_ACCELERATION)]
    acceleration: u64,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Transition {
    stage: u8,
    name: &'static str,
    /// Wall-clock timestamp of the transition; absent if unreachable
    reached_at: Option<u64>,
    reached: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Timeline {
    now: u64,
    stage: u8,
    stage_name: &'static str,
    time_to_next_stage: Option<u64>,
    transitions: Vec<Transition>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = GrowthConfig {
        growth_time_per_stage: args.growth_time,
        max_growth_stage: args.max_stage,
        watering_acceleration: args.acceleration,
    };

    let now = match args.now {
        Some(now) => now,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs(),
    };

    let growth = compute_growth(args.planted_at, args.last_watered, now, &config)?;

    let mut transitions = Vec::new();
    for stage in 1..=config.max_growth_stage {
        let reached_at = stage_reached_at(args.planted_at, args.last_watered, stage, &config)?;
        transitions.push(Transition {
            stage,
            name: stage_profile(GrowthStage::from_index(stage)).name,
            reached_at,
            reached: stage <= growth.stage,
        });
    }

    let timeline = Timeline {
        now,
        stage: growth.stage,
        stage_name: stage_profile(GrowthStage::from_index(growth.stage)).name,
        time_to_next_stage: growth.time_to_next_stage,
        transitions,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&timeline)?);
        return Ok(());
    }

    println!(
        "stage {} ({}) at t={}",
        timeline.stage, timeline.stage_name, timeline.now
    );
    match timeline.time_to_next_stage {
        Some(seconds) => println!("next stage in {}s of effective time", seconds),
        None => println!("mature, ready to harvest"),
    }
    for transition in &timeline.transitions {
        let marker = if transition.reached { "x" } else { " " };
        match transition.reached_at {
            Some(at) => println!(
                "[{}] stage {} ({}) at t={}",
                marker, transition.stage, transition.name, at
            ),
            None => println!(
                "[{}] stage {} ({}) unreachable under current regime",
                marker, transition.stage, transition.name
            ),
        }
    }

    Ok(())
}
