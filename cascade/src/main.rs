//! # Cascade
//!
//! Runs the liquid flow engine on a small demo scene and prints a horizontal
//! slice of the world after every step.

use std::{env, path::Path};

use anyhow::Context;
use cascade_core::config::FluidConfig;
use cascade_core::fluid::{FluidEngine, LiquidKind, TickOutcome};
use cascade_core::world::{FluidWorld, MemoryWorld};
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

mod scene;
mod view;

const CONFIG_PATH: &str = "config/cascade_config.json5";
const DEFAULT_STEPS: usize = 8;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let steps = match env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid step count {arg:?}"))?,
        None => DEFAULT_STEPS,
    };
    let config = FluidConfig::load_or_create(Path::new(CONFIG_PATH))
        .with_context(|| format!("failed to load {CONFIG_PATH}"))?;
    let engine = FluidEngine::new(config);

    let mut world = scene::build();
    println!("{}", view::render(&world, scene::SLICE_Y, scene::RADIUS));
    for step in 1..=steps {
        let _span = tracing::info_span!("step", step).entered();
        run_step(&engine, &mut world);
        println!("{}", view::render(&world, scene::SLICE_Y, scene::RADIUS));
    }
    Ok(())
}

/// Ticks every liquid once, top to bottom, then lets lava react to what moved.
fn run_step(engine: &FluidEngine, world: &mut MemoryWorld) {
    let mut moved = 0;
    let mut decayed = 0;
    for pos in world.liquid_positions() {
        match engine.tick(world, pos) {
            TickOutcome::Idle | TickOutcome::DecayCancelled => {}
            TickOutcome::Decayed => decayed += 1,
            TickOutcome::Fell(_) | TickOutcome::FollowedPaths(_) | TickOutcome::SpreadOutwards => {
                moved += 1;
            }
        }
    }

    let mut hardened = 0;
    for pos in world.liquid_positions() {
        let is_lava = world
            .liquid(pos)
            .is_some_and(|liquid| liquid.kind() == LiquidKind::Lava);
        if is_lava && engine.neighbour_update(world, pos) {
            hardened += 1;
        }
    }

    tracing::info!(
        liquids = world.liquid_positions().len(),
        moved,
        decayed,
        hardened,
        "Step finished"
    );
}

fn init_logging() -> anyhow::Result<()> {
    LogTracer::init().context("failed to forward log records")?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    set_global_default(subscriber).context("failed to install the tracing subscriber")?;
    Ok(())
}
