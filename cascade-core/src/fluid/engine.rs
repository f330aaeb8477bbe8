use cascade_utils::BlockPos;
use smallvec::SmallVec;

use super::classify::{decay, is_fed_by_source, is_source};
use super::flow::{FlowOutcome, flow_into, spread_outwards};
use super::harden::harden;
use super::path::calculate_liquid_paths;
use super::queue::QueuePool;
use super::vertical::{VerticalFlow, resolve_vertical};
use super::{Liquid, LiquidKind};
use crate::config::FluidConfig;
use crate::world::FluidWorld;

/// What a single liquid tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing moved: the cell holds no liquid, or too little to spread.
    Idle,
    /// The liquid was not sustained and shrank or vanished.
    Decayed,
    /// The liquid was not sustained but the decay event was cancelled.
    DecayCancelled,
    /// The liquid went down. Nothing spreads sideways on such a tick.
    Fell(FlowOutcome),
    /// The liquid flowed towards the nearest drops, into this many directions.
    FollowedPaths(usize),
    /// No drop was in reach, so the liquid spread into every open neighbour.
    SpreadOutwards,
}

/// Runs liquid ticks against a [`FluidWorld`].
///
/// The engine holds no grid state, only the search queues it reuses between
/// ticks, so a single engine can serve every world of a server.
#[derive(Debug)]
pub struct FluidEngine {
    config: FluidConfig,
    pool: QueuePool,
}

impl FluidEngine {
    /// Creates a new engine.
    #[must_use]
    pub fn new(config: FluidConfig) -> Self {
        log::debug!(
            "Fluid engine using up to {} queues of {} nodes, search slack {}",
            config.queue_pool_size,
            config.queue_capacity,
            config.search_slack
        );
        let pool = QueuePool::new(config.queue_pool_size, config.queue_capacity);
        Self { config, pool }
    }

    /// The configuration the engine was built with.
    #[must_use]
    pub const fn config(&self) -> &FluidConfig {
        &self.config
    }

    /// The pool of search queues.
    #[must_use]
    pub const fn pool(&self) -> &QueuePool {
        &self.pool
    }

    /// Ticks the liquid at `pos`, whether it fills the cell or sits in a displacer.
    pub fn tick<W: FluidWorld + ?Sized>(&self, world: &mut W, pos: BlockPos) -> TickOutcome {
        match world.liquid(pos) {
            Some(liquid) => self.tick_liquid(world, liquid, pos),
            None => TickOutcome::Idle,
        }
    }

    /// Ticks `liquid`, which the caller read from `pos`.
    pub fn tick_liquid<W: FluidWorld + ?Sized>(
        &self,
        world: &mut W,
        liquid: Liquid,
        pos: BlockPos,
    ) -> TickOutcome {
        if !is_source(liquid) && !is_fed_by_source(world, liquid, pos) {
            return if decay(world, liquid, pos) {
                TickOutcome::Decayed
            } else {
                TickOutcome::DecayCancelled
            };
        }

        let displacer = world.block(pos).displacer();
        let resolution = resolve_vertical(world, liquid, pos, displacer);
        if let VerticalFlow::Fell(outcome) = resolution.flow {
            return TickOutcome::Fell(outcome);
        }

        let liquid = resolution.liquid;
        if liquid.depth() <= liquid.spread_decay() {
            return TickOutcome::Idle;
        }

        let paths = {
            let mut queue = self.pool.checkout();
            calculate_liquid_paths(
                world,
                liquid,
                pos,
                displacer,
                &mut queue,
                self.config.search_slack as i8,
            )
        };
        if paths.is_empty() {
            spread_outwards(world, liquid, pos, displacer);
            return TickOutcome::SpreadOutwards;
        }

        let mut first_steps: SmallVec<[BlockPos; 4]> = SmallVec::new();
        for step in paths.iter().filter_map(|path| path.first().copied()) {
            if !first_steps.contains(&step) {
                first_steps.push(step);
            }
        }
        for &step in &first_steps {
            flow_into(world, liquid, pos, step, false);
        }
        TickOutcome::FollowedPaths(first_steps.len())
    }

    /// Reacts to a change next to `pos`: lava touching water hardens.
    ///
    /// Returns true if the liquid at `pos` turned solid.
    pub fn neighbour_update<W: FluidWorld + ?Sized>(&self, world: &mut W, pos: BlockPos) -> bool {
        match world.liquid(pos) {
            Some(liquid) if liquid.kind() == LiquidKind::Lava => harden(world, liquid, pos, None),
            _ => false,
        }
    }
}

impl Default for FluidEngine {
    fn default() -> Self {
        Self::new(FluidConfig::default())
    }
}
