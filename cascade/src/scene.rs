//! The demo scene: a spring on a stone platform above a field with a lava pool.

use cascade_core::block::{Block, vanilla};
use cascade_core::fluid::{Liquid, LiquidKind};
use cascade_core::world::{FluidWorld, MemoryWorld, WorldRange};
use cascade_utils::BlockPos;

/// The layer printed after every step, just above the floor.
pub const SLICE_Y: i32 = 1;
/// Half the width of the printed slice.
pub const RADIUS: i32 = 8;

/// Builds the scene in a fresh world.
pub fn build() -> MemoryWorld {
    let mut world = MemoryWorld::new(WorldRange::new(-4, 12));
    world.fill(
        BlockPos::new(-RADIUS, 0, -RADIUS),
        BlockPos::new(RADIUS, 0, RADIUS),
        vanilla::stone(),
    );

    // Spring
    world.fill(BlockPos::new(-2, 1, -2), BlockPos::new(2, 3, 2), vanilla::stone());
    world.set_liquid(BlockPos::new(0, 4, 0), Some(Liquid::source(LiquidKind::Water)));

    // A pit the water finds its way into.
    world.set_block(BlockPos::new(6, 0, 0), Block::Air);
    world.set_block(BlockPos::new(6, -1, 0), vanilla::stone());

    world.set_liquid(BlockPos::new(-6, 1, -5), Some(Liquid::source(LiquidKind::Lava)));

    world.set_block(BlockPos::new(4, 1, 1), vanilla::tall_grass());
    world.set_block(BlockPos::new(-4, 1, 3), vanilla::torch());
    world.set_block(BlockPos::new(3, 1, -3), vanilla::seagrass());
    world
}
