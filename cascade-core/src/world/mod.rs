//! The grid the flow engine runs against.
//!
//! The engine never owns voxel data: it reads and writes through [`FluidWorld`],
//! which the surrounding server implements on top of its chunk storage.
//! [`MemoryWorld`] is a hash map backed implementation for tools and tests.

use cascade_utils::{BlockPos, Direction};

use crate::block::{Block, ItemStack};
use crate::fluid::Liquid;

mod event;
mod memory;

pub use event::{EventContext, FluidHandler, NopHandler};
pub use memory::MemoryWorld;

/// Sounds the flow engine may play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Liquid hardening into a solid block.
    Fizz,
}

/// The vertical extent of a world, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorldRange {
    /// The lowest valid y coordinate.
    pub min_y: i32,
    /// The highest valid y coordinate.
    pub max_y: i32,
}

impl WorldRange {
    /// Creates a new range.
    #[must_use]
    pub const fn new(min_y: i32, max_y: i32) -> Self {
        Self { min_y, max_y }
    }

    /// Checks if the position lies within the vertical extent.
    #[must_use]
    pub const fn contains(&self, pos: BlockPos) -> bool {
        pos.y() >= self.min_y && pos.y() <= self.max_y
    }

    /// Iterates the six face neighbours of `pos` that lie within the range.
    pub fn neighbours(self, pos: BlockPos) -> impl Iterator<Item = BlockPos> {
        Direction::ALL
            .into_iter()
            .map(move |direction| direction.relative(pos))
            .filter(move |neighbour| self.contains(*neighbour))
    }

    /// Iterates the four horizontal neighbours of `pos` that lie within the range.
    pub fn horizontal_neighbours(self, pos: BlockPos) -> impl Iterator<Item = BlockPos> {
        Direction::HORIZONTAL
            .into_iter()
            .map(move |direction| direction.relative(pos))
            .filter(move |neighbour| self.contains(*neighbour))
    }
}

/// Read/write access to the voxel grid.
///
/// A single tick holds exclusive access for its whole duration, so reads and
/// writes made during one tick are observed atomically by other ticks.
pub trait FluidWorld {
    /// Returns the block at `pos`. Positions outside the range read as air.
    fn block(&self, pos: BlockPos) -> Block;

    /// Returns the liquid at `pos`, either the block itself or the liquid
    /// held by a displacer.
    fn liquid(&self, pos: BlockPos) -> Option<Liquid>;

    /// Replaces the block at `pos`.
    fn set_block(&mut self, pos: BlockPos, block: Block);

    /// Sets or clears the liquid at `pos`. A displacer keeps its block and
    /// holds the liquid alongside; any other block is replaced.
    fn set_liquid(&mut self, pos: BlockPos, liquid: Option<Liquid>);

    /// The vertical extent of the world.
    fn range(&self) -> WorldRange;

    /// The handler receiving cancellable liquid events.
    fn handler(&self) -> &dyn FluidHandler;

    /// Spawns an item stack at `pos`.
    fn drop_item(&mut self, pos: BlockPos, item: ItemStack);

    /// Plays a sound at `pos`.
    fn play_sound(&mut self, _pos: BlockPos, _sound: Sound) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours_respect_range() {
        let range = WorldRange::new(0, 10);
        assert_eq!(range.neighbours(BlockPos::new(0, 5, 0)).count(), 6);
        assert_eq!(range.neighbours(BlockPos::new(0, 0, 0)).count(), 5);
        assert_eq!(range.neighbours(BlockPos::new(0, 10, 0)).count(), 5);
        assert_eq!(range.horizontal_neighbours(BlockPos::new(0, 0, 0)).count(), 4);
        assert_eq!(range.horizontal_neighbours(BlockPos::new(0, 11, 0)).count(), 0);
    }
}
