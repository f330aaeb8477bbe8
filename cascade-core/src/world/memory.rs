//! A hash map backed world.

use rustc_hash::FxHashMap;

use cascade_utils::BlockPos;

use super::{FluidHandler, FluidWorld, NopHandler, Sound, WorldRange};
use crate::block::{Block, ItemStack};
use crate::fluid::Liquid;

/// A world held entirely in memory.
///
/// Unset positions are air. Liquids held by displacers live in a second layer
/// next to the block layer. Drops and sounds are recorded instead of spawned.
pub struct MemoryWorld {
    blocks: FxHashMap<BlockPos, Block>,
    /// Liquids stored alongside displacer blocks.
    displaced: FxHashMap<BlockPos, Liquid>,
    range: WorldRange,
    handler: Box<dyn FluidHandler>,
    drops: Vec<(BlockPos, ItemStack)>,
    sounds: Vec<(BlockPos, Sound)>,
}

impl MemoryWorld {
    /// Creates an empty world spanning the given vertical range.
    #[must_use]
    pub fn new(range: WorldRange) -> Self {
        Self {
            blocks: FxHashMap::default(),
            displaced: FxHashMap::default(),
            range,
            handler: Box::new(NopHandler),
            drops: Vec::new(),
            sounds: Vec::new(),
        }
    }

    /// Replaces the event handler.
    #[must_use]
    pub fn with_handler(mut self, handler: impl FluidHandler + 'static) -> Self {
        self.handler = Box::new(handler);
        self
    }

    /// Sets every block in the cuboid spanned by `from` and `to`, both inclusive.
    pub fn fill(&mut self, from: BlockPos, to: BlockPos, block: Block) {
        for x in from.x().min(to.x())..=from.x().max(to.x()) {
            for y in from.y().min(to.y())..=from.y().max(to.y()) {
                for z in from.z().min(to.z())..=from.z().max(to.z()) {
                    self.set_block(BlockPos::new(x, y, z), block);
                }
            }
        }
    }

    /// Returns every position holding a liquid, top to bottom, then by x and z.
    #[must_use]
    pub fn liquid_positions(&self) -> Vec<BlockPos> {
        let mut positions: Vec<BlockPos> = self
            .blocks
            .iter()
            .filter(|(_, block)| block.as_liquid().is_some())
            .map(|(pos, _)| *pos)
            .chain(self.displaced.keys().copied())
            .collect();
        positions.sort_unstable_by_key(|pos| (-pos.y(), pos.x(), pos.z()));
        positions
    }

    /// Items dropped so far.
    #[must_use]
    pub fn drops(&self) -> &[(BlockPos, ItemStack)] {
        &self.drops
    }

    /// Sounds played so far.
    #[must_use]
    pub fn sounds(&self) -> &[(BlockPos, Sound)] {
        &self.sounds
    }
}

impl FluidWorld for MemoryWorld {
    fn block(&self, pos: BlockPos) -> Block {
        if !self.range.contains(pos) {
            return Block::Air;
        }
        self.blocks.get(&pos).copied().unwrap_or(Block::Air)
    }

    fn liquid(&self, pos: BlockPos) -> Option<Liquid> {
        match self.block(pos) {
            Block::Liquid(liquid) => Some(liquid),
            _ => self.displaced.get(&pos).copied(),
        }
    }

    fn set_block(&mut self, pos: BlockPos, block: Block) {
        if !self.range.contains(pos) {
            return;
        }
        if block.displacer().is_none() {
            self.displaced.remove(&pos);
        }
        if block.is_air() {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, block);
        }
    }

    fn set_liquid(&mut self, pos: BlockPos, liquid: Option<Liquid>) {
        if !self.range.contains(pos) {
            return;
        }
        let current = self.block(pos);
        match (current.displacer(), liquid) {
            (Some(_), Some(liquid)) => {
                self.displaced.insert(pos, liquid);
            }
            (Some(_), None) => {
                self.displaced.remove(&pos);
            }
            (None, Some(liquid)) => self.set_block(pos, Block::Liquid(liquid)),
            (None, None) => {
                if current.as_liquid().is_some() {
                    self.set_block(pos, Block::Air);
                }
            }
        }
    }

    fn range(&self) -> WorldRange {
        self.range
    }

    fn handler(&self) -> &dyn FluidHandler {
        self.handler.as_ref()
    }

    fn drop_item(&mut self, pos: BlockPos, item: ItemStack) {
        self.drops.push((pos, item));
    }

    fn play_sound(&mut self, pos: BlockPos, sound: Sound) {
        self.sounds.push((pos, sound));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::vanilla;

    fn world() -> MemoryWorld {
        MemoryWorld::new(WorldRange::new(-4, 16))
    }

    #[test]
    fn test_unset_is_air() {
        let world = world();
        assert_eq!(world.block(BlockPos::new(3, 3, 3)), Block::Air);
        assert_eq!(world.liquid(BlockPos::new(3, 3, 3)), None);
    }

    #[test]
    fn test_out_of_range_writes_are_ignored() {
        let mut world = world();
        let pos = BlockPos::new(0, 17, 0);
        world.set_block(pos, vanilla::stone());
        world.set_liquid(pos, Some(Liquid::water(8, false)));
        assert_eq!(world.block(pos), Block::Air);
        assert!(world.liquid_positions().is_empty());
    }

    #[test]
    fn test_displacer_layer() {
        let mut world = world();
        let pos = BlockPos::new(1, 0, 1);
        world.set_block(pos, vanilla::seagrass());
        world.set_liquid(pos, Some(Liquid::water(5, false)));

        assert_eq!(world.block(pos), vanilla::seagrass());
        assert_eq!(world.liquid(pos), Some(Liquid::water(5, false)));
        assert_eq!(world.liquid_positions(), vec![pos]);

        world.set_liquid(pos, None);
        assert_eq!(world.block(pos), vanilla::seagrass());
        assert_eq!(world.liquid(pos), None);
    }

    #[test]
    fn test_replacing_displacer_drops_its_liquid() {
        let mut world = world();
        let pos = BlockPos::new(0, 0, 0);
        world.set_block(pos, vanilla::seagrass());
        world.set_liquid(pos, Some(Liquid::water(8, false)));
        world.set_block(pos, vanilla::stone());
        assert_eq!(world.liquid(pos), None);
    }

    #[test]
    fn test_clearing_liquid_block_leaves_air() {
        let mut world = world();
        let pos = BlockPos::new(0, 0, 0);
        world.set_liquid(pos, Some(Liquid::lava(4, false)));
        assert_eq!(world.block(pos), Block::Liquid(Liquid::lava(4, false)));
        world.set_liquid(pos, None);
        assert_eq!(world.block(pos), Block::Air);

        // Clearing the liquid of a plain block leaves the block alone.
        world.set_block(pos, vanilla::stone());
        world.set_liquid(pos, None);
        assert_eq!(world.block(pos), vanilla::stone());
    }

    #[test]
    fn test_liquid_positions_order() {
        let mut world = world();
        world.set_liquid(BlockPos::new(2, 0, 0), Some(Liquid::water(8, false)));
        world.set_liquid(BlockPos::new(-1, 0, 0), Some(Liquid::water(8, false)));
        world.set_liquid(BlockPos::new(0, 3, 0), Some(Liquid::water(8, true)));
        assert_eq!(
            world.liquid_positions(),
            vec![
                BlockPos::new(0, 3, 0),
                BlockPos::new(-1, 0, 0),
                BlockPos::new(2, 0, 0),
            ]
        );
    }
}
