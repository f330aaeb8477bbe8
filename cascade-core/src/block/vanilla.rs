//! Block definitions the flow engine and its tests rely on.

use cascade_utils::Direction;

use super::waterlog::{DisplacePolicy, Waterloggable};
use super::{Block, BlockBehaviour, Breakable, ItemStack, LiquidRemovable};

/// A block liquids cannot enter.
#[derive(Debug)]
pub struct SolidBlock {
    name: &'static str,
}

impl SolidBlock {
    /// Creates a new solid block.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl BlockBehaviour for SolidBlock {
    fn name(&self) -> &'static str {
        self.name
    }
}

/// A block washed away by liquid, dropping its items.
#[derive(Debug)]
pub struct WashableBlock {
    name: &'static str,
    drops: &'static [ItemStack],
}

impl WashableBlock {
    /// Creates a new washable block.
    #[must_use]
    pub const fn new(name: &'static str, drops: &'static [ItemStack]) -> Self {
        Self { name, drops }
    }
}

impl LiquidRemovable for WashableBlock {
    fn has_liquid_drops(&self) -> bool {
        !self.drops.is_empty()
    }
}

impl Breakable for WashableBlock {
    fn drops(&self) -> Vec<ItemStack> {
        self.drops.to_vec()
    }
}

impl BlockBehaviour for WashableBlock {
    fn name(&self) -> &'static str {
        self.name
    }

    fn removable(&self) -> Option<&dyn LiquidRemovable> {
        Some(self)
    }

    fn breakable(&self) -> Option<&dyn Breakable> {
        Some(self)
    }
}

/// Plain stone.
pub static STONE: SolidBlock = SolidBlock::new("stone");
/// Cobblestone.
pub static COBBLESTONE: SolidBlock = SolidBlock::new("cobblestone");
/// Obsidian.
pub static OBSIDIAN: SolidBlock = SolidBlock::new("obsidian");

/// Tall grass, dropping seeds when washed away.
pub static TALL_GRASS: WashableBlock =
    WashableBlock::new("tall_grass", &[ItemStack::new("wheat_seeds", 1)]);
/// A torch, dropping itself when washed away.
pub static TORCH: WashableBlock = WashableBlock::new("torch", &[ItemStack::new("torch", 1)]);

/// Seagrass, holding any water.
pub static SEAGRASS: Waterloggable =
    Waterloggable::new("seagrass", DisplacePolicy::FlowingWater, &[]);
/// A bottom slab.
pub static BOTTOM_SLAB: Waterloggable =
    Waterloggable::new("bottom_slab", DisplacePolicy::SourceWater, &[Direction::Down]);

/// Stone.
#[must_use]
pub fn stone() -> Block {
    Block::Placed(&STONE)
}

/// Cobblestone, left behind when flowing lava meets water.
#[must_use]
pub fn cobblestone() -> Block {
    Block::Placed(&COBBLESTONE)
}

/// Obsidian, left behind when a lava source meets water.
#[must_use]
pub fn obsidian() -> Block {
    Block::Placed(&OBSIDIAN)
}

/// Tall grass, washed away by liquids.
#[must_use]
pub fn tall_grass() -> Block {
    Block::Placed(&TALL_GRASS)
}

/// A torch, washed away by liquids.
#[must_use]
pub fn torch() -> Block {
    Block::Placed(&TORCH)
}

/// Seagrass, holding any water.
#[must_use]
pub fn seagrass() -> Block {
    Block::Placed(&SEAGRASS)
}

/// A bottom slab, holding only water sources and closed at its bottom face.
#[must_use]
pub fn bottom_slab() -> Block {
    Block::Placed(&BOTTOM_SLAB)
}
