//! Blocks as seen by the flow engine.
//!
//! The grid hands out [`Block`] values. Air and liquids are built in; every other
//! block is a `'static` [`BlockBehaviour`] exposing the capabilities a liquid cares
//! about: whether it can be displaced, removed or broken.

use std::fmt;
use std::ptr;

use cascade_utils::BlockPos;

use crate::fluid::Liquid;

pub mod vanilla;
pub mod waterlog;

pub use waterlog::{DisplacePolicy, Waterloggable};

/// A reference to a registered block behaviour.
pub type BlockRef = &'static dyn BlockBehaviour;

/// An item stack dropped into the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemStack {
    /// The item's registry name.
    pub item: &'static str,
    /// How many items are in the stack.
    pub count: u8,
}

impl ItemStack {
    /// Creates a new item stack.
    #[must_use]
    pub const fn new(item: &'static str, count: u8) -> Self {
        Self { item, count }
    }
}

/// A block that may hold a liquid alongside itself, such as a slab or seagrass.
pub trait LiquidDisplacer: Send + Sync {
    /// Returns true if the liquid passed may be placed inside this block.
    fn can_displace(&self, liquid: Liquid) -> bool;

    /// Returns true if the face of the block at `pos` pointing towards `side`
    /// does not let liquid through.
    fn side_closed(&self, pos: BlockPos, side: BlockPos) -> bool;
}

/// A block destroyed when liquid flows into it.
pub trait LiquidRemovable: Send + Sync {
    /// Returns true if the block drops its items when washed away.
    /// Such a block must also be [`Breakable`].
    fn has_liquid_drops(&self) -> bool;
}

/// A block that yields drops when broken.
pub trait Breakable: Send + Sync {
    /// The items dropped when the block is broken without a tool.
    fn drops(&self) -> Vec<ItemStack>;
}

/// Behaviour of a registered block.
pub trait BlockBehaviour: Send + Sync + fmt::Debug {
    /// The registry name of the block.
    fn name(&self) -> &'static str;

    /// The displacement capability, if the block has one.
    fn displacer(&self) -> Option<&dyn LiquidDisplacer> {
        None
    }

    /// The removal capability, if the block has one.
    fn removable(&self) -> Option<&dyn LiquidRemovable> {
        None
    }

    /// The break capability, if the block has one.
    fn breakable(&self) -> Option<&dyn Breakable> {
        None
    }
}

/// Air and liquids are washed away without drops.
struct NoDrops;

impl LiquidRemovable for NoDrops {
    fn has_liquid_drops(&self) -> bool {
        false
    }
}

static NO_DROPS: NoDrops = NoDrops;

/// The occupant of a voxel.
#[derive(Debug, Clone, Copy)]
pub enum Block {
    /// Nothing at all.
    Air,
    /// A liquid occupying the whole voxel.
    Liquid(Liquid),
    /// Any other block.
    Placed(BlockRef),
}

impl Block {
    /// Returns true if this is air.
    #[must_use]
    pub const fn is_air(&self) -> bool {
        matches!(self, Self::Air)
    }

    /// Returns the liquid if this block is one.
    #[must_use]
    pub const fn as_liquid(&self) -> Option<Liquid> {
        match self {
            Self::Liquid(liquid) => Some(*liquid),
            _ => None,
        }
    }

    /// The registry name of the block.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Air => "air",
            Self::Liquid(liquid) => liquid.kind().name(),
            Self::Placed(block) => block.name(),
        }
    }

    /// The displacement capability of the block.
    #[must_use]
    pub fn displacer(&self) -> Option<&'static dyn LiquidDisplacer> {
        match *self {
            Self::Placed(block) => block.displacer(),
            _ => None,
        }
    }

    /// The removal capability of the block. Air and liquids are always removable.
    #[must_use]
    pub fn removable(&self) -> Option<&'static dyn LiquidRemovable> {
        match *self {
            Self::Air | Self::Liquid(_) => Some(&NO_DROPS),
            Self::Placed(block) => block.removable(),
        }
    }

    /// The break capability of the block.
    #[must_use]
    pub fn breakable(&self) -> Option<&'static dyn Breakable> {
        match *self {
            Self::Placed(block) => block.breakable(),
            _ => None,
        }
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Air, Self::Air) => true,
            (Self::Liquid(a), Self::Liquid(b)) => a == b,
            (Self::Placed(a), Self::Placed(b)) => ptr::addr_eq(*a, *b),
            _ => false,
        }
    }
}

impl Eq for Block {}

impl From<Liquid> for Block {
    fn from(liquid: Liquid) -> Self {
        Self::Liquid(liquid)
    }
}

impl From<BlockRef> for Block {
    fn from(block: BlockRef) -> Self {
        Self::Placed(block)
    }
}
