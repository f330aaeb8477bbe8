//! Moving liquid into neighbouring cells.

use cascade_utils::BlockPos;

use super::Liquid;
use super::harden::harden;
use crate::block::{Block, LiquidDisplacer};
use crate::world::{EventContext, FluidWorld};

/// The result of trying to flow into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The liquid was written into the cell.
    Flowed,
    /// The cell already holds at least as much of the same liquid.
    Satisfied,
    /// The liquid would have no depth left after spreading.
    Depleted,
    /// The flow event was cancelled.
    Cancelled,
    /// The cell held a different liquid, which reacted instead.
    Hardened,
    /// The cell does not let liquid in.
    Blocked,
}

impl FlowOutcome {
    /// Returns true if the flow step succeeded, including deliberate no-ops.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Flowed | Self::Satisfied | Self::Depleted)
    }
}

/// Checks if the liquid could flow into the block at `pos`.
///
/// `sideways` is true for horizontal steps: those never enter sources or
/// liquids of another kind.
#[must_use]
pub fn can_flow_into<W: FluidWorld + ?Sized>(
    world: &W,
    liquid: Liquid,
    pos: BlockPos,
    sideways: bool,
) -> bool {
    if !world.range().contains(pos) {
        return false;
    }
    let block = world.block(pos);
    match block {
        Block::Air => true,
        Block::Liquid(existing) => {
            !sideways || (!existing.is_source() && existing.same_kind(liquid))
        }
        Block::Placed(_) => {
            if block.removable().is_some() {
                return true;
            }
            let spread = liquid.with_depth(
                liquid.depth().saturating_sub(liquid.spread_decay()),
                !sideways,
            );
            block
                .displacer()
                .is_some_and(|displacer| displacer.can_displace(spread))
        }
    }
}

/// Makes the liquid at `src` flow into `pos`.
///
/// Horizontal flow loses one spread decay of depth; `falling` flow keeps the depth
/// of the liquid passed. Blocks washed away by the liquid are destroyed and drop
/// their items.
///
/// # Panics
/// Panics if the replaced block has liquid drops but is not breakable, which
/// means the block was registered wrong.
pub fn flow_into<W: FluidWorld + ?Sized>(
    world: &mut W,
    liquid: Liquid,
    src: BlockPos,
    pos: BlockPos,
    falling: bool,
) -> FlowOutcome {
    let new_depth = if falling {
        i16::from(liquid.depth())
    } else {
        i16::from(liquid.depth()) - i16::from(liquid.spread_decay())
    };
    if new_depth <= 0 {
        return FlowOutcome::Depleted;
    }
    let flowing = liquid.with_depth(new_depth as u8, falling);

    let existing = world.block(pos);
    if let Some(existing_liquid) = existing.as_liquid() {
        if !existing_liquid.same_kind(liquid) {
            harden(world, existing_liquid, pos, Some(src));
            return FlowOutcome::Hardened;
        }
        if existing_liquid.depth() >= flowing.depth() || existing_liquid.falling() {
            return FlowOutcome::Satisfied;
        }
        if !flow_event(world, src, pos, flowing, existing) {
            return FlowOutcome::Cancelled;
        }
        world.set_liquid(pos, Some(flowing));
        return FlowOutcome::Flowed;
    }

    let displacer = existing.displacer();
    if displacer.is_some() && world.liquid(pos).is_some() {
        return FlowOutcome::Blocked;
    }
    let removable = existing.removable();
    if removable.is_none() && !displacer.is_some_and(|displacer| displacer.can_displace(flowing))
    {
        return FlowOutcome::Blocked;
    }
    if !flow_event(world, src, pos, flowing, existing) {
        return FlowOutcome::Cancelled;
    }

    if let Some(removable) = removable {
        if !existing.is_air() {
            world.set_block(pos, Block::Air);
        }
        if removable.has_liquid_drops() {
            let Some(breakable) = existing.breakable() else {
                panic!(
                    "Block {} has liquid drops but is not breakable",
                    existing.name()
                );
            };
            for item in breakable.drops() {
                world.drop_item(pos, item);
            }
        }
    }
    world.set_liquid(pos, Some(flowing));
    FlowOutcome::Flowed
}

fn flow_event<W: FluidWorld + ?Sized>(
    world: &W,
    src: BlockPos,
    pos: BlockPos,
    liquid: Liquid,
    replaced: Block,
) -> bool {
    let mut ctx = EventContext::new();
    world
        .handler()
        .handle_liquid_flow(&mut ctx, src, pos, liquid, replaced);
    !ctx.cancelled()
}

/// Spreads the liquid one block into each horizontal neighbour whose face is open.
pub fn spread_outwards<W: FluidWorld + ?Sized>(
    world: &mut W,
    liquid: Liquid,
    pos: BlockPos,
    displacer: Option<&dyn LiquidDisplacer>,
) {
    for neighbour in world.range().horizontal_neighbours(pos) {
        if displacer.is_some_and(|displacer| displacer.side_closed(pos, neighbour)) {
            continue;
        }
        flow_into(world, liquid, pos, neighbour, false);
    }
}
