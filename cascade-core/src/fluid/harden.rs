//! Liquids turning solid when a different liquid meets them.

use cascade_utils::BlockPos;

use super::{Liquid, LiquidKind};
use crate::block::{Block, vanilla};
use crate::world::{EventContext, FluidWorld, Sound};

/// Hardens the liquid at `pos` in reaction to a different liquid.
///
/// `flown_into_by` is the position the other liquid flowed in from, or `None`
/// when reacting to a neighbour update. Returns true if the liquid turned solid.
pub fn harden<W: FluidWorld + ?Sized>(
    world: &mut W,
    liquid: Liquid,
    pos: BlockPos,
    flown_into_by: Option<BlockPos>,
) -> bool {
    match liquid.kind() {
        LiquidKind::Lava => harden_lava(world, liquid, pos, flown_into_by),
        LiquidKind::Water => harden_water(world, liquid, pos, flown_into_by),
    }
}

fn is_kind(kind: LiquidKind) -> impl Fn(&Liquid) -> bool {
    move |liquid| liquid.kind() == kind
}

/// Lava touching water turns into obsidian if it is a source, cobblestone otherwise.
fn harden_lava<W: FluidWorld + ?Sized>(
    world: &mut W,
    lava: Liquid,
    pos: BlockPos,
    flown_into_by: Option<BlockPos>,
) -> bool {
    let water = match flown_into_by {
        Some(src) => world.liquid(src).filter(is_kind(LiquidKind::Water)),
        // Water below lava does not touch it.
        None => world
            .range()
            .neighbours(pos)
            .filter(|neighbour| neighbour.y() != pos.y() - 1)
            .find_map(|neighbour| {
                world
                    .block(neighbour)
                    .as_liquid()
                    .filter(is_kind(LiquidKind::Water))
            }),
    };
    let Some(water) = water else {
        return false;
    };
    let new_block = if lava.is_source() {
        vanilla::obsidian()
    } else {
        vanilla::cobblestone()
    };
    solidify(world, pos, lava, water, new_block)
}

/// Water hit by lava from above turns into stone, from the side into cobblestone.
fn harden_water<W: FluidWorld + ?Sized>(
    world: &mut W,
    water: Liquid,
    pos: BlockPos,
    flown_into_by: Option<BlockPos>,
) -> bool {
    let Some(src) = flown_into_by else {
        return false;
    };
    if let Some(lava) = world
        .block(pos.above())
        .as_liquid()
        .filter(is_kind(LiquidKind::Lava))
    {
        return solidify(world, pos, water, lava, vanilla::stone());
    }
    if let Some(lava) = world.liquid(src).filter(is_kind(LiquidKind::Lava)) {
        return solidify(world, pos, water, lava, vanilla::cobblestone());
    }
    false
}

fn solidify<W: FluidWorld + ?Sized>(
    world: &mut W,
    pos: BlockPos,
    hardened: Liquid,
    other: Liquid,
    new_block: Block,
) -> bool {
    let mut ctx = EventContext::new();
    world
        .handler()
        .handle_liquid_harden(&mut ctx, pos, hardened, other, new_block);
    if ctx.cancelled() {
        return false;
    }
    log::trace!(
        "Liquid {hardened} at {pos} hardened into {} after touching {other}",
        new_block.name()
    );
    world.set_block(pos, new_block);
    world.play_sound(pos, Sound::Fizz);
    true
}
