//! Deciding whether a liquid is still sustained, and shrinking it when it is not.

use cascade_utils::BlockPos;

use super::Liquid;
use crate::world::{EventContext, FluidWorld};

/// Checks if a liquid is a source block.
#[must_use]
pub const fn is_source(liquid: Liquid) -> bool {
    liquid.is_source()
}

/// Checks if a neighbour of `pos`, other than the one below, keeps the liquid there alive.
///
/// A neighbour feeds the liquid if it holds the same kind of liquid and is either
/// directly above, a source, or deeper than the liquid itself. A displacer on
/// either side closing the face between the two cells cuts the feed.
#[must_use]
pub fn is_fed_by_source<W: FluidWorld + ?Sized>(world: &W, liquid: Liquid, pos: BlockPos) -> bool {
    let own_displacer = world.block(pos).displacer();
    world
        .range()
        .neighbours(pos)
        .filter(|neighbour| neighbour.y() != pos.y() - 1)
        .any(|neighbour| {
            let Some(side) = world.liquid(neighbour) else {
                return false;
            };
            if !side.same_kind(liquid) {
                return false;
            }
            if world
                .block(neighbour)
                .displacer()
                .is_some_and(|displacer| displacer.side_closed(neighbour, pos))
                || own_displacer.is_some_and(|displacer| displacer.side_closed(pos, neighbour))
            {
                return false;
            }
            neighbour.y() == pos.y() + 1 || side.is_source() || side.depth() > liquid.depth()
        })
}

/// Returns what an unsustained liquid shrinks to, or `None` if it disappears.
#[must_use]
pub fn decayed(liquid: Liquid) -> Option<Liquid> {
    let depth = i16::from(liquid.depth()) - 2 * i16::from(liquid.spread_decay());
    (depth > 0).then(|| liquid.with_depth(depth as u8, false))
}

/// Shrinks an unsustained liquid at `pos`, removing it once its depth runs out.
///
/// Returns false if the decay event was cancelled, in which case nothing changes.
pub fn decay<W: FluidWorld + ?Sized>(world: &mut W, liquid: Liquid, pos: BlockPos) -> bool {
    let result = decayed(liquid);
    let mut ctx = EventContext::new();
    world
        .handler()
        .handle_liquid_decay(&mut ctx, pos, liquid, result);
    if ctx.cancelled() {
        return false;
    }
    log::trace!("Liquid {liquid} at {pos} decayed to {result:?}");
    world.set_liquid(pos, result);
    true
}
