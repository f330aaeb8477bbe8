//! Downward flow, which takes priority over spreading sideways.

use cascade_utils::BlockPos;

use super::flow::{FlowOutcome, can_flow_into, flow_into};
use super::{Liquid, MAX_DEPTH};
use crate::block::LiquidDisplacer;
use crate::world::FluidWorld;

/// What happened below a liquid during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalFlow {
    /// The cell below cannot receive liquid.
    Blocked,
    /// The cell below could receive liquid, but the face between them is closed.
    Closed,
    /// Liquid was pushed into the cell below.
    Fell(FlowOutcome),
}

impl VerticalFlow {
    /// Returns true if the liquid went down, leaving nothing to spread sideways.
    #[must_use]
    pub const fn consumes_tick(self) -> bool {
        matches!(self, Self::Fell(_))
    }
}

/// The liquid to spread sideways with, and what happened below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalResolution {
    /// The liquid after resolving. A falling liquid that lost the cell below
    /// becomes a full falling column.
    pub liquid: Liquid,
    /// The downward flow outcome.
    pub flow: VerticalFlow,
}

/// Pushes the liquid at `pos` downward if the cell below can receive it.
pub fn resolve_vertical<W: FluidWorld + ?Sized>(
    world: &mut W,
    liquid: Liquid,
    pos: BlockPos,
    displacer: Option<&dyn LiquidDisplacer>,
) -> VerticalResolution {
    let below = pos.below();
    if !can_flow_into(world, liquid, below, false) {
        let liquid = if liquid.falling() {
            liquid.with_depth(MAX_DEPTH, true)
        } else {
            liquid
        };
        return VerticalResolution {
            liquid,
            flow: VerticalFlow::Blocked,
        };
    }
    if displacer.is_some_and(|displacer| displacer.side_closed(pos, below)) {
        return VerticalResolution {
            liquid,
            flow: VerticalFlow::Closed,
        };
    }
    let outcome = flow_into(world, liquid.with_depth(MAX_DEPTH, true), pos, below, true);
    VerticalResolution {
        liquid,
        flow: VerticalFlow::Fell(outcome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::vanilla;
    use crate::world::{MemoryWorld, WorldRange};

    const POS: BlockPos = BlockPos::new(0, 2, 0);

    fn world() -> MemoryWorld {
        MemoryWorld::new(WorldRange::new(0, 8))
    }

    #[test]
    fn test_falls_into_air() {
        let mut world = world();
        let resolution = resolve_vertical(&mut world, Liquid::water(3, false), POS, None);
        assert_eq!(resolution.flow, VerticalFlow::Fell(FlowOutcome::Flowed));
        assert!(resolution.flow.consumes_tick());
        assert_eq!(world.liquid(POS.below()), Some(Liquid::water(8, true)));
    }

    #[test]
    fn test_blocked_falling_becomes_full() {
        let mut world = world();
        world.set_block(POS.below(), vanilla::stone());
        let resolution = resolve_vertical(&mut world, Liquid::water(4, true), POS, None);
        assert_eq!(resolution.flow, VerticalFlow::Blocked);
        assert_eq!(resolution.liquid, Liquid::water(8, true));
        assert!(!resolution.flow.consumes_tick());
    }

    #[test]
    fn test_blocked_still_liquid_unchanged() {
        let mut world = world();
        world.set_block(POS.below(), vanilla::stone());
        let resolution = resolve_vertical(&mut world, Liquid::lava(6, false), POS, None);
        assert_eq!(resolution.liquid, Liquid::lava(6, false));
    }

    #[test]
    fn test_bottom_of_world_blocks() {
        let mut world = world();
        let pos = BlockPos::new(0, 0, 0);
        let resolution = resolve_vertical(&mut world, Liquid::water(8, false), pos, None);
        assert_eq!(resolution.flow, VerticalFlow::Blocked);
    }

    #[test]
    fn test_closed_face_stops_fall() {
        let mut world = world();
        let resolution = resolve_vertical(
            &mut world,
            Liquid::water(8, false),
            POS,
            vanilla::bottom_slab().displacer(),
        );
        assert_eq!(resolution.flow, VerticalFlow::Closed);
        assert_eq!(world.liquid(POS.below()), None);
    }
}
