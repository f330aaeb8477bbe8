//! Waterloggable blocks.

use cascade_utils::{BlockPos, Direction};

use super::{BlockBehaviour, LiquidDisplacer};
use crate::fluid::{Liquid, LiquidKind};

/// Which liquids a waterloggable block accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplacePolicy {
    /// Only a water source (depth 8, not falling).
    SourceWater,
    /// Any water, flowing or not.
    FlowingWater,
}

impl DisplacePolicy {
    /// Checks if a block with this policy may hold the liquid passed.
    #[must_use]
    pub fn accepts(self, liquid: Liquid) -> bool {
        if liquid.kind() != LiquidKind::Water {
            return false;
        }
        match self {
            Self::SourceWater => liquid.is_source(),
            Self::FlowingWater => true,
        }
    }
}

/// A block that can hold water next to itself.
///
/// Faces listed in `closed_faces` block liquid moving between this block and
/// the neighbour on that side.
#[derive(Debug)]
pub struct Waterloggable {
    name: &'static str,
    policy: DisplacePolicy,
    closed_faces: &'static [Direction],
}

impl Waterloggable {
    /// Creates a new waterloggable block.
    #[must_use]
    pub const fn new(
        name: &'static str,
        policy: DisplacePolicy,
        closed_faces: &'static [Direction],
    ) -> Self {
        Self {
            name,
            policy,
            closed_faces,
        }
    }

    /// The displacement policy of this block.
    #[must_use]
    pub const fn policy(&self) -> DisplacePolicy {
        self.policy
    }
}

impl LiquidDisplacer for Waterloggable {
    fn can_displace(&self, liquid: Liquid) -> bool {
        self.policy.accepts(liquid)
    }

    fn side_closed(&self, pos: BlockPos, side: BlockPos) -> bool {
        pos.direction_to(side)
            .is_some_and(|face| self.closed_faces.contains(&face))
    }
}

impl BlockBehaviour for Waterloggable {
    fn name(&self) -> &'static str {
        self.name
    }

    fn displacer(&self) -> Option<&dyn LiquidDisplacer> {
        Some(self)
    }
}
