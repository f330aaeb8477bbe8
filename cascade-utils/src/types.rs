// Position types wrapping the math primitives.

use std::fmt::{self, Display};

use crate::direction::Direction;
use crate::math::Vector3;

/// A block position in the voxel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    /// Creates a new block position.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// The x coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.0.x
    }

    /// The y coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.0.y
    }

    /// The z coordinate.
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.0.z
    }

    /// Returns the position offset by the given amounts.
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.0.x + dx, self.0.y + dy, self.0.z + dz)
    }

    /// Returns the position directly below this one.
    #[must_use]
    pub const fn below(&self) -> Self {
        self.offset(0, -1, 0)
    }

    /// Returns the position directly above this one.
    #[must_use]
    pub const fn above(&self) -> Self {
        self.offset(0, 1, 0)
    }

    /// Returns the neighbouring position in the given direction.
    #[must_use]
    pub fn side(&self, direction: Direction) -> Self {
        direction.relative(*self)
    }

    /// Returns the direction pointing from this position to an adjacent one,
    /// or `None` if the two positions are not face neighbours.
    #[must_use]
    pub fn direction_to(&self, other: BlockPos) -> Option<Direction> {
        let delta = other.0 - self.0;
        Direction::ALL
            .into_iter()
            .find(|direction| direction.offset() == (delta.x, delta.y, delta.z))
    }
}

impl Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}
