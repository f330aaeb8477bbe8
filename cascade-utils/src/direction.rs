//! Axis-aligned directions in the voxel grid.

use crate::types::BlockPos;

/// The six faces of a block.
///
/// The ordinal values (0-5) follow the usual down, up, north, south, west, east order.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Downward (-Y direction)
    Down = 0,
    /// Upward (+Y direction)
    Up = 1,
    /// North (-Z direction)
    North = 2,
    /// South (+Z direction)
    South = 3,
    /// West (-X direction)
    West = 4,
    /// East (+X direction)
    East = 5,
}

impl Direction {
    /// All six directions in array form for iteration.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The four horizontal directions, in the order liquid searches expand them.
    pub const HORIZONTAL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Returns true for north, south, west and east.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        !matches!(self, Self::Down | Self::Up)
    }

    /// Gets the offset in the given direction.
    ///
    /// Returns (dx, dy, dz) for this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Self::Down => (0, -1, 0),
            Self::Up => (0, 1, 0),
            Self::North => (0, 0, -1),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
            Self::East => (1, 0, 0),
        }
    }

    /// Returns a new `BlockPos` relative to the given position in this direction.
    #[must_use]
    pub const fn relative(self, pos: BlockPos) -> BlockPos {
        let (dx, dy, dz) = self.offset();
        pos.offset(dx, dy, dz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn test_horizontal() {
        assert_eq!(
            Direction::ALL.iter().filter(|d| d.is_horizontal()).count(),
            Direction::HORIZONTAL.len()
        );
        for direction in Direction::HORIZONTAL {
            assert_eq!(direction.offset().1, 0);
        }
    }

    #[test]
    fn test_relative() {
        let pos = BlockPos::new(0, 64, 0);
        assert_eq!(Direction::Down.relative(pos), BlockPos::new(0, 63, 0));
        assert_eq!(Direction::West.relative(pos), BlockPos::new(-1, 64, 0));
        assert_eq!(Direction::South.relative(pos), BlockPos::new(0, 64, 1));
    }
}
