//! Liquid values.
//!
//! A [`Liquid`] is a snapshot of the fluid occupying one voxel. It is read from
//! the grid, transformed, and written back; nothing about it is kept between ticks.

use std::fmt::{self, Display};

/// The depth of a full liquid cell.
pub const MAX_DEPTH: u8 = 8;

/// The kind of a liquid. Liquids of different kinds never merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiquidKind {
    /// Water, losing one depth level per block spread.
    Water,
    /// Lava, losing two depth levels per block spread.
    Lava,
}

impl LiquidKind {
    /// Returns the depth lost per propagation step.
    #[must_use]
    pub const fn spread_decay(self) -> u8 {
        match self {
            Self::Water => 1,
            Self::Lava => 2,
        }
    }

    /// Returns the registry name of this liquid.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Lava => "lava",
        }
    }
}

/// A liquid occupying a single voxel.
///
/// A depth of 8 combined with `falling = false` is a source: it never decays on its own.
/// A falling liquid is treated as full depth when deciding flow priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Liquid {
    kind: LiquidKind,
    depth: u8,
    falling: bool,
}

impl Liquid {
    /// Creates a new liquid value.
    #[must_use]
    pub const fn new(kind: LiquidKind, depth: u8, falling: bool) -> Self {
        debug_assert!(depth <= MAX_DEPTH);
        Self {
            kind,
            depth,
            falling,
        }
    }

    /// Creates a source of the given kind.
    #[must_use]
    pub const fn source(kind: LiquidKind) -> Self {
        Self::new(kind, MAX_DEPTH, false)
    }

    /// Shorthand for a water liquid.
    #[must_use]
    pub const fn water(depth: u8, falling: bool) -> Self {
        Self::new(LiquidKind::Water, depth, falling)
    }

    /// Shorthand for a lava liquid.
    #[must_use]
    pub const fn lava(depth: u8, falling: bool) -> Self {
        Self::new(LiquidKind::Lava, depth, falling)
    }

    /// Returns the same kind of liquid with a different depth and falling state.
    #[must_use]
    pub const fn with_depth(self, depth: u8, falling: bool) -> Self {
        Self::new(self.kind, depth, falling)
    }

    /// The kind of this liquid.
    #[must_use]
    pub const fn kind(self) -> LiquidKind {
        self.kind
    }

    /// The depth of this liquid, 1 to 8.
    #[must_use]
    pub const fn depth(self) -> u8 {
        self.depth
    }

    /// Whether this liquid is falling.
    #[must_use]
    pub const fn falling(self) -> bool {
        self.falling
    }

    /// The depth lost per propagation step.
    #[must_use]
    pub const fn spread_decay(self) -> u8 {
        self.kind.spread_decay()
    }

    /// Checks if this liquid is a source.
    #[must_use]
    pub const fn is_source(self) -> bool {
        self.depth == MAX_DEPTH && !self.falling
    }

    /// Checks if both liquids are of the same kind.
    #[must_use]
    pub fn same_kind(self, other: Liquid) -> bool {
        self.kind == other.kind
    }
}

impl Display for Liquid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[depth={}", self.kind.name(), self.depth)?;
        if self.falling {
            write!(f, ", falling")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source() {
        assert!(Liquid::source(LiquidKind::Water).is_source());
        assert!(!Liquid::water(8, true).is_source());
        assert!(!Liquid::water(7, false).is_source());
        assert!(Liquid::lava(8, false).is_source());
    }

    #[test]
    fn test_with_depth_keeps_kind() {
        let lava = Liquid::lava(8, false).with_depth(4, true);
        assert_eq!(lava.kind(), LiquidKind::Lava);
        assert_eq!(lava.depth(), 4);
        assert!(lava.falling());
        assert_eq!(lava.spread_decay(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Liquid::water(3, false).to_string(), "water[depth=3]");
        assert_eq!(Liquid::lava(8, true).to_string(), "lava[depth=8, falling]");
    }
}
