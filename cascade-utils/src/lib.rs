//! # Cascade Utils
//!
//! Value types shared by the cascade crates.

pub mod direction;
pub mod math;
pub mod types;

pub use direction::Direction;
pub use types::BlockPos;
