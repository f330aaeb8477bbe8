//! # Cascade Core
//!
//! The liquid flow engine of a voxel game server: how water and lava spread,
//! recede, fall, wash blocks away and harden when they meet.
//!
//! The engine never owns voxel data. It runs against any grid implementing
//! [`world::FluidWorld`] and reports what it did through
//! [`world::FluidHandler`] events and returned outcomes.

pub mod block;
pub mod config;
pub mod error;
pub mod fluid;
pub mod world;
