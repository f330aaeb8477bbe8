//! Liquid flow simulation.
//!
//! A liquid tick resolves, in order: decay of unsustained liquid, downward
//! flow, and horizontal spread towards the nearest drop. [`FluidEngine`] runs
//! the whole tick; the submodules expose the individual steps.

pub mod classify;
mod engine;
pub mod flow;
pub mod harden;
mod liquid;
pub mod path;
pub mod queue;
pub mod vertical;

pub use engine::{FluidEngine, TickOutcome};
pub use flow::FlowOutcome;
pub use liquid::{Liquid, LiquidKind, MAX_DEPTH};
pub use queue::{LiquidPath, LiquidQueue, QueuePool};
pub use vertical::VerticalFlow;
