//! Cancellable liquid events.

use cascade_utils::BlockPos;

use crate::block::Block;
use crate::fluid::Liquid;

/// Context passed to a handler. Cancelling it skips the pending mutation.
#[derive(Debug, Default, Clone, Copy)]
pub struct EventContext {
    cancelled: bool,
}

impl EventContext {
    /// Creates a new, not cancelled, context.
    #[must_use]
    pub const fn new() -> Self {
        Self { cancelled: false }
    }

    /// Cancels the event.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Returns true if the event was cancelled.
    #[must_use]
    pub const fn cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Receives liquid events before the grid is changed.
///
/// All methods default to doing nothing, which lets the change go through.
pub trait FluidHandler {
    /// A liquid at `pos` that is no longer fed is about to shrink to `after`,
    /// or disappear if `after` is `None`.
    fn handle_liquid_decay(
        &self,
        _ctx: &mut EventContext,
        _pos: BlockPos,
        _before: Liquid,
        _after: Option<Liquid>,
    ) {
    }

    /// Liquid from `from` is about to flow into `into`, replacing `replaced`.
    fn handle_liquid_flow(
        &self,
        _ctx: &mut EventContext,
        _from: BlockPos,
        _into: BlockPos,
        _liquid: Liquid,
        _replaced: Block,
    ) {
    }

    /// The liquid at `pos` is about to harden into `new_block` after touching `other`.
    fn handle_liquid_harden(
        &self,
        _ctx: &mut EventContext,
        _pos: BlockPos,
        _hardened: Liquid,
        _other: Liquid,
        _new_block: Block,
    ) {
    }
}

/// A handler that lets every event through.
#[derive(Debug, Default, Clone, Copy)]
pub struct NopHandler;

impl FluidHandler for NopHandler {}
