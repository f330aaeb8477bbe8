//! Finding the nearest places a liquid can drop down from.
//!
//! The search is a breadth first expansion over the horizontal plane of the
//! liquid. Every step costs twice the liquid's spread decay; once a cell with an
//! open drop below is found, nodes further away than it are no longer expanded.
//! Every path of the shortest length found is returned so that ties flood together.

use cascade_utils::{BlockPos, Direction};
use smallvec::SmallVec;

use super::Liquid;
use super::flow::can_flow_into;
use super::queue::{LiquidNode, LiquidPath, LiquidQueue};
use crate::block::LiquidDisplacer;
use crate::world::FluidWorld;

/// Calculates the shortest paths from `pos` to cells the liquid could drop down from.
///
/// `displacer` is the displacer at `pos`, if any: its closed faces gate the first
/// step in each direction. `queue` must be empty and is left holding the search
/// arena. A node is abandoned once `depth + search_slack <= 0`.
///
/// Returns an empty list if no such cell is in reach.
pub fn calculate_liquid_paths<W: FluidWorld + ?Sized>(
    world: &W,
    liquid: Liquid,
    pos: BlockPos,
    displacer: Option<&dyn LiquidDisplacer>,
    queue: &mut LiquidQueue,
    search_slack: i8,
) -> Vec<LiquidPath> {
    debug_assert!(queue.is_empty(), "liquid path search needs an empty queue");

    queue.push_back(LiquidNode::seed(pos.x(), pos.z(), liquid.depth() as i8));
    let cost = (2 * liquid.spread_decay()) as i8;
    let mut paths: Vec<LiquidPath> = Vec::new();
    let mut first = true;

    while let Some((index, node)) = queue.pop_front() {
        for direction in Direction::HORIZONTAL {
            let neighbour = node.neighbour(index, direction, cost);
            if first
                && displacer
                    .is_some_and(|displacer| displacer.side_closed(pos, neighbour.pos(pos.y())))
            {
                continue;
            }
            if spread_neighbour(world, liquid, pos, neighbour, queue, search_slack) {
                queue.set_shortest_path(neighbour.path_len());
                paths.push(queue.path(neighbour, pos.y()));
            }
        }
        first = false;
    }

    if let Some(shortest) = paths.iter().map(SmallVec::len).min() {
        paths.retain(|path| path.len() == shortest);
    }
    paths
}

/// Tries to extend the search into `node`. This moves no liquid.
///
/// Returns true if `node` is a terminal: the liquid could enter it and drop
/// further from there. Nodes the liquid can enter but not drop from are queued.
fn spread_neighbour<W: FluidWorld + ?Sized>(
    world: &W,
    liquid: Liquid,
    src: BlockPos,
    node: LiquidNode,
    queue: &mut LiquidQueue,
    search_slack: i8,
) -> bool {
    if i16::from(node.depth) + i16::from(search_slack) <= 0 {
        return false;
    }
    if node.path_len() > queue.shortest_path() {
        return false;
    }
    let pos = node.pos(src.y());
    if !can_flow_into(world, liquid, pos, true) {
        return false;
    }
    if can_flow_into(world, liquid, pos.below(), false) {
        return true;
    }
    queue.push_back(node);
    false
}
