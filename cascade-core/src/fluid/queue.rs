//! Search queues for liquid path finding.
//!
//! A [`LiquidQueue`] doubles as the node arena of a search: nodes are appended and
//! never removed until the queue is reset, so a node's parent is just an index
//! into the same buffer. Queues are recycled through a [`QueuePool`] to keep the
//! per-tick path search free of allocations.

use std::mem;
use std::ops::{Deref, DerefMut};

use crossbeam::queue::ArrayQueue;
use smallvec::SmallVec;

use cascade_utils::{BlockPos, Direction};

/// Shortest path bound of a queue that has not found a path yet.
pub const UNBOUNDED: usize = usize::MAX;

/// A path from the first step away from a liquid to a cell it can drop from.
pub type LiquidPath = SmallVec<[BlockPos; 8]>;

/// A horizontal position visited by the path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidNode {
    /// The x coordinate.
    pub x: i32,
    /// The z coordinate.
    pub z: i32,
    /// Depth budget left at this node.
    pub depth: i8,
    parent: Option<u32>,
    path_len: u16,
}

impl LiquidNode {
    /// Creates the node a search starts from.
    #[must_use]
    pub const fn seed(x: i32, z: i32, depth: i8) -> Self {
        Self {
            x,
            z,
            depth,
            parent: None,
            path_len: 0,
        }
    }

    /// Returns the neighbour of this node in a horizontal direction, costing `cost` depth.
    /// `index` is this node's position in the queue it was taken from.
    #[must_use]
    pub fn neighbour(&self, index: u32, direction: Direction, cost: i8) -> Self {
        let (dx, _, dz) = direction.offset();
        Self {
            x: self.x + dx,
            z: self.z + dz,
            depth: self.depth.saturating_sub(cost),
            parent: Some(index),
            path_len: self.path_len + 1,
        }
    }

    /// Number of steps between the seed and this node.
    #[must_use]
    pub const fn path_len(&self) -> usize {
        self.path_len as usize
    }

    /// Index of the node this one was expanded from.
    #[must_use]
    pub const fn parent(&self) -> Option<u32> {
        self.parent
    }

    /// The node's position at height `y`.
    #[must_use]
    pub const fn pos(&self, y: i32) -> BlockPos {
        BlockPos::new(self.x, y, self.z)
    }
}

/// A FIFO queue of search nodes that keeps every node it ever held.
#[derive(Debug)]
pub struct LiquidQueue {
    nodes: Vec<LiquidNode>,
    cursor: usize,
    shortest_path: usize,
}

impl LiquidQueue {
    /// Creates an empty queue able to hold `capacity` nodes without reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            cursor: 0,
            shortest_path: UNBOUNDED,
        }
    }

    /// Appends a node and returns its index.
    pub fn push_back(&mut self, node: LiquidNode) -> u32 {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        index
    }

    /// Takes the next node to expand. The node stays in the arena.
    pub fn pop_front(&mut self) -> Option<(u32, LiquidNode)> {
        let node = *self.nodes.get(self.cursor)?;
        let index = self.cursor as u32;
        self.cursor += 1;
        Some((index, node))
    }

    /// Number of nodes waiting to be expanded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len() - self.cursor
    }

    /// Checks if no nodes are waiting to be expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the shortest path found so far, or [`UNBOUNDED`].
    #[must_use]
    pub const fn shortest_path(&self) -> usize {
        self.shortest_path
    }

    /// Records the length of a newly found path.
    pub fn set_shortest_path(&mut self, len: usize) {
        self.shortest_path = len;
    }

    /// Number of nodes the queue can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Builds the path ending at `terminal`, excluding the seed, at height `y`.
    ///
    /// `terminal` does not need to be in the queue, but its ancestors must be.
    #[must_use]
    pub fn path(&self, terminal: LiquidNode, y: i32) -> LiquidPath {
        let mut path = LiquidPath::with_capacity(terminal.path_len());
        let mut node = terminal;
        while let Some(parent) = node.parent {
            path.push(node.pos(y));
            node = self.nodes[parent as usize];
        }
        path.reverse();
        path
    }

    /// Clears the queue, keeping its allocation.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.cursor = 0;
        self.shortest_path = UNBOUNDED;
    }
}

impl Default for LiquidQueue {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

/// A bounded pool of reusable [`LiquidQueue`]s, safe to share between workers.
///
/// Checked out queues are reset before they go back into the pool. When the
/// pool is empty a fresh queue is allocated; when it is full a returned queue
/// is dropped.
#[derive(Debug)]
pub struct QueuePool {
    queues: ArrayQueue<LiquidQueue>,
    queue_capacity: usize,
}

impl QueuePool {
    /// Creates a pool retaining up to `pool_size` queues of `queue_capacity` nodes each.
    #[must_use]
    pub fn new(pool_size: usize, queue_capacity: usize) -> Self {
        Self {
            queues: ArrayQueue::new(pool_size.max(1)),
            queue_capacity,
        }
    }

    /// Takes a queue out of the pool. It returns when the guard is dropped.
    #[must_use]
    pub fn checkout(&self) -> PooledQueue<'_> {
        let queue = self.queues.pop().unwrap_or_else(|| {
            log::trace!("Liquid queue pool empty, allocating a new queue");
            LiquidQueue::with_capacity(self.queue_capacity)
        });
        PooledQueue { pool: self, queue }
    }

    /// Number of idle queues in the pool.
    #[must_use]
    pub fn idle(&self) -> usize {
        self.queues.len()
    }

    fn release(&self, mut queue: LiquidQueue) {
        queue.reset();
        if self.queues.push(queue).is_err() {
            log::trace!("Liquid queue pool full, dropping returned queue");
        }
    }
}

/// A queue checked out of a [`QueuePool`].
pub struct PooledQueue<'a> {
    pool: &'a QueuePool,
    queue: LiquidQueue,
}

impl Deref for PooledQueue<'_> {
    type Target = LiquidQueue;

    fn deref(&self) -> &Self::Target {
        &self.queue
    }
}

impl DerefMut for PooledQueue<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.queue
    }
}

impl Drop for PooledQueue<'_> {
    fn drop(&mut self) {
        self.pool.release(mem::take(&mut self.queue));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = LiquidQueue::with_capacity(4);
        let seed = LiquidNode::seed(0, 0, 8);
        let seed_index = queue.push_back(seed);
        queue.push_back(seed.neighbour(seed_index, Direction::East, 2));
        queue.push_back(seed.neighbour(seed_index, Direction::West, 2));

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop_front().map(|(i, _)| i), Some(0));
        let (_, east) = queue.pop_front().expect("east node");
        assert_eq!((east.x, east.z, east.depth), (1, 0, 6));
        let (_, west) = queue.pop_front().expect("west node");
        assert_eq!((west.x, west.z), (-1, 0));
        assert!(queue.pop_front().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_path_walks_parents() {
        let mut queue = LiquidQueue::default();
        let seed = LiquidNode::seed(5, 5, 8);
        let seed_index = queue.push_back(seed);
        let a = seed.neighbour(seed_index, Direction::South, 2);
        let a_index = queue.push_back(a);
        let b = a.neighbour(a_index, Direction::East, 2);
        let b_index = queue.push_back(b);
        let terminal = b.neighbour(b_index, Direction::East, 2);

        assert_eq!(terminal.path_len(), 3);
        assert_eq!(
            queue.path(terminal, 64).as_slice(),
            &[
                BlockPos::new(5, 64, 6),
                BlockPos::new(6, 64, 6),
                BlockPos::new(7, 64, 6),
            ]
        );
        assert!(queue.path(seed, 64).is_empty());
    }

    #[test]
    fn test_depth_saturates() {
        let node = LiquidNode::seed(0, 0, i8::MIN + 1);
        assert_eq!(node.neighbour(0, Direction::North, 4).depth, i8::MIN);
    }

    #[test]
    fn test_reset() {
        let mut queue = LiquidQueue::with_capacity(8);
        queue.push_back(LiquidNode::seed(0, 0, 8));
        queue.pop_front();
        queue.set_shortest_path(3);
        queue.reset();

        assert!(queue.is_empty());
        assert_eq!(queue.shortest_path(), UNBOUNDED);
        assert!(queue.pop_front().is_none());
        assert!(queue.capacity() >= 8);
    }

    #[test]
    fn test_pool_returns_reset_queues() {
        let pool = QueuePool::new(1, 16);
        assert_eq!(pool.idle(), 0);
        {
            let mut queue = pool.checkout();
            queue.push_back(LiquidNode::seed(1, 1, 8));
            queue.set_shortest_path(2);
        }
        assert_eq!(pool.idle(), 1);

        let queue = pool.checkout();
        assert_eq!(pool.idle(), 0);
        assert!(queue.is_empty());
        assert_eq!(queue.shortest_path(), UNBOUNDED);
        assert!(queue.capacity() >= 16);
    }

    #[test]
    fn test_pool_drops_overflow() {
        let pool = QueuePool::new(1, 4);
        let first = pool.checkout();
        let second = pool.checkout();
        drop(first);
        drop(second);
        assert_eq!(pool.idle(), 1);
    }
}
