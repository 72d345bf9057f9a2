//! Explicit-stack pre-order traversal
//!
//! Suspended recursion frames are replaced by a stack of pending
//! (interval, height) work items. Popping a frame emits its midpoint tick;
//! its children are pushed right-then-left so the left subtree drains first.

use std::iter::FusedIterator;

use tracing::trace;

use super::Interval;
use crate::generator::tick_count;
use crate::Tick;

/// Pending recursion level
#[derive(Debug, Clone, Copy)]
struct Frame {
    interval: Interval,
    height: u32,
}

/// Lazy tick sequence
///
/// Stack depth: at most h frames
/// Each `next` pops one frame and pushes up to two
#[derive(Debug, Clone)]
pub struct TickStream {
    /// Pending frames, top = next tick to emit
    stack: Vec<Frame>,

    /// Ticks still to come, `None` once the count overflows `u64`
    remaining: Option<u64>,
}

impl TickStream {
    /// Create traversal rooted at `root`
    ///
    /// Non-positive heights produce an already exhausted stream.
    pub fn new(root: Interval, height: i32) -> Self {
        let mut stack = Vec::new();
        if height > 0 {
            stack.push(Frame {
                interval: root,
                height: height as u32,
            });
        }

        Self {
            stack,
            remaining: tick_count(height),
        }
    }

    /// Number of pending frames
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Iterator for TickStream {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        let frame = self.stack.pop()?;
        let mid = frame.interval.midpoint();
        debug_assert!(
            frame.interval.contains(mid),
            "midpoint {} outside {}",
            mid,
            frame.interval
        );
        let tick = Tick::new(mid, frame.height);

        if frame.height > 1 {
            let (left, right) = frame.interval.children();
            self.stack.push(Frame {
                interval: right,
                height: frame.height - 1,
            });
            self.stack.push(Frame {
                interval: left,
                height: frame.height - 1,
            });
        }

        self.remaining = self.remaining.map(|n| n.saturating_sub(1));
        trace!(position = tick.position, height = tick.height, depth = self.stack.len(), "emit tick");

        Some(tick)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.and_then(|n| usize::try_from(n).ok()) {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for TickStream {}
