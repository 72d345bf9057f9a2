//! Tick generators
//!
//! Two renditions of the same divide-and-conquer recursion:
//!
//! 1. **Eager**: [`generate_all`] walks the whole tree up front and returns
//!    every tick in pre-order.
//! 2. **Lazy**: [`generate_lazy`] hands back a [`TickStream`] that emits one
//!    tick per `next` call, in the same order.
//!
//! Consuming the lazy stream to exhaustion yields exactly what the eager
//! generator returns for the same inputs.

mod step;

pub use step::{steps, Step};

use tracing::debug;

use crate::tree::{Interval, TickStream};
use crate::{RulerError, Tick};

/// Upper bound on up-front allocation for the eager generator
const PREALLOC_LIMIT: u64 = 1 << 16;

/// Number of ticks produced from an initial height: 2^h - 1
///
/// Zero for non-positive heights, `None` if the count exceeds `u64`.
pub fn tick_count(height: i32) -> Option<u64> {
    match height {
        h if h <= 0 => Some(0),
        h if h <= 64 => Some(u64::MAX >> (64 - h)),
        _ => None,
    }
}

/// Validate the root interval and that `height` levels of splitting stay
/// strictly inside it
fn checked_root(left: f64, right: f64, height: i32) -> Result<Interval, RulerError> {
    let root = Interval::new(left, right)?;
    if !root.resolves(height) {
        return Err(RulerError::UnresolvableInterval {
            left,
            right,
            height,
        });
    }
    Ok(root)
}

/// Compute every tick for the interval (left, right) at once
///
/// Returns ticks in generation order: the interval's own midpoint first, then
/// the left half's ticks, then the right half's.
///
/// Recursion depth equals `height`. Heights too deep for the interval's
/// floating-point resolution are rejected up front, which caps the depth at
/// roughly 1100 frames.
pub fn generate_all(left: f64, right: f64, height: i32) -> Result<Vec<Tick>, RulerError> {
    let root = checked_root(left, right, height)?;
    debug!(%root, height, "generating ticks eagerly");

    let capacity = tick_count(height).map_or(PREALLOC_LIMIT, |n| n.min(PREALLOC_LIMIT));
    let mut ticks = Vec::with_capacity(capacity as usize);
    collect_ticks(root, height, &mut ticks);

    Ok(ticks)
}

/// Produce the ticks for the interval (left, right) one at a time
///
/// Nothing is computed until the stream is polled. Dropping the stream early
/// abandons the rest of the traversal.
pub fn generate_lazy(left: f64, right: f64, height: i32) -> Result<TickStream, RulerError> {
    let root = checked_root(left, right, height)?;
    debug!(%root, height, "generating ticks lazily");

    Ok(TickStream::new(root, height))
}

fn collect_ticks(interval: Interval, height: i32, ticks: &mut Vec<Tick>) {
    if height <= 0 {
        return;
    }

    let mid = interval.midpoint();
    debug_assert!(interval.contains(mid), "midpoint {} outside {}", mid, interval);
    ticks.push(Tick::new(mid, height as u32));

    let (left, right) = interval.children();
    collect_ticks(left, height - 1, ticks);
    collect_ticks(right, height - 1, ticks);
}
