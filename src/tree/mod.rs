//! Midpoint recursion tree
//!
//! Implicit representation: no explicit tree stored!
//! Nodes are intervals (left, right) computed on-demand, and the
//! residual height of a node is the tick height it produces.

mod interval;
mod traversal;

pub use interval::Interval;
pub use traversal::TickStream;
