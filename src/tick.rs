//! Tick value type

use std::fmt;

/// One mark on the ruler
///
/// Position is the midpoint of the interval that produced it; height is the
/// residual recursion height at that interval (always at least 1).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tick {
    /// Position along the ruler
    pub position: f64,

    /// Mark height
    pub height: u32,
}

impl Tick {
    /// Create tick
    pub fn new(position: f64, height: u32) -> Self {
        Self { position, height }
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.position, self.height)
    }
}

impl From<(f64, u32)> for Tick {
    fn from((position, height): (f64, u32)) -> Self {
        Self::new(position, height)
    }
}
