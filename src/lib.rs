//! # Ruler ticks via divide and conquer
//!
//! Marks a ruler the way a carpenter's rule is laid out: a tick at the
//! midpoint of every segment, one unit shorter at each level of subdivision.
//!
//! ## Core Algorithm
//!
//! 1. **Conquer**: emit a tick of height h at the midpoint of (left, right)
//! 2. **Divide**: recurse into (left, mid) and (mid, right) with height h - 1
//! 3. **Stop**: a branch with height <= 0 contributes nothing
//!
//! Result: 2^h - 1 ticks in pre-order, produced either all at once
//! ([`generate_all`]) or one per step ([`generate_lazy`]).
//!
//! ## Usage Example
//!
//! ```
//! use ruler_ticks::{generate_all, generate_lazy, Tick};
//!
//! let ticks = generate_all(0.0, 16.0, 2)?;
//! assert_eq!(ticks, vec![Tick::new(8.0, 2), Tick::new(4.0, 1), Tick::new(12.0, 1)]);
//!
//! let first: Vec<_> = generate_lazy(0.0, 16.0, 2)?.take(2).collect();
//! assert_eq!(first, &ticks[..2]);
//! # Ok::<(), ruler_ticks::RulerError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod generator; // Eager and lazy tick generation
pub mod render;    // Text diagram of a ruler
pub mod tree;      // Midpoint recursion tree
mod tick;

// Re-exports for convenience
pub use generator::{generate_all, generate_lazy, steps, tick_count, Step};
pub use render::RulerCanvas;
pub use tick::Tick;
pub use tree::{Interval, TickStream};

use std::time::Duration;

use thiserror::Error;

/// Largest maximum height a ruler configuration accepts
pub const MAX_HEIGHT: i32 = 10;

/// Errors raised by the generators and the ruler driver
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RulerError {
    /// Interval with zero or negative width, or a non-finite endpoint
    #[error("Invalid interval ({left}, {right}): left must be finite and less than right")]
    InvalidInterval {
        /// Left endpoint supplied
        left: f64,
        /// Right endpoint supplied
        right: f64,
    },

    /// Interval too narrow for its magnitude to be split `height` times
    #[error("Interval ({left}, {right}) cannot be split {height} levels deep without midpoints landing on an endpoint")]
    UnresolvableInterval {
        /// Left endpoint supplied
        left: f64,
        /// Right endpoint supplied
        right: f64,
        /// Height requested
        height: i32,
    },

    /// Ruler length that is not finite and positive
    #[error("Invalid ruler length {0}")]
    InvalidLength(f64),

    /// Maximum height outside the accepted range
    #[error("Invalid maximum height {height}: expected 1..={max}")]
    InvalidHeight {
        /// Height supplied
        height: i32,
        /// Largest accepted height
        max: i32,
    },

    /// Canvas too narrow to draw on
    #[error("Invalid canvas width {0}: need at least 2 columns")]
    InvalidWidth(usize),
}

/// Parameters of one ruler run
#[derive(Debug, Clone, PartialEq)]
pub struct RulerConfig {
    /// Ruler length L; the ruler spans [0, L]
    pub length: f64,

    /// Tallest tick height h
    pub max_height: i32,

    /// Pause between animation steps
    pub step_delay: Duration,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            length: 128.0,
            max_height: 5,
            step_delay: Duration::from_millis(250),
        }
    }
}

impl RulerConfig {
    /// Configuration for a ruler of the given length and height
    pub fn new(length: f64, max_height: i32) -> Self {
        Self {
            length,
            max_height,
            ..Self::default()
        }
    }

    /// Override the animation pacing
    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    /// Check length and height bounds
    pub fn validate(&self) -> Result<(), RulerError> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(RulerError::InvalidLength(self.length));
        }
        if !(1..=MAX_HEIGHT).contains(&self.max_height) {
            return Err(RulerError::InvalidHeight {
                height: self.max_height,
                max: MAX_HEIGHT,
            });
        }
        Ok(())
    }

    /// Whole-ruler interval [0, L]
    pub fn interval(&self) -> Result<Interval, RulerError> {
        self.validate()?;
        Interval::new(0.0, self.length)
    }

    /// All ticks of the ruler, computed eagerly
    pub fn ticks(&self) -> Result<Vec<Tick>, RulerError> {
        self.validate()?;
        generate_all(0.0, self.length, self.max_height)
    }

    /// All ticks of the ruler, emitted lazily
    pub fn stream(&self) -> Result<TickStream, RulerError> {
        self.validate()?;
        generate_lazy(0.0, self.length, self.max_height)
    }

    /// Tick count a full run produces: 2^h - 1
    pub fn expected_ticks(&self) -> u64 {
        tick_count(self.max_height).unwrap_or(u64::MAX)
    }

    /// Diagram title
    pub fn title(&self) -> String {
        format!("Ruler L={}, h={}", self.length, self.max_height)
    }
}
