//! Implicit recursion node representation
//!
//! Node = interval (left, right) on the real line, left < right
//! Children computed via midpoint: m = left + (right - left) / 2
//!   Left child: (left, m)
//!   Right child: (m, right)

use std::fmt;

use crate::RulerError;

/// Narrowest segment width, in ulps of the largest endpoint, still split
const MIN_ULPS: f64 = 4.0;

/// Gap to the next representable value above a positive finite `x`
fn ulp(x: f64) -> f64 {
    f64::from_bits(x.to_bits() + 1) - x
}

/// Ruler segment (implicit - just two endpoints)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interval {
    /// Left endpoint
    pub left: f64,

    /// Right endpoint
    pub right: f64,
}

impl Interval {
    /// Create a segment spanning (left, right)
    ///
    /// Rejects zero or negative width, non-finite endpoints and a width that
    /// overflows `f64`.
    pub fn new(left: f64, right: f64) -> Result<Self, RulerError> {
        if !left.is_finite()
            || !right.is_finite()
            || left >= right
            || !(right - left).is_finite()
        {
            return Err(RulerError::InvalidInterval { left, right });
        }
        Ok(Self { left, right })
    }

    /// Segment width
    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Compute midpoint for split
    ///
    /// Both generators go through here so their positions agree exactly.
    #[inline]
    pub fn midpoint(&self) -> f64 {
        self.left + (self.right - self.left) / 2.0
    }

    /// Get children via midpoint split
    ///
    /// Returns: ((left, mid), (mid, right))
    pub fn children(&self) -> (Interval, Interval) {
        let mid = self.midpoint();
        let left_child = Interval {
            left: self.left,
            right: mid,
        };
        let right_child = Interval {
            left: mid,
            right: self.right,
        };

        (left_child, right_child)
    }

    /// Whether `height` levels of splitting keep every midpoint strictly inside
    /// its segment
    ///
    /// The narrowest segment, width / 2^(height-1), has to span at least
    /// `MIN_ULPS` units in the last place at the largest endpoint magnitude.
    /// Rounding a midpoint costs at most half an ulp per level, so the
    /// narrowest real segment never drops below two ulps.
    pub fn resolves(&self, height: i32) -> bool {
        if height <= 0 {
            return true;
        }
        let magnitude = self.left.abs().max(self.right.abs());
        let narrowest = self.width() / 2f64.powi(height - 1);
        narrowest >= MIN_ULPS * ulp(magnitude)
    }

    /// Strict containment, endpoints excluded
    #[inline]
    pub fn contains(&self, position: f64) -> bool {
        self.left < position && position < self.right
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}
