//! Text rendering of a ruler
//!
//! Draws the ticks produced by the generators as a character grid: one row
//! per unit of height above a baseline, with the ruler's end positions
//! labelled underneath.

mod canvas;

pub use canvas::RulerCanvas;
