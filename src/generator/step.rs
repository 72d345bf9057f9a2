//! Numbered steps over a lazy tick stream

use std::fmt;

use crate::tree::TickStream;
use crate::Tick;

/// A tick together with the 1-based step that emitted it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Step number, starting at 1
    pub index: usize,

    /// Tick emitted at this step
    pub tick: Tick,
}

impl Step {
    /// Frame caption for incremental display
    pub fn caption(&self) -> String {
        format!(
            "Step {}: tick at x={:.2}, height={}",
            self.index, self.tick.position, self.tick.height
        )
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.caption())
    }
}

/// Number the ticks of a stream as they are emitted
pub fn steps(stream: TickStream) -> impl Iterator<Item = Step> {
    stream
        .enumerate()
        .map(|(i, tick)| Step { index: i + 1, tick })
}
