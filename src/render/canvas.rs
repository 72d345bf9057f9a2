use anyhow::{anyhow, Result};
use std::io::Write;

use crate::{RulerConfig, RulerError, Tick};

const MARK: char = '|';
const BASELINE: char = '=';

/// Fixed-size grid a ruler is drawn onto
#[derive(Debug, Clone)]
pub struct RulerCanvas {
    length: f64,
    max_height: u32,
    width: usize,
}

impl RulerCanvas {
    /// Canvas for a ruler spanning [0, length], `width` columns wide.
    pub fn new(length: f64, max_height: u32, width: usize) -> Result<Self, RulerError> {
        if !length.is_finite() || length <= 0.0 {
            return Err(RulerError::InvalidLength(length));
        }
        if width < 2 {
            return Err(RulerError::InvalidWidth(width));
        }
        Ok(Self {
            length,
            max_height,
            width,
        })
    }

    /// Canvas sized for a validated configuration.
    pub fn for_config(config: &RulerConfig, width: usize) -> Result<Self, RulerError> {
        config.validate()?;
        Self::new(config.length, config.max_height as u32, width)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Column a position falls in, `None` when it lies off the ruler.
    pub fn column(&self, position: f64) -> Option<usize> {
        if !(0.0..=self.length).contains(&position) {
            return None;
        }
        let scaled = position / self.length * (self.width - 1) as f64;
        Some(scaled.round() as usize)
    }

    /// Write the ruler diagram.
    ///
    /// Ticks taller than the canvas are clipped; ticks off the ruler are skipped.
    pub fn write<W: Write>(&self, writer: &mut W, ticks: &[Tick], title: &str) -> Result<()> {
        let mut columns = vec![0u32; self.width];
        for tick in ticks {
            if let Some(col) = self.column(tick.position) {
                columns[col] = columns[col].max(tick.height);
            }
        }

        if !title.is_empty() {
            writeln!(writer, "{title}")?;
        }

        for row in (1..=self.max_height).rev() {
            let line: String = columns
                .iter()
                .map(|&height| if height >= row { MARK } else { ' ' })
                .collect();
            writeln!(writer, "{}", line.trim_end())?;
        }

        let baseline: String = std::iter::repeat(BASELINE).take(self.width).collect();
        writeln!(writer, "{baseline}")?;
        writeln!(
            writer,
            "0{:>pad$}",
            self.length,
            pad = self.width - 1
        )?;

        writer.flush()?;
        Ok(())
    }

    /// Render the ruler diagram into a string (useful for tests and redraws).
    pub fn render(&self, ticks: &[Tick], title: &str) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(&mut buffer, ticks, title)?;
        String::from_utf8(buffer).map_err(|_| anyhow!("rendered ruler is not valid UTF-8"))
    }
}
