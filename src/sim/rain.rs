//! Falling-character column rain
//!
//! One column per glyph-wide slot. Each tick every column emits one glyph at
//! its current row and moves down a row; columns that have fallen past the
//! bottom edge restart at the top with a small per-tick chance, so restarts
//! stay staggered instead of happening in lockstep.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::Effect;
use super::surface::Surface;
use crate::consts::*;

/// Glyph set the columns draw from
pub const GLYPHS: &str = "アイウエオカサスセソ01BEF9JAVASPRINGDOCKERPOSTGRES><{}[]//";

/// Brightness of a single emitted glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlyphTone {
    /// Bright, slightly larger head glyph
    Lead,
    /// Regular cyan/green glyph; channels in `[180, 255)`, alpha in `[0.25, 0.55)`
    Trail { green: f32, blue: f32, alpha: f32 },
}

/// A glyph emitted by one column during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainGlyph {
    pub glyph: char,
    pub column: usize,
    pub row: u32,
    pub tone: GlyphTone,
}

/// Column rain state
#[derive(Debug, Clone)]
pub struct ColumnRain {
    surface: Surface,
    glyph_size: u32,
    glyphs: Vec<char>,
    /// Current row of each column's head
    rows: Vec<u32>,
    /// Glyphs emitted by the last tick
    frame: Vec<RainGlyph>,
    rng: Pcg32,
}

impl ColumnRain {
    pub fn new(seed: u64) -> Self {
        Self::with_glyph_size(seed, GLYPH_SIZE)
    }

    pub fn with_glyph_size(seed: u64, glyph_size: u32) -> Self {
        Self {
            surface: Surface::default(),
            glyph_size: glyph_size.max(1),
            glyphs: GLYPHS.chars().collect(),
            rows: Vec::new(),
            frame: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn glyph_size(&self) -> u32 {
        self.glyph_size
    }

    pub fn columns(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    /// Glyphs emitted by the most recent tick
    pub fn frame(&self) -> &[RainGlyph] {
        &self.frame
    }

    fn past_bottom(&self, row: u32) -> bool {
        row as u64 * self.glyph_size as u64 > self.surface.height as u64
    }
}

impl Effect for ColumnRain {
    fn resize(&mut self, width: u32, height: u32) {
        if !self.surface.resize(width, height) {
            return;
        }
        let columns = (width / self.glyph_size) as usize;
        self.rows = vec![0; columns];
        self.frame.clear();
        log::debug!("Rain resized to {}x{} ({} columns)", width, height, columns);
    }

    fn tick(&mut self) {
        self.frame.clear();

        for column in 0..self.rows.len() {
            let glyph = self.glyphs[self.rng.random_range(0..self.glyphs.len())];
            let tone = if self.rng.random::<f32>() < RAIN_LEAD_CHANCE {
                GlyphTone::Lead
            } else {
                GlyphTone::Trail {
                    green: 180.0 + self.rng.random::<f32>() * 75.0,
                    blue: 180.0 + self.rng.random::<f32>() * 75.0,
                    alpha: 0.25 + self.rng.random::<f32>() * 0.3,
                }
            };
            let row = self.rows[column];
            self.frame.push(RainGlyph {
                glyph,
                column,
                row,
                tone,
            });

            let next = row.saturating_add(1);
            let restart = self.past_bottom(next) && self.rng.random::<f32>() < RAIN_RESET_CHANCE;
            self.rows[column] = if restart { 0 } else { next };
        }
    }
}
