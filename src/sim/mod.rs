//! Effect simulation module
//!
//! All per-frame effect logic lives here. This module must stay pure:
//! - One explicit `tick` per frame (or timer period for the rain)
//! - Seeded RNG only, owned by each simulator
//! - No rendering or platform dependencies

pub mod cursor;
pub mod network;
pub mod rain;
pub mod surface;
pub mod wave;

pub use cursor::CursorTracker;
pub use network::{Link, PALETTE, Particle, ParticleNetwork, link_alpha, particle_count};
pub use rain::{ColumnRain, GLYPHS, GlyphTone, RainGlyph};
pub use surface::Surface;
pub use wave::{WAVES, Wave, WaveField};

/// A canvas effect driven by an outside loop
pub trait Effect {
    /// Match the simulation to new surface dimensions (px).
    ///
    /// Repeating the current size is a no-op; any other size replaces the
    /// per-effect state wholesale.
    fn resize(&mut self, width: u32, height: u32);

    /// Advance the simulation by one step
    fn tick(&mut self);
}
