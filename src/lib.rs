//! Portfolio FX - decorative effects for a portfolio page
//!
//! Core modules:
//! - `sim`: Effect simulations (wave field, column rain, particle network, cursor)
//! - `renderer`: Painter seam and per-effect scene drawing
//! - `ui`: Theme toggle, reveal-on-scroll and parallax logic
//! - `persistence`: The single persisted preference
//! - `platform`: Browser glue (frame clock, DOM, canvas surfaces)
//! - `settings`: Runtime effect selection

pub mod persistence;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

/// Effect tuning constants
pub mod consts {
    // === Wave field ===
    /// Simulated time added per frame
    pub const WAVE_TIME_STEP: f32 = 0.004;
    /// Horizontal sampling step of the wave outlines (px)
    pub const WAVE_SAMPLE_STEP: u32 = 4;
    /// Number of faint scan-lines drawn over the waves
    pub const SCANLINE_COUNT: usize = 7;
    /// Horizontal sampling step of the scan-lines (px)
    pub const SCANLINE_SAMPLE_STEP: u32 = 3;
    pub const SCANLINE_WIDTH: f32 = 0.9;

    // === Column rain ===
    /// Glyph cell size (px), both column width and row height
    pub const GLYPH_SIZE: u32 = 13;
    /// Timer period of the rain effect, independent of the frame clock
    pub const RAIN_INTERVAL_MS: u32 = 48;
    /// Chance that a drawn glyph is a bright leading glyph
    pub const RAIN_LEAD_CHANCE: f32 = 0.07;
    /// Per-tick chance that a column past the bottom edge restarts at row 0
    pub const RAIN_RESET_CHANCE: f32 = 0.025;
    /// Opacity of the fade overlay painted every tick
    pub const RAIN_FADE_ALPHA: f32 = 0.052;
    pub const GLYPH_FONT_FAMILY: &str = "'JetBrains Mono',monospace";

    // === Particle network ===
    /// Surface area (px²) per generated particle
    pub const AREA_PER_PARTICLE: u64 = 6500;
    /// Speed cap applied after every tick (px/tick)
    pub const MAX_SPEED: f32 = 1.6;
    /// Maximum distance at which two particles are linked
    pub const LINK_DISTANCE: f32 = 145.0;
    /// Link opacity at zero distance
    pub const LINK_MAX_ALPHA: f32 = 0.28;
    /// Link opacity at the far end, relative to the near end
    pub const LINK_FAR_ALPHA_RATIO: f32 = 0.4;
    pub const LINK_WIDTH: f32 = 0.75;
    /// Pointer influence radius
    pub const POINTER_RADIUS: f32 = 150.0;
    /// Pointer impulse at zero distance
    pub const POINTER_STRENGTH: f32 = 0.09;
    /// Pull toward the surface center per px of offset
    pub const CENTERING: f32 = 0.000035;
    pub const BLOOM_SCALE: f32 = 3.0;
    pub const BLOOM_ALPHA: f32 = 0.04;

    // === Cursor ===
    /// Fraction of the remaining distance the trail covers each frame
    pub const TRAIL_SMOOTHING: f32 = 0.08;
    /// Off-screen starting coordinate for both cursor points
    pub const CURSOR_START: f32 = -300.0;

    // === Scroll ===
    /// Portion of an element that must be visible before it is revealed
    pub const REVEAL_THRESHOLD: f64 = 0.1;
    pub const GRID_PARALLAX: f64 = 0.1;
    pub const ORB_PARALLAX_EVEN: f64 = 0.07;
    pub const ORB_PARALLAX_ODD: f64 = -0.05;
    pub const ORB_SCALE_PER_PX: f64 = 0.00006;
}

/// Wrap a coordinate into `[0, extent)`.
///
/// Degenerate extents (zero-sized surfaces) collapse everything to 0.
#[inline]
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_coord_crossing_edges() {
        assert_eq!(wrap_coord(-1.0, 100.0), 99.0);
        assert_eq!(wrap_coord(100.5, 100.0), 0.5);
        assert_eq!(wrap_coord(100.0, 100.0), 0.0);
        assert_eq!(wrap_coord(42.0, 100.0), 42.0);
    }

    #[test]
    fn test_wrap_coord_tiny_negative_stays_in_range() {
        let w = wrap_coord(-1e-9, 100.0);
        assert!((0.0..100.0).contains(&w));
    }

    #[test]
    fn test_wrap_coord_zero_extent() {
        assert_eq!(wrap_coord(5.0, 0.0), 0.0);
        assert_eq!(wrap_coord(-5.0, 0.0), 0.0);
    }
}
