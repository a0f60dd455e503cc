//! Layered plasma waves
//!
//! Five translucent filled waveforms, each the sum of three sinusoids, plus a
//! set of faint scan-lines. Everything is a pure function of the simulated time
//! and the surface size.

use glam::Vec2;

use super::Effect;
use super::surface::Surface;
use crate::consts::*;

/// One filled waveform layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    /// Peak displacement of the primary sinusoid (px)
    pub amplitude: f32,
    /// Spatial frequency (radians per px)
    pub frequency: f32,
    /// Temporal speed multiplier
    pub speed: f32,
    /// Baseline as a fraction of the surface height
    pub y_frac: f32,
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Wave {
    const fn new(
        amplitude: f32,
        frequency: f32,
        speed: f32,
        y_frac: f32,
        hsla: [f32; 4],
    ) -> Self {
        Self {
            amplitude,
            frequency,
            speed,
            y_frac,
            hue: hsla[0],
            saturation: hsla[1],
            lightness: hsla[2],
            alpha: hsla[3],
        }
    }

    /// Top edge of the wave at horizontal position `x`
    #[inline]
    pub fn height_at(&self, x: f32, surface_height: f32, time: f32) -> f32 {
        let a = self.amplitude;
        let f = self.frequency;
        let s = self.speed;
        surface_height * self.y_frac
            + (x * f + time * s).sin() * a
            + (x * f * 1.8 + time * s * 0.7).sin() * a * 0.4
            + (x * f * 0.6 + time * s * 1.3).sin() * a * 0.25
    }
}

/// The five layers, back to front
pub const WAVES: [Wave; 5] = [
    Wave::new(70.0, 0.0014, 1.0, 0.32, [195.0, 100.0, 52.0, 0.07]),
    Wave::new(55.0, 0.002, 1.6, 0.5, [160.0, 100.0, 58.0, 0.055]),
    Wave::new(45.0, 0.0016, 0.9, 0.65, [265.0, 80.0, 62.0, 0.04]),
    Wave::new(32.0, 0.0028, 2.1, 0.18, [195.0, 100.0, 50.0, 0.04]),
    Wave::new(28.0, 0.0032, 1.3, 0.8, [175.0, 100.0, 55.0, 0.035]),
];

/// Wave field state: only the surface and the simulated clock
#[derive(Debug, Clone, Default)]
pub struct WaveField {
    surface: Surface,
    time: f32,
}

impl WaveField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Simulated time, advanced by [`WAVE_TIME_STEP`] per tick
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Closed outline of a wave: from the bottom-left corner, along the top
    /// edge sampled every [`WAVE_SAMPLE_STEP`] px, to the bottom-right corner.
    pub fn wave_outline(&self, wave: &Wave) -> Vec<Vec2> {
        let w = self.surface.width;
        let h = self.surface.height as f32;
        let samples = (w + WAVE_SAMPLE_STEP) / WAVE_SAMPLE_STEP + 1;

        let mut points = Vec::with_capacity(samples as usize + 2);
        points.push(Vec2::new(0.0, h));
        for x in (0..=w + WAVE_SAMPLE_STEP).step_by(WAVE_SAMPLE_STEP as usize) {
            let x = x as f32;
            points.push(Vec2::new(x, wave.height_at(x, h, self.time)));
        }
        points.push(Vec2::new(w as f32, h));
        points
    }

    /// Polyline of scan-line `index` (0-based, evenly spaced down the surface)
    pub fn scanline(&self, index: usize) -> Vec<Vec2> {
        let w = self.surface.width;
        let i = index as f32;
        let t = self.time;
        let y_base = self.surface.height as f32 * (0.08 + i * 0.14);

        (0..=w)
            .step_by(SCANLINE_SAMPLE_STEP as usize)
            .map(|x| {
                let x = x as f32;
                let y = y_base
                    + (x * 0.005 + t * 1.2 + i).sin() * 14.0
                    + (x * 0.012 - t + i * 0.5).sin() * 7.0;
                Vec2::new(x, y)
            })
            .collect()
    }

    /// Slowly breathing opacity of scan-line `index`
    pub fn scanline_alpha(&self, index: usize) -> f32 {
        0.014 + (self.time * 1.4 + index as f32 * 0.8).sin() * 0.008
    }
}

impl Effect for WaveField {
    fn resize(&mut self, width: u32, height: u32) {
        if self.surface.resize(width, height) {
            log::debug!("Wave field resized to {}x{}", width, height);
        }
    }

    fn tick(&mut self) {
        self.time += WAVE_TIME_STEP;
    }
}
