//! Particle network
//!
//! Self-propelled particles drifting over the surface. Each tick applies a
//! pointer attraction, a weak pull toward the center and a speed cap, then
//! integrates and wraps positions around the edges. Particles closer than
//! [`LINK_DISTANCE`] are linked with lines that fade with distance.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::Effect;
use super::surface::Surface;
use crate::consts::*;
use crate::wrap_coord;

/// Particle color tags (RGB)
pub const PALETTE: [[u8; 3]; 4] = [[0, 212, 255], [0, 255, 136], [139, 92, 246], [0, 180, 255]];

/// A single network node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Index into [`PALETTE`]
    pub color: usize,
    /// Oscillation phase (radians, kept in `[0, 2π)`)
    pub phase: f32,
    /// Phase advance per tick
    pub phase_speed: f32,
}

impl Particle {
    fn spawn(rng: &mut impl Rng, size: Vec2) -> Self {
        Self {
            pos: Vec2::new(
                wrap_coord(rng.random::<f32>() * size.x, size.x),
                wrap_coord(rng.random::<f32>() * size.y, size.y),
            ),
            vel: Vec2::new(
                (rng.random::<f32>() - 0.5) * 0.5,
                (rng.random::<f32>() - 0.5) * 0.5,
            ),
            radius: rng.random::<f32>() * 1.8 + 0.6,
            color: rng.random_range(0..PALETTE.len()),
            phase: rng.random::<f32>() * TAU,
            phase_speed: 0.018 + rng.random::<f32>() * 0.018,
        }
    }

    /// Radius/opacity modulation in `[0.25, 0.85]`
    #[inline]
    pub fn pulse(&self) -> f32 {
        0.55 + self.phase.sin() * 0.3
    }

    pub fn rgb(&self) -> [u8; 3] {
        PALETTE[self.color % PALETTE.len()]
    }

    /// Advance one tick toward `pointer`, centering on `size / 2`
    fn step(&mut self, pointer: Vec2, size: Vec2) {
        self.phase = (self.phase + self.phase_speed) % TAU;

        let to_pointer = pointer - self.pos;
        let d = to_pointer.length();
        // Coincident points have no direction
        if d > 0.0 && d < POINTER_RADIUS {
            let force = POINTER_STRENGTH * (1.0 - d / POINTER_RADIUS);
            self.vel += to_pointer / d * force;
        }

        self.vel += (size * 0.5 - self.pos) * CENTERING;

        let speed = self.vel.length();
        if speed > MAX_SPEED {
            self.vel *= MAX_SPEED / speed;
        }

        self.pos += self.vel;
        self.pos = Vec2::new(wrap_coord(self.pos.x, size.x), wrap_coord(self.pos.y, size.y));
    }
}

/// A line between two particles, by index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    /// Opacity at the `a` end
    pub alpha: f32,
}

/// Link opacity for two particles `distance` apart, `None` when unlinked
#[inline]
pub fn link_alpha(distance: f32) -> Option<f32> {
    if distance < LINK_DISTANCE {
        Some((1.0 - distance / LINK_DISTANCE) * LINK_MAX_ALPHA)
    } else {
        None
    }
}

/// Particles generated for a surface: one per [`AREA_PER_PARTICLE`] px²
pub fn particle_count(width: u32, height: u32) -> usize {
    (width as u64 * height as u64 / AREA_PER_PARTICLE) as usize
}

/// Particle network state
#[derive(Debug, Clone)]
pub struct ParticleNetwork {
    surface: Surface,
    particles: Vec<Particle>,
    pointer: Vec2,
    /// Set once real pointer input arrives; until then the pointer follows the center
    pointer_seen: bool,
    rng: Pcg32,
}

impl ParticleNetwork {
    pub fn new(seed: u64) -> Self {
        Self {
            surface: Surface::default(),
            particles: Vec::new(),
            pointer: Vec2::ZERO,
            pointer_seen: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Record the latest pointer position (surface coordinates)
    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = pos;
        self.pointer_seen = true;
    }

    /// All linked pairs.
    ///
    /// Checks every unordered pair, so cost grows with the square of the
    /// particle count. At one particle per 6500 px² a full-HD surface holds
    /// about 320 particles, roughly 51k distance checks per frame.
    pub fn links(&self) -> Vec<Link> {
        let max_sq = LINK_DISTANCE * LINK_DISTANCE;
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let dist_sq = a.pos.distance_squared(b.pos);
                if dist_sq >= max_sq {
                    continue;
                }
                if let Some(alpha) = link_alpha(dist_sq.sqrt()) {
                    links.push(Link { a: i, b: j, alpha });
                }
            }
        }
        links
    }

    fn regenerate(&mut self) {
        let count = particle_count(self.surface.width, self.surface.height);
        let size = self.surface.size();
        let rng = &mut self.rng;
        self.particles = (0..count).map(|_| Particle::spawn(rng, size)).collect();
    }
}

impl Effect for ParticleNetwork {
    fn resize(&mut self, width: u32, height: u32) {
        if !self.surface.resize(width, height) {
            return;
        }
        if !self.pointer_seen {
            self.pointer = self.surface.center();
        }
        self.regenerate();
        log::debug!(
            "Particle network resized to {}x{} ({} particles)",
            width,
            height,
            self.particles.len()
        );
    }

    fn tick(&mut self) {
        let size = self.surface.size();
        let pointer = self.pointer;
        for p in &mut self.particles {
            p.step(pointer, size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn still_particle(pos: Vec2) -> Particle {
        Particle {
            pos,
            vel: Vec2::ZERO,
            radius: 1.0,
            color: 0,
            phase: 0.0,
            phase_speed: 0.02,
        }
    }

    fn network_with(width: u32, height: u32, particles: Vec<Particle>) -> ParticleNetwork {
        let mut net = ParticleNetwork::new(0);
        net.resize(width, height);
        net.particles = particles;
        net
    }

    #[test]
    fn test_particle_count_scaling() {
        assert_eq!(particle_count(0, 0), 0);
        assert_eq!(particle_count(80, 80), 0);
        assert_eq!(particle_count(65, 100), 1);
        assert_eq!(particle_count(1920, 1080), 319);
    }

    #[test]
    fn test_resize_regenerates_batch() {
        let mut net = ParticleNetwork::new(9);
        net.resize(800, 600);
        assert_eq!(net.particles().len(), 73);
        net.resize(400, 300);
        assert_eq!(net.particles().len(), 18);
        net.resize(400, 300);
        assert_eq!(net.particles().len(), 18);
    }

    #[test]
    fn test_spawned_particles_in_range() {
        let mut net = ParticleNetwork::new(77);
        net.resize(1280, 720);
        for p in net.particles() {
            assert!((0.0..1280.0).contains(&p.pos.x));
            assert!((0.0..720.0).contains(&p.pos.y));
            assert!(p.vel.x.abs() <= 0.25 && p.vel.y.abs() <= 0.25);
            assert!((0.6..2.4).contains(&p.radius));
            assert!(p.color < PALETTE.len());
            assert!((0.018..0.036).contains(&p.phase_speed));
        }
    }

    #[test]
    fn test_pointer_defaults_to_center() {
        let mut net = ParticleNetwork::new(1);
        net.resize(600, 400);
        assert_eq!(net.pointer(), Vec2::new(300.0, 200.0));

        net.set_pointer(Vec2::new(10.0, 20.0));
        net.resize(800, 800);
        assert_eq!(net.pointer(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_pointer_attracts_nearby_particle() {
        let mut net = network_with(400, 400, vec![still_particle(Vec2::new(100.0, 200.0))]);
        net.set_pointer(Vec2::new(175.0, 200.0));
        net.tick();

        let p = &net.particles()[0];
        // Half the radius away: 0.09 * 0.5 toward the pointer plus centering
        let expected = 0.045 + (200.0 - 100.0) * CENTERING;
        assert!((p.vel.x - expected).abs() < 1e-6);
        assert!(p.pos.x > 100.0);
    }

    #[test]
    fn test_pointer_out_of_range_only_centers() {
        let mut net = network_with(400, 400, vec![still_particle(Vec2::new(100.0, 200.0))]);
        net.set_pointer(Vec2::new(300.0, 200.0));
        net.tick();

        let p = &net.particles()[0];
        assert!((p.vel.x - 100.0 * CENTERING).abs() < 1e-7);
        assert_eq!(p.vel.y, 0.0);
    }

    #[test]
    fn test_coincident_pointer_is_finite() {
        let pos = Vec2::new(50.0, 60.0);
        let mut net = network_with(200, 200, vec![still_particle(pos)]);
        net.set_pointer(pos);
        net.tick();
        let p = &net.particles()[0];
        assert!(p.pos.is_finite() && p.vel.is_finite());
    }

    #[test]
    fn test_wraps_instead_of_bouncing() {
        let mut p = still_particle(Vec2::new(399.5, 0.2));
        p.vel = Vec2::new(1.2, -1.0);
        let mut net = network_with(400, 300, vec![p]);
        net.set_pointer(Vec2::new(-1000.0, -1000.0));
        net.tick();

        let p = &net.particles()[0];
        assert!(p.pos.x < 5.0, "exited right, re-entered left: {}", p.pos.x);
        assert!(p.pos.y > 295.0, "exited top, re-entered bottom: {}", p.pos.y);
        // Velocity direction is preserved
        assert!(p.vel.x > 0.0 && p.vel.y < 0.0);
    }

    #[test]
    fn test_speed_clamped() {
        let mut p = still_particle(Vec2::new(100.0, 100.0));
        p.vel = Vec2::new(30.0, 40.0);
        let mut net = network_with(400, 400, vec![p]);
        net.tick();
        assert!(net.particles()[0].vel.length() <= MAX_SPEED + 1e-5);
    }

    #[test]
    fn test_pulse_bounds() {
        let mut p = still_particle(Vec2::ZERO);
        for _ in 0..1000 {
            p.phase = (p.phase + 0.031) % TAU;
            let pulse = p.pulse();
            assert!((0.25 - 1e-6..=0.85 + 1e-6).contains(&pulse));
        }
    }

    #[test]
    fn test_link_alpha_endpoints() {
        assert_eq!(link_alpha(0.0), Some(LINK_MAX_ALPHA));
        assert_eq!(link_alpha(LINK_DISTANCE), None);
        assert_eq!(link_alpha(200.0), None);
        let half = link_alpha(LINK_DISTANCE / 2.0).unwrap();
        assert!((half - LINK_MAX_ALPHA / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_links_respect_distance() {
        let net = network_with(
            1000,
            1000,
            vec![
                still_particle(Vec2::new(100.0, 100.0)),
                still_particle(Vec2::new(100.0, 100.0)),
                still_particle(Vec2::new(245.0, 100.0)),
                still_particle(Vec2::new(800.0, 800.0)),
            ],
        );
        let links = net.links();
        // (0,1) coincide; 2 sits exactly at the link distance from both
        assert_eq!(links, vec![Link { a: 0, b: 1, alpha: LINK_MAX_ALPHA }]);
    }

    #[test]
    fn test_seeded_batches_match() {
        let mut a = ParticleNetwork::new(5);
        let mut b = ParticleNetwork::new(5);
        a.resize(640, 480);
        b.resize(640, 480);
        for _ in 0..50 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.particles(), b.particles());
    }

    proptest! {
        #[test]
        fn prop_speed_never_exceeds_cap(
            seed in any::<u64>(),
            width in 1u32..1200,
            height in 1u32..900,
            ticks in 0usize..150,
            px in -200f32..1400.0,
            py in -200f32..1100.0,
        ) {
            let mut net = ParticleNetwork::new(seed);
            net.resize(width, height);
            net.set_pointer(Vec2::new(px, py));
            for _ in 0..ticks {
                net.tick();
            }
            for p in net.particles() {
                prop_assert!(p.vel.length() <= MAX_SPEED + 1e-5);
            }
        }

        #[test]
        fn prop_positions_stay_on_surface(
            seed in any::<u64>(),
            width in 1u32..1200,
            height in 1u32..900,
            ticks in 0usize..150,
        ) {
            let mut net = ParticleNetwork::new(seed);
            net.resize(width, height);
            for _ in 0..ticks {
                net.tick();
            }
            for p in net.particles() {
                prop_assert!(p.pos.x >= 0.0 && p.pos.x < width as f32);
                prop_assert!(p.pos.y >= 0.0 && p.pos.y < height as f32);
            }
        }

        #[test]
        fn prop_count_independent_of_seed(
            seed_a in any::<u64>(),
            seed_b in any::<u64>(),
            width in 0u32..2000,
            height in 0u32..1200,
        ) {
            let mut a = ParticleNetwork::new(seed_a);
            let mut b = ParticleNetwork::new(seed_b);
            a.resize(width, height);
            b.resize(width, height);
            let expected = (width as u64 * height as u64 / 6500) as usize;
            prop_assert_eq!(a.particles().len(), expected);
            prop_assert_eq!(b.particles().len(), expected);
        }
    }
}
