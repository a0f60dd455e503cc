//! Per-effect frame drawing

use glam::Vec2;

use super::{Color, LinearGradient, Paint, Painter};
use crate::consts::*;
use crate::sim::{ColumnRain, GlyphTone, ParticleNetwork, WAVES, WaveField};

/// Scan-line stroke color (alpha varies per line)
const SCANLINE_RGB: [u8; 3] = [0, 212, 255];
/// Overlay painted instead of clearing, leaving fading rain trails
const RAIN_FADE: Color = Color::rgba(2, 5, 8, RAIN_FADE_ALPHA);
const RAIN_LEAD: Color = Color::rgba(160, 255, 200, 0.98);

/// Something that can draw its current frame
pub trait Scene {
    fn draw(&self, painter: &mut dyn Painter);
}

impl Scene for WaveField {
    fn draw(&self, painter: &mut dyn Painter) {
        let size = self.surface().size();
        painter.clear(size.x, size.y);

        for wave in &WAVES {
            let color = Color::hsla(wave.hue, wave.saturation, wave.lightness, wave.alpha);
            let fill = Paint::Linear(LinearGradient {
                start: Vec2::ZERO,
                end: Vec2::new(0.0, size.y),
                from: color,
                to: color.with_alpha(0.0),
            });
            painter.fill_path(&self.wave_outline(wave), &fill);
        }

        for i in 0..SCANLINE_COUNT {
            let stroke = Paint::Solid(Color::rgb(SCANLINE_RGB, self.scanline_alpha(i)));
            painter.stroke_path(&self.scanline(i), &stroke, SCANLINE_WIDTH);
        }
    }
}

impl Scene for ColumnRain {
    fn draw(&self, painter: &mut dyn Painter) {
        let size = self.surface().size();
        painter.fill_rect(0.0, 0.0, size.x, size.y, RAIN_FADE);

        let cell = self.glyph_size() as f32;
        let mut buf = [0u8; 4];
        for glyph in self.frame() {
            let (color, font_px) = match glyph.tone {
                GlyphTone::Lead => (RAIN_LEAD, cell + 1.0),
                GlyphTone::Trail { green, blue, alpha } => {
                    (Color::rgba(0, green as u8, blue as u8, alpha), cell)
                }
            };
            let pos = Vec2::new(glyph.column as f32 * cell, glyph.row as f32 * cell);
            painter.fill_text(glyph.glyph.encode_utf8(&mut buf), pos, font_px, color);
        }
    }
}

impl Scene for ParticleNetwork {
    fn draw(&self, painter: &mut dyn Painter) {
        let size = self.surface().size();
        painter.clear(size.x, size.y);

        let particles = self.particles();
        for p in particles {
            let pulse = p.pulse();
            let radius = p.radius * pulse;
            painter.fill_circle(p.pos, radius, &Color::rgb(p.rgb(), pulse * 0.8).into());
            painter.fill_circle(
                p.pos,
                radius * BLOOM_SCALE,
                &Color::rgb(p.rgb(), BLOOM_ALPHA).into(),
            );
        }

        for link in self.links() {
            let a = &particles[link.a];
            let b = &particles[link.b];
            let stroke = Paint::Linear(LinearGradient {
                start: a.pos,
                end: b.pos,
                from: Color::rgb(a.rgb(), link.alpha),
                to: Color::rgb(b.rgb(), link.alpha * LINK_FAR_ALPHA_RATIO),
            });
            painter.stroke_path(&[a.pos, b.pos], &stroke, LINK_WIDTH);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawOp, Recorder};
    use crate::sim::Effect;

    #[test]
    fn test_wave_frame_layout() {
        let mut field = WaveField::new();
        field.resize(320, 240);
        field.tick();

        let mut rec = Recorder::new();
        field.draw(&mut rec);
        let ops = rec.ops();

        assert_eq!(ops.len(), 1 + WAVES.len() + SCANLINE_COUNT);
        assert!(matches!(ops[0], DrawOp::Clear { width, height } if width == 320.0 && height == 240.0));
        for op in &ops[1..=WAVES.len()] {
            match op {
                DrawOp::FillPath {
                    paint: Paint::Linear(g),
                    ..
                } => {
                    assert_eq!(g.to.alpha(), 0.0);
                    assert_eq!(g.end, Vec2::new(0.0, 240.0));
                }
                other => panic!("expected gradient fill, got {:?}", other),
            }
        }
        for op in &ops[1 + WAVES.len()..] {
            assert!(matches!(op, DrawOp::StrokePath { width, .. } if *width == SCANLINE_WIDTH));
        }
    }

    #[test]
    fn test_wave_frames_do_not_accumulate() {
        let mut field = WaveField::new();
        field.resize(100, 100);
        let mut rec = Recorder::new();
        for _ in 0..3 {
            field.tick();
            field.draw(&mut rec);
            let frame = rec.take();
            assert!(matches!(frame[0], DrawOp::Clear { .. }));
        }
    }

    #[test]
    fn test_rain_fades_instead_of_clearing() {
        let mut rain = ColumnRain::new(8);
        rain.resize(13 * 12, 130);
        rain.tick();

        let mut rec = Recorder::new();
        rain.draw(&mut rec);
        let ops = rec.ops();

        assert_eq!(rec.count(|op| matches!(op, DrawOp::Clear { .. })), 0);
        assert!(matches!(ops[0], DrawOp::FillRect { color, .. } if color == RAIN_FADE));
        assert_eq!(rec.count(|op| matches!(op, DrawOp::FillText { .. })), 12);
        for op in &ops[1..] {
            if let DrawOp::FillText { text, pos, font_px, color } = op {
                assert_eq!(text.chars().count(), 1);
                assert_eq!(pos.y, 0.0);
                if *color == RAIN_LEAD {
                    assert_eq!(*font_px, 14.0);
                } else {
                    assert_eq!(*font_px, 13.0);
                }
            }
        }
    }

    #[test]
    fn test_network_draws_bloom_and_links() {
        let mut net = ParticleNetwork::new(31);
        net.resize(400, 325);
        net.tick();

        let mut rec = Recorder::new();
        net.draw(&mut rec);

        let n = net.particles().len();
        assert_eq!(n, 20);
        assert_eq!(rec.count(|op| matches!(op, DrawOp::FillCircle { .. })), n * 2);
        assert_eq!(
            rec.count(|op| matches!(op, DrawOp::StrokePath { .. })),
            net.links().len()
        );

        let circles: Vec<(Vec2, f32, Paint)> = rec
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillCircle { center, radius, paint } => Some((*center, *radius, *paint)),
                _ => None,
            })
            .collect();
        for (p, pair) in net.particles().iter().zip(circles.chunks(2)) {
            let (main_center, main_radius, main_paint) = pair[0];
            let (bloom_center, bloom_radius, bloom_paint) = pair[1];
            let pulse = p.pulse();

            assert_eq!(main_center, p.pos);
            assert_eq!(bloom_center, p.pos);
            assert!((main_radius - p.radius * pulse).abs() < 1e-5);
            assert!((bloom_radius - main_radius * 3.0).abs() < 1e-5);
            assert_eq!(main_paint, Paint::Solid(Color::rgb(p.rgb(), pulse * 0.8)));
            assert_eq!(bloom_paint, Paint::Solid(Color::rgb(p.rgb(), 0.04)));
        }

        for op in rec.ops() {
            if let DrawOp::StrokePath { points, paint, .. } = op {
                assert_eq!(points.len(), 2);
                let d = points[0].distance(points[1]);
                assert!(d < LINK_DISTANCE);
                assert!(paint.max_alpha() <= LINK_MAX_ALPHA + 1e-6);

                let Paint::Linear(g) = paint else {
                    panic!("link stroke is not a gradient: {:?}", paint);
                };
                assert_eq!(g.start, points[0]);
                assert_eq!(g.end, points[1]);
                let near = 0.28 * (1.0 - d / 145.0);
                assert!((g.from.alpha() - near).abs() < 1e-5);
                assert!((g.to.alpha() - g.from.alpha() * 0.4).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_empty_surfaces_draw_nothing_but_background() {
        let mut rec = Recorder::new();
        ParticleNetwork::new(1).draw(&mut rec);
        ColumnRain::new(1).draw(&mut rec);
        assert_eq!(rec.ops().len(), 2);
    }
}
