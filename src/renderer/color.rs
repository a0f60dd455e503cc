//! Colors and fills, formatted as CSS strings for the canvas

use glam::Vec2;

/// A CSS color with straight alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// Hue in degrees, saturation and lightness in percent
    Hsla { h: f32, s: f32, l: f32, a: f32 },
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba { r, g, b, a }
    }

    pub const fn rgb(rgb: [u8; 3], a: f32) -> Self {
        Color::Rgba {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    pub const fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Color::Hsla { h, s, l, a }
    }

    pub fn alpha(&self) -> f32 {
        match *self {
            Color::Rgba { a, .. } | Color::Hsla { a, .. } => a,
        }
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, alpha: f32) -> Self {
        match self {
            Color::Rgba { r, g, b, .. } => Color::Rgba { r, g, b, a: alpha },
            Color::Hsla { h, s, l, .. } => Color::Hsla { h, s, l, a: alpha },
        }
    }

    pub fn to_css(&self) -> String {
        match *self {
            Color::Rgba { r, g, b, a } => format!("rgba({},{},{},{})", r, g, b, a),
            Color::Hsla { h, s, l, a } => format!("hsla({},{}%,{}%,{})", h, s, l, a),
        }
    }
}

/// Two-stop linear gradient between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub from: Color,
    pub to: Color,
}

/// How a shape is filled or stroked
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear(LinearGradient),
}

impl Paint {
    /// Strongest alpha anywhere in the paint
    pub fn max_alpha(&self) -> f32 {
        match self {
            Paint::Solid(c) => c.alpha(),
            Paint::Linear(g) => g.from.alpha().max(g.to.alpha()),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_formatting() {
        assert_eq!(Color::rgba(0, 212, 255, 0.5).to_css(), "rgba(0,212,255,0.5)");
        assert_eq!(
            Color::hsla(195.0, 100.0, 52.0, 0.07).to_css(),
            "hsla(195,100%,52%,0.07)"
        );
    }

    #[test]
    fn test_with_alpha_keeps_channels() {
        let c = Color::hsla(160.0, 100.0, 58.0, 0.055).with_alpha(0.0);
        assert_eq!(c, Color::hsla(160.0, 100.0, 58.0, 0.0));
        assert_eq!(c.alpha(), 0.0);
    }

    #[test]
    fn test_gradient_max_alpha() {
        let paint = Paint::Linear(LinearGradient {
            start: Vec2::ZERO,
            end: Vec2::ONE,
            from: Color::rgb([0, 255, 136], 0.2),
            to: Color::rgb([0, 255, 136], 0.08),
        });
        assert!((paint.max_alpha() - 0.2).abs() < 1e-6);
    }
}
