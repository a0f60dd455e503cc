//! Scroll-linked parallax transforms
//!
//! Pure functions of the scroll offset (and the orb's index).

use crate::consts::{GRID_PARALLAX, ORB_PARALLAX_EVEN, ORB_PARALLAX_ODD, ORB_SCALE_PER_PX};

/// Background grid translation (px) for scroll offset `scroll_y`
#[inline]
pub fn grid_offset(scroll_y: f64) -> f64 {
    scroll_y * GRID_PARALLAX
}

/// CSS transform for the background grid
pub fn grid_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", grid_offset(scroll_y))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbTransform {
    pub translate_y: f64,
    pub scale: f64,
}

impl OrbTransform {
    pub fn to_css(&self) -> String {
        format!("translateY({}px) scale({})", self.translate_y, self.scale)
    }
}

/// Transform for decorative orb `index`; even and odd orbs drift in opposite
/// directions
pub fn orb_transform(scroll_y: f64, index: usize) -> OrbTransform {
    let factor = if index % 2 == 0 {
        ORB_PARALLAX_EVEN
    } else {
        ORB_PARALLAX_ODD
    };
    OrbTransform {
        translate_y: scroll_y * factor,
        scale: 1.0 + scroll_y * ORB_SCALE_PER_PX,
    }
}
