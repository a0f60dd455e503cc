//! Page-level UI behaviour that is not a canvas effect

pub mod parallax;
pub mod reveal;
pub mod theme;

pub use parallax::{OrbTransform, grid_transform, orb_transform};
pub use reveal::RevealTracker;
pub use theme::{Theme, ThemeToggle, ThemeView};
