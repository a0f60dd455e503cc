//! Platform abstraction layer (WASM only)
//!
//! Handles the browser side of the effects:
//! - Frame clock and fixed-period timers
//! - DOM lookups, styles and event listeners
//! - Canvas surfaces sized to their elements

pub mod clock;
pub mod dom;
pub mod surface;

pub use surface::CanvasSurface;
