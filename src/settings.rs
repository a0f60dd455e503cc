//! Runtime effect settings
//!
//! Read once at startup from an optional inline JSON block
//! (`<script type="application/json" id="fx-settings">`). Never persisted.

use serde::{Deserialize, Serialize};

use crate::consts::RAIN_INTERVAL_MS;

/// Which effects run, and how
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Canvas effects ===
    /// Layered plasma waves
    pub waves: bool,
    /// Falling-character rain
    pub rain: bool,
    /// Particle network
    pub network: bool,
    /// Rain timer period (ms)
    pub rain_interval_ms: u32,
    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,

    // === Page behaviour ===
    /// Custom cursor (still skipped on touch-primary devices)
    pub cursor: bool,
    pub parallax: bool,
    pub reveal: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            waves: true,
            rain: true,
            network: true,
            rain_interval_ms: RAIN_INTERVAL_MS,
            seed: None,

            cursor: true,
            parallax: true,
            reveal: true,
        }
    }
}

impl Settings {
    /// Id of the inline JSON element
    pub const ELEMENT_ID: &'static str = "fx-settings";

    /// Parse settings JSON; missing fields keep their defaults and malformed
    /// input yields the defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(mut settings) => {
                settings.rain_interval_ms = settings.rain_interval_ms.max(1);
                settings
            }
            Err(e) => {
                log::warn!("Invalid effect settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => {
                log::info!("Loaded effect settings from #{}", Self::ELEMENT_ID);
                Self::from_json(&json)
            }
            None => Self::default(),
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything() {
        let s = Settings::default();
        assert!(s.waves && s.rain && s.network && s.cursor && s.parallax && s.reveal);
        assert_eq!(s.rain_interval_ms, 48);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{ "rain": false, "seed": 7 }"#);
        assert!(!s.rain);
        assert!(s.waves);
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.rain_interval_ms, 48);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert_eq!(Settings::from_json("{ not json"), Settings::default());
        assert_eq!(Settings::from_json(r#"{ "rain": "yes" }"#), Settings::default());
    }

    #[test]
    fn test_zero_interval_is_raised() {
        let s = Settings::from_json(r#"{ "rain_interval_ms": 0 }"#);
        assert_eq!(s.rain_interval_ms, 1);
    }

    #[test]
    fn test_roundtrip_through_json() {
        let mut s = Settings::default();
        s.network = false;
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(Settings::from_json(&json), s);
    }
}
