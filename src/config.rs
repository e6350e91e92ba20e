use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;
use web_sys::window;

/// Id of the optional inline `<script type="application/json">` that
/// overrides the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid landing config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Presentation timings and form wiring. Every key is optional in the JSON
/// override; missing keys keep their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub transition_delay_ms: u32,
    pub reveal_delay_ms: u32,
    pub tab_animation_ms: u32,
    /// Per-tab overrides of the wheel rotation, in degrees.
    pub tab_rotations: BTreeMap<u8, i32>,
    pub marquee_clones: usize,
    pub phone_prefix_len: usize,
    pub form_action: String,
    pub form_method: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            transition_delay_ms: 300,
            reveal_delay_ms: 500,
            tab_animation_ms: 600,
            tab_rotations: BTreeMap::new(),
            marquee_clones: 10,
            phone_prefix_len: 4,
            form_action: "/lead".to_string(),
            form_method: "post".to_string(),
        }
    }
}

impl LandingConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the inline override if the page carries one. A malformed
    /// override is logged and ignored.
    pub fn load() -> Self {
        let json = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("{}, using defaults", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LandingConfig;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = LandingConfig::from_json(r#"{ "transition_delay_ms": 150 }"#).unwrap();
        assert_eq!(config.transition_delay_ms, 150);
        assert_eq!(config.reveal_delay_ms, 500);
        assert_eq!(config.marquee_clones, 10);
        assert_eq!(config.form_action, "/lead");
    }

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(LandingConfig::from_json("{}").unwrap(), LandingConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = LandingConfig::from_json("{ transition_delay_ms: }").unwrap_err();
        assert!(err.to_string().starts_with("invalid landing config"));
    }

    #[test]
    fn tab_rotations_use_string_keys() {
        let config = LandingConfig::from_json(r#"{ "tab_rotations": { "3": 45 } }"#).unwrap();
        assert_eq!(config.tab_rotations.get(&3), Some(&45));
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(LandingConfig::from_json(r#"{ "marquee_clones": "ten" }"#).is_err());
    }
}
