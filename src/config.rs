//! Game configuration
//!
//! Geometry, speeds and colors. Everything has a default; hosts may override
//! any subset with a JSON document.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game parameters (playfield size comes from the surface)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PongConfig {
    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from the side edge to the paddle
    pub paddle_margin: f32,
    /// AI paddle speed per frame
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Ball launch speed per frame
    pub ball_speed: f32,
    /// Amplitude of the random deflection on paddle hits
    pub hit_jitter: f32,

    // === AI ===
    pub ai_dead_zone: f32,

    // === Colors ===
    pub foreground: String,
    pub background: String,
    /// Net dash pattern (dash, gap)
    pub net_dash: [f32; 2],
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            hit_jitter: HIT_JITTER,

            ai_dead_zone: AI_DEAD_ZONE,

            foreground: "#fff".to_string(),
            background: "#000".to_string(),
            net_dash: NET_DASH,
        }
    }
}

impl PongConfig {
    /// Parse a (possibly partial) JSON config
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from an optional JSON document, falling back to defaults
    pub fn load(json: Option<&str>) -> Self {
        if let Some(json) = json {
            match Self::from_json(json) {
                Ok(config) => {
                    log::info!("Loaded config overrides");
                    return config;
                }
                Err(e) => log::warn!("Ignoring invalid config: {}", e),
            }
        }

        log::info!("Using default config");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_geometry() {
        let config = PongConfig::default();
        assert_eq!(config.paddle_width, 12.0);
        assert_eq!(config.paddle_height, 80.0);
        assert_eq!(config.ball_radius, 10.0);
        assert_eq!(config.ball_speed, 6.0);
        assert_eq!(config.ai_dead_zone, 10.0);
        assert_eq!(config.net_dash, [6.0, 12.0]);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PongConfig::from_json(r##"{"paddle_height": 100, "foreground": "#0f0"}"##)
            .unwrap();
        assert_eq!(config.paddle_height, 100.0);
        assert_eq!(config.foreground, "#0f0");
        assert_eq!(config.paddle_width, PADDLE_WIDTH);
        assert_eq!(config.background, "#000");
    }

    #[test]
    fn test_load_falls_back_on_bad_json() {
        assert_eq!(PongConfig::load(Some("{not json")), PongConfig::default());
        assert_eq!(PongConfig::load(None), PongConfig::default());
    }
}
