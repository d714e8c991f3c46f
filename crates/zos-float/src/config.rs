//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::math::Size;

/// Tunables for the interaction engine
///
/// Loadable from JSON; missing fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Minimum window size enforced by every resize
    pub min_size: Size,
    /// Inset from the container edge at which single-axis handles stop
    pub edge_margin: f32,
    /// Inset from the container edge at which corner handles stop
    pub corner_margin: f32,
    /// Rank of the bottom-most window
    pub base_rank: u32,
    /// Button code that may start a gesture
    pub primary_button: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_size: Size::new(100.0, 100.0),
            edge_margin: 5.0,
            corner_margin: 5.0,
            base_rank: 1000,
            primary_button: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!((config.min_size.width - 100.0).abs() < 0.001);
        assert!((config.edge_margin - config.corner_margin).abs() < 0.001);
        assert_eq!(config.base_rank, 1000);
        assert_eq!(config.primary_button, 0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "cornerMargin": 9.0, "baseRank": 10 }"#).unwrap();
        assert!((config.corner_margin - 9.0).abs() < 0.001);
        assert!((config.edge_margin - 5.0).abs() < 0.001);
        assert_eq!(config.base_rank, 10);
        assert!((config.min_size.height - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_min_size_from_json() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "minSize": { "width": 240.0, "height": 120.0 } }"#).unwrap();
        assert!((config.min_size.width - 240.0).abs() < 0.001);
        assert!((config.min_size.height - 120.0).abs() < 0.001);
    }
}
