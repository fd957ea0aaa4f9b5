//! JSON configuration for the visualization.
//!
//! ```json
//! {
//!   "entries": [{ "label": "deterministic", "score": 4.0 }],
//!   "slider": { "min": 0.1, "max": 2.0, "step": 0.1, "default": 1.0 }
//! }
//! ```
//!
//! Both keys are optional; missing ones fall back to the sampling demo.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::slider::TemperatureSlider;
use crate::softmax::ScoreTable;
use crate::viz::{DistributionSink, TemperatureViz};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VizConfig {
    pub entries: ScoreTable,
    pub slider: TemperatureSlider,
}

impl VizConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            entries = cfg.entries.len(),
            "loaded visualization config"
        );
        Ok(cfg)
    }

    pub fn into_viz<S: DistributionSink>(self, sink: S) -> TemperatureViz<S> {
        TemperatureViz::new(self.entries, self.slider, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn empty_object_is_the_demo() {
        let cfg = VizConfig::from_json("{}").unwrap();
        assert_eq!(cfg, VizConfig::default());
        assert_eq!(cfg.entries.len(), 5);
    }

    #[test]
    fn custom_entries_and_slider() {
        let cfg = VizConfig::from_json(
            r#"{
                "entries": [{"label": "yes", "score": 1.0}, {"label": "no", "score": 0.0}],
                "slider": {"min": 0.5, "max": 5.0, "step": 0.5, "default": 2.5}
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.entries.entries()[1].label(), "no");
        assert_eq!(cfg.slider.default_value(), 2.5);

        let frame = cfg.into_viz(|_: &crate::viz::Frame| {}).init().unwrap();
        assert_eq!(frame.temperature_label, "2.5");
    }

    #[test]
    fn invalid_entries_are_rejected() {
        let err = VizConfig::from_json(r#"{"entries": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(VizConfig::from_json(r#"{"colour": "red"}"#).is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = VizConfig::load(&PathBuf::from("/nonexistent/tempviz.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
