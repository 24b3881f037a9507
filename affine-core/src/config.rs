//! YAML configuration for parameter sets.
//!
//! Every section is optional and falls back to its default:
//!
//! ```yaml
//! trs:
//!   translation: { x: 3.0, y: 1.0 }
//!   rotation: 45.0
//!   scale: { x: 2.0, y: 2.0 }
//! camera:
//!   position: { x: 0.0, y: 0.0 }
//!   zoom: 1.0
//!   rotation: 0.0
//! projection:
//!   bounds: { near: 0.1, far: 100.0, left: -1.0, right: 1.0, top: 1.0, bottom: -1.0 }
//!   position: { x: 0.0, y: 0.0, z: 0.0 }
//!   orientation: { x: 0.0, y: 0.0, z: 0.0 }
//! ```
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::projection::ProjectionParams;
use crate::transform::Camera2D;
use crate::trs::Trs;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub trs: Trs,
    pub camera: Camera2D,
    pub projection: ProjectionParams,
}

impl Config {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(text)?;
        debug!(?config, "parsed configuration");
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading configuration");
        Self::from_yaml_str(&text)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
