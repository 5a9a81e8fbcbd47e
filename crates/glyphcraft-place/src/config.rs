use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use glyphcraft_blocks::material::MaterialEntry;
use glyphcraft_blocks::{MaterialCatalog, MaterialId};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read error for {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown material '{0}'")]
    UnknownMaterial(String),
}

/// On-disk placement options. Every key is optional.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PlaceConfig {
    pub material: String,
    pub place_only_empty: bool,
    pub refill_interval: u32,
    pub stock_quantity: u32,
    pub stock_slot: usize,
    pub materials: BTreeMap<String, MaterialEntry>,
}

impl Default for PlaceConfig {
    fn default() -> Self {
        Self {
            material: "iron_block".to_string(),
            place_only_empty: true,
            refill_interval: 32,
            stock_quantity: 64,
            stock_slot: 1,
            materials: BTreeMap::new(),
        }
    }
}

/// Resolved options handed to the placement engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceSettings {
    pub material: MaterialId,
    /// Only write into cells that are currently empty.
    pub place_only_empty: bool,
    /// Actor placements between stock refills; at least 1.
    pub refill_interval: u32,
    pub stock_quantity: u32,
    pub stock_slot: usize,
}

impl PlaceSettings {
    pub fn new(material: MaterialId) -> Self {
        let d = PlaceConfig::default();
        Self {
            material,
            place_only_empty: d.place_only_empty,
            refill_interval: d.refill_interval,
            stock_quantity: d.stock_quantity,
            stock_slot: d.stock_slot,
        }
    }
}

impl PlaceConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Built-in materials plus this config's `[materials]` table.
    pub fn catalog(&self) -> MaterialCatalog {
        let mut catalog = MaterialCatalog::builtin();
        catalog.extend_from_table(&self.materials);
        catalog
    }

    pub fn resolve(&self, catalog: &MaterialCatalog) -> Result<PlaceSettings, ConfigError> {
        let material = catalog
            .get_id(&self.material)
            .filter(|id| !id.is_air())
            .ok_or_else(|| ConfigError::UnknownMaterial(self.material.clone()))?;
        Ok(PlaceSettings {
            material,
            place_only_empty: self.place_only_empty,
            refill_interval: self.refill_interval.max(1),
            stock_quantity: self.stock_quantity,
            stock_slot: self.stock_slot,
        })
    }
}

pub fn load_config_from_path(path: &Path) -> Result<PlaceConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    PlaceConfig::from_toml_str(&s)
}
