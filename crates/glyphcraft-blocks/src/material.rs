use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::types::MaterialId;

/// Materials every catalog starts with, in id order. `air` must stay first.
const BUILTIN: &[(&str, &str)] = &[
    ("air", "Air"),
    ("iron_block", "Block of Iron"),
    ("gold_block", "Block of Gold"),
    ("stone", "Stone"),
    ("quartz_block", "Block of Quartz"),
    ("white_concrete", "White Concrete"),
    ("black_concrete", "Black Concrete"),
];

#[derive(Clone, Debug)]
pub struct Material {
    pub id: MaterialId,
    pub key: String,
    pub label: String,
}

#[derive(Default, Clone, Debug)]
pub struct MaterialCatalog {
    pub materials: Vec<Material>,
    pub by_key: HashMap<String, MaterialId>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    /// Catalog holding only the built-in materials.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (key, label) in BUILTIN {
            catalog.insert(key, label);
        }
        catalog
    }

    pub fn get_id(&self, key: &str) -> Option<MaterialId> {
        self.by_key.get(key).copied()
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize)
    }

    pub fn key_of(&self, id: MaterialId) -> &str {
        self.get(id).map(|m| m.key.as_str()).unwrap_or("unknown")
    }

    /// Adds `key` unless already present; returns its id either way.
    pub fn insert(&mut self, key: &str, label: &str) -> MaterialId {
        if let Some(id) = self.get_id(key) {
            return id;
        }
        let id = MaterialId(self.materials.len() as u16);
        self.by_key.insert(key.to_string(), id);
        self.materials.push(Material {
            id,
            key: key.to_string(),
            label: label.to_string(),
        });
        id
    }

    /// Appends the entries of a `[materials]` table to this catalog.
    pub fn extend_from_table(&mut self, table: &BTreeMap<String, MaterialEntry>) {
        // BTreeMap keeps id assignment stable across runs.
        for (key, entry) in table {
            let label = match entry {
                MaterialEntry::Label(l) => l.as_str(),
                MaterialEntry::Detail { label } => label.as_deref().unwrap_or(key),
            };
            self.insert(key, label);
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum MaterialEntry {
    // Simple: sea_lantern = "Sea Lantern"
    Label(String),
    // Detailed: sea_lantern = { label = "Sea Lantern" }
    Detail { label: Option<String> },
}
