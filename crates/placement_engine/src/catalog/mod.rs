//! Prototype catalog
//!
//! The ordered list of named furniture templates the user can place.
//! The catalog is supplied by the host, either built programmatically or
//! loaded from a [`CatalogConfig`] file. The session core only reads it:
//! prototypes are immutable templates, and every placed instance records
//! which catalog entry it was instantiated from.
//!
//! Names are expected to be unique. Duplicates are tolerated but lookups
//! return the first match in catalog order, so later duplicate entries are
//! unreachable for placement.

use std::path::Path;

use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

use crate::config::{Config, ConfigError};

new_key_type! {
    /// Opaque handle to a template payload in the catalog
    pub struct TemplateHandle;
}

/// Host payload for one template: where the renderable asset lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDesc {
    /// Asset path or identifier the host resolves to a renderable
    pub asset: String,
}

/// One placeable entry: a unique name plus its template handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrototypeRef {
    /// Catalog-unique prototype name
    pub name: String,

    /// Handle to the template this prototype instantiates from
    pub template: TemplateHandle,
}

/// Ordered collection of placeable prototypes
#[derive(Debug, Default)]
pub struct Catalog {
    templates: SlotMap<TemplateHandle, TemplateDesc>,
    entries: Vec<PrototypeRef>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a loaded configuration
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for (index, entry) in config.prototypes.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            catalog.add(&entry.name, &entry.asset);
        }
        Ok(catalog)
    }

    /// Load a catalog from a `.toml` or `.ron` configuration file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let config = CatalogConfig::load_from_file(path)?;
        Self::from_config(&config)
    }

    /// Append a prototype, returning the handle of its template payload
    pub fn add(&mut self, name: &str, asset: &str) -> TemplateHandle {
        if self.contains(name) {
            log::warn!("duplicate catalog name {name:?}; later entry is unreachable");
        }
        let template = self.templates.insert(TemplateDesc {
            asset: asset.to_owned(),
        });
        self.entries.push(PrototypeRef {
            name: name.to_owned(),
            template,
        });
        template
    }

    /// Look up a prototype by name (first match wins)
    pub fn get(&self, name: &str) -> Option<&PrototypeRef> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Whether a prototype with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Resolve a template handle to its payload
    pub fn template(&self, handle: TemplateHandle) -> Option<&TemplateDesc> {
        self.templates.get(handle)
    }

    /// Iterate prototypes in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &PrototypeRef> {
        self.entries.iter()
    }

    /// Number of catalog entries (duplicates included)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serializable catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Prototype entries in presentation order
    pub prototypes: Vec<PrototypeEntry>,
}

impl Config for CatalogConfig {}

/// One configured prototype: name plus template asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrototypeEntry {
    /// Catalog-unique prototype name
    pub name: String,

    /// Asset path or identifier for the template
    pub asset: String,
}

/// Catalog construction errors
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// Configuration file could not be loaded or parsed
    #[error("catalog config: {0}")]
    Config(#[from] ConfigError),

    /// A configured prototype has an empty name
    #[error("catalog entry {index} has an empty name")]
    EmptyName {
        /// Position of the offending entry in the configuration
        index: usize,
    },
}
