//! Session-scoped placement persistence
//!
//! Keeps one snapshot of placed furniture per scene for the lifetime of the
//! running process. Nothing here touches durable storage: closing the app
//! is meant to forget the layout. The store is an ordinary owned value,
//! constructed once at session start and passed by reference to whatever
//! creates scenes, so tests can run isolated stores side by side.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Quat, Vec3};

/// Serializable snapshot of one placed instance, free of runtime handles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedPlacementRecord {
    /// Name of the catalog prototype this instance came from
    pub prototype_name: String,

    /// World-space position at snapshot time
    pub position: Vec3,

    /// World-space rotation at snapshot time
    pub rotation: Quat,
}

/// Per-scene placement snapshots for one running session
#[derive(Debug, Default)]
pub struct SessionStore {
    scenes: HashMap<String, Vec<PersistedPlacementRecord>>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a scene's snapshot, overwriting any prior entry for that scene
    pub fn save(&mut self, scene_id: &str, records: Vec<PersistedPlacementRecord>) {
        log::info!("session store: saving {} record(s) for scene {scene_id:?}", records.len());
        self.scenes.insert(scene_id.to_owned(), records);
    }

    /// Load a scene's snapshot; empty if the scene was never saved
    pub fn load(&self, scene_id: &str) -> &[PersistedPlacementRecord] {
        self.scenes.get(scene_id).map_or(&[], Vec::as_slice)
    }

    /// Forget a scene's snapshot, returning whether one existed
    pub fn clear(&mut self, scene_id: &str) -> bool {
        self.scenes.remove(scene_id).is_some()
    }

    /// Number of scenes with a saved snapshot
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether no scene has a saved snapshot
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}
