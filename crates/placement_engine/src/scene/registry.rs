//! Registry of placed instances
//!
//! Owns every furniture instance placed in the current scene visit. The
//! registry is keyed by prototype name and holds at most one live instance
//! per name: a second placement attempt for an already-placed prototype is
//! rejected. This is a product constraint, not an accident, and placement,
//! deletion, and persistence all key off it.
//!
//! The registry has no visual side effects. Surface visualization toggling
//! lives in the session manager, which watches the registry's emptiness.

use std::collections::HashMap;

use slotmap::{new_key_type, SlotMap};

use crate::catalog::{Catalog, PrototypeRef, TemplateHandle};
use crate::foundation::math::{yaw_rotation, Quat, Transform, Vec3};
use crate::scene::store::PersistedPlacementRecord;

new_key_type! {
    /// Opaque runtime handle to one placed instance
    pub struct InstanceId;
}

/// One concrete placed object created from a prototype
#[derive(Debug, Clone)]
pub struct PlacedInstance {
    /// Name of the owning catalog prototype
    pub prototype: String,

    /// Template the instance was created from
    pub template: TemplateHandle,

    /// Live world transform
    pub transform: Transform,

    /// Rotation at placement time; touch yaw is applied on top of this
    base_rotation: Quat,

    /// Accumulated yaw in degrees, unbounded
    yaw_degrees: f32,
}

impl PlacedInstance {
    fn new(prototype: &PrototypeRef, position: Vec3, rotation: Quat) -> Self {
        Self {
            prototype: prototype.name.clone(),
            template: prototype.template,
            transform: Transform::from_position_rotation(position, rotation),
            base_rotation: rotation,
            yaw_degrees: 0.0,
        }
    }

    /// Move the instance to a new world position
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    /// Spin the instance by a yaw delta in degrees.
    ///
    /// Yaw accumulates in degrees and the quaternion is rebuilt from the
    /// total, so two deltas compose exactly like their sum.
    pub fn rotate_by(&mut self, delta_degrees: f32) {
        self.set_yaw(self.yaw_degrees + delta_degrees);
    }

    /// Set the absolute yaw in degrees, relative to the placement rotation
    pub fn set_yaw(&mut self, degrees: f32) {
        self.yaw_degrees = degrees;
        self.transform.rotation = self.base_rotation * yaw_rotation(degrees);
    }

    /// Accumulated yaw in degrees since placement
    pub fn yaw_degrees(&self) -> f32 {
        self.yaw_degrees
    }
}

/// Per-scene mapping from prototype name to its single live instance
#[derive(Debug, Default)]
pub struct PlacedObjectRegistry {
    instances: SlotMap<InstanceId, PlacedInstance>,
    by_name: HashMap<String, InstanceId>,
    /// Insertion order, the deterministic order snapshots use
    order: Vec<InstanceId>,
}

impl PlacedObjectRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate a prototype at a pose.
    ///
    /// Returns `None` without touching the registry when an instance for
    /// that prototype name already exists.
    pub fn try_place(
        &mut self,
        prototype: &PrototypeRef,
        position: Vec3,
        rotation: Quat,
    ) -> Option<InstanceId> {
        if self.by_name.contains_key(&prototype.name) {
            log::debug!("placement rejected: {:?} already placed", prototype.name);
            return None;
        }

        let id = self
            .instances
            .insert(PlacedInstance::new(prototype, position, rotation));
        self.by_name.insert(prototype.name.clone(), id);
        self.order.push(id);
        log::info!("placed {:?} at {position:?}", prototype.name);
        Some(id)
    }

    /// Destroy and remove the instance for a prototype name, if present
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(id) = self.by_name.remove(name) else {
            return false;
        };
        self.instances.remove(id);
        self.order.retain(|&other| other != id);
        log::info!("removed {name:?}");
        true
    }

    /// Runtime handle of the instance for a prototype name
    pub fn id_of(&self, name: &str) -> Option<InstanceId> {
        self.by_name.get(name).copied()
    }

    /// Look up an instance by prototype name
    pub fn get(&self, name: &str) -> Option<&PlacedInstance> {
        self.instances.get(self.id_of(name)?)
    }

    /// Look up an instance by runtime handle
    pub fn instance(&self, id: InstanceId) -> Option<&PlacedInstance> {
        self.instances.get(id)
    }

    /// Mutable instance lookup by runtime handle
    pub fn instance_mut(&mut self, id: InstanceId) -> Option<&mut PlacedInstance> {
        self.instances.get_mut(id)
    }

    /// Iterate instances in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &PlacedInstance> {
        self.order.iter().filter_map(|&id| self.instances.get(id))
    }

    /// Number of placed instances
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing is placed
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Destroy all instances (scene teardown)
    pub fn clear(&mut self) {
        self.instances.clear();
        self.by_name.clear();
        self.order.clear();
    }

    /// Snapshot every instance as a persisted record, in insertion order
    pub fn snapshot(&self) -> Vec<PersistedPlacementRecord> {
        self.iter()
            .map(|instance| PersistedPlacementRecord {
                prototype_name: instance.prototype.clone(),
                position: instance.transform.position,
                rotation: instance.transform.rotation,
            })
            .collect()
    }

    /// Rebuild the registry from persisted records.
    ///
    /// Records naming a prototype absent from the catalog are skipped with
    /// a warning; a partial restore is never fatal. Returns the number of
    /// instances restored.
    pub fn restore(&mut self, records: &[PersistedPlacementRecord], catalog: &Catalog) -> usize {
        let mut restored = 0;
        for record in records {
            let Some(prototype) = catalog.get(&record.prototype_name) else {
                log::warn!(
                    "skipping restore of {:?}: not in catalog",
                    record.prototype_name
                );
                continue;
            };
            if self
                .try_place(prototype, record.position, record.rotation)
                .is_some()
            {
                restored += 1;
            }
        }
        restored
    }
}
