//! Scene state: placed instances and cross-scene persistence

pub mod registry;
pub mod store;

pub use registry::{InstanceId, PlacedInstance, PlacedObjectRegistry};
pub use store::{PersistedPlacementRecord, SessionStore};
