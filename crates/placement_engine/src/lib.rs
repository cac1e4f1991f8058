//! # Placement Engine
//!
//! Session core for handheld AR furniture placement. The host presentation
//! layer detects surfaces, renders, and draws UI; this crate owns the part
//! with real state: interpreting raw multi-touch input into gestures,
//! driving the per-object placement state machine, keeping the registry of
//! placed instances, and persisting placements across scene transitions
//! for the lifetime of the process.
//!
//! ## Features
//!
//! - **Gesture classification**: tap, drag, single-finger rotate, and
//!   two-finger pinch from raw touch samples, one gesture per frame
//! - **Placement state machine**: previewing → placed → manipulated, with
//!   at most one instance per catalog prototype
//! - **Scene persistence**: per-scene snapshots surviving navigation
//!   within one running session
//! - **Host-agnostic**: surface detection, UI focus, and scene navigation
//!   are traits the host implements
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use placement_engine::prelude::*;
//!
//! # struct HostSurfaces;
//! # impl SurfaceHitTester for HostSurfaces {
//! #     fn ray_cast(&self, _p: Vec2) -> Option<SurfaceHit> { None }
//! #     fn set_surfaces_visible(&mut self, _v: bool) {}
//! #     fn set_detection_enabled(&mut self, _e: bool) {}
//! # }
//! # struct HostUi;
//! # impl UiFocus for HostUi {
//! #     fn is_pointer_over_widget(&self) -> bool { false }
//! # }
//! # struct HostScenes;
//! # impl SceneNavigator for HostScenes {
//! #     fn load_scene(&mut self, _scene: &str) {}
//! # }
//! let catalog = Catalog::load_from_file("assets/catalog.toml")?;
//! let mut store = SessionStore::new();
//! let mut session = PlacementSessionManager::new(
//!     catalog,
//!     "living_room",
//!     Box::new(HostSurfaces),
//!     Box::new(HostUi),
//!     Box::new(HostScenes),
//! );
//!
//! // UI callback: user picked a prototype from the menu
//! session.select_prototype("chair");
//!
//! // Once per rendered frame
//! let touches: Vec<TouchSample> = Vec::new(); // from the host input layer
//! for action in session.process_frame(&touches) {
//!     println!("{action:?}");
//! }
//!
//! // Back button
//! session.go_to_main_menu(&mut store);
//! # Ok::<(), placement_engine::catalog::CatalogError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod catalog;
pub mod config;
pub mod foundation;
pub mod host;
pub mod input;
pub mod scene;
pub mod session;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        catalog::{Catalog, CatalogConfig, PrototypeRef, TemplateHandle},
        foundation::math::{Quat, Transform, Vec2, Vec3},
        host::{SceneNavigator, SurfaceHit, SurfaceHitTester, UiFocus},
        input::{Gesture, GestureInterpreter, TouchId, TouchPhase, TouchSample},
        scene::{InstanceId, PersistedPlacementRecord, PlacedInstance, PlacedObjectRegistry, SessionStore},
        session::{FrameAction, PlacementSessionManager, PlacementState, SelectionState, ROTATE_GAIN},
    };
}
