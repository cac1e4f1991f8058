//! Placement session manager
//!
//! The orchestrator for one placement session: owns the current selection,
//! runs the per-frame gesture-to-action pipeline, mutates the registry and
//! the selected instance's transform, toggles surface visualization as the
//! scene fills and empties, and saves/restores the registry at scene
//! boundaries.
//!
//! Everything here is single-threaded and frame-driven. The host calls the
//! explicit operations (`select_prototype`, `start_drag`, ...) from its UI
//! callbacks and then [`PlacementSessionManager::process_frame`] once per
//! rendered frame; mutations made before the call are visible to that
//! frame's gesture processing. Invalid preconditions are silent no-ops, a
//! missed-frame gesture must never propagate a fault.

use log::{debug, info};

use crate::catalog::Catalog;
use crate::foundation::math::{Vec2, Vec3};
use crate::host::{SceneNavigator, SurfaceHitTester, UiFocus};
use crate::input::{Gesture, GestureInterpreter, TouchSample};
use crate::scene::{InstanceId, PlacedObjectRegistry, SessionStore};

/// Gain applied to the raw horizontal touch delta before it becomes yaw
pub const ROTATE_GAIN: f32 = 0.5;

/// Scene name the back button navigates to
pub const MAIN_MENU_SCENE: &str = "MainMenu";

/// What the current selection refers to, if anything
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Nothing selected
    #[default]
    None,
    /// A catalog prototype is selected but not yet placed
    Prototype(String),
    /// A placed instance is selected for manipulation
    Instance(InstanceId),
}

/// Coarse placement state derived from the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementState {
    /// Nothing selected
    Idle,
    /// A prototype is selected, awaiting a placement tap
    Previewing,
    /// An instance exists for the selection and can be manipulated
    Placed,
}

/// One observable effect of a processed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameAction {
    /// A new instance was placed
    Placed {
        /// Prototype name that was placed
        name: String,
    },
    /// A placement tap was rejected because the prototype is already placed
    PlacementRejected {
        /// Prototype name that was rejected
        name: String,
    },
    /// The selected instance moved to a new surface hit
    Moved,
    /// The selected instance rotated
    Rotated,
    /// The selected instance was rescaled
    Scaled,
}

/// Session orchestrator: selection, gestures, registry, scene boundaries
pub struct PlacementSessionManager {
    catalog: Catalog,
    registry: PlacedObjectRegistry,
    interpreter: GestureInterpreter,
    selection: SelectionState,
    dragging: bool,
    /// Pinch baseline: (distance at capture, selected instance scale at capture)
    pinch_baseline: Option<(f32, Vec3)>,
    scene: String,
    hit_tester: Box<dyn SurfaceHitTester>,
    ui_focus: Box<dyn UiFocus>,
    navigator: Box<dyn SceneNavigator>,
}

impl PlacementSessionManager {
    /// Create a manager for one scene with its host collaborators
    pub fn new(
        catalog: Catalog,
        scene: impl Into<String>,
        hit_tester: Box<dyn SurfaceHitTester>,
        ui_focus: Box<dyn UiFocus>,
        navigator: Box<dyn SceneNavigator>,
    ) -> Self {
        Self {
            catalog,
            registry: PlacedObjectRegistry::new(),
            interpreter: GestureInterpreter::new(),
            selection: SelectionState::None,
            dragging: false,
            pinch_baseline: None,
            scene: scene.into(),
            hit_tester,
            ui_focus,
            navigator,
        }
    }

    /// Select a catalog prototype for placement, or re-target the selection.
    ///
    /// Selecting a prototype whose instance is already placed selects that
    /// instance instead. Returns false for names absent from the catalog.
    pub fn select_prototype(&mut self, name: &str) -> bool {
        if !self.catalog.contains(name) {
            debug!("select ignored: {name:?} not in catalog");
            return false;
        }
        self.selection = match self.registry.id_of(name) {
            Some(id) => SelectionState::Instance(id),
            None => SelectionState::Prototype(name.to_owned()),
        };
        true
    }

    /// Clear the selection and any in-progress drag
    pub fn deselect(&mut self) {
        self.selection = SelectionState::None;
        self.dragging = false;
    }

    /// Begin dragging a placed instance; also re-targets the selection.
    ///
    /// While the drag flag is set, single-finger movement is interpreted
    /// as drag instead of rotate.
    pub fn start_drag(&mut self, id: InstanceId) -> bool {
        if self.registry.instance(id).is_none() {
            return false;
        }
        self.selection = SelectionState::Instance(id);
        self.dragging = true;
        true
    }

    /// End the drag; single-finger movement goes back to rotation
    pub fn stop_drag(&mut self) {
        self.dragging = false;
    }

    /// Delete the selected instance.
    ///
    /// Re-enables surface visualization and detection when the registry
    /// becomes empty. No-op without a placed selection.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected_instance_id() else {
            return false;
        };
        let Some(name) = self.registry.instance(id).map(|i| i.prototype.clone()) else {
            return false;
        };

        self.registry.remove(&name);
        self.deselect();

        if self.registry.is_empty() {
            self.hit_tester.set_surfaces_visible(true);
            self.hit_tester.set_detection_enabled(true);
        }
        true
    }

    /// Set the selected instance's absolute yaw in degrees (slider binding)
    pub fn set_selected_yaw(&mut self, degrees: f32) -> bool {
        let Some(id) = self.selected_instance_id() else {
            return false;
        };
        match self.registry.instance_mut(id) {
            Some(instance) => {
                instance.set_yaw(degrees);
                true
            }
            None => false,
        }
    }

    /// Save the current scene's placements and navigate to another scene.
    ///
    /// Fires regardless of state: the snapshot is taken, the selection and
    /// all transient gesture state are cleared, the registry is torn down,
    /// and navigation is triggered.
    pub fn go_to_scene(&mut self, scene: &str, store: &mut SessionStore) {
        info!("leaving scene {:?} for {scene:?}", self.scene);
        store.save(&self.scene, self.registry.snapshot());
        self.registry.clear();
        self.deselect();
        self.pinch_baseline = None;
        self.interpreter.reset();
        self.navigator.load_scene(scene);
    }

    /// Save placements and navigate to the main menu (back button)
    pub fn go_to_main_menu(&mut self, store: &mut SessionStore) {
        self.go_to_scene(MAIN_MENU_SCENE, store);
    }

    /// Enter a scene, rebuilding the registry from the store.
    ///
    /// Records naming prototypes absent from the catalog are skipped. When
    /// anything was restored the surfaces are hidden and detection is
    /// suspended, exactly as if the user had just placed the furniture;
    /// otherwise both are (re-)enabled for a fresh placement pass.
    pub fn enter_scene(&mut self, scene: &str, store: &SessionStore) {
        self.scene = scene.to_owned();
        self.registry.clear();
        self.deselect();
        self.pinch_baseline = None;
        self.interpreter.reset();

        let restored = self.registry.restore(store.load(scene), &self.catalog);
        info!("entered scene {scene:?}, restored {restored} instance(s)");

        let empty = self.registry.is_empty();
        self.hit_tester.set_surfaces_visible(empty);
        self.hit_tester.set_detection_enabled(empty);
    }

    /// Process one frame of touch input, returning the actions taken.
    ///
    /// Consults the UI-focus query, classifies the frame's gesture, and
    /// applies it to the selection: tap places, drag moves, single-finger
    /// movement rotates, two fingers pinch-scale.
    pub fn process_frame(&mut self, touches: &[TouchSample]) -> Vec<FrameAction> {
        // Pinch baseline lives only while exactly two fingers are down
        if touches.len() != 2 {
            self.pinch_baseline = None;
        }

        let over_widget = self.ui_focus.is_pointer_over_widget();
        let gesture = self.interpreter.interpret(touches, self.dragging, over_widget);
        debug!("frame gesture: {gesture:?}");

        let mut actions = Vec::new();
        match gesture {
            Gesture::Tap(point) => self.apply_tap(point, &mut actions),
            Gesture::Drag(point) => self.apply_drag(point, &mut actions),
            Gesture::Rotate(delta) => self.apply_rotate(delta, &mut actions),
            Gesture::Pinch(distance) => self.apply_pinch(distance, &mut actions),
            Gesture::None => {}
        }
        actions
    }

    /// Current coarse placement state
    pub fn state(&self) -> PlacementState {
        match &self.selection {
            SelectionState::None => PlacementState::Idle,
            SelectionState::Prototype(_) => PlacementState::Previewing,
            SelectionState::Instance(_) => PlacementState::Placed,
        }
    }

    /// Current selection
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The placed-instance registry for the current scene visit
    pub fn registry(&self) -> &PlacedObjectRegistry {
        &self.registry
    }

    /// The prototype catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Name of the current scene
    pub fn scene(&self) -> &str {
        &self.scene
    }

    /// Resolve the selection to a live placed instance, if it is one
    fn selected_instance_id(&self) -> Option<InstanceId> {
        match &self.selection {
            SelectionState::Instance(id) => self.registry.instance(*id).map(|_| *id),
            SelectionState::Prototype(name) => self.registry.id_of(name),
            SelectionState::None => None,
        }
    }

    fn apply_tap(&mut self, point: Vec2, actions: &mut Vec<FrameAction>) {
        let SelectionState::Prototype(name) = self.selection.clone() else {
            return;
        };
        if self.registry.id_of(&name).is_some() {
            actions.push(FrameAction::PlacementRejected { name });
            return;
        }
        let Some(hit) = self.hit_tester.ray_cast(point) else {
            debug!("tap at {point:?} hit no surface");
            return;
        };
        let Some(prototype) = self.catalog.get(&name) else {
            return;
        };
        if let Some(id) = self.registry.try_place(prototype, hit.position, hit.rotation) {
            self.selection = SelectionState::Instance(id);
            // First furniture down: the room is furnished, stop showing planes
            self.hit_tester.set_surfaces_visible(false);
            self.hit_tester.set_detection_enabled(false);
            actions.push(FrameAction::Placed { name });
        }
    }

    fn apply_drag(&mut self, point: Vec2, actions: &mut Vec<FrameAction>) {
        let Some(id) = self.selected_instance_id() else {
            return;
        };
        let Some(hit) = self.hit_tester.ray_cast(point) else {
            return;
        };
        if let Some(instance) = self.registry.instance_mut(id) {
            instance.set_position(hit.position);
            actions.push(FrameAction::Moved);
        }
    }

    fn apply_rotate(&mut self, delta: f32, actions: &mut Vec<FrameAction>) {
        let Some(id) = self.selected_instance_id() else {
            return;
        };
        if let Some(instance) = self.registry.instance_mut(id) {
            instance.rotate_by(delta * ROTATE_GAIN);
            actions.push(FrameAction::Rotated);
        }
    }

    fn apply_pinch(&mut self, distance: f32, actions: &mut Vec<FrameAction>) {
        let Some(id) = self.selected_instance_id() else {
            return;
        };
        match self.pinch_baseline {
            None => {
                // First pinch frame only records the baseline; a zero
                // distance is never used as a divisor.
                if distance > 0.0 {
                    if let Some(instance) = self.registry.instance(id) {
                        self.pinch_baseline = Some((distance, instance.transform.scale));
                    }
                }
            }
            Some((baseline_distance, baseline_scale)) => {
                if let Some(instance) = self.registry.instance_mut(id) {
                    let factor = distance / baseline_distance;
                    instance.transform.scale = baseline_scale * factor;
                    actions.push(FrameAction::Scaled);
                }
            }
        }
    }
}
