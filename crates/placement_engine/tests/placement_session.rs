//! End-to-end placement session scenarios
//!
//! Drives a full session through the public API with scripted touch
//! frames and mock host collaborators: place two pieces of furniture,
//! manipulate them, navigate away, and come back.

use std::cell::RefCell;
use std::rc::Rc;

use placement_engine::prelude::*;

#[derive(Debug, Clone, Copy)]
struct SurfaceFlags {
    visible: bool,
    detection: bool,
}

/// Scriptable surface service: one programmable hit pose plus flag capture
#[derive(Clone)]
struct ScriptedSurfaces {
    hit: Rc<RefCell<Option<SurfaceHit>>>,
    flags: Rc<RefCell<SurfaceFlags>>,
}

impl ScriptedSurfaces {
    fn new() -> Self {
        Self {
            hit: Rc::new(RefCell::new(None)),
            flags: Rc::new(RefCell::new(SurfaceFlags {
                visible: true,
                detection: true,
            })),
        }
    }

    fn aim_at(&self, x: f32, y: f32, z: f32) {
        *self.hit.borrow_mut() = Some(SurfaceHit {
            position: Vec3::new(x, y, z),
            rotation: Quat::identity(),
        });
    }

    fn flags(&self) -> SurfaceFlags {
        *self.flags.borrow()
    }
}

impl SurfaceHitTester for ScriptedSurfaces {
    fn ray_cast(&self, _screen_point: Vec2) -> Option<SurfaceHit> {
        *self.hit.borrow()
    }

    fn set_surfaces_visible(&mut self, visible: bool) {
        self.flags.borrow_mut().visible = visible;
    }

    fn set_detection_enabled(&mut self, enabled: bool) {
        self.flags.borrow_mut().detection = enabled;
    }
}

/// UI focus that can be toggled mid-script (finger over a button)
#[derive(Clone, Default)]
struct ScriptedFocus(Rc<RefCell<bool>>);

impl UiFocus for ScriptedFocus {
    fn is_pointer_over_widget(&self) -> bool {
        *self.0.borrow()
    }
}

#[derive(Clone, Default)]
struct ScriptedNavigator(Rc<RefCell<Vec<String>>>);

impl SceneNavigator for ScriptedNavigator {
    fn load_scene(&mut self, scene: &str) {
        self.0.borrow_mut().push(scene.to_owned());
    }
}

fn showroom_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add("chair", "models/chair.glb");
    catalog.add("table", "models/table.glb");
    catalog
}

fn session(
    surfaces: &ScriptedSurfaces,
    focus: &ScriptedFocus,
    navigator: &ScriptedNavigator,
) -> PlacementSessionManager {
    PlacementSessionManager::new(
        showroom_catalog(),
        "sceneA",
        Box::new(surfaces.clone()),
        Box::new(focus.clone()),
        Box::new(navigator.clone()),
    )
}

fn tap_at(x: f32, y: f32) -> Vec<TouchSample> {
    vec![TouchSample::new(0, Vec2::new(x, y), TouchPhase::Began)]
}

#[test]
fn chair_and_table_survive_scene_round_trip() {
    let surfaces = ScriptedSurfaces::new();
    let focus = ScriptedFocus::default();
    let navigator = ScriptedNavigator::default();
    let mut session = session(&surfaces, &focus, &navigator);
    let mut store = SessionStore::new();

    // Place "chair" at P1
    surfaces.aim_at(1.0, 0.0, 1.0);
    session.select_prototype("chair");
    let actions = session.process_frame(&tap_at(100.0, 100.0));
    assert_eq!(actions, [FrameAction::Placed { name: "chair".to_owned() }]);

    // Second placement attempt for "chair" at P2 is rejected
    surfaces.aim_at(2.0, 0.0, 2.0);
    session.select_prototype("chair"); // re-targets the placed instance
    assert!(session.process_frame(&tap_at(150.0, 150.0)).is_empty());
    assert_eq!(
        session.registry().get("chair").unwrap().transform.position,
        Vec3::new(1.0, 0.0, 1.0)
    );

    // Place "table" at P3
    surfaces.aim_at(3.0, 0.0, 3.0);
    session.select_prototype("table");
    let actions = session.process_frame(&tap_at(200.0, 200.0));
    assert_eq!(actions, [FrameAction::Placed { name: "table".to_owned() }]);
    assert_eq!(session.registry().len(), 2);

    // Back button: snapshot lands in the store, navigation fires
    session.go_to_main_menu(&mut store);
    assert_eq!(navigator.0.borrow().as_slice(), ["MainMenu"]);
    let saved = store.load("sceneA");
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].prototype_name, "chair");
    assert_eq!(saved[0].position, Vec3::new(1.0, 0.0, 1.0));
    assert_eq!(saved[1].prototype_name, "table");
    assert_eq!(saved[1].position, Vec3::new(3.0, 0.0, 3.0));

    // Re-enter the scene: registry rebuilt to {chair→P1, table→P3}
    session.enter_scene("sceneA", &store);
    assert_eq!(session.registry().len(), 2);
    assert_eq!(
        session.registry().get("chair").unwrap().transform.position,
        Vec3::new(1.0, 0.0, 1.0)
    );
    assert_eq!(
        session.registry().get("table").unwrap().transform.position,
        Vec3::new(3.0, 0.0, 3.0)
    );
    // Restored furniture keeps surfaces hidden and detection suspended
    assert!(!surfaces.flags().visible);
    assert!(!surfaces.flags().detection);
}

#[test]
fn taps_over_widgets_never_place() {
    let surfaces = ScriptedSurfaces::new();
    let focus = ScriptedFocus::default();
    let navigator = ScriptedNavigator::default();
    let mut session = session(&surfaces, &focus, &navigator);

    surfaces.aim_at(1.0, 0.0, 1.0);
    session.select_prototype("chair");

    // Finger is on the catalog menu: the tap must not reach the world
    *focus.0.borrow_mut() = true;
    assert!(session.process_frame(&tap_at(100.0, 100.0)).is_empty());
    assert!(session.registry().is_empty());

    // Same tap off the widget places
    *focus.0.borrow_mut() = false;
    let actions = session.process_frame(&tap_at(100.0, 100.0));
    assert_eq!(actions, [FrameAction::Placed { name: "chair".to_owned() }]);
}

#[test]
fn full_manipulation_sequence_on_one_instance() {
    let surfaces = ScriptedSurfaces::new();
    let focus = ScriptedFocus::default();
    let navigator = ScriptedNavigator::default();
    let mut session = session(&surfaces, &focus, &navigator);

    surfaces.aim_at(0.0, 0.0, 0.0);
    session.select_prototype("chair");
    session.process_frame(&tap_at(200.0, 300.0));
    let id = session.registry().id_of("chair").unwrap();

    // Drag to a new surface hit
    session.start_drag(id);
    surfaces.aim_at(4.0, 0.0, -2.0);
    let actions = session.process_frame(&[TouchSample::new(
        0,
        Vec2::new(320.0, 300.0),
        TouchPhase::Moved,
    )]);
    assert_eq!(actions, [FrameAction::Moved]);
    session.stop_drag();
    assert_eq!(
        session.registry().instance(id).unwrap().transform.position,
        Vec3::new(4.0, 0.0, -2.0)
    );

    // Single-finger movement now rotates: 80 px * 0.5 gain = 40 degrees
    let actions = session.process_frame(&[TouchSample::new(
        0,
        Vec2::new(400.0, 300.0),
        TouchPhase::Moved,
    )]);
    assert_eq!(actions, [FrameAction::Rotated]);
    let yaw = session.registry().instance(id).unwrap().yaw_degrees();
    assert!((yaw - 40.0).abs() < 1e-4, "unexpected yaw {yaw}");

    // Pinch: baseline at 100, then scale to 1.5x
    let two_fingers = |d: f32| {
        vec![
            TouchSample::new(0, Vec2::new(100.0, 100.0), TouchPhase::Moved),
            TouchSample::new(1, Vec2::new(100.0, 100.0 + d), TouchPhase::Moved),
        ]
    };
    assert!(session.process_frame(&two_fingers(100.0)).is_empty());
    session.process_frame(&two_fingers(150.0));
    let scale = session.registry().instance(id).unwrap().transform.scale;
    assert!((scale.x - 1.5).abs() < 1e-5, "unexpected scale {scale:?}");

    // Delete: registry empties, surfaces come back
    assert!(session.delete_selected());
    assert!(session.registry().is_empty());
    assert!(surfaces.flags().visible);
    assert!(surfaces.flags().detection);
}
