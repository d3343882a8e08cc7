use super::*;
use crate::config::PadConfig;
use crate::controller::{Controller, X_AXIS, X_DIR, Y_AXIS, Y_DIR};
use crate::input::events::{PadEvent, Phase, PointerEvent, TouchPoint};

const W: f64 = 800.0;
const H: f64 = 600.0;

// Default layout on an 800x600 surface: anchor (725, 525), button "a"
// centered at (750, 500) with radius 25, stick based at (75, 525) with
// radius 40.
const STICK: (f64, f64) = (75.0, 525.0);
const BUTTON_A: (f64, f64) = (750.0, 500.0);

fn controller() -> Controller {
    let mut controller = Controller::new();
    controller.init(Some(&PadConfig::default()), W, H);
    controller
}

fn touch(id: u64, x: f64, y: f64) -> TouchPoint {
    TouchPoint::new(ContactId::Touch(id), x, y)
}

fn touch_event(phase: Phase, touches: Vec<TouchPoint>, changed: Vec<TouchPoint>) -> PadEvent {
    PadEvent::Pointer(PointerEvent::touch(phase, touches, changed))
}

#[test]
fn mouse_press_and_release_on_a_button() {
    let mut controller = controller();
    let mut router = InputRouter::new();
    let (bx, by) = BUTTON_A;

    let state = router.handle(
        &PadEvent::Pointer(PointerEvent::mouse_down(bx, by)),
        &mut controller,
    );
    assert_eq!(state.get("a"), 1.0);
    assert!(controller.controls()[0].active);
    assert_eq!(router.contacts().len(), 1);

    let state = router.handle(
        &PadEvent::Pointer(PointerEvent::mouse_up(bx, by)),
        &mut controller,
    );
    assert_eq!(state.get("a"), 0.0);
    assert!(!controller.controls()[0].active);
    assert!(router.contacts().is_empty());
}

#[test]
fn stick_capture_and_displacement() {
    let mut controller = controller();
    let mut router = InputRouter::new();
    let (sx, sy) = STICK;

    // Within the capture radius (60) but off-center.
    router.handle(
        &touch_event(Phase::Start, vec![touch(1, sx + 10.0, sy - 10.0)], vec![]),
        &mut controller,
    );
    let state = router.handle(
        &touch_event(Phase::Move, vec![touch(1, sx + 10.0, sy - 10.0)], vec![]),
        &mut controller,
    );

    // Half-radius is 20, so a 10px offset is half deflection.
    assert_eq!(state.get(X_AXIS), 0.5);
    assert_eq!(state.get(Y_AXIS), -0.5);
    assert_eq!(state.get(X_DIR), 1.0);
    assert_eq!(state.get(Y_DIR), -1.0);
}

#[test]
fn stick_axes_saturate_per_axis() {
    let mut controller = controller();
    let mut router = InputRouter::new();
    let (sx, sy) = STICK;

    // Touch at the exact center reads as no deflection.
    let state = router.handle(
        &touch_event(Phase::Start, vec![touch(1, sx, sy)], vec![]),
        &mut controller,
    );
    assert_eq!(state.get(X_AXIS), 0.0);
    assert_eq!(state.get(X_DIR), 0.0);

    // One pixel past the half-radius saturates X while Y stays partial.
    let state = router.handle(
        &touch_event(Phase::Move, vec![touch(1, sx + 21.0, sy + 5.0)], vec![]),
        &mut controller,
    );
    assert_eq!(state.get(X_AXIS), 1.0);
    assert_eq!(state.get(X_DIR), 1.0);
    assert_eq!(state.get(Y_AXIS), 0.25);
}

#[test]
fn stick_releases_past_the_capture_radius() {
    let mut controller = controller();
    let mut router = InputRouter::new();
    let (sx, sy) = STICK;

    router.handle(
        &touch_event(Phase::Start, vec![touch(1, sx + 10.0, sy)], vec![]),
        &mut controller,
    );
    let state = router.handle(
        &touch_event(Phase::Move, vec![touch(1, sx + 100.0, sy)], vec![]),
        &mut controller,
    );

    assert_eq!(state.get(X_AXIS), 0.0);
    assert_eq!(state.get(X_DIR), 0.0);
    assert_eq!(controller.stick().unwrap().offset(), (0.0, 0.0));
    // The contact survives but is no longer bound.
    assert_eq!(
        router.contacts()[&ContactId::Touch(1)].bound,
        None
    );
}

#[test]
fn moving_onto_a_button_does_not_press_it() {
    let mut controller = controller();
    let mut router = InputRouter::new();
    let (bx, by) = BUTTON_A;

    router.handle(
        &touch_event(Phase::Start, vec![touch(1, 400.0, 300.0)], vec![]),
        &mut controller,
    );
    let state = router.handle(
        &touch_event(Phase::Move, vec![touch(1, bx, by)], vec![]),
        &mut controller,
    );

    assert_eq!(state.get("a"), 0.0);
    assert!(!controller.controls()[0].active);
}

#[test]
fn bound_button_stays_pressed_while_dragging_off() {
    let mut controller = controller();
    let mut router = InputRouter::new();
    let (bx, by) = BUTTON_A;

    router.handle(
        &touch_event(Phase::Start, vec![touch(1, bx, by)], vec![]),
        &mut controller,
    );
    // The binding is sticky: leaving the hit region does not release.
    let state = router.handle(
        &touch_event(Phase::Move, vec![touch(1, bx + 40.0, by)], vec![]),
        &mut controller,
    );

    assert_eq!(state.get("a"), 1.0);
    assert!(controller.controls()[0].active);

    // Only lifting the contact releases it.
    let state = router.handle(
        &touch_event(Phase::End, vec![], vec![touch(1, bx + 40.0, by)]),
        &mut controller,
    );
    assert_eq!(state.get("a"), 0.0);
    assert!(!controller.controls()[0].active);
}

#[test]
fn button_holder_does_not_capture_the_stick() {
    let mut controller = controller();
    let mut router = InputRouter::new();
    let (bx, by) = BUTTON_A;
    let (sx, sy) = STICK;

    router.handle(
        &touch_event(Phase::Start, vec![touch(1, bx, by)], vec![]),
        &mut controller,
    );
    // The contact keeps holding its button across the stick; a bound
    // contact is never eligible for stick capture.
    let state = router.handle(
        &touch_event(Phase::Move, vec![touch(1, sx, sy)], vec![]),
        &mut controller,
    );

    assert_eq!(state.get("a"), 1.0);
    assert_eq!(state.get(X_AXIS), 0.0);
    assert_eq!(controller.stick().unwrap().offset(), (0.0, 0.0));
}

#[test]
fn contacts_are_capped_at_five() {
    let mut controller = controller();
    let mut router = InputRouter::new();

    let touches: Vec<TouchPoint> = (0..7).map(|n| touch(n, 400.0, 300.0)).collect();
    router.handle(
        &touch_event(Phase::Start, touches, vec![]),
        &mut controller,
    );

    assert_eq!(router.contacts().len(), MAX_CONTACTS);
}

#[test]
fn empty_touch_set_resets_everything() {
    let mut controller = controller();
    let mut router = InputRouter::new();
    let (bx, by) = BUTTON_A;
    let (sx, sy) = STICK;

    router.handle(
        &touch_event(
            Phase::Start,
            vec![touch(1, bx, by), touch(2, sx + 10.0, sy)],
            vec![],
        ),
        &mut controller,
    );
    let state = router.handle(
        &touch_event(Phase::End, vec![], vec![touch(1, bx, by), touch(2, sx + 10.0, sy)]),
        &mut controller,
    );

    for (_, value) in state.iter() {
        assert_eq!(value, 0.0);
    }
    assert!(router.contacts().is_empty());
}

#[test]
fn lifting_one_finger_keeps_the_other_pressed() {
    let mut controller = controller();
    let mut router = InputRouter::new();
    let (bx, by) = BUTTON_A;
    let (sx, sy) = STICK;

    router.handle(
        &touch_event(
            Phase::Start,
            vec![touch(1, bx, by), touch(2, sx + 10.0, sy)],
            vec![],
        ),
        &mut controller,
    );
    let state = router.handle(
        &touch_event(
            Phase::End,
            vec![touch(1, bx, by)],
            vec![touch(2, sx + 10.0, sy)],
        ),
        &mut controller,
    );

    assert_eq!(state.get("a"), 1.0);
    assert_eq!(state.get(X_AXIS), 0.0);
    assert_eq!(router.contacts().len(), 1);
}

#[test]
fn direction_masks_snap_the_stick() {
    let mut controller = controller();
    let mut router = InputRouter::new();

    let state = router.handle(&PadEvent::keys([("left", true)]), &mut controller);
    assert_eq!(state.get(X_AXIS), -1.0);
    assert_eq!(state.get(X_DIR), -1.0);
    assert_eq!(state.get(Y_AXIS), 0.0);
    assert!(router.contacts().contains_key(&ContactId::KeyStick));

    let state = router.handle(
        &PadEvent::keys([("left", true), ("up", true)]),
        &mut controller,
    );
    assert_eq!(state.get(X_AXIS), -1.0);
    assert_eq!(state.get(Y_AXIS), -1.0);

    let state = router.handle(&PadEvent::keys([("left", false)]), &mut controller);
    assert_eq!(state.get(X_AXIS), 0.0);
    assert_eq!(state.get(Y_AXIS), 0.0);
    assert!(!router.contacts().contains_key(&ContactId::KeyStick));
}

#[test]
fn contradictory_direction_mask_resets_the_stick() {
    let mut controller = controller();
    let mut router = InputRouter::new();

    router.handle(&PadEvent::keys([("left", true)]), &mut controller);
    let state = router.handle(
        &PadEvent::keys([("left", true), ("right", true)]),
        &mut controller,
    );

    assert_eq!(state.get(X_AXIS), 0.0);
    assert_eq!(state.get(X_DIR), 0.0);
    assert_eq!(controller.stick().unwrap().offset(), (0.0, 0.0));
}

#[test]
fn pointer_on_the_stick_outranks_direction_keys() {
    let mut controller = controller();
    let mut router = InputRouter::new();
    let (sx, sy) = STICK;

    router.handle(
        &touch_event(Phase::Start, vec![touch(1, sx + 10.0, sy)], vec![]),
        &mut controller,
    );
    let state = router.handle(&PadEvent::keys([("left", true)]), &mut controller);

    // The pointer's half deflection survives the key press.
    assert_eq!(state.get(X_AXIS), 0.5);
}

#[test]
fn bound_key_presses_its_control() {
    let mut config = PadConfig::default();
    config.buttons = vec![crate::config::ButtonSpec {
        name: None,
        color: None,
        key: Some("s".to_string()),
    }];
    let mut controller = Controller::new();
    controller.init(Some(&config), W, H);
    let mut router = InputRouter::new();

    let state = router.handle(&PadEvent::keys([("s", true)]), &mut controller);
    assert_eq!(state.get("a"), 1.0);
    assert!(controller.controls()[0].active);

    // The synthetic contact sits at the control's center.
    let contact = &router.contacts()[&ContactId::Key("a".to_string())];
    assert_eq!((contact.x, contact.y), controller.controls()[0].center());

    let state = router.handle(&PadEvent::keys([("s", false)]), &mut controller);
    assert_eq!(state.get("a"), 0.0);
    assert!(router.contacts().is_empty());
}

#[test]
fn unbound_keys_are_ignored(){
    let mut controller = controller();
    let mut router = InputRouter::new();

    let before = controller.get_state().clone();
    let state = router.handle(&PadEvent::keys([("q", true)]), &mut controller);

    assert_eq!(state, before);
    assert!(router.contacts().is_empty());
}
