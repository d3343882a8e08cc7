use super::*;
use crate::config::{ButtonSpec, ColorSpec, PadConfig};
use crate::layout::Corner;

const W: f64 = 800.0;
const H: f64 = 600.0;

fn config_with_buttons(count: usize) -> PadConfig {
    PadConfig {
        buttons: vec![ButtonSpec::default(); count],
        ..Default::default()
    }
}

fn init(config: &PadConfig) -> Controller {
    let mut controller = Controller::new();
    controller.init(Some(config), W, H);
    controller
}

#[test]
fn init_without_config_is_a_no_op() {
    let mut controller = Controller::new();
    controller.init(None, W, H);
    assert!(controller.controls().is_empty());
    assert!(controller.stick().is_none());
    assert!(controller.get_state().is_empty());
}

#[test]
fn control_count_matches_configuration() {
    for buttons in 1..=4 {
        for (start, select, joystick) in [
            (false, false, false),
            (true, false, false),
            (true, true, false),
            (true, true, true),
        ] {
            let mut config = config_with_buttons(buttons);
            config.start = start;
            config.select = select;
            config.joystick = joystick;

            let controller = init(&config);
            let expected = buttons + usize::from(start) + usize::from(select);
            assert_eq!(controller.controls().len(), expected);
            assert_eq!(controller.stick().is_some(), joystick);
        }
    }
}

#[test]
fn default_config_uses_four_button_preset() {
    let controller = init(&PadConfig::default());
    let names: Vec<&str> = controller
        .controls()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    // Four preset buttons plus the default start button.
    assert_eq!(names, vec!["a", "b", "x", "y", "start"]);
}

#[test]
fn overrides_apply_by_positional_index() {
    let mut config = config_with_buttons(2);
    config.start = false;
    config.buttons[0] = ButtonSpec {
        name: Some("jump".to_string()),
        color: Some(ColorSpec::Name("cyan".to_string())),
        key: Some("s".to_string()),
    };

    let controller = init(&config);
    let first = &controller.controls()[0];
    assert_eq!(first.id, "jump");
    assert_eq!(first.color, crate::draw::color::CYAN);
    assert_eq!(first.key.as_deref(), Some("s"));

    // Second button keeps its preset identity.
    assert_eq!(controller.controls()[1].id, "b");
    assert!(controller.controls()[1].key.is_none());
}

#[test]
fn state_keys_are_fixed_after_init() {
    let mut config = config_with_buttons(1);
    config.start = false;
    config.joystick = true;
    let controller = init(&config);

    let state = controller.get_state();
    assert_eq!(state.len(), 5); // "a" + four stick keys
    assert!(state.contains("a"));
    for key in STICK_KEYS {
        assert!(state.contains(key));
    }
}

#[test]
fn start_and_select_avoid_overlap() {
    let mut config = PadConfig::default();
    config.start = true;
    config.select = true;

    let controller = init(&config);
    let start = controller
        .controls()
        .iter()
        .find(|c| c.id == "start")
        .unwrap();
    let select = controller
        .controls()
        .iter()
        .find(|c| c.id == "select")
        .unwrap();

    let (ControlShape::Rect(start_rect), ControlShape::Rect(select_rect)) =
        (start.shape, select.shape)
    else {
        panic!("start/select must be rect controls");
    };

    assert_eq!(start_rect.x, W / 2.0);
    // Select sits left of start by twice the button height.
    assert_eq!(select_rect.x, W / 2.0 - start_rect.width - start_rect.height * 2.0);
    assert_eq!(start_rect.y, select_rect.y);
}

#[test]
fn lone_start_sits_left_of_midline() {
    let controller = init(&PadConfig::default());
    let start = controller
        .controls()
        .iter()
        .find(|c| c.id == "start")
        .unwrap();
    let ControlShape::Rect(rect) = start.shape else {
        panic!("start must be a rect control");
    };
    assert_eq!(rect.x, W / 2.0 - rect.width);
    assert_eq!(rect.y, H - crate::layout::BUTTON_OFFSET.1 - rect.height);
}

#[test]
fn stick_is_mirrored_from_the_anchor() {
    let controller = init(&PadConfig::default());
    let (ax, ay) = controller.anchor();
    let stick = controller.stick().unwrap();
    assert_eq!(stick.x, W - ax);
    assert_eq!(stick.y, ay);
}

#[test]
fn top_left_layout_drops_cluster_by_two_radii() {
    let mut top_left = PadConfig::default();
    top_left.layout = Corner::TopLeft;
    let mut top_right = PadConfig::default();
    top_right.layout = Corner::TopRight;

    let tl = init(&top_left);
    let tr = init(&top_right);

    // Same anchor row; every top-left round button sits 2r lower than its
    // top-right counterpart.
    for (left, right) in tl.controls().iter().zip(tr.controls()) {
        if let (
            ControlShape::Round {
                cy: cy_left,
                radius,
                ..
            },
            ControlShape::Round { cy: cy_right, .. },
        ) = (left.shape, right.shape)
        {
            assert_eq!(cy_left, cy_right + radius * 2.0);
        }
    }
}

#[test]
fn reset_states_zero_fills_everything() {
    let mut controller = init(&PadConfig::default());
    controller.update_state(&[("a", 1.0), (X_AXIS, 0.5), (X_DIR, 1.0)]);
    controller.controls_mut()[0].active = true;
    controller.stick_mut().unwrap().dx += 10.0;

    controller.reset_states();

    for (_, value) in controller.get_state().iter() {
        assert_eq!(value, 0.0);
    }
    assert!(!controller.controls()[0].active);
    assert_eq!(controller.stick().unwrap().offset(), (0.0, 0.0));
}

#[test]
fn reinit_rebuilds_positions_for_new_dimensions() {
    let mut controller = init(&PadConfig::default());
    let (old_anchor_x, _) = controller.anchor();

    controller.reinit(W * 2.0, H);

    // The anchor tracks the right edge, so doubling the width moves it
    // by a full width. The stick mirrors back to the same left-edge
    // offset at any width.
    let (new_anchor_x, _) = controller.anchor();
    assert_eq!(new_anchor_x, old_anchor_x + W);
    assert_eq!(controller.stick().unwrap().x, crate::layout::BUTTON_OFFSET.0);
    assert!(controller.config().is_some(), "config survives reinit");
}
