//! Renders controls, the stick, and overlays onto a [`DrawSurface`].
//!
//! All functions are pure side effects on the surface; nothing here mutates
//! pad state.

use crate::controller::control::{Control, ControlShape};
use crate::controller::stick::Stick;
use crate::draw::color::{self, Color};
use crate::draw::font::FontSize;
use crate::draw::surface::{DrawSurface, TextAlign};
use crate::util;

const OUTLINE_WIDTH: f64 = 2.0;
const HALO: f64 = 5.0;
const RECT_CORNER: f64 = 10.0;

const LABEL_LIGHT: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

const LABEL_DARK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.5,
};

const HINT_COLOR: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.25,
};

/// Draws a single control; `hint` additionally draws its bound key.
pub fn render_control(surface: &mut dyn DrawSurface, control: &Control, hint: bool) {
    match control.shape {
        ControlShape::Round { cx, cy, radius } => {
            if control.active {
                surface.fill_circle(cx, cy, radius + HALO, control.color);
            }
            surface.fill_circle(cx, cy, radius, control.color);
            surface.stroke_circle(cx, cy, radius, OUTLINE_WIDTH, control.color);
            surface.fill_text(&control.id, cx, cy, FontSize::Button, TextAlign::Center, LABEL_LIGHT);

            if hint && let Some(key) = &control.key {
                surface.fill_text(
                    key,
                    cx,
                    cy - radius * 1.5,
                    FontSize::Button,
                    TextAlign::Center,
                    HINT_COLOR,
                );
            }
        }
        ControlShape::Rect(rect) => {
            if control.active {
                let halo = rect.inflate(HALO);
                let radius = util::corner_radius(RECT_CORNER * 2.0, halo.width, halo.height);
                surface.fill_round_rect(halo, radius, control.color);
            }
            let radius = util::corner_radius(RECT_CORNER, rect.width, rect.height);
            surface.fill_round_rect(rect, radius, control.color);
            surface.stroke_round_rect(rect, radius, OUTLINE_WIDTH, control.color);
            // Label sits below the rect.
            surface.fill_text(
                &control.id,
                rect.x + rect.width / 2.0,
                rect.y + rect.height * 2.0,
                FontSize::Button,
                TextAlign::Center,
                LABEL_DARK,
            );

            if hint && let Some(key) = &control.key {
                surface.fill_text(
                    key,
                    rect.x + rect.width / 2.0,
                    rect.y - rect.height,
                    FontSize::Button,
                    TextAlign::Center,
                    HINT_COLOR,
                );
            }
        }
    }
}

/// Draws the four-layer stick stack: base, dust, center post, then the
/// shadowed moving ball.
pub fn render_stick(surface: &mut dyn DrawSurface, stick: &Stick) {
    surface.fill_circle(stick.x, stick.y, stick.radius, color::joystick::BASE);
    surface.fill_circle(stick.x, stick.y, stick.radius - 5.0, color::joystick::DUST);
    surface.fill_circle(stick.x, stick.y, 10.0, color::joystick::STICK);
    surface.fill_circle(stick.dx, stick.dy, stick.radius - 5.0, color::joystick::SHADOW);
    surface.fill_circle(stick.dx, stick.dy, stick.radius - 10.0, color::joystick::BALL);
}

/// Left-aligned overlay listing live contacts, one row per contact.
pub fn render_debug(
    surface: &mut dyn DrawSurface,
    rows: impl Iterator<Item = (String, String)>,
) {
    let mut dy = 30.0;
    surface.fill_text("debug", 10.0, dy, FontSize::Medium, TextAlign::Left, LABEL_DARK);
    dy += 5.0;
    for (id, value) in rows {
        dy += 10.0;
        let text = format!("{id} : {value}");
        surface.fill_text(&text, 10.0, dy, FontSize::Small, TextAlign::Left, LABEL_DARK);
    }
}

/// Right-aligned overlay listing every state snapshot entry.
pub fn render_trace(surface: &mut dyn DrawSurface, rows: impl Iterator<Item = (String, f64)>) {
    let (width, _) = surface.dimensions();
    let mut dy = 30.0;
    surface.fill_text(
        "trace",
        width - 10.0,
        dy,
        FontSize::Medium,
        TextAlign::Right,
        LABEL_DARK,
    );
    dy += 5.0;
    for (key, value) in rows {
        dy += 10.0;
        let text = format!("{key} : {value}");
        surface.fill_text(
            &text,
            width - 10.0,
            dy,
            FontSize::Small,
            TextAlign::Right,
            LABEL_DARK,
        );
    }
}

/// Centered splash drawn once during setup.
pub fn render_loading(surface: &mut dyn DrawSurface) {
    let (width, height) = surface.dimensions();
    surface.fill_text(
        "loading",
        width / 2.0,
        height / 2.0,
        FontSize::Small,
        TextAlign::Center,
        LABEL_DARK,
    );
}
