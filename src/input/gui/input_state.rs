use crate::core::controls::snapshot::{Buttons, InputSnapshot};
use crate::core::data::point::Point;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Accumulates window events between frames and turns them into one [`InputSnapshot`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GuiInputState {
    held: Buttons,
    pending_edges: Buttons,
    pointer: Option<Point>,
}

fn button_for_key(buttons: &mut Buttons, key_code: KeyCode) -> Option<&mut bool> {
    match key_code {
        KeyCode::Space => Some(&mut buttons.cycle_toggle),
        KeyCode::Minus | KeyCode::BracketLeft => Some(&mut buttons.palette_previous),
        KeyCode::Equal | KeyCode::BracketRight => Some(&mut buttons.palette_next),
        KeyCode::Digit1 => Some(&mut buttons.iterations_double),
        KeyCode::Digit2 => Some(&mut buttons.iterations_halve),
        KeyCode::Escape | KeyCode::Home => Some(&mut buttons.home),
        _ => None,
    }
}

fn button_for_mouse(buttons: &mut Buttons, button: MouseButton) -> Option<&mut bool> {
    match button {
        MouseButton::Left => Some(&mut buttons.primary),
        MouseButton::Right => Some(&mut buttons.secondary),
        _ => None,
    }
}

impl GuiInputState {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let was_held = button_for_key(&mut self.held, key_code).map(|held| *held);

        if let Some(was_held) = was_held {
            self.update(was_held, state, |buttons| button_for_key(buttons, key_code));
        }
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let was_held = button_for_mouse(&mut self.held, button).map(|held| *held);

        if let Some(was_held) = was_held {
            self.update(was_held, state, |buttons| button_for_mouse(buttons, button));
        }
    }

    /// Logical-screen pointer position, or `None` when the cursor is outside the framebuffer.
    pub fn set_pointer(&mut self, pointer: Option<Point>) {
        self.pointer = pointer;
    }

    /// Edges are reported once; a button pressed and released within a frame still reads as held.
    /// While the overlay UI owns input, a neutral snapshot is returned and pending edges are dropped.
    pub fn snapshot(&mut self, ui_captured: bool) -> InputSnapshot {
        let pressed = std::mem::take(&mut self.pending_edges);

        if ui_captured {
            return InputSnapshot::default();
        }

        InputSnapshot {
            pointer: self.pointer,
            pressed,
            held: union(self.held, pressed),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn update<F>(&mut self, was_held: bool, state: ElementState, select: F)
    where
        F: Fn(&mut Buttons) -> Option<&mut bool>,
    {
        let pressed = state == ElementState::Pressed;

        if let Some(held) = select(&mut self.held) {
            *held = pressed;
        }

        // key repeat arrives as further presses
        if pressed && !was_held {
            if let Some(edge) = select(&mut self.pending_edges) {
                *edge = true;
            }
        }
    }
}

fn union(a: Buttons, b: Buttons) -> Buttons {
    Buttons {
        primary: a.primary || b.primary,
        secondary: a.secondary || b.secondary,
        cycle_toggle: a.cycle_toggle || b.cycle_toggle,
        palette_previous: a.palette_previous || b.palette_previous,
        palette_next: a.palette_next || b.palette_next,
        home: a.home || b.home,
        iterations_halve: a.iterations_halve || b.iterations_halve,
        iterations_double: a.iterations_double || b.iterations_double,
    }
}
