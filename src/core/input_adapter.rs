use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Controller, Direction};

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently held movement keys
    pressed_keys: HashSet<KeyCode>,
    /// Virtual cursor; unbounded while grabbed
    cursor: (f64, f64),
    /// Whether raw mouse motion drives the cursor
    grabbed: bool,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    self.set_key(keycode, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::CursorMoved { position, .. } if !self.grabbed => {
                self.cursor = (position.x, position.y);
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    /// Raw device motion, e.g. `DeviceEvent::MouseMotion`
    pub fn process_mouse_motion(&mut self, delta: (f64, f64)) {
        if self.grabbed {
            self.cursor.0 += delta.0;
            self.cursor.1 += delta.1;
        }
    }

    /// Record a key transition; keys without a direction are ignored
    pub fn set_key(&mut self, keycode: KeyCode, pressed: bool) {
        if Self::keycode_to_direction(keycode).is_none() {
            return;
        }
        if pressed {
            self.pressed_keys.insert(keycode);
        } else {
            self.pressed_keys.remove(&keycode);
        }
    }

    pub fn set_grabbed(&mut self, grabbed: bool) {
        self.grabbed = grabbed;
    }

    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    /// Drop every held key (window lost focus)
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
    }

    /// Map Winit KeyCode to a movement direction
    fn keycode_to_direction(keycode: KeyCode) -> Option<Direction> {
        match keycode {
            KeyCode::KeyW | KeyCode::ArrowUp => Some(Direction::Forward),
            KeyCode::KeyS | KeyCode::ArrowDown => Some(Direction::Backward),
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(Direction::Left),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(Direction::Right),
            KeyCode::Space => Some(Direction::Up),
            KeyCode::ControlLeft | KeyCode::ControlRight => Some(Direction::Down),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_active(&self, direction: Direction) -> bool {
        self.pressed_keys
            .iter()
            .any(|&key| Self::keycode_to_direction(key) == Some(direction))
    }

    fn cursor_position(&self) -> (f64, f64) {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit event construction requires internal fields that are not publicly accessible,
    // so key handling is exercised through set_key

    #[test]
    fn test_new_controller_empty() {
        let controller = WinitController::new();
        for direction in Direction::ALL {
            assert!(!controller.is_active(direction));
        }
        assert_eq!(controller.cursor_position(), (0.0, 0.0));
        assert!(!controller.is_grabbed());
    }

    #[test]
    fn test_key_mapping() {
        let cases = [
            (KeyCode::KeyW, Direction::Forward),
            (KeyCode::KeyS, Direction::Backward),
            (KeyCode::KeyA, Direction::Left),
            (KeyCode::KeyD, Direction::Right),
            (KeyCode::Space, Direction::Up),
            (KeyCode::ControlLeft, Direction::Down),
            (KeyCode::ControlRight, Direction::Down),
            (KeyCode::ArrowUp, Direction::Forward),
        ];

        for (key, direction) in cases {
            let mut controller = WinitController::new();
            controller.set_key(key, true);
            assert!(controller.is_active(direction), "{:?} should map to {:?}", key, direction);
            controller.set_key(key, false);
            assert!(!controller.is_active(direction));
        }
    }

    #[test]
    fn test_unmapped_key_ignored() {
        let mut controller = WinitController::new();
        controller.set_key(KeyCode::KeyQ, true);
        assert!(controller.pressed_keys.is_empty());
    }

    #[test]
    fn test_direction_held_by_either_key() {
        let mut controller = WinitController::new();
        controller.set_key(KeyCode::KeyW, true);
        controller.set_key(KeyCode::ArrowUp, true);
        controller.set_key(KeyCode::KeyW, false);
        assert!(controller.is_active(Direction::Forward));
    }

    #[test]
    fn test_release_all() {
        let mut controller = WinitController::new();
        controller.set_key(KeyCode::KeyW, true);
        controller.set_key(KeyCode::Space, true);
        controller.release_all();
        assert!(!controller.is_active(Direction::Forward));
        assert!(!controller.is_active(Direction::Up));
    }

    #[test]
    fn test_mouse_motion_only_when_grabbed() {
        let mut controller = WinitController::new();
        controller.process_mouse_motion((10.0, 5.0));
        assert_eq!(controller.cursor_position(), (0.0, 0.0));

        controller.set_grabbed(true);
        controller.process_mouse_motion((10.0, 5.0));
        controller.process_mouse_motion((-2.5, 1.0));
        assert_eq!(controller.cursor_position(), (7.5, 6.0));
    }
}
