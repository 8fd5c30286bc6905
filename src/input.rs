use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::CameraAction;

/// Map a physical key to its camera action, if any.
///
/// Bindings: WASD to move, arrow keys to pitch/yaw, E/R to roll.
pub fn action_for_key(keycode: KeyCode) -> Option<CameraAction> {
    match keycode {
        KeyCode::KeyW => Some(CameraAction::MoveForward),
        KeyCode::KeyS => Some(CameraAction::MoveBackward),
        KeyCode::KeyA => Some(CameraAction::MoveLeft),
        KeyCode::KeyD => Some(CameraAction::MoveRight),
        KeyCode::ArrowUp => Some(CameraAction::PitchUp),
        KeyCode::ArrowDown => Some(CameraAction::PitchDown),
        KeyCode::ArrowLeft => Some(CameraAction::YawLeft),
        KeyCode::ArrowRight => Some(CameraAction::YawRight),
        KeyCode::KeyE => Some(CameraAction::RollLeft),
        KeyCode::KeyR => Some(CameraAction::RollRight),
        _ => None,
    }
}

/// Which camera actions are currently held down.
///
/// The render loop replays every held action once per frame with the frame
/// delta, so holding a key produces smooth time-scaled motion.
#[derive(Default, Clone, Copy)]
pub struct HeldActions {
    held: [bool; CameraAction::ALL.len()],
}

impl HeldActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, action: CameraAction, pressed: bool) {
        self.held[action.index()] = pressed;
    }

    pub fn is_held(&self, action: CameraAction) -> bool {
        self.held[action.index()]
    }

    /// Record a key transition. Returns true if the key maps to an action.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if let PhysicalKey::Code(keycode) = event.physical_key {
            if let Some(action) = action_for_key(keycode) {
                self.set(action, event.state.is_pressed());
                return true;
            }
        }
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = CameraAction> + '_ {
        CameraAction::ALL
            .into_iter()
            .filter(|action| self.is_held(*action))
    }

    pub fn any_held(&self) -> bool {
        self.held.iter().any(|&held| held)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys_map_to_actions() {
        assert_eq!(action_for_key(KeyCode::KeyW), Some(CameraAction::MoveForward));
        assert_eq!(action_for_key(KeyCode::KeyS), Some(CameraAction::MoveBackward));
        assert_eq!(action_for_key(KeyCode::KeyA), Some(CameraAction::MoveLeft));
        assert_eq!(action_for_key(KeyCode::KeyD), Some(CameraAction::MoveRight));
        assert_eq!(action_for_key(KeyCode::KeyR), Some(CameraAction::RollRight));
        assert_eq!(action_for_key(KeyCode::KeyE), Some(CameraAction::RollLeft));
    }

    #[test]
    fn unbound_keys_map_to_none() {
        assert_eq!(action_for_key(KeyCode::KeyQ), None);
        assert_eq!(action_for_key(KeyCode::Space), None);
        assert_eq!(action_for_key(KeyCode::Escape), None);
    }

    #[test]
    fn press_and_release_toggle_held_state() {
        let mut held = HeldActions::new();
        assert!(!held.any_held());

        held.set(CameraAction::MoveForward, true);
        held.set(CameraAction::YawLeft, true);
        assert!(held.is_held(CameraAction::MoveForward));
        assert!(held.is_held(CameraAction::YawLeft));
        assert_eq!(held.iter().count(), 2);

        held.set(CameraAction::MoveForward, false);
        assert!(!held.is_held(CameraAction::MoveForward));
        assert_eq!(held.iter().count(), 1);
    }
}
