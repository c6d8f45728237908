use winit::event::ElementState;
use winit::keyboard::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminating,
}

/// Discrete commands the demo reacts to, decoded from keyboard events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    IncreaseTess,
    DecreaseTess,
    Screenshot,
    Quit,
}

/// Tessellation and screenshot trigger on key release; Escape quits on
/// either edge.
pub fn action_for_key(code: KeyCode, state: ElementState) -> Option<Action> {
    match (code, state) {
        (KeyCode::Escape, _) => Some(Action::Quit),
        (KeyCode::ArrowUp, ElementState::Released) => Some(Action::IncreaseTess),
        (KeyCode::ArrowDown, ElementState::Released) => Some(Action::DecreaseTess),
        (KeyCode::PrintScreen, ElementState::Released) => Some(Action::Screenshot),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{action_for_key, Action};
    use winit::event::ElementState;
    use winit::keyboard::KeyCode;

    #[test]
    fn arrows_act_on_release_only() {
        assert_eq!(
            action_for_key(KeyCode::ArrowUp, ElementState::Released),
            Some(Action::IncreaseTess)
        );
        assert_eq!(
            action_for_key(KeyCode::ArrowDown, ElementState::Released),
            Some(Action::DecreaseTess)
        );
        assert_eq!(action_for_key(KeyCode::ArrowUp, ElementState::Pressed), None);
        assert_eq!(action_for_key(KeyCode::ArrowDown, ElementState::Pressed), None);
    }

    #[test]
    fn escape_quits_on_either_edge() {
        assert_eq!(
            action_for_key(KeyCode::Escape, ElementState::Pressed),
            Some(Action::Quit)
        );
        assert_eq!(
            action_for_key(KeyCode::Escape, ElementState::Released),
            Some(Action::Quit)
        );
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(action_for_key(KeyCode::KeyW, ElementState::Released), None);
        assert_eq!(action_for_key(KeyCode::Space, ElementState::Pressed), None);
    }
}
