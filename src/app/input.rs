//! Mapping von Geräte-Eingaben auf Erfassungs-Ereignisse.

use glam::Vec2;

use super::CaptureEvent;

/// Taste, soweit sie für die Erfassung relevant ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Delete,
    Escape,
    /// Jede andere Taste
    Other,
}

/// Rohe Eingabe aus dem Viewport (Position bereits in Erfassungs-Koordinaten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    /// Linksklick
    PrimaryClick(Vec2),
    /// Rechtsklick
    SecondaryClick(Vec2),
    KeyPressed(Key),
}

/// Übersetzt eine rohe Eingabe in ein `CaptureEvent`.
///
/// Eingaben ohne Bedeutung für die Erfassung liefern `None`.
pub fn map_raw_input(input: RawInput) -> Option<CaptureEvent> {
    match input {
        RawInput::PrimaryClick(pos) => Some(CaptureEvent::AddPoint(pos)),
        RawInput::SecondaryClick(_) => Some(CaptureEvent::RemoveLastPoint),
        RawInput::KeyPressed(Key::Backspace | Key::Delete) => Some(CaptureEvent::RemoveLastPoint),
        RawInput::KeyPressed(Key::Enter) => Some(CaptureEvent::Finish),
        RawInput::KeyPressed(Key::Escape | Key::Other) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_click_adds_point_at_position() {
        let pos = Vec2::new(12.5, 3.0);
        assert_eq!(
            map_raw_input(RawInput::PrimaryClick(pos)),
            Some(CaptureEvent::AddPoint(pos))
        );
    }

    #[test]
    fn test_removal_inputs() {
        for input in [
            RawInput::SecondaryClick(Vec2::ZERO),
            RawInput::KeyPressed(Key::Backspace),
            RawInput::KeyPressed(Key::Delete),
        ] {
            assert_eq!(map_raw_input(input), Some(CaptureEvent::RemoveLastPoint));
        }
    }

    #[test]
    fn test_enter_finishes_and_other_keys_are_ignored() {
        assert_eq!(
            map_raw_input(RawInput::KeyPressed(Key::Enter)),
            Some(CaptureEvent::Finish)
        );
        assert_eq!(map_raw_input(RawInput::KeyPressed(Key::Escape)), None);
        assert_eq!(map_raw_input(RawInput::KeyPressed(Key::Other)), None);
    }
}
