//! Eingabe-Ereignisse einer Erfassungs-Sitzung.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ereignis, das die Erfassungs-Sitzung verarbeitet.
///
/// JSON-Form: `{"add_point": [x, y]}`, `"remove_last_point"`, `"finish"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureEvent {
    /// Punkt in Erfassungs-Koordinaten (x = Spalte, y = Zeile) anhängen
    AddPoint(Vec2),
    /// Zuletzt gesetzten Punkt entfernen
    RemoveLastPoint,
    /// Region schließen
    Finish,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_parse_from_json_script() {
        let json = r#"[{"add_point": [1.5, 2.0]}, "remove_last_point", "finish"]"#;
        let events: Vec<CaptureEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(
            events,
            vec![
                CaptureEvent::AddPoint(Vec2::new(1.5, 2.0)),
                CaptureEvent::RemoveLastPoint,
                CaptureEvent::Finish,
            ]
        );
    }
}
