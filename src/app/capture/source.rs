//! Ereignisquellen für die Sitzungs-Schleife.

use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

use super::CaptureEvent;

/// Liefert Ereignisse nacheinander; `None` beendet die Sitzung.
pub trait EventSource {
    fn next_event(&mut self) -> Option<CaptureEvent>;
}

/// Vorab festgelegte Ereignisfolge (Skript, Tests).
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    events: VecDeque<CaptureEvent>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = CaptureEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Anzahl noch nicht abgerufener Ereignisse.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl From<Vec<CaptureEvent>> for ScriptedEvents {
    fn from(events: Vec<CaptureEvent>) -> Self {
        Self::new(events)
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> Option<CaptureEvent> {
        self.events.pop_front()
    }
}

/// Blockiert bis zum nächsten Ereignis; ein geschlossener Sender beendet die Quelle.
impl EventSource for Receiver<CaptureEvent> {
    fn next_event(&mut self) -> Option<CaptureEvent> {
        self.recv().ok()
    }
}
