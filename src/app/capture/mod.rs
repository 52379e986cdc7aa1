//! Erfassungs-Sitzung: Punkte sammeln, rückgängig machen, Region schließen.
//!
//! Aufgeteilt in:
//! - `events`:    Eingabe-Ereignisse der Sitzung
//! - `state`:     Zustandsmaschine (`CaptureSession`) und Übergänge
//! - `lifecycle`: Ereignis-Verarbeitung, Vorschau, Sitzungs-Schleife
//! - `source`:    Ereignisquellen (Skript, Kanal)
//! - `observer`:  Rückmeldung an die Darstellung nach jedem Übergang

mod events;
mod lifecycle;
mod observer;
mod source;
mod state;

pub use events::CaptureEvent;
pub use lifecycle::run_session;
pub use observer::{CaptureObserver, CapturePreview, LoggingObserver, NoopObserver};
pub use source::{EventSource, ScriptedEvents};
pub use state::{CaptureSession, CaptureState, IgnoreReason, Transition};
