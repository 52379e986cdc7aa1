//! App-Layer: Erfassungs-Sitzung, Eingabe-Mapping und Orchestrierung.

pub mod capture;
pub mod controller;
pub mod input;

pub use capture::{
    run_session, CaptureEvent, CaptureObserver, CapturePreview, CaptureSession, CaptureState,
    EventSource, IgnoreReason, LoggingObserver, NoopObserver, ScriptedEvents, Transition,
};
pub use controller::{AnnotationController, OutlineOutcome, OutlineRequest, RoiAnnotation};
pub use input::{map_raw_input, Key, RawInput};
