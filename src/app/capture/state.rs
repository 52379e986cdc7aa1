//! Zustandsmaschine der Erfassungs-Sitzung.

use glam::Vec2;

use crate::core::{ClosedPointSequence, SmoothingKind};

/// Zustand einer Sitzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// Punkte werden gesammelt
    #[default]
    Collecting,
    /// Region geschlossen, weitere Ereignisse werden ignoriert
    Done,
}

/// Grund, aus dem ein Ereignis ohne Wirkung blieb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Entfernen bei leerem Punkt-Puffer
    EmptyBuffer,
    /// Abschluss mit weniger als 3 Punkten
    TooFewPoints,
    /// Sitzung ist bereits abgeschlossen
    SessionDone,
}

/// Ergebnis eines verarbeiteten Ereignisses.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Punkt angehängt
    PointAdded,
    /// Letzter Punkt entfernt
    PointRemoved,
    /// Region geschlossen; Sitzung ist jetzt `Done`
    Closed(ClosedPointSequence),
    /// Ereignis ignoriert, Zustand unverändert
    Ignored(IgnoreReason),
}

impl Transition {
    /// `true` wenn das Ereignis den Zustand verändert hat.
    pub fn changed_state(&self) -> bool {
        !matches!(self, Transition::Ignored(_))
    }
}

/// Erfassungs-Sitzung: geordneter Punkt-Puffer plus Zustand.
///
/// Im Zustand `Done` enthält der Puffer die geschlossene Folge
/// (erster Punkt am Ende wiederholt).
#[derive(Debug, Clone, Default)]
pub struct CaptureSession {
    pub(crate) points: Vec<Vec2>,
    pub(crate) state: CaptureState,
    /// Interpolant für die Live-Vorschau
    pub(crate) smoothing: SmoothingKind,
}

impl CaptureSession {
    /// Erstellt eine leere Sitzung mit Standard-Glättung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine leere Sitzung, deren Vorschau mit `smoothing` geglättet wird.
    pub fn with_smoothing(smoothing: SmoothingKind) -> Self {
        Self {
            smoothing,
            ..Self::default()
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Aktueller Punkt-Puffer in Klick-Reihenfolge.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn is_done(&self) -> bool {
        self.state == CaptureState::Done
    }
}
