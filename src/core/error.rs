//! Fehlertypen der ROI-Pipeline.

use thiserror::Error;

/// Fehler, die aus der Library an den Aufrufer gereicht werden.
///
/// Ignorierte Eingaben (Entfernen bei leerem Puffer, Abschluss mit zu wenigen
/// Punkten) sind bewusst **keine** Fehler, sondern `Transition::Ignored`.
#[derive(Debug, Error)]
pub enum RoiError {
    /// Ungültige Konfiguration (z.B. nicht parsbare Arbeitsauflösung).
    /// Tritt immer vor dem Start einer Erfassungs-Sitzung auf.
    #[error("Ungültige Konfiguration: {0}")]
    Configuration(String),

    /// Eingabedaten verletzen eine Invariante des Datenmodells
    /// (z.B. nicht geschlossene Kurve). Programmierfehler des Aufrufers.
    #[error("Invariante verletzt: {0}")]
    InvariantViolation(String),

    /// Umriss wurde angefordert, konnte aber nicht berechnet werden.
    #[error("Umriss-Berechnung fehlgeschlagen: {0}")]
    OutlineFailed(String),

    /// Fehler beim Lesen oder Schreiben eines Bildes.
    #[error("Bildfehler: {0}")]
    Image(#[from] image::ImageError),

    /// Dateisystem-Fehler.
    #[error("I/O-Fehler: {0}")]
    Io(#[from] std::io::Error),
}

impl RoiError {
    /// Kurzform für `RoiError::InvariantViolation`.
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        RoiError::InvariantViolation(message.into())
    }

    /// Kurzform für `RoiError::Configuration`.
    pub(crate) fn config(message: impl Into<String>) -> Self {
        RoiError::Configuration(message.into())
    }
}
