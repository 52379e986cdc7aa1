//! Rückmeldung an die Darstellung nach jedem verarbeiteten Ereignis.

use glam::Vec2;

use super::Transition;

/// Vorschau-Geometrie nach einem Übergang.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapturePreview {
    /// Gesetzte Punkte (im Zustand `Done` inkl. schließender Wiederholung)
    pub points: Vec<Vec2>,
    /// Geglättete Kurve durch die Punkte (leer bei weniger als 3 Punkten)
    pub curve: Vec<Vec2>,
}

/// Empfänger für Sitzungs-Übergänge (z.B. Overlay-Zeichnung).
pub trait CaptureObserver {
    /// Wird nach jedem Ereignis aufgerufen, auch bei ignorierten Ereignissen.
    fn on_transition(&mut self, _preview: &CapturePreview, _transition: &Transition) {}
}

/// Observer ohne Wirkung (Headless-Betrieb).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CaptureObserver for NoopObserver {}

/// Protokolliert jeden Übergang über `log`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl CaptureObserver for LoggingObserver {
    fn on_transition(&mut self, preview: &CapturePreview, transition: &Transition) {
        match transition {
            Transition::Ignored(reason) => {
                log::warn!("Ereignis ignoriert: {:?}", reason);
            }
            Transition::Closed(sequence) => {
                log::info!(
                    "Region geschlossen mit {} Punkten, Vorschau {} Kurvenpunkte",
                    sequence.vertices().len(),
                    preview.curve.len()
                );
            }
            _ => {
                log::debug!(
                    "{:?}: {} Punkte, {} Kurvenpunkte",
                    transition,
                    preview.points.len(),
                    preview.curve.len()
                );
            }
        }
    }
}
