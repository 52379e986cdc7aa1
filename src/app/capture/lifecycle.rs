//! Ereignis-Verarbeitung und Sitzungs-Schleife.

use crate::core::{smooth_points, ClosedPointSequence};

use super::{
    CaptureEvent, CaptureObserver, CapturePreview, CaptureSession, CaptureState, EventSource,
    IgnoreReason, Transition,
};

impl CaptureSession {
    /// Verarbeitet ein Ereignis und liefert den resultierenden Übergang.
    ///
    /// Ungültige Eingaben (Entfernen bei leerem Puffer, Abschluss mit weniger
    /// als 3 Punkten, alles nach dem Abschluss) ändern nichts.
    pub fn handle(&mut self, event: CaptureEvent) -> Transition {
        if self.state == CaptureState::Done {
            return Transition::Ignored(IgnoreReason::SessionDone);
        }

        match event {
            CaptureEvent::AddPoint(pos) => {
                self.points.push(pos);
                Transition::PointAdded
            }
            CaptureEvent::RemoveLastPoint => match self.points.pop() {
                Some(_) => Transition::PointRemoved,
                None => Transition::Ignored(IgnoreReason::EmptyBuffer),
            },
            CaptureEvent::Finish => match ClosedPointSequence::close(&self.points) {
                Some(closed) => {
                    self.points = closed.points().to_vec();
                    self.state = CaptureState::Done;
                    Transition::Closed(closed)
                }
                None => Transition::Ignored(IgnoreReason::TooFewPoints),
            },
        }
    }

    /// Vorschau: gesetzte Punkte plus geglättete Kurve ab 3 Punkten.
    pub fn preview(&self) -> CapturePreview {
        let curve = if self.points.len() >= 3 {
            smooth_points(&self.points, self.smoothing)
        } else {
            Vec::new()
        };
        CapturePreview {
            points: self.points.clone(),
            curve,
        }
    }

    /// Hinweistext für die Statuszeile.
    pub fn status_text(&self) -> &'static str {
        if self.is_done() {
            return "Region geschlossen";
        }
        match self.points.len() {
            0 => "Ersten Punkt klicken",
            1 | 2 => "Weitere Punkte klicken (mind. 3 Punkte)",
            _ => "Weitere Punkte klicken, Enter schließt die Region",
        }
    }
}

/// Verarbeitet Ereignisse bis zum Abschluss der Region.
///
/// Gibt `None` zurück, wenn die Quelle vor dem Abschluss versiegt.
/// Nach dem Abschluss werden keine weiteren Ereignisse abgerufen.
pub fn run_session(
    session: &mut CaptureSession,
    source: &mut dyn EventSource,
    observer: &mut dyn CaptureObserver,
) -> Option<ClosedPointSequence> {
    while let Some(event) = source.next_event() {
        log::trace!("Ereignis empfangen: {:?}", event);
        let transition = session.handle(event);
        observer.on_transition(&session.preview(), &transition);
        if let Transition::Closed(closed) = transition {
            return Some(closed);
        }
    }
    log::info!(
        "Ereignisquelle beendet ohne geschlossene Region ({} Punkte verworfen)",
        session.points().len()
    );
    None
}
