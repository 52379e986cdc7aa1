//! Application Controller: Konfiguration prüfen, Sitzung ausführen,
//! Ergebnis durch Glättung, Rasterisierung und Umriss-Extraktion reichen.

use crate::core::{
    extract_outline, rasterize, smooth_closed, ClosedPointSequence, Curve, GridSize, Mask,
    Outline, RoiError, SmoothingKind, UpsampleFilter,
};
use crate::shared::{AnnotationOptions, WorkingResolution};

use super::capture::{run_session, CaptureObserver, CaptureSession, EventSource};

/// Ob nach der Rasterisierung ein Umriss berechnet werden soll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutlineRequest {
    #[default]
    NotRequested,
    Requested,
}

impl From<bool> for OutlineRequest {
    fn from(requested: bool) -> Self {
        if requested {
            OutlineRequest::Requested
        } else {
            OutlineRequest::NotRequested
        }
    }
}

/// Ergebnis der Umriss-Stufe.
#[derive(Debug)]
pub enum OutlineOutcome {
    /// Umriss wurde nicht angefordert
    NotRequested,
    Extracted(Outline),
    /// Umriss angefordert, Berechnung fehlgeschlagen
    Failed(RoiError),
}

impl OutlineOutcome {
    /// Der extrahierte Umriss, falls vorhanden.
    pub fn outline(&self) -> Option<&Outline> {
        match self {
            OutlineOutcome::Extracted(outline) => Some(outline),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, OutlineOutcome::Failed(_))
    }
}

/// Vollständiges Ergebnis einer Annotation.
#[derive(Debug)]
pub struct RoiAnnotation {
    /// Geschlossene Punktfolge in Erfassungs-Koordinaten
    pub points: ClosedPointSequence,
    /// Geglättete Kurve in Erfassungs-Koordinaten
    pub curve: Curve,
    /// Maske in Zielauflösung
    pub mask: Mask,
    pub outline: OutlineOutcome,
    pub capture_size: GridSize,
    pub target_size: GridSize,
}

/// Orchestriert eine Annotation von der Erfassung bis zum Umriss.
#[derive(Debug, Clone)]
pub struct AnnotationController {
    smoothing: SmoothingKind,
    upsample_filter: UpsampleFilter,
    outline_request: OutlineRequest,
    working_resolution: WorkingResolution,
    target_size: GridSize,
    capture_size: GridSize,
}

impl AnnotationController {
    /// Erstellt einen Controller für ein Bild der Größe `target_size`.
    ///
    /// Konfigurationsfehler werden hier gemeldet, also vor jeder Sitzung.
    pub fn new(options: &AnnotationOptions, target_size: GridSize) -> Result<Self, RoiError> {
        if target_size.is_empty() {
            return Err(RoiError::config(format!(
                "Bildgröße {}x{} ist leer",
                target_size.rows, target_size.cols
            )));
        }
        let working_resolution = options.working_resolution()?;
        let capture_size = working_resolution.capture_size(target_size);

        log::info!(
            "Annotation vorbereitet: Ziel {}x{}, Erfassung {}x{} ({})",
            target_size.rows,
            target_size.cols,
            capture_size.rows,
            capture_size.cols,
            working_resolution
        );

        Ok(Self {
            smoothing: options.smoothing,
            upsample_filter: options.upsample_filter,
            outline_request: OutlineRequest::from(options.save_outline),
            working_resolution,
            target_size,
            capture_size,
        })
    }

    /// Überschreibt die Umriss-Anforderung aus den Optionen.
    pub fn with_outline_request(mut self, request: OutlineRequest) -> Self {
        self.outline_request = request;
        self
    }

    /// Raster, in dem Punkte erfasst werden.
    pub fn capture_size(&self) -> GridSize {
        self.capture_size
    }

    pub fn target_size(&self) -> GridSize {
        self.target_size
    }

    pub fn working_resolution(&self) -> WorkingResolution {
        self.working_resolution
    }

    /// Neue, leere Sitzung mit der konfigurierten Vorschau-Glättung.
    pub fn new_session(&self) -> CaptureSession {
        CaptureSession::with_smoothing(self.smoothing)
    }

    /// Führt eine Sitzung aus und verarbeitet das Ergebnis.
    ///
    /// `Ok(None)`, wenn die Ereignisquelle vor dem Schließen der Region endet.
    pub fn run(
        &self,
        source: &mut dyn EventSource,
        observer: &mut dyn CaptureObserver,
    ) -> Result<Option<RoiAnnotation>, RoiError> {
        let mut session = self.new_session();
        match run_session(&mut session, source, observer) {
            Some(closed) => self.finalize(closed).map(Some),
            None => Ok(None),
        }
    }

    /// Glättet, rasterisiert und extrahiert (optional) den Umriss.
    pub fn finalize(&self, points: ClosedPointSequence) -> Result<RoiAnnotation, RoiError> {
        let curve = smooth_closed(&points, self.smoothing);
        let mask = rasterize(
            &curve,
            self.capture_size,
            self.target_size,
            self.upsample_filter,
        )?;

        let outline = match self.outline_request {
            OutlineRequest::NotRequested => OutlineOutcome::NotRequested,
            OutlineRequest::Requested => match extract_outline(&mask) {
                Ok(outline) => OutlineOutcome::Extracted(outline),
                Err(e) => {
                    log::warn!("Umriss konnte nicht berechnet werden: {}", e);
                    OutlineOutcome::Failed(e)
                }
            },
        };

        log::info!(
            "Annotation abgeschlossen: Fläche {} Zellen, Umriss {}",
            mask.area(),
            outline.outline().map_or(0, Outline::len)
        );

        Ok(RoiAnnotation {
            points,
            curve,
            mask,
            outline,
            capture_size: self.capture_size,
            target_size: self.target_size,
        })
    }
}
