//! Geometrie-Datenmodell: Raster-Größe, geschlossene Punktfolge und Kurve.

use glam::Vec2;
use std::path::Path;

use super::RoiError;

/// Mindestanzahl unterschiedlicher Punkte für eine geschlossene Region.
pub const MIN_REGION_POINTS: usize = 3;

/// Raster-Dimensionen (`rows × cols`), Zeile = Bild-Y, Spalte = Bild-X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    /// Anzahl Zeilen (Bildhöhe)
    pub rows: u32,
    /// Anzahl Spalten (Bildbreite)
    pub cols: u32,
}

impl GridSize {
    /// Erstellt eine Raster-Größe.
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Anzahl der Zellen (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// `true` wenn mindestens eine Dimension 0 ist.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Liest die Bilddimensionen aus dem Datei-Header (ohne vollständiges Dekodieren).
    pub fn from_image_file(path: &Path) -> Result<Self, RoiError> {
        let (width, height) = image::image_dimensions(path)?;
        log::info!(
            "Bilddimensionen gelesen: {}x{} Pixel von '{}'",
            width,
            height,
            path.display()
        );
        Ok(Self::new(height, width))
    }

    /// Raster-Größe eines bereits geladenen Bildes.
    pub fn from_image(image: &image::DynamicImage) -> Self {
        Self::new(image.height(), image.width())
    }
}

/// Geschlossene Punktfolge: erster Punkt == letzter Punkt, mindestens 4 Einträge.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedPointSequence {
    points: Vec<Vec2>,
}

impl ClosedPointSequence {
    /// Schließt eine offene Punktfolge durch Anhängen einer Kopie des ersten Punkts.
    ///
    /// Gibt `None` zurück bei weniger als `MIN_REGION_POINTS` Punkten.
    pub fn close(open: &[Vec2]) -> Option<Self> {
        if open.len() < MIN_REGION_POINTS {
            return None;
        }
        let mut points = Vec::with_capacity(open.len() + 1);
        points.extend_from_slice(open);
        points.push(open[0]);
        Some(Self { points })
    }

    /// Übernimmt eine bereits geschlossene Punktfolge nach Prüfung der Invarianten.
    pub fn try_from_points(points: Vec<Vec2>) -> Result<Self, RoiError> {
        if points.len() < MIN_REGION_POINTS + 1 {
            return Err(RoiError::invariant(format!(
                "geschlossene Punktfolge braucht mindestens {} Einträge, hat {}",
                MIN_REGION_POINTS + 1,
                points.len()
            )));
        }
        if points.first() != points.last() {
            return Err(RoiError::invariant(
                "Punktfolge ist nicht geschlossen (erster != letzter Punkt)",
            ));
        }
        Ok(Self { points })
    }

    /// Alle Punkte inkl. schließender Wiederholung.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Die geklickten Eckpunkte ohne schließende Wiederholung.
    pub fn vertices(&self) -> &[Vec2] {
        &self.points[..self.points.len() - 1]
    }

    /// Anzahl Punkte inkl. schließender Wiederholung.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Immer `false` für gültige Folgen (mindestens 4 Punkte).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Gibt die Punkte als Vec zurück.
    pub fn into_points(self) -> Vec<Vec2> {
        self.points
    }
}

/// Durch Interpolation verdichtete Punktfolge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Curve {
    points: Vec<Vec2>,
}

impl Curve {
    /// Erstellt eine Kurve aus beliebigen Punkten (keine Invarianten-Prüfung).
    pub fn from_points(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Kurvenpunkte in Reihenfolge.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Anzahl Kurvenpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` wenn die Kurve keine Punkte hat.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Geschlossen = mindestens 2 Punkte und erster == letzter Punkt.
    pub fn is_closed(&self) -> bool {
        self.points.len() >= 2 && self.points.first() == self.points.last()
    }

    /// Achsen-parallele Bounding-Box `(min, max)`, `None` bei leerer Kurve.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .skip(1)
                .fold((first, first), |(min, max), &p| (min.min(p), max.max(p))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(0.0, 3.0),
        ]
    }

    #[test]
    fn test_close_appends_first_point() {
        let closed = ClosedPointSequence::close(&triangle()).expect("3 Punkte reichen");
        assert_eq!(closed.len(), 4);
        assert_eq!(closed.points().first(), closed.points().last());
        assert_eq!(closed.vertices(), triangle().as_slice());
    }

    #[test]
    fn test_close_rejects_two_points() {
        assert!(ClosedPointSequence::close(&triangle()[..2]).is_none());
        assert!(ClosedPointSequence::close(&[]).is_none());
    }

    #[test]
    fn test_try_from_points_rejects_open_sequence() {
        let err = ClosedPointSequence::try_from_points(triangle()).unwrap_err();
        assert!(matches!(err, RoiError::InvariantViolation(_)));

        let mut open = triangle();
        open.push(Vec2::new(1.0, 1.0));
        let err = ClosedPointSequence::try_from_points(open).unwrap_err();
        assert!(matches!(err, RoiError::InvariantViolation(_)));
    }

    #[test]
    fn test_curve_bounds_and_closure() {
        let curve = Curve::from_points(vec![
            Vec2::new(1.0, 2.0),
            Vec2::new(-3.0, 5.0),
            Vec2::new(4.0, -1.0),
            Vec2::new(1.0, 2.0),
        ]);
        assert!(curve.is_closed());
        let (min, max) = curve.bounds().unwrap();
        assert_eq!(min, Vec2::new(-3.0, -1.0));
        assert_eq!(max, Vec2::new(4.0, 5.0));

        assert!(!Curve::default().is_closed());
        assert!(Curve::default().bounds().is_none());
    }

    #[test]
    fn test_grid_size_cell_count() {
        assert_eq!(GridSize::new(20, 30).cell_count(), 600);
        assert!(GridSize::new(0, 5).is_empty());
        assert!(!GridSize::new(1, 1).is_empty());
    }
}
