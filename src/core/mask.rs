//! Binäre Maske mit fester Raster-Größe und einfachen Messgrößen.

use glam::Vec2;

use super::{GridSize, RoiError};

/// Zeilenweise gespeichertes Bool-Raster, `true` = innerhalb der ROI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    size: GridSize,
    cells: Vec<bool>,
}

/// Inklusives Zell-Rechteck (Bounding-Box der gesetzten Zellen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub min_row: u32,
    pub min_col: u32,
    pub max_row: u32,
    pub max_col: u32,
}

impl Mask {
    /// Leere Maske (alle Zellen `false`).
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![false; size.cell_count()],
        }
    }

    /// Maske aus vorberechneten Zellen (zeilenweise).
    pub fn from_cells(size: GridSize, cells: Vec<bool>) -> Result<Self, RoiError> {
        if cells.len() != size.cell_count() {
            return Err(RoiError::invariant(format!(
                "Maske {}x{} erwartet {} Zellen, erhalten {}",
                size.rows,
                size.cols,
                size.cell_count(),
                cells.len()
            )));
        }
        Ok(Self { size, cells })
    }

    /// Maske aus einer Funktion `(row, col) -> bool`.
    pub fn from_fn(size: GridSize, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut cells = Vec::with_capacity(size.cell_count());
        for row in 0..size.rows {
            for col in 0..size.cols {
                cells.push(f(row, col));
            }
        }
        Self { size, cells }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn rows(&self) -> u32 {
        self.size.rows
    }

    pub fn cols(&self) -> u32 {
        self.size.cols
    }

    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.size.cols as usize + col as usize
    }

    /// Zellwert; außerhalb des Rasters immer `false`.
    pub fn get(&self, row: u32, col: u32) -> bool {
        if row >= self.size.rows || col >= self.size.cols {
            return false;
        }
        self.cells[self.index(row, col)]
    }

    /// Setzt eine Zelle. Außerhalb des Rasters: Invariantenfehler.
    pub fn set(&mut self, row: u32, col: u32, value: bool) -> Result<(), RoiError> {
        if row >= self.size.rows || col >= self.size.cols {
            return Err(RoiError::invariant(format!(
                "Zelle ({row}, {col}) außerhalb von {}x{}",
                self.size.rows, self.size.cols
            )));
        }
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Alle Zellen zeilenweise.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Koordinaten `(row, col)` aller gesetzten Zellen in Zeilen-Reihenfolge.
    pub fn iter_true(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let cols = self.size.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &inside)| inside)
            .map(move |(i, _)| ((i / cols) as u32, (i % cols) as u32))
    }

    /// Fläche = Anzahl gesetzter Zellen.
    pub fn area(&self) -> usize {
        self.cells.iter().filter(|&&inside| inside).count()
    }

    /// `true` wenn keine Zelle gesetzt ist.
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&inside| inside)
    }

    /// Schwerpunkt der gesetzten Zellen als `(x = Spalte, y = Zeile)`.
    pub fn centroid(&self) -> Option<Vec2> {
        let (sum, count) = self
            .iter_true()
            .fold((glam::DVec2::ZERO, 0usize), |(sum, count), (row, col)| {
                (sum + glam::DVec2::new(col as f64, row as f64), count + 1)
            });
        if count == 0 {
            return None;
        }
        Some((sum / count as f64).as_vec2())
    }

    /// Bounding-Box der gesetzten Zellen.
    pub fn bounding_box(&self) -> Option<CellRect> {
        self.iter_true().fold(None, |acc, (row, col)| {
            Some(match acc {
                None => CellRect {
                    min_row: row,
                    min_col: col,
                    max_row: row,
                    max_col: col,
                },
                Some(r) => CellRect {
                    min_row: r.min_row.min(row),
                    min_col: r.min_col.min(col),
                    max_row: r.max_row.max(row),
                    max_col: r.max_col.max(col),
                },
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(size: GridSize, r0: u32, c0: u32, r1: u32, c1: u32) -> Mask {
        Mask::from_fn(size, |r, c| r >= r0 && r <= r1 && c >= c0 && c <= c1)
    }

    #[test]
    fn test_from_cells_checks_length() {
        let size = GridSize::new(2, 3);
        assert!(Mask::from_cells(size, vec![false; 6]).is_ok());
        let err = Mask::from_cells(size, vec![false; 5]).unwrap_err();
        assert!(matches!(err, RoiError::InvariantViolation(_)));
    }

    #[test]
    fn test_area_centroid_bbox() {
        let mask = block(GridSize::new(10, 10), 2, 4, 5, 7);
        assert_eq!(mask.area(), 16);
        let centroid = mask.centroid().unwrap();
        assert!((centroid.x - 5.5).abs() < 1e-6);
        assert!((centroid.y - 3.5).abs() < 1e-6);
        assert_eq!(
            mask.bounding_box(),
            Some(CellRect {
                min_row: 2,
                min_col: 4,
                max_row: 5,
                max_col: 7
            })
        );
    }

    #[test]
    fn test_empty_mask_has_no_measurements() {
        let mask = Mask::new(GridSize::new(4, 4));
        assert!(mask.is_empty());
        assert_eq!(mask.area(), 0);
        assert!(mask.centroid().is_none());
        assert!(mask.bounding_box().is_none());
    }

    #[test]
    fn test_get_out_of_range_is_false_and_set_checks_bounds() {
        let mut mask = Mask::new(GridSize::new(3, 3));
        assert!(!mask.get(5, 0));
        mask.set(1, 2, true).unwrap();
        assert!(mask.get(1, 2));
        assert_eq!(mask.iter_true().collect::<Vec<_>>(), vec![(1, 2)]);
        assert!(mask.set(3, 0, true).is_err());
    }
}
