//! Umriss-Extraktion und Rück-Füllung.
//!
//! Randzelle = gesetzte Zelle mit mindestens einem ungesetzten 4er-Nachbarn
//! (oben/unten/links/rechts) oder am Rasterrand. Diagonalen zählen nicht.

use indexmap::IndexSet;
use std::collections::VecDeque;

use super::{GridSize, Mask, RoiError};

/// 4er-Nachbarschaft als (Zeilen-, Spalten-)Versatz.
const NEIGHBORS_4: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Menge der Randzellen `(row, col)` in Zeilen-Reihenfolge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    size: GridSize,
    cells: IndexSet<(u32, u32)>,
}

impl Outline {
    /// Raster-Größe der Ursprungs-Maske.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Anzahl Randzellen.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Randzellen in deterministischer Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.cells.iter().copied()
    }

    /// Randzellen als Maske.
    pub fn to_mask(&self) -> Mask {
        Mask::from_fn(self.size, |row, col| self.contains(row, col))
    }
}

/// Liefert den 4er-Nachbarn oder `None` außerhalb des Rasters.
fn neighbor(size: GridSize, row: u32, col: u32, (dr, dc): (i64, i64)) -> Option<(u32, u32)> {
    let r = row as i64 + dr;
    let c = col as i64 + dc;
    if r < 0 || c < 0 || r >= size.rows as i64 || c >= size.cols as i64 {
        return None;
    }
    Some((r as u32, c as u32))
}

fn is_boundary_cell(mask: &Mask, row: u32, col: u32) -> bool {
    NEIGHBORS_4
        .iter()
        .any(|&offset| match neighbor(mask.size(), row, col, offset) {
            Some((r, c)) => !mask.get(r, c),
            None => true,
        })
}

/// Extrahiert den Umriss einer Maske.
///
/// Das Ergebnis wird gegen die Nachbedingungen geprüft (Teilmenge der
/// gesetzten Zellen, leer genau bei leerer Maske); eine Verletzung wird als
/// `RoiError::OutlineFailed` gemeldet.
pub fn extract_outline(mask: &Mask) -> Result<Outline, RoiError> {
    let cells: IndexSet<(u32, u32)> = mask
        .iter_true()
        .filter(|&(row, col)| is_boundary_cell(mask, row, col))
        .collect();

    if let Some(&(row, col)) = cells.iter().find(|&&(row, col)| !mask.get(row, col)) {
        return Err(RoiError::OutlineFailed(format!(
            "Randzelle ({row}, {col}) liegt außerhalb der Maske"
        )));
    }
    if cells.is_empty() != mask.is_empty() {
        return Err(RoiError::OutlineFailed(format!(
            "Umriss mit {} Zellen passt nicht zur Maskenfläche {}",
            cells.len(),
            mask.area()
        )));
    }

    log::debug!(
        "Umriss extrahiert: {} Randzellen bei Fläche {}",
        cells.len(),
        mask.area()
    );

    Ok(Outline {
        size: mask.size(),
        cells,
    })
}

/// Füllt einen Umriss: alle Zellen, die vom Rasterrand aus nicht über
/// Nicht-Umriss-Zellen (4er-Nachbarschaft) erreichbar sind, gelten als innen.
pub fn fill_outline(outline: &Outline) -> Mask {
    let size = outline.size();
    let mut outside = Mask::new(size);
    let mut queue = VecDeque::new();

    let seed = |row: u32, col: u32, outside: &mut Mask, queue: &mut VecDeque<(u32, u32)>| {
        if !outline.contains(row, col) && !outside.get(row, col) {
            // Koordinaten stammen aus dem Raster, set kann nicht fehlschlagen
            let _ = outside.set(row, col, true);
            queue.push_back((row, col));
        }
    };

    for col in 0..size.cols {
        seed(0, col, &mut outside, &mut queue);
        seed(size.rows.saturating_sub(1), col, &mut outside, &mut queue);
    }
    for row in 0..size.rows {
        seed(row, 0, &mut outside, &mut queue);
        seed(row, size.cols.saturating_sub(1), &mut outside, &mut queue);
    }

    while let Some((row, col)) = queue.pop_front() {
        for offset in NEIGHBORS_4 {
            if let Some((r, c)) = neighbor(size, row, col, offset) {
                seed(r, c, &mut outside, &mut queue);
            }
        }
    }

    Mask::from_fn(size, |row, col| !outside.get(row, col))
}
