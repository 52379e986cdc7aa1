//! Zentrale Konfiguration der ROI-Erfassung.
//!
//! `AnnotationOptions` wird als TOML gespeichert. String-Einstellungen wie die
//! Arbeitsauflösung werden erst in `validate()` aufgelöst, damit ein Fehler vor
//! dem Start einer Erfassungs-Sitzung gemeldet wird.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::{GridSize, ImageMode, RoiError, SmoothingKind, UpsampleFilter};

/// Standardwert der Arbeitsauflösung: keine Verkleinerung.
pub const WORKING_RESOLUTION_NATIVE: &str = "native";

/// Dateiname der Optionen-Datei neben der Binary.
const CONFIG_FILE_NAME: &str = "manual_roi.toml";

// ── Arbeitsauflösung ────────────────────────────────────────────────

/// Auflösung, in der Punkte erfasst und Inside-Tests gerechnet werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkingResolution {
    /// Originalauflösung des Bildes
    Native,
    /// Längste Bildseite wird auf diesen Wert verkleinert (nie vergrößert)
    MaxDimension(NonZeroU32),
}

impl WorkingResolution {
    /// Leitet das Erfassungs-Raster aus der Zielgröße ab (seitenverhältnistreu).
    pub fn capture_size(&self, target: GridSize) -> GridSize {
        let scale = self.scale(target);
        if scale >= 1.0 {
            return target;
        }
        let scaled = |len: u32| ((len as f64 * scale).round() as u32).max(1);
        GridSize::new(scaled(target.rows), scaled(target.cols))
    }

    /// Faktor Erfassungs-Koordinaten / Ziel-Koordinaten (≤ 1).
    pub fn scale(&self, target: GridSize) -> f64 {
        match self {
            WorkingResolution::Native => 1.0,
            WorkingResolution::MaxDimension(max) => {
                let longest = target.rows.max(target.cols);
                if longest <= max.get() {
                    1.0
                } else {
                    max.get() as f64 / longest as f64
                }
            }
        }
    }

    /// Rechnet einen Ziel-Punkt in Erfassungs-Koordinaten um.
    pub fn to_capture(&self, point: glam::Vec2, target: GridSize) -> glam::Vec2 {
        point * self.scale(target) as f32
    }

    /// Rechnet einen Erfassungs-Punkt in Ziel-Koordinaten um.
    pub fn to_target(&self, point: glam::Vec2, target: GridSize) -> glam::Vec2 {
        point / self.scale(target) as f32
    }
}

impl FromStr for WorkingResolution {
    type Err = RoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        match value.to_ascii_lowercase().as_str() {
            "native" | "none" | "no resize" => return Ok(WorkingResolution::Native),
            _ => {}
        }
        let parsed: i64 = value.parse().map_err(|_| {
            RoiError::config(format!(
                "Arbeitsauflösung '{value}' ist weder 'native' noch eine Pixelzahl"
            ))
        })?;
        u32::try_from(parsed)
            .ok()
            .and_then(NonZeroU32::new)
            .map(WorkingResolution::MaxDimension)
            .ok_or_else(|| {
                RoiError::config(format!(
                    "Arbeitsauflösung muss positiv sein, war {parsed}"
                ))
            })
    }
}

impl fmt::Display for WorkingResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkingResolution::Native => f.write_str(WORKING_RESOLUTION_NATIVE),
            WorkingResolution::MaxDimension(max) => write!(f, "{max}"),
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle Einstellungen einer ROI-Erfassung.
/// Wird als `manual_roi.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnotationOptions {
    /// Arbeitsauflösung: `"native"` oder maximale Kantenlänge in Pixeln
    #[serde(default = "default_working_resolution")]
    pub working_resolution: String,
    /// Interpolant für die Glättung
    #[serde(default)]
    pub smoothing: SmoothingKind,
    /// Interpolation beim Hochskalieren der Maske
    #[serde(default)]
    pub upsample_filter: UpsampleFilter,
    /// Umriss zusätzlich berechnen und ausgeben
    #[serde(default)]
    pub save_outline: bool,
    /// Farbformat der Masken-Ausgabe
    #[serde(default)]
    pub image_mode: ImageMode,
}

impl Default for AnnotationOptions {
    fn default() -> Self {
        Self {
            working_resolution: default_working_resolution(),
            smoothing: SmoothingKind::default(),
            upsample_filter: UpsampleFilter::default(),
            save_outline: false,
            image_mode: ImageMode::default(),
        }
    }
}

/// Serde-Default für `working_resolution`.
fn default_working_resolution() -> String {
    WORKING_RESOLUTION_NATIVE.to_string()
}

impl AnnotationOptions {
    /// Lädt Optionen aus einer TOML-Datei.
    ///
    /// Fehlende Datei: Standardwerte. Fehlerhafte Datei oder ungültige Werte:
    /// `RoiError::Configuration`.
    pub fn load_from_file(path: &Path) -> Result<Self, RoiError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let options: Self = toml::from_str(&content).map_err(|e| {
            RoiError::config(format!("Optionen-Datei {} fehlerhaft: {e}", path.display()))
        })?;
        options.validate()?;
        log::info!("Optionen geladen aus: {}", path.display());
        Ok(options)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("manual_roi"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Löst die Arbeitsauflösung auf.
    pub fn working_resolution(&self) -> Result<WorkingResolution, RoiError> {
        self.working_resolution.parse()
    }

    /// Prüft alle Einstellungen, die nicht schon beim Deserialisieren typisiert sind.
    pub fn validate(&self) -> Result<(), RoiError> {
        self.working_resolution().map(|_| ())
    }
}
