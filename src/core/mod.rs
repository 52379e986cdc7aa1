//! Core-Domänentypen und reine Pipeline-Stufen: Geometrie, Glättung,
//! Rasterisierung, Umriss-Extraktion und Bild-Export.

pub mod error;
pub mod geometry;
pub mod image_export;
pub mod mask;
/// Umriss-Extraktion (4er-Nachbarschaft) und Rück-Füllung eines Umrisses.
pub mod outline;
pub mod raster;
pub mod smoothing;

pub use error::RoiError;
pub use geometry::{ClosedPointSequence, Curve, GridSize};
pub use image_export::{mask_to_image, outline_to_image, ImageMode};
pub use mask::{CellRect, Mask};
pub use outline::{extract_outline, fill_outline, Outline};
pub use raster::{point_in_polygon, rasterize, rasterize_native, UpsampleFilter};
pub use smoothing::{smooth_closed, smooth_points, SmoothingKind, SAMPLES_PER_SEGMENT};
