//! Manual ROI Library.
//! Punkt-Erfassung, Spline-Glättung, Rasterisierung und Umriss-Extraktion
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    map_raw_input, run_session, AnnotationController, CaptureEvent, CaptureObserver, CapturePreview,
    CaptureSession, CaptureState, EventSource, IgnoreReason, Key, LoggingObserver, NoopObserver,
    OutlineOutcome, OutlineRequest, RawInput, RoiAnnotation, ScriptedEvents, Transition,
};
pub use core::{
    extract_outline, fill_outline, mask_to_image, outline_to_image, point_in_polygon, rasterize,
    rasterize_native, smooth_closed, smooth_points, CellRect, ClosedPointSequence, Curve,
    GridSize, ImageMode, Mask, Outline, RoiError, SmoothingKind, UpsampleFilter,
};
pub use shared::{AnnotationOptions, WorkingResolution};
