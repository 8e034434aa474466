//! Inference engine seam.
//!
//! The embedded engine (feature extraction, model execution, anomaly scoring)
//! is consumed as a single opaque operation behind the [`Classifier`] trait.
//! The bridge never looks inside it; it hands the engine a pull-based signal
//! and receives back a [`RawInferenceResult`] in the engine's native shape,
//! still in model input coordinates.

use crate::error::ImpulseError;
use crate::signal::SignalSource;
use crate::types::TimingBreakdown;

/// A bounding box as reported by the engine, in model input coordinates.
///
/// Detection slots the engine did not fill carry a score of exactly `0.0`;
/// the translator filters those out. Visual anomaly grid cells use the same
/// shape but are never filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBoundingBox {
    pub label: String,
    pub value: f32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One classification output: a label and its probability.
#[derive(Debug, Clone, PartialEq)]
pub struct RawClassification {
    pub label: String,
    pub value: f32,
}

/// The engine's native output record for one inference.
///
/// Which sections carry meaningful data depends on the deployed model's
/// capabilities; the engine populates unused sections with empty vectors and
/// zero scores, and the translator consults [`crate::ModelParameters`] rather
/// than the contents to decide what to expose.
#[derive(Debug, Clone, PartialEq)]
pub struct RawInferenceResult {
    /// Per-label scores, in label order; length equals the model label count
    pub classification: Vec<RawClassification>,
    /// Object detection boxes, including empty zero-score slots
    pub bounding_boxes: Vec<RawBoundingBox>,
    /// Visual anomaly grid cells
    pub visual_anomaly_grid: Vec<RawBoundingBox>,
    /// Maximum cell score of the visual anomaly grid
    pub visual_anomaly_max: f32,
    /// Mean cell score of the visual anomaly grid
    pub visual_anomaly_mean: f32,
    /// Scalar anomaly score
    pub anomaly: f32,
    /// Stage timings for this call
    pub timing: TimingBreakdown,
}

/// The opaque inference operation.
///
/// Implementations wrap a concrete engine (an FFI binding, a subprocess, a
/// mock in tests). The engine pulls input pixels through `signal` in
/// arbitrary non-overlapping ranges; it must not retain the signal past the
/// call. A non-success engine status is returned as the matching
/// [`ImpulseError`] and aborts the bridge call before translation.
pub trait Classifier {
    fn run_classifier(
        &mut self,
        signal: &dyn SignalSource,
        debug: bool,
    ) -> Result<RawInferenceResult, ImpulseError>;
}
