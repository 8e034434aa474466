//! Common types used throughout the impulse bridge.
//!
//! This module contains the core data structures that describe a deployed
//! model's capabilities and the host-facing result value produced for every
//! inference call. These types are the only ones that cross the boundary
//! back to the host application.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Capabilities and input geometry of the deployed model.
///
/// These are fixed per deployment (they correspond to compile-time options of
/// the embedded engine) and are resolved once when the bridge is constructed,
/// never per call. They determine which sections of [`HostResult`] can ever
/// be populated.
#[derive(Debug, Clone)]
pub struct ModelParameters {
    /// Required width of the model input image in pixels
    pub input_width: u32,
    /// Required height of the model input image in pixels
    pub input_height: u32,
    /// Number of classification labels (0 for pure detection/anomaly models)
    pub label_count: usize,
    /// Whether the model produces object detection bounding boxes
    pub object_detection: bool,
    /// Whether the model produces a scalar anomaly score
    pub anomaly_score: bool,
    /// Whether the model produces a visual anomaly grid with summary stats
    pub visual_anomaly: bool,
}

impl ModelParameters {
    /// Total number of pixels the model consumes per inference.
    pub fn input_pixels(&self) -> usize {
        self.input_width as usize * self.input_height as usize
    }
}

/// A detected region in reference (display overlay) coordinates.
///
/// Detection boxes and visual anomaly grid cells both use this shape; the
/// coordinates have already been remapped from model input space by the
/// translator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundingBox {
    /// Classification label for the detected region
    pub label: String,
    /// Confidence score for the detection (0.0 to 1.0)
    pub value: f32,
    /// X-coordinate of the top-left corner
    pub x: i32,
    /// Y-coordinate of the top-left corner
    pub y: i32,
    /// Width of the bounding box in pixels
    pub width: i32,
    /// Height of the bounding box in pixels
    pub height: i32,
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.4} (x={}, y={}, w={}, h={})",
            self.label, self.value, self.x, self.y, self.width, self.height
        )
    }
}

/// Performance timing breakdown for one inference call.
///
/// All seven fields are copied verbatim from the engine's timing record;
/// the bridge performs no unit conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimingBreakdown {
    /// Time spent acquiring samples, in milliseconds
    pub sampling: i32,
    /// Time spent on digital signal processing, in milliseconds
    pub dsp: i32,
    /// Time spent on classification inference, in milliseconds
    pub classification: i32,
    /// Time spent on anomaly detection, in milliseconds
    pub anomaly: i32,
    /// Fine-grained DSP time, in microseconds
    pub dsp_us: u64,
    /// Fine-grained classification time, in microseconds
    pub classification_us: u64,
    /// Fine-grained anomaly detection time, in microseconds
    pub anomaly_us: u64,
}

impl fmt::Display for TimingBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sampling={} ms, dsp={} ms, classification={} ms, anomaly={} ms",
            self.sampling, self.dsp, self.classification, self.anomaly
        )
    }
}

/// The translated, caller-owned result of one inference call.
///
/// Each optional section is `None` when the deployed model lacks the
/// corresponding capability, which is distinct from `Some` of an empty
/// container (the model has the capability but produced no items this call).
/// Absent sections are omitted entirely when serialized to JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostResult {
    /// Map of class labels to probability scores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<HashMap<String, f32>>,
    /// Detected objects in reference coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detections: Option<Vec<BoundingBox>>,
    /// Visual anomaly grid cells in reference coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_detections: Option<Vec<BoundingBox>>,
    /// Named anomaly scores ("anomaly", and "max"/"mean" for visual models)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly_summary: Option<HashMap<String, f32>>,
    /// Stage timing breakdown, always present
    pub timing: TimingBreakdown,
}

impl HostResult {
    /// Serialize the result to a JSON string for handing across a host
    /// boundary that cannot consume the Rust type directly.
    pub fn to_json(&self) -> Result<String, crate::error::BridgeError> {
        Ok(serde_json::to_string(self)?)
    }
}
