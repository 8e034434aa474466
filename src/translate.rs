//! Result Translator: rebuilds the engine's native output as a host result.
//!
//! A pure, single-pass transform over one [`RawInferenceResult`]. Which
//! sections it emits is decided by the deployed model's [`ModelParameters`],
//! never by the contents of the record, so a capability the model lacks
//! always comes out as `None` and a capability that produced nothing comes
//! out as `Some` of an empty container. Bounding boxes are remapped from
//! model input coordinates to the reference (display) coordinate space.

use crate::engine::{RawBoundingBox, RawInferenceResult};
use crate::types::{BoundingBox, HostResult, ModelParameters};
use std::collections::HashMap;
use tracing::debug;

/// Label attached to every visual anomaly grid cell, replacing whatever the
/// engine reported.
const ANOMALY_LABEL: &str = "anomaly";

/// Per-axis scale factors from model input space to reference space.
#[derive(Debug, Clone, Copy)]
struct AxisRatios {
    x: f32,
    y: f32,
}

impl AxisRatios {
    fn new(params: &ModelParameters, reference_width: u32, reference_height: u32) -> Self {
        Self {
            x: reference_width as f32 / params.input_width as f32,
            y: reference_height as f32 / params.input_height as f32,
        }
    }

    /// Scale a model-space box into reference space, truncating to whole
    /// pixels, optionally overriding the label.
    fn remap(&self, bb: &RawBoundingBox, label_override: Option<&str>) -> BoundingBox {
        BoundingBox {
            label: label_override.unwrap_or(&bb.label).to_string(),
            value: bb.value,
            x: (bb.x as f32 * self.x) as i32,
            y: (bb.y as f32 * self.y) as i32,
            width: (bb.width as f32 * self.x) as i32,
            height: (bb.height as f32 * self.y) as i32,
        }
    }
}

/// Translate one raw engine result into a caller-owned [`HostResult`].
///
/// `reference_width` and `reference_height` define the display overlay
/// coordinate space that boxes are remapped into; this is a presentation
/// target, deliberately not the camera resolution the frame came from.
pub fn translate(
    result: &RawInferenceResult,
    params: &ModelParameters,
    reference_width: u32,
    reference_height: u32,
) -> HostResult {
    let ratios = AxisRatios::new(params, reference_width, reference_height);

    let classification = (params.label_count > 0).then(|| {
        result
            .classification
            .iter()
            .map(|c| (c.label.clone(), c.value))
            .collect::<HashMap<_, _>>()
    });

    let detections = params.object_detection.then(|| {
        result
            .bounding_boxes
            .iter()
            // a score of exactly zero marks an unfilled detection slot
            .filter(|bb| bb.value != 0.0)
            .map(|bb| ratios.remap(bb, None))
            .collect::<Vec<_>>()
    });

    // grid cells are kept unconditionally, zero scores included
    let anomaly_detections = params.visual_anomaly.then(|| {
        result
            .visual_anomaly_grid
            .iter()
            .map(|bb| ratios.remap(bb, Some(ANOMALY_LABEL)))
            .collect::<Vec<_>>()
    });

    let anomaly_summary = if params.anomaly_score || params.visual_anomaly {
        let mut summary = HashMap::new();
        if params.anomaly_score {
            summary.insert(ANOMALY_LABEL.to_string(), result.anomaly);
        }
        if params.visual_anomaly {
            summary.insert("max".to_string(), result.visual_anomaly_max);
            summary.insert("mean".to_string(), result.visual_anomaly_mean);
        }
        Some(summary)
    } else {
        None
    };

    debug!(
        "translated result: {} detections, {} grid cells",
        detections.as_ref().map_or(0, Vec::len),
        anomaly_detections.as_ref().map_or(0, Vec::len)
    );

    HostResult {
        classification,
        detections,
        anomaly_detections,
        anomaly_summary,
        timing: result.timing,
    }
}
