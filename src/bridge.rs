//! The inbound boundary: one operation, "run inference on this frame".
//!
//! [`ImpulseBridge`] wires the three stages of a call together in strict
//! sequence: adapt the frame, hand the resulting signal to the classifier,
//! translate the raw result into a [`HostResult`]. The call is synchronous
//! and blocking; `&mut self` makes a second call on the same bridge value
//! impossible while one is in flight, so there is no shared frame handle to
//! race on. Callers that need responsiveness move the whole call onto a
//! worker thread themselves.

use crate::engine::Classifier;
use crate::error::BridgeError;
use crate::image::ResizeKernel;
use crate::signal::{adapt, SignalSource};
use crate::translate::translate;
use crate::types::{HostResult, ModelParameters};
use tracing::debug;

/// Adapter between caller-supplied camera frames and an inference engine.
pub struct ImpulseBridge<C, R> {
    params: ModelParameters,
    reference_width: u32,
    reference_height: u32,
    classifier: C,
    kernel: R,
}

impl<C: Classifier, R: ResizeKernel> ImpulseBridge<C, R> {
    /// Build a bridge for one model deployment.
    ///
    /// `reference_width`/`reference_height` fix the display overlay
    /// coordinate space that result boxes are remapped into. Capabilities in
    /// `params` are resolved here, once, and hold for every call.
    pub fn new(
        params: ModelParameters,
        reference_width: u32,
        reference_height: u32,
        classifier: C,
        kernel: R,
    ) -> Self {
        Self {
            params,
            reference_width,
            reference_height,
            classifier,
            kernel,
        }
    }

    /// Model parameters this bridge was built with.
    pub fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    /// Run one inference call on a raw camera frame.
    ///
    /// `frame` must hold `width * height * channels` bytes of interleaved
    /// pixel data; a mismatch aborts the call before the engine is invoked.
    /// A non-success engine status aborts the call before translation.
    pub fn run(
        &mut self,
        frame: &[u8],
        width: u32,
        height: u32,
        channels: u32,
    ) -> Result<HostResult, BridgeError> {
        self.run_debug(frame, width, height, channels, false)
    }

    /// Same as [`run`](Self::run) with the engine's debug output enabled.
    pub fn run_debug(
        &mut self,
        frame: &[u8],
        width: u32,
        height: u32,
        channels: u32,
        debug_enabled: bool,
    ) -> Result<HostResult, BridgeError> {
        let signal = adapt(
            frame,
            width,
            height,
            channels,
            &self.kernel,
            self.params.input_width,
            self.params.input_height,
        )?;

        debug!(
            "running classifier on {} input pixels",
            signal.total_length()
        );
        let raw = self.classifier.run_classifier(&signal, debug_enabled)?;

        Ok(translate(
            &raw,
            &self.params,
            self.reference_width,
            self.reference_height,
        ))
    }
}
