//! Error types for the impulse bridge.
//!
//! This module defines the error types that can occur while adapting a camera
//! frame, sampling it, or running inference. The main error type is
//! [`BridgeError`], which covers every failure mode of a single bridge call.
//! Engine-side status codes are modeled separately as [`ImpulseError`] and
//! wrapped into `BridgeError::InferenceFailed` at the bridge boundary.

use thiserror::Error;

/// Represents all possible errors that can occur in the impulse bridge.
///
/// Every failure is immediate and terminal for the call that produced it:
/// there are no retries and no partial results.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The caller supplied a frame whose byte length does not match the
    /// declared geometry.
    ///
    /// No reshape is performed and no inference is attempted when this is
    /// returned.
    #[error("frame size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// `width * height * channels` for the declared geometry
        expected: usize,
        /// Actual length of the supplied buffer
        actual: usize,
    },

    /// A sample request addressed pixels outside the reshaped frame.
    ///
    /// The engine is expected to only request ranges within
    /// `[0, total_length)`; a request outside that span is rejected rather
    /// than silently truncated.
    #[error("sample range [{offset}, {offset}+{length}) exceeds signal length {total}")]
    SampleOutOfRange {
        /// First requested pixel index
        offset: usize,
        /// Number of requested pixels
        length: usize,
        /// Total length of the signal in pixels
        total: usize,
    },

    /// The inference engine returned a non-success status.
    ///
    /// Translation is skipped entirely; no host result is produced.
    #[error("inference failed: {0}")]
    InferenceFailed(#[from] ImpulseError),

    /// A host result could not be serialized for the boundary crossing.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Status codes reported by the inference engine.
///
/// These mirror the engine's native error enumeration; the bridge never
/// produces them itself, it only maps the raw code returned by
/// `run_classifier` through [`ImpulseError::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImpulseError {
    #[error("input shapes don't match expected dimensions")]
    ShapesDontMatch,
    #[error("operation was canceled")]
    Canceled,
    #[error("memory allocation failed")]
    AllocFailed,
    #[error("out of memory")]
    OutOfMemory,
    #[error("input tensor was null")]
    InputTensorWasNull,
    #[error("output tensor was null")]
    OutputTensorWasNull,
    #[error("DSP error")]
    DspError,
    #[error("inference engine error")]
    TfliteError,
    #[error("invalid input size")]
    InvalidSize,
    #[error("only image input is supported")]
    OnlySupportedForImages,
    #[error("unsupported inferencing engine")]
    UnsupportedInferencingEngine,
    #[error("inference error")]
    InferenceError,
    #[error("unknown engine error (code {0})")]
    Other(i32),
}

impl ImpulseError {
    /// Map a raw engine status code to an `ImpulseError`.
    ///
    /// Returns `None` for the success code `0`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => None,
            -1 => Some(ImpulseError::ShapesDontMatch),
            -2 => Some(ImpulseError::Canceled),
            -3 => Some(ImpulseError::TfliteError),
            -4 => Some(ImpulseError::AllocFailed),
            -5 => Some(ImpulseError::DspError),
            -6 => Some(ImpulseError::OutOfMemory),
            -7 => Some(ImpulseError::InputTensorWasNull),
            -8 => Some(ImpulseError::OutputTensorWasNull),
            -11 => Some(ImpulseError::InvalidSize),
            -12 => Some(ImpulseError::OnlySupportedForImages),
            -13 => Some(ImpulseError::UnsupportedInferencingEngine),
            -18 => Some(ImpulseError::InferenceError),
            other => Some(ImpulseError::Other(other)),
        }
    }
}
