//! Boundary adapter between a camera-driven host application and an embedded
//! inference engine.
//!
//! One call runs three stages in strict sequence: [`signal::adapt`]
//! normalizes a raw frame into a pull-based model input signal,
//! an [`engine::Classifier`] consumes the signal, and [`translate::translate`]
//! rebuilds the engine's native result as a caller-owned [`HostResult`] with
//! bounding boxes remapped into display coordinates. [`ImpulseBridge`] ties
//! the stages together behind a single `run` operation.

mod bridge;
mod error;
pub mod engine;
pub mod image;
pub mod signal;
mod translate;
pub mod types;

pub use bridge::ImpulseBridge;
pub use engine::{Classifier, RawBoundingBox, RawClassification, RawInferenceResult};
pub use error::{BridgeError, ImpulseError};
pub use image::{CropInterpolate, ResizeKernel};
pub use signal::{adapt, FrameSignal, SignalSource};
pub use translate::translate;
pub use types::{BoundingBox, HostResult, ModelParameters, TimingBreakdown};
