//! Frame Adapter: turns a raw camera frame into a pull-based model input
//! signal.
//!
//! [`adapt`] validates the caller's buffer against its declared geometry,
//! reshapes it to the model input resolution through a [`ResizeKernel`], and
//! returns a [`FrameSignal`] that the inference engine samples on demand as
//! packed RGB values. The signal owns its reshaped buffer, so the caller's
//! frame is borrowed only for the duration of `adapt` and is never written
//! to; each bridge call carries its own signal and there is no shared
//! current-frame state anywhere.

use crate::error::BridgeError;
use crate::image::ResizeKernel;
use tracing::{debug, warn};

/// Pull-queried source of model input samples.
///
/// Decouples the engine from any specific buffer layout: the engine requests
/// arbitrary non-overlapping ranges, in any order, during a single inference
/// call, and each request is computed fresh.
pub trait SignalSource {
    /// Total number of samples (pixels) the signal provides.
    fn total_length(&self) -> usize;

    /// Produce `length` packed `(R<<16)|(G<<8)|B` values starting at pixel
    /// `offset`.
    ///
    /// Requests outside `[0, total_length())` return
    /// [`BridgeError::SampleOutOfRange`] rather than truncating silently.
    fn sample(&self, offset: usize, length: usize) -> Result<Vec<u32>, BridgeError>;
}

/// A reshaped frame exposed as a model input signal.
///
/// Created by [`adapt`]; holds the interleaved RGB888 buffer at model input
/// resolution.
#[derive(Debug)]
pub struct FrameSignal {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl FrameSignal {
    /// Width of the reshaped frame in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the reshaped frame in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl SignalSource for FrameSignal {
    fn total_length(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn sample(&self, offset: usize, length: usize) -> Result<Vec<u32>, BridgeError> {
        let total = self.total_length();
        if offset > total || length > total - offset.min(total) {
            warn!(
                "rejecting sample request [{}, {}) beyond signal length {}",
                offset,
                offset + length,
                total
            );
            return Err(BridgeError::SampleOutOfRange {
                offset,
                length,
                total,
            });
        }

        let mut out = Vec::with_capacity(length);
        let mut byte_ix = offset * 3;
        for _ in 0..length {
            let r = self.pixels[byte_ix] as u32;
            let g = self.pixels[byte_ix + 1] as u32;
            let b = self.pixels[byte_ix + 2] as u32;
            out.push((r << 16) | (g << 8) | b);
            byte_ix += 3;
        }
        Ok(out)
    }
}

/// Validate a raw camera frame and reshape it to the model input geometry.
///
/// `frame` must hold exactly `width * height * channels` bytes of interleaved
/// pixel data; anything else is rejected with
/// [`BridgeError::SizeMismatch`] before any work is done. The reshape goes
/// into a freshly allocated buffer rather than over the source frame: one
/// extra allocation per call buys an untouched caller buffer and a signal
/// that can outlive the borrow.
pub fn adapt(
    frame: &[u8],
    width: u32,
    height: u32,
    channels: u32,
    kernel: &dyn ResizeKernel,
    input_width: u32,
    input_height: u32,
) -> Result<FrameSignal, BridgeError> {
    let expected = width as usize * height as usize * channels as usize;
    if frame.len() != expected {
        warn!(
            "frame of {} bytes does not match declared {}x{}x{} geometry",
            frame.len(),
            width,
            height,
            channels
        );
        return Err(BridgeError::SizeMismatch {
            expected,
            actual: frame.len(),
        });
    }

    let mut pixels = vec![0u8; input_width as usize * input_height as usize * 3];
    kernel.resize_crop(
        frame,
        width as usize,
        height as usize,
        &mut pixels,
        input_width as usize,
        input_height as usize,
    );
    debug!(
        "adapted {}x{} frame to {}x{} model input",
        width, height, input_width, input_height
    );

    Ok(FrameSignal {
        pixels,
        width: input_width,
        height: input_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::CropInterpolate;

    fn gradient_frame(w: u32, h: u32) -> Vec<u8> {
        (0..w * h * 3).map(|i| (i % 251) as u8).collect()
    }

    fn adapt_gradient() -> FrameSignal {
        let frame = gradient_frame(8, 8);
        adapt(&frame, 8, 8, 3, &CropInterpolate, 8, 8).unwrap()
    }

    #[test]
    fn rejects_undersized_frame() {
        let frame = vec![0u8; 10];
        let err = adapt(&frame, 480, 640, 3, &CropInterpolate, 96, 96).unwrap_err();
        match err {
            BridgeError::SizeMismatch { expected, actual } => {
                assert_eq!(expected, 480 * 640 * 3);
                assert_eq!(actual, 10);
            }
            other => panic!("expected SizeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn rejects_oversized_frame() {
        let frame = vec![0u8; 2 * 2 * 3 + 1];
        assert!(matches!(
            adapt(&frame, 2, 2, 3, &CropInterpolate, 2, 2),
            Err(BridgeError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn packs_rgb_into_single_value() {
        let frame = vec![0x12, 0x34, 0x56];
        let signal = adapt(&frame, 1, 1, 3, &CropInterpolate, 1, 1).unwrap();
        assert_eq!(signal.sample(0, 1).unwrap(), vec![0x123456]);
    }

    #[test]
    fn full_range_matches_split_ranges() {
        let signal = adapt_gradient();
        let total = signal.total_length();

        let whole = signal.sample(0, total).unwrap();

        let mut pieces = Vec::new();
        // uneven chunk sizes, out of order
        pieces.extend(signal.sample(40, total - 40).unwrap());
        let mut head = signal.sample(0, 7).unwrap();
        head.extend(signal.sample(7, 33).unwrap());
        head.extend(pieces);

        assert_eq!(whole, head);
    }

    #[test]
    fn repeated_sampling_is_stable() {
        let signal = adapt_gradient();
        assert_eq!(
            signal.sample(5, 10).unwrap(),
            signal.sample(5, 10).unwrap()
        );
    }

    #[test]
    fn rejects_out_of_range_requests() {
        let signal = adapt_gradient();
        let total = signal.total_length();

        assert!(signal.sample(0, total).is_ok());
        assert!(matches!(
            signal.sample(0, total + 1),
            Err(BridgeError::SampleOutOfRange { .. })
        ));
        assert!(matches!(
            signal.sample(total, 1),
            Err(BridgeError::SampleOutOfRange { .. })
        ));
        // empty request at the very end is within bounds
        assert!(signal.sample(total, 0).is_ok());
    }

    #[test]
    fn signal_has_model_geometry() {
        let frame = gradient_frame(8, 8);
        let signal = adapt(&frame, 8, 8, 3, &CropInterpolate, 4, 2).unwrap();
        assert_eq!(signal.width(), 4);
        assert_eq!(signal.height(), 2);
        assert_eq!(signal.total_length(), 8);
    }

    #[test]
    fn source_frame_is_left_untouched() {
        let frame = gradient_frame(8, 8);
        let copy = frame.clone();
        let _signal = adapt(&frame, 8, 8, 3, &CropInterpolate, 4, 4).unwrap();
        assert_eq!(frame, copy);
    }
}
