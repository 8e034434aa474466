//! Image resize/crop kernel seam.
//!
//! The Frame Adapter does not own a resampling algorithm; it invokes a
//! [`ResizeKernel`] with the correct source and destination geometry. The
//! crate ships [`CropInterpolate`], a center-crop-then-bilinear kernel for
//! interleaved RGB888 buffers, so the bridge is usable without an external
//! DSP library; deployments that link one can wrap it in the same trait.

/// Resamples an interleaved RGB888 buffer to a new geometry.
///
/// The operation is infallible: callers guarantee `src` holds
/// `src_w * src_h * 3` bytes and `dst` holds `dst_w * dst_h * 3`.
pub trait ResizeKernel {
    fn resize_crop(
        &self,
        src: &[u8],
        src_w: usize,
        src_h: usize,
        dst: &mut [u8],
        dst_w: usize,
        dst_h: usize,
    );
}

/// Center-crop to the destination aspect ratio, then bilinear resample.
#[derive(Debug, Default, Clone, Copy)]
pub struct CropInterpolate;

/// Largest centered region of `(src_w, src_h)` with the aspect ratio of
/// `(dst_w, dst_h)`. Returns `(x, y, w, h)` in source pixels.
fn crop_region(src_w: usize, src_h: usize, dst_w: usize, dst_h: usize) -> (usize, usize, usize, usize) {
    let (crop_w, crop_h) = if src_w * dst_h > src_h * dst_w {
        // source is wider than the target aspect, trim the sides
        (src_h * dst_w / dst_h, src_h)
    } else {
        (src_w, src_w * dst_h / dst_w)
    };
    let crop_w = crop_w.max(1);
    let crop_h = crop_h.max(1);
    ((src_w - crop_w) / 2, (src_h - crop_h) / 2, crop_w, crop_h)
}

impl ResizeKernel for CropInterpolate {
    fn resize_crop(
        &self,
        src: &[u8],
        src_w: usize,
        src_h: usize,
        dst: &mut [u8],
        dst_w: usize,
        dst_h: usize,
    ) {
        let (crop_x, crop_y, crop_w, crop_h) = crop_region(src_w, src_h, dst_w, dst_h);

        let x_step = crop_w as f32 / dst_w as f32;
        let y_step = crop_h as f32 / dst_h as f32;

        for dy in 0..dst_h {
            let sy = ((dy as f32 + 0.5) * y_step - 0.5).max(0.0);
            let y0 = (sy as usize).min(crop_h - 1);
            let y1 = (y0 + 1).min(crop_h - 1);
            let fy = sy - y0 as f32;

            for dx in 0..dst_w {
                let sx = ((dx as f32 + 0.5) * x_step - 0.5).max(0.0);
                let x0 = (sx as usize).min(crop_w - 1);
                let x1 = (x0 + 1).min(crop_w - 1);
                let fx = sx - x0 as f32;

                let base00 = ((crop_y + y0) * src_w + crop_x + x0) * 3;
                let base01 = ((crop_y + y0) * src_w + crop_x + x1) * 3;
                let base10 = ((crop_y + y1) * src_w + crop_x + x0) * 3;
                let base11 = ((crop_y + y1) * src_w + crop_x + x1) * 3;
                let out = (dy * dst_w + dx) * 3;

                for c in 0..3 {
                    let top = src[base00 + c] as f32 * (1.0 - fx) + src[base01 + c] as f32 * fx;
                    let bottom = src[base10 + c] as f32 * (1.0 - fx) + src[base11 + c] as f32 * fx;
                    let value = top * (1.0 - fy) + bottom * fy;
                    dst[out + c] = value.round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: usize, h: usize, rgb: [u8; 3]) -> Vec<u8> {
        let mut buf = Vec::with_capacity(w * h * 3);
        for _ in 0..w * h {
            buf.extend_from_slice(&rgb);
        }
        buf
    }

    #[test]
    fn crop_region_matches_target_aspect() {
        // 480x640 portrait frame cropped for a square model input
        let (x, y, w, h) = crop_region(480, 640, 96, 96);
        assert_eq!((w, h), (480, 480));
        assert_eq!(x, 0);
        assert_eq!(y, 80);
    }

    #[test]
    fn crop_region_trims_sides_for_wide_source() {
        let (x, y, w, h) = crop_region(640, 480, 96, 96);
        assert_eq!((w, h), (480, 480));
        assert_eq!(x, 80);
        assert_eq!(y, 0);
    }

    #[test]
    fn identity_geometry_preserves_pixels() {
        let src: Vec<u8> = (0..4 * 4 * 3).map(|i| i as u8).collect();
        let mut dst = vec![0u8; 4 * 4 * 3];
        CropInterpolate.resize_crop(&src, 4, 4, &mut dst, 4, 4);
        assert_eq!(src, dst);
    }

    #[test]
    fn uniform_color_survives_downscale() {
        let src = solid(64, 48, [10, 200, 30]);
        let mut dst = vec![0u8; 16 * 16 * 3];
        CropInterpolate.resize_crop(&src, 64, 48, &mut dst, 16, 16);
        assert_eq!(dst, solid(16, 16, [10, 200, 30]));
    }

    #[test]
    fn crop_takes_the_centered_region() {
        // left half black, right half white; a square crop of the 4x2 frame
        // keeps the middle two columns, one of each
        let mut src = Vec::new();
        for _ in 0..2 {
            src.extend_from_slice(&[0, 0, 0, 0, 0, 0, 255, 255, 255, 255, 255, 255]);
        }
        let mut dst = vec![0u8; 2 * 2 * 3];
        CropInterpolate.resize_crop(&src, 4, 2, &mut dst, 2, 2);
        assert_eq!(&dst[0..3], &[0, 0, 0]);
        assert_eq!(&dst[3..6], &[255, 255, 255]);
    }
}
