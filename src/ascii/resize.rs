//! Nearest-neighbor resampling of RGBA buffers.

use super::pixels::{PixelBuffer, CHANNELS};
use crate::error::RenderError;

/// Resize a buffer to `target_width` x `target_height` pixels.
///
/// Each target pixel copies all four channels from the source pixel at
/// `floor(x * src_w / target_w), floor(y * src_h / target_h)`. There is no
/// blending: every output pixel exists verbatim in the source. The aliasing
/// this causes is hidden by the dithering that follows on the braille path.
///
/// # Errors
/// Returns [`RenderError::InvalidDimensions`] if either target dimension is zero.
pub fn resize(
    src: &PixelBuffer,
    target_width: u32,
    target_height: u32,
) -> Result<PixelBuffer, RenderError> {
    if target_width == 0 || target_height == 0 {
        return Err(RenderError::InvalidDimensions {
            width: target_width,
            height: target_height,
        });
    }

    let src_w = src.width() as u64;
    let src_h = src.height() as u64;
    let src_data = src.data();

    let mut data = Vec::with_capacity(target_width as usize * target_height as usize * CHANNELS);

    for y in 0..target_height as u64 {
        // Integer math keeps the floor exact for any ratio
        let sy = (y * src_h / target_height as u64) as u32;
        for x in 0..target_width as u64 {
            let sx = (x * src_w / target_width as u64) as u32;
            let i = src.offset(sx, sy);
            data.extend_from_slice(&src_data[i..i + CHANNELS]);
        }
    }

    PixelBuffer::new(target_width, target_height, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u32, height: u32) -> PixelBuffer {
        let mut data = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let v = if (x + y) % 2 == 0 { 0 } else { 255 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        PixelBuffer::new(width, height, data).unwrap()
    }

    #[test]
    fn test_resize_identity() {
        let src = checker(3, 3);
        let out = resize(&src, 3, 3).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_resize_upscale_repeats_pixels() {
        let src = PixelBuffer::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let out = resize(&src, 4, 2).unwrap();
        assert_eq!(out.pixel(0, 0), Some([1, 2, 3, 4]));
        assert_eq!(out.pixel(1, 0), Some([1, 2, 3, 4]));
        assert_eq!(out.pixel(2, 0), Some([5, 6, 7, 8]));
        assert_eq!(out.pixel(3, 1), Some([5, 6, 7, 8]));
    }

    #[test]
    fn test_resize_downscale_samples_floor() {
        // 4 wide -> 2 wide samples source columns 0 and 2
        let src = PixelBuffer::new(
            4,
            1,
            vec![10, 10, 10, 255, 20, 20, 20, 255, 30, 30, 30, 255, 40, 40, 40, 255],
        )
        .unwrap();
        let out = resize(&src, 2, 1).unwrap();
        assert_eq!(out.pixel(0, 0), Some([10, 10, 10, 255]));
        assert_eq!(out.pixel(1, 0), Some([30, 30, 30, 255]));
    }

    #[test]
    fn test_resize_output_length() {
        let src = checker(7, 5);
        let out = resize(&src, 13, 2).unwrap();
        assert_eq!(out.data().len(), 13 * 2 * 4);
    }

    #[test]
    fn test_resize_zero_target() {
        let src = checker(2, 2);
        assert!(matches!(
            resize(&src, 0, 2),
            Err(RenderError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            resize(&src, 2, 0),
            Err(RenderError::InvalidDimensions { .. })
        ));
    }
}
