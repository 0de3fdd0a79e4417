// Copyright @yucwang 2026

use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f};
use crate::math::spectrum::RGBSpectrum;

/// Fetch a texel with both indices clamped to the valid range.
/// Shared by all samplers so boundary behavior stays consistent.
fn texel_clamped(image: &Bitmap, x: i64, y: i64) -> RGBSpectrum {
    let xi = x.clamp(0, image.width() as i64 - 1) as usize;
    let yi = y.clamp(0, image.height() as i64 - 1) as usize;
    image[(xi, yi)]
}

pub fn sample_nearest(image: &Bitmap, uv: Vector2f) -> RGBSpectrum {
    if image.width() == 0 || image.height() == 0 {
        return RGBSpectrum::default();
    }

    // clamp texture coordinates, convert to [0,w]x[0,h] pixel space
    let x = image.width() as Float * uv.x.clamp(0.0, 1.0);
    let y = image.height() as Float * uv.y.clamp(0.0, 1.0);

    // the nearest center is the texel containing (x,y); uv = (1,1) maps
    // to (w,h) and gets pulled back onto the last texel
    texel_clamped(image, x.floor() as i64, y.floor() as i64)
}

/// Four-tap interpolation under the pixel-center convention: texel (i,j)
/// holds the signal value at continuous position (i + 0.5, j + 0.5).
pub fn sample_bilinear(image: &Bitmap, uv: Vector2f) -> RGBSpectrum {
    if image.width() == 0 || image.height() == 0 {
        return RGBSpectrum::default();
    }

    let x = image.width() as Float * uv.x.clamp(0.0, 1.0) - 0.5;
    let y = image.height() as Float * uv.y.clamp(0.0, 1.0) - 0.5;

    let ix = x.floor();
    let iy = y.floor();
    let fx = x - ix;
    let fy = y - iy;
    let ix = ix as i64;
    let iy = iy as i64;

    let p00 = texel_clamped(image, ix, iy);
    let p10 = texel_clamped(image, ix + 1, iy);
    let p01 = texel_clamped(image, ix, iy + 1);
    let p11 = texel_clamped(image, ix + 1, iy + 1);

    let top = p00 * (1.0 - fx) + p10 * fx;
    let bottom = p01 * (1.0 - fx) + p11 * fx;

    top * (1.0 - fy) + bottom * fy
}

/// Blend bilinear taps of the two mip levels adjacent to `lod`. Level 0
/// of detail is the base image itself, one level finer than `levels[0]`.
pub fn sample_trilinear(base: &Bitmap, levels: &[Bitmap], uv: Vector2f,
                        lod: Float) -> RGBSpectrum {
    if lod <= 0.0 || levels.is_empty() {
        return sample_bilinear(base, uv);
    }

    let last = (levels.len() - 1) as i64;
    let lo = (lod.floor() as i64).clamp(0, last) as usize;
    let hi = (lod.ceil() as i64).clamp(0, last) as usize;

    // integral lod, or lod past the coarsest level
    if lo == hi {
        return sample_bilinear(&levels[lo], uv);
    }

    let t = lod - lo as Float;
    sample_bilinear(&levels[lo], uv) * (1.0 - t)
        + sample_bilinear(&levels[hi], uv) * t
}

/* Tests for the sampling strategies */
