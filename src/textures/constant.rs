// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f};
use crate::math::spectrum::RGBSpectrum;

/// Uniform color, independent of uv and lod.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantTexture {
    color: RGBSpectrum,
    scale: Float,
}

impl ConstantTexture {
    pub fn new(color: RGBSpectrum) -> Self {
        Self { color, scale: 1.0 }
    }

    pub fn with_scale(color: RGBSpectrum, scale: Float) -> Self {
        Self { color, scale }
    }

    pub fn evaluate(&self, _uv: Vector2f, _lod: Float) -> RGBSpectrum {
        self.color * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::ConstantTexture;
    use crate::math::constants::Vector2f;
    use crate::math::spectrum::RGBSpectrum;

    #[test]
    fn test_constant_texture_evaluate() {
        let value = RGBSpectrum::new(0.25, 0.5, 0.75);
        let tex = ConstantTexture::new(value);
        let result = tex.evaluate(Vector2f::new(0.1, 0.9), 2.0);
        assert_eq!(result, value);
    }

    #[test]
    fn test_constant_texture_scale() {
        let value = RGBSpectrum::new(0.2, 0.4, 0.6);
        let tex = ConstantTexture::with_scale(value, 0.5);
        let result = tex.evaluate(Vector2f::new(0.0, 0.0), 0.0);
        assert_eq!(result, value * 0.5);
    }
}
