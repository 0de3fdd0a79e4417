// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f};
use crate::math::spectrum::RGBSpectrum;
use crate::textures::constant::ConstantTexture;
use crate::textures::image::ImageTexture;

/// Tagged texture variant. Dispatch happens on the tag, keeping the
/// per-pixel evaluate path free of virtual calls.
#[derive(Clone, Debug, PartialEq)]
pub enum Texture {
    Constant(ConstantTexture),
    Image(ImageTexture),
}

impl Texture {
    pub fn evaluate(&self, uv: Vector2f, lod: Float) -> RGBSpectrum {
        match self {
            Texture::Constant(constant) => constant.evaluate(uv, lod),
            Texture::Image(image) => image.evaluate(uv, lod),
        }
    }

    /// Refresh derived state after direct mutation of an image base.
    /// No-op for constant textures.
    pub fn make_valid(&mut self) {
        if let Texture::Image(image) = self {
            image.make_valid();
        }
    }
}

/* Tests for the texture variant */
