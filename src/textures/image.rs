// Copyright @yucwang 2026

use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f};
use crate::math::spectrum::RGBSpectrum;
use crate::textures::mipmap::generate_mipmap;
use crate::textures::sampler::{sample_bilinear, sample_nearest, sample_trilinear};

use std::vec::Vec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Bilinear,
    Trilinear,
}

/// Image-backed texture. Owns its base bitmap and, while the filter
/// mode is trilinear, the mip pyramid derived from it. The pyramid is
/// pure cache state: either empty or consistent with the current base.
#[derive(Clone, Debug)]
pub struct ImageTexture {
    filter_mode: FilterMode,
    image: Bitmap,
    levels: Vec<Bitmap>,
}

// the pyramid is derived, so equality is equality of the bases
impl PartialEq for ImageTexture {
    fn eq(&self, other: &Self) -> bool {
        self.image == other.image
    }
}

impl ImageTexture {
    pub fn new(filter_mode: FilterMode, image: &Bitmap) -> Self {
        let mut texture = Self {
            filter_mode,
            image: image.clone(),
            levels: Vec::new(),
        };
        texture.update_mipmap();
        texture
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn set_filter_mode(&mut self, filter_mode: FilterMode) {
        self.filter_mode = filter_mode;
        self.update_mipmap();
    }

    pub fn image(&self) -> &Bitmap {
        &self.image
    }

    /// Mutable access to the base bitmap. Callers writing through this
    /// must call `make_valid` before the next trilinear `evaluate`.
    pub fn image_mut(&mut self) -> &mut Bitmap {
        &mut self.image
    }

    pub fn levels(&self) -> &[Bitmap] {
        &self.levels
    }

    pub fn evaluate(&self, uv: Vector2f, lod: Float) -> RGBSpectrum {
        if self.image.width() == 0 || self.image.height() == 0 {
            return RGBSpectrum::default();
        }

        match self.filter_mode {
            FilterMode::Nearest => sample_nearest(&self.image, uv),
            FilterMode::Bilinear => sample_bilinear(&self.image, uv),
            FilterMode::Trilinear =>
                sample_trilinear(&self.image, &self.levels, uv, lod),
        }
    }

    /// Re-derive the mip pyramid from the current base image.
    pub fn make_valid(&mut self) {
        self.update_mipmap();
    }

    fn update_mipmap(&mut self) {
        if self.filter_mode == FilterMode::Trilinear {
            self.levels = generate_mipmap(&self.image);
        } else {
            self.levels.clear();
        }
    }
}

/* Tests for the image texture facade */

#[cfg(test)]
mod tests {
    use super::{FilterMode, ImageTexture};
    use crate::math::bitmap::Bitmap;
    use crate::math::constants::{EPSILON, Float, Vector2f};
    use crate::math::spectrum::RGBSpectrum;
    use crate::textures::sampler::{sample_bilinear, sample_nearest};

    fn gradient_bitmap(width: usize, height: usize) -> Bitmap {
        let mut bitmap = Bitmap::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let v = (x + width * y) as Float;
                bitmap[(x, y)] = RGBSpectrum::new(v, v, v);
            }
        }
        bitmap
    }

    #[test]
    fn test_evaluate_dispatches_on_mode() {
        let base = gradient_bitmap(4, 4);
        let uv = Vector2f::new(0.4, 0.7);

        let texture = ImageTexture::new(FilterMode::Nearest, &base);
        assert_eq!(texture.evaluate(uv, 0.0), sample_nearest(&base, uv));

        let texture = ImageTexture::new(FilterMode::Bilinear, &base);
        assert_eq!(texture.evaluate(uv, 0.0), sample_bilinear(&base, uv));
    }

    #[test]
    fn test_pyramid_exists_only_under_trilinear() {
        let base = gradient_bitmap(8, 8);

        let mut texture = ImageTexture::new(FilterMode::Bilinear, &base);
        assert!(texture.levels().is_empty());

        texture.set_filter_mode(FilterMode::Trilinear);
        assert_eq!(texture.levels().len(), 3);
        assert_eq!(texture.levels()[2].width(), 1);
        assert_eq!(texture.levels()[2].height(), 1);

        texture.set_filter_mode(FilterMode::Nearest);
        assert!(texture.levels().is_empty());
    }

    #[test]
    fn test_construction_copies_base() {
        let mut base = gradient_bitmap(4, 4);
        let texture = ImageTexture::new(FilterMode::Nearest, &base);

        base[(0, 0)] = RGBSpectrum::new(99.0, 99.0, 99.0);
        assert_eq!(texture.evaluate(Vector2f::new(0.0, 0.0), 0.0),
                   RGBSpectrum::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_make_valid_refreshes_pyramid() {
        let base = gradient_bitmap(4, 4);
        let mut texture = ImageTexture::new(FilterMode::Trilinear, &base);

        let uv = Vector2f::new(0.5, 0.5);
        let before = texture.evaluate(uv, 2.0);

        for y in 0..4 {
            for x in 0..4 {
                texture.image_mut()[(x, y)] = RGBSpectrum::new(1.0, 1.0, 1.0);
            }
        }
        texture.make_valid();

        let after = texture.evaluate(uv, 2.0);
        assert_ne!(before, after);
        assert!((after.r() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_sized_base_evaluates_to_black() {
        let empty = Bitmap::new(0, 0);
        let wide = Bitmap::new(3, 0);
        let uv = Vector2f::new(0.5, 0.5);

        for &mode in &[FilterMode::Nearest, FilterMode::Bilinear,
                       FilterMode::Trilinear] {
            let texture = ImageTexture::new(mode, &empty);
            assert!(texture.evaluate(uv, 1.0).is_black());

            let texture = ImageTexture::new(mode, &wide);
            assert!(texture.evaluate(uv, 1.0).is_black());
        }
    }

    #[test]
    fn test_equality_ignores_derived_state() {
        let base = gradient_bitmap(4, 4);
        let a = ImageTexture::new(FilterMode::Bilinear, &base);
        let b = ImageTexture::new(FilterMode::Trilinear, &base);
        assert_eq!(a, b);

        let c = ImageTexture::new(FilterMode::Bilinear, &gradient_bitmap(4, 5));
        assert_ne!(a, c);
    }
}
