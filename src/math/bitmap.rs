// Copyright 2020 @TwoCookingMice

use super::spectrum::RGBSpectrum;

use std::ops;
use std::vec::Vec;

/// A fixed-size 2D array of linear color samples, stored row-major.
/// Indexing outside `[0,w) x [0,h)` is a programmer error and asserts.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    data: Vec<RGBSpectrum>,
    height: usize,
    width: usize
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = RGBSpectrum;

    fn index(&self, index: (usize, usize)) -> &RGBSpectrum {
        assert!(index.0 < self.width && index.1 < self.height);
        &self.data[index.0 + self.width * index.1]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut RGBSpectrum {
        assert!(index.0 < self.width && index.1 < self.height);
        &mut self.data[index.0 + self.width * index.1]
    }
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        let pixel_number = width * height;
        Self { data: vec!(RGBSpectrum::default(); pixel_number),
               width: width,
               height: height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major view of the raw samples, for upload paths that treat
    /// the storage as an opaque blob.
    pub fn raw_data(&self) -> &[RGBSpectrum] {
        &self.data
    }
}

/* Tests for Bitmap */

#[cfg(test)]
mod tests {
    use super::Bitmap;
    use super::RGBSpectrum;
    use crate::math::constants::EPSILON;

    #[test]
    fn test_bitmap_basic_functions() {
        let mut bitmap = Bitmap::new(256usize, 256usize);
        assert_eq!(bitmap.width(), 256);
        assert_eq!(bitmap.height(), 256);

        bitmap[(5, 6)] = RGBSpectrum::new(1.0, 0.5, 0.6);
        assert!((bitmap[(5, 6)].r() - 1.0).abs() < EPSILON);
        assert!((bitmap[(2, 6)].r() - 0.0).abs() < EPSILON);
        assert_eq!(bitmap.raw_data().len(), 256 * 256);
    }

    #[test]
    fn test_bitmap_clone_is_deep() {
        let mut bitmap = Bitmap::new(4, 4);
        bitmap[(1, 2)] = RGBSpectrum::new(0.3, 0.6, 0.9);

        let copy = bitmap.clone();
        assert_eq!(copy, bitmap);

        bitmap[(1, 2)] = RGBSpectrum::default();
        assert_ne!(copy, bitmap);
        assert_eq!(copy[(1, 2)], RGBSpectrum::new(0.3, 0.6, 0.9));
    }
}
