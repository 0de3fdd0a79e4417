// Copyright @yucwang 2026

use crate::math::bitmap::Bitmap;
use crate::math::constants::Float;
use crate::math::spectrum::RGBSpectrum;

use std::vec::Vec;

// floor(log2(max(w, h))); a 1x1 or empty base has no levels below it
fn level_count(width: usize, height: usize) -> usize {
    if width == 0 || height == 0 {
        return 0;
    }

    let mut size = width.max(height);
    let mut count = 0;
    while size > 1 {
        size /= 2;
        count += 1;
    }

    count
}

/// Box-filter `src` into `dst`, where `dst` is `max(1, floor(src / 2))`
/// per axis. Interior texels average a 2x2 source block; when a source
/// dimension is odd, the last destination row/column absorbs the
/// leftover source row/column (a 3-wide and/or 3-tall block). Every
/// source texel lands in exactly one destination average.
fn downsample(src: &Bitmap, dst: &mut Bitmap) {
    assert_eq!(dst.width(), (src.width() / 2).max(1));
    assert_eq!(dst.height(), (src.height() / 2).max(1));

    for y in 0..dst.height() {
        let block_h = if y + 1 == dst.height() {
            src.height() - 2 * y
        } else {
            2
        };

        for x in 0..dst.width() {
            let block_w = if x + 1 == dst.width() {
                src.width() - 2 * x
            } else {
                2
            };

            let mut sum = RGBSpectrum::default();
            for j in 0..block_h {
                for i in 0..block_w {
                    sum += src[(2 * x + i, 2 * y + j)];
                }
            }

            dst[(x, y)] = sum / ((block_w * block_h) as Float);
        }
    }
}

/// Build the mip chain for `base`: level k is half the resolution of
/// level k-1 (level 0 halves the base), down to exactly 1x1.
pub fn generate_mipmap(base: &Bitmap) -> Vec<Bitmap> {
    let num_levels = level_count(base.width(), base.height());

    let mut levels: Vec<Bitmap> = Vec::with_capacity(num_levels);
    let mut width = base.width();
    let mut height = base.height();
    for _ in 0..num_levels {
        width = (width / 2).max(1);
        height = (height / 2).max(1);
        levels.push(Bitmap::new(width, height));
    }

    if let Some(last) = levels.last() {
        assert!(last.width() == 1 && last.height() == 1);
    }

    log::info!("Regenerating mipmap ({} levels) from [{}x{}].",
               levels.len(), base.width(), base.height());

    for idx in 0..levels.len() {
        if idx == 0 {
            downsample(base, &mut levels[0]);
        } else {
            let (finished, current) = levels.split_at_mut(idx);
            downsample(&finished[idx - 1], &mut current[0]);
        }
    }

    levels
}

/* Tests for mipmap generation */
