// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f};

use std::ops;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RGBSpectrum {
    rgb: Vector3f
}

impl Default for RGBSpectrum {
    fn default() -> Self {
        Self { rgb: Vector3f::new(0.0f32, 0.0f32, 0.0f32) }
    }
}

impl RGBSpectrum {
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self { rgb: Vector3f::new(r, g, b) }
    }

    pub fn r(&self) -> Float {
        self.rgb[0]
    }

    pub fn g(&self) -> Float {
        self.rgb[1]
    }

    pub fn b(&self) -> Float {
        self.rgb[2]
    }

    pub fn is_black(&self) -> bool {
        for idx in 0..3 {
            if self.rgb[idx] != 0.0f32 {
                return false;
            }
        }

        true
    }
}

impl ops::Add for RGBSpectrum {
    type Output = RGBSpectrum;

    fn add(self, other: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum { rgb: self.rgb + other.rgb }
    }
}

impl ops::AddAssign for RGBSpectrum {
    fn add_assign(&mut self, other: RGBSpectrum) {
        self.rgb += other.rgb;
    }
}

impl ops::Mul<Float> for RGBSpectrum {
    type Output = RGBSpectrum;

    fn mul(self, s: Float) -> RGBSpectrum {
        RGBSpectrum { rgb: self.rgb * s }
    }
}

impl ops::Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;

    fn mul(self, spectrum: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum { rgb: spectrum.rgb * self }
    }
}

impl ops::Div<Float> for RGBSpectrum {
    type Output = RGBSpectrum;

    fn div(self, s: Float) -> RGBSpectrum {
        RGBSpectrum { rgb: self.rgb / s }
    }
}

/* Tests for RGBSpectrum */
