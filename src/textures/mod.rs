// Copyright @yucwang 2026

pub mod constant;
pub mod image;
pub mod mipmap;
pub mod sampler;
