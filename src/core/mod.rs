// Copyright @yucwang 2021

pub mod texture;
