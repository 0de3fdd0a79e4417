// Copyright 2020 TwoCookingMice

use millefeuille::core::texture::Texture;
use millefeuille::math::bitmap::Bitmap;
use millefeuille::math::constants::{Float, Vector2f};
use millefeuille::math::spectrum::RGBSpectrum;
use millefeuille::textures::image::{FilterMode, ImageTexture};

use std::env;

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <width> <height> [--mode nearest|bilinear|trilinear] [--lod L] [--grid N]", args[0]);
        std::process::exit(1);
    }

    let width: usize = args[1].parse().unwrap_or(0);
    let height: usize = args[2].parse().unwrap_or(0);

    let mut mode = FilterMode::Bilinear;
    let mut lod: Float = 0.0;
    let mut grid: usize = 8;

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" => {
                i += 1;
                mode = match args.get(i).map(|v| v.as_str()) {
                    Some("nearest") => FilterMode::Nearest,
                    Some("trilinear") => FilterMode::Trilinear,
                    _ => FilterMode::Bilinear,
                };
            }
            "--lod" => {
                i += 1;
                lod = args.get(i).and_then(|v| v.parse::<Float>().ok()).unwrap_or(0.0);
            }
            "--grid" => {
                i += 1;
                grid = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(8).max(1);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // checkerboard test card, 4x4 texel cells
    let mut base = Bitmap::new(width, height);
    for y in 0..height {
        for x in 0..width {
            base[(x, y)] = if (x / 4 + y / 4) % 2 == 0 {
                RGBSpectrum::new(0.9, 0.9, 0.9)
            } else {
                RGBSpectrum::new(0.1, 0.1, 0.1)
            };
        }
    }

    let texture = Texture::Image(ImageTexture::new(mode, &base));

    log::info!("Sampling a {}x{} checkerboard on a {}x{} grid, lod = {}.",
               width, height, grid, grid, lod);

    for row in 0..grid {
        for col in 0..grid {
            let uv = Vector2f::new((col as Float + 0.5) / grid as Float,
                                   (row as Float + 0.5) / grid as Float);
            let sample = texture.evaluate(uv, lod);
            print!(" {:.3}", sample.r());
        }
        println!();
    }
}
