#![allow(dead_code)]

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes a PNG with a transparent left half.
pub fn write_rgba_png(path: &Path, width: u32, height: u32) {
    RgbaImage::from_fn(width, height, |x, y| {
        let alpha = if x < width / 2 { 0 } else { 255 };
        Rgba([(x % 256) as u8, (y % 256) as u8, 90, alpha])
    })
    .save_with_format(path, ImageFormat::Png)
    .unwrap();
}

pub fn write_rgb_png(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 200]))
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

/// Creates `<base>/images/pc` and `<base>/images/mob` and returns them.
pub fn create_image_folders(base: &Path) -> (PathBuf, PathBuf) {
    let pc = base.join("images").join("pc");
    let mob = base.join("images").join("mob");
    fs::create_dir_all(&pc).unwrap();
    fs::create_dir_all(&mob).unwrap();
    (pc, mob)
}
