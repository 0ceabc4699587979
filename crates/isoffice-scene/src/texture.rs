//! CPU-rasterised tile textures.
//!
//! The same diamond the scene draws as vector geometry, baked into RGBA
//! images: fill, a faint outline and a lighter top-right edge. Used to export
//! the floor and carpet tiles as PNG sprites.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use isoffice_grid::TileSize;

use crate::config::Palette;
use crate::geometry::CARPET_ALPHA;
use crate::palette::{channels, lighten, to_byte};

const OUTLINE_ALPHA: f32 = 0.1;
const HIGHLIGHT_ALPHA: f32 = 0.5;
const HIGHLIGHT_LIGHTEN: f32 = 15.0;

/// A named tile sprite.
#[derive(Debug, Clone)]
pub struct TileTexture {
    pub name: &'static str,
    pub image: RgbaImage,
}

/// Rasterises one tile diamond filling a `width` x `height` image.
///
/// Pixels outside the diamond stay fully transparent. The one-pixel rim is
/// shaded darker, except the top-right edge which gets the highlight.
pub fn rasterize_tile(width: u32, height: u32, rgb: u32, alpha: f32) -> RgbaImage {
    let (hw, hh) = (width as f32 / 2.0, height as f32 / 2.0);
    // Pixel distance from a point to the diamond edge, per unit of |x/hw| + |y/hh|.
    let edge_scale = 1.0 / (1.0 / (hw * hw) + 1.0 / (hh * hh)).sqrt();

    let fill = rgb_f32(rgb);
    let highlight = rgb_f32(lighten(rgb, HIGHLIGHT_LIGHTEN));
    let a = to_byte(alpha);

    RgbaImage::from_fn(width, height, |x, y| {
        let dx = x as f32 + 0.5 - hw;
        let dy = y as f32 + 0.5 - hh;
        let d = dx.abs() / hw + dy.abs() / hh;
        let dist = (1.0 - d) * edge_scale;

        if dist < 0.0 {
            return Rgba([0, 0, 0, 0]);
        }

        let c = if dist >= 1.0 {
            fill
        } else if dx > 0.0 && dy < 0.0 {
            mix(fill, highlight, HIGHLIGHT_ALPHA)
        } else {
            mix(fill, [0.0; 3], OUTLINE_ALPHA)
        };

        Rgba([to_byte(c[0]), to_byte(c[1]), to_byte(c[2]), a])
    })
}

/// Floor (light, dark) and carpet (main, border) sprites at `tile` size.
pub fn tile_textures(palette: &Palette, tile: TileSize) -> Vec<TileTexture> {
    let (w, h) = (tile.width.ceil() as u32, tile.height.ceil() as u32);
    [
        ("tile_light", palette.floor_light, 1.0),
        ("tile_dark", palette.floor_dark, 1.0),
        ("carpet_main", palette.carpet_main, CARPET_ALPHA),
        ("carpet_border", palette.carpet_border, CARPET_ALPHA),
    ]
    .into_iter()
    .map(|(name, rgb, alpha)| TileTexture { name, image: rasterize_tile(w, h, rgb, alpha) })
    .collect()
}

/// Writes every tile sprite as `<name>.png` into `dir`, creating it if needed.
pub fn export_tile_textures(palette: &Palette, tile: TileSize, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("create texture dir {}", dir.display()))?;

    let mut written = Vec::new();
    for tex in tile_textures(palette, tile) {
        let path = dir.join(format!("{}.png", tex.name));
        tex.image
            .save_with_format(&path, ImageFormat::Png)
            .with_context(|| format!("write {}", path.display()))?;
        log::info!("wrote {} ({}x{})", path.display(), tex.image.width(), tex.image.height());
        written.push(path);
    }
    Ok(written)
}

fn rgb_f32(rgb: u32) -> [f32; 3] {
    let [r, g, b] = channels(rgb);
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

fn mix(base: [f32; 3], over: [f32; 3], t: f32) -> [f32; 3] {
    [
        base[0] + (over[0] - base[0]) * t,
        base[1] + (over[1] - base[1]) * t,
        base[2] + (over[2] - base[2]) * t,
    ]
}
