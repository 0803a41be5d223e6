use std::path::Path;

use image::error::{ImageError, LimitError, LimitErrorKind};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::domain::BorderSpec;
use crate::error::{PrepError, Result};

/// Height that keeps the source aspect ratio at `width`, never below one pixel.
pub fn scaled_height(src_w: u32, src_h: u32, width: u32) -> u32 {
    if src_w == 0 {
        return 1;
    }
    let h = (f64::from(width) * f64::from(src_h) / f64::from(src_w)).round();
    (h as u32).max(1)
}

/// Resize `source` to `width` pixels wide and write it to `target`.
/// Returns the written dimensions.
pub fn make_thumbnail(source: &Path, target: &Path, width: u32) -> Result<(u32, u32)> {
    let img = open(source)?;
    let height = scaled_height(img.width(), img.height(), width);
    let resized = img.resize_exact(width, height, FilterType::Lanczos3);
    save(resized, target)?;
    Ok((width, height))
}

/// Paste `source` onto a canvas grown by `border.width` on every side.
pub fn make_pressed_variant(source: &Path, target: &Path, border: &BorderSpec) -> Result<()> {
    let img = open(source)?.to_rgba8();
    let bw = border.width;
    let grow = |side: u32| bw.checked_mul(2).and_then(|b| b.checked_add(side));
    let (Some(w), Some(h)) = (grow(img.width()), grow(img.height())) else {
        return Err(PrepError::AssetWrite {
            path: target.to_path_buf(),
            source: ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError)),
        });
    };
    let mut canvas = RgbaImage::from_pixel(w, h, border.color);
    imageops::replace(&mut canvas, &img, i64::from(bw), i64::from(bw));
    save(DynamicImage::ImageRgba8(canvas), target)
}

fn open(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| PrepError::AssetOpen {
        path: path.to_path_buf(),
        source,
    })
}

fn save(img: DynamicImage, path: &Path) -> Result<()> {
    // JPEG has no alpha channel
    let img = match ImageFormat::from_path(path) {
        Ok(ImageFormat::Jpeg) => DynamicImage::ImageRgb8(img.to_rgb8()),
        _ => img,
    };
    img.save(path).map_err(|source| PrepError::AssetWrite {
        path: path.to_path_buf(),
        source,
    })
}
