//! Two-tone silhouette effect
//!
//! Near-white pixels become fully transparent, everything else becomes opaque
//! black. Input alpha is ignored.

use crate::Effect;
use image::{Rgba, RgbaImage};

/// A channel must be strictly greater than this for the pixel to count as bright.
pub const BRIGHT_THRESHOLD: u8 = 230;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const OPAQUE_BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// True when red, green and blue are all above [`BRIGHT_THRESHOLD`].
pub fn is_bright(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    r > BRIGHT_THRESHOLD && g > BRIGHT_THRESHOLD && b > BRIGHT_THRESHOLD
}

pub fn classify(pixel: &Rgba<u8>) -> Rgba<u8> {
    if is_bright(pixel) {
        TRANSPARENT
    } else {
        OPAQUE_BLACK
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Silhouette;

impl Effect for Silhouette {
    fn apply(&self, image: RgbaImage) -> Option<RgbaImage> {
        let (width, height) = image.dimensions();

        // `pixels()` walks the buffer row by row
        let raw = image
            .pixels()
            .flat_map(|pixel| classify(pixel).0)
            .collect::<Vec<u8>>();

        RgbaImage::from_raw(width, height, raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SilhouetteReport {
    pub width: u32,
    pub height: u32,
    pub transparent: u64,
    pub opaque: u64,
}

impl SilhouetteReport {
    pub fn from_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let transparent = image.pixels().filter(|p| p[3] == 0).count() as u64;

        Self {
            width,
            height,
            transparent,
            opaque: width as u64 * height as u64 - transparent,
        }
    }
}
