//! Icon processing pipeline
//!
//! Decode the input, turn it into a silhouette, write it back out as PNG.

use crate::{
    Effect, Error, Result,
    codec::{IconCodec, save_png},
    silhouette::{Silhouette, SilhouetteReport},
};
use derivative::Derivative;
use derive_setters::Setters;
use std::path::PathBuf;

#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct ProcessIconConfig {
    /// Source artwork, any format the image decoder understands
    #[derivative(Default(value = "PathBuf::new()"))]
    pub input: PathBuf,
    /// Destination PNG
    #[derivative(Default(value = "PathBuf::new()"))]
    pub output: PathBuf,
}

impl ProcessIconConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self::default()
            .with_input(input.into())
            .with_output(output.into())
    }
}

/// Convert `config.input` into a black, transparent-background PNG at `config.output`.
///
/// # Example
/// ```no_run
/// use image_effect::{ProcessIconConfig, process_icon};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = process_icon(&ProcessIconConfig::new("mouse.jpg", "mouse.png"))?;
/// println!("{}x{}", report.width, report.height);
/// # Ok(())
/// # }
/// ```
pub fn process_icon(config: &ProcessIconConfig) -> Result<SilhouetteReport> {
    log::info!(
        "Processing icon: {} -> {}",
        config.input.display(),
        config.output.display()
    );

    let image = IconCodec::open(&config.input)?.decode()?;
    let (width, height) = image.dimensions();

    let silhouette = Silhouette.apply(image).ok_or_else(|| {
        Error::ImageProcessing(format!(
            "Failed to build {width}x{height} silhouette buffer"
        ))
    })?;

    let report = SilhouetteReport::from_image(&silhouette);
    log::debug!(
        "Silhouette {}x{}: {} transparent, {} opaque",
        report.width,
        report.height,
        report.transparent,
        report.opaque
    );

    save_png(&silhouette, &config.output)?;
    log::info!("Saved silhouette to {}", config.output.display());

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::silhouette::{OPAQUE_BLACK, TRANSPARENT};
    use image::{GrayImage, Luma, Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_process_icon_config() {
        let config = ProcessIconConfig::new("in.jpg", "out.png");
        assert_eq!(config.input, PathBuf::from("in.jpg"));
        assert_eq!(config.output, PathBuf::from("out.png"));

        let config = config.with_output(PathBuf::from("other.png"));
        assert_eq!(config.output, PathBuf::from("other.png"));
    }

    #[test]
    fn test_process_two_pixels() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("in.png");
        let output = temp_dir.path().join("out.png");

        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([240, 245, 250, 255]));
        image.put_pixel(1, 0, Rgba([10, 10, 10, 255]));
        image.save(&input).unwrap();

        let report = process_icon(&ProcessIconConfig::new(&input, &output)).unwrap();
        assert_eq!((report.width, report.height), (2, 1));
        assert_eq!((report.transparent, report.opaque), (1, 1));

        let decoded = image::open(&output).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba8);

        let decoded = decoded.into_rgba8();
        assert_eq!(decoded.dimensions(), (2, 1));
        assert_eq!(*decoded.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*decoded.get_pixel(1, 0), OPAQUE_BLACK);
    }

    #[test]
    fn test_process_grayscale_source() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("gray.png");
        let output = temp_dir.path().join("out.png");

        let image = GrayImage::from_fn(4, 3, |x, _| {
            if x < 2 { Luma([231]) } else { Luma([230]) }
        });
        image.save(&input).unwrap();

        let report = process_icon(&ProcessIconConfig::new(&input, &output)).unwrap();
        assert_eq!((report.transparent, report.opaque), (6, 6));

        let decoded = image::open(&output).unwrap().into_rgba8();
        for (x, _, pixel) in decoded.enumerate_pixels() {
            let expected = if x < 2 { TRANSPARENT } else { OPAQUE_BLACK };
            assert_eq!(*pixel, expected);
        }
    }

    #[test]
    fn test_process_palette_source() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("palette.png");
        let output = temp_dir.path().join("out.png");

        // Index 0 is paper white, index 1 a bright blue that fails on red
        {
            let file = std::fs::File::create(&input).unwrap();
            let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), 3, 2);
            encoder.set_color(png::ColorType::Indexed);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_palette(vec![250, 250, 250, 100, 240, 255]);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0, 1, 0, 1, 1, 0]).unwrap();
            writer.finish().unwrap();
        }

        let report = process_icon(&ProcessIconConfig::new(&input, &output)).unwrap();
        assert_eq!((report.width, report.height), (3, 2));
        assert_eq!((report.transparent, report.opaque), (3, 3));

        let decoded = image::open(&output).unwrap().into_rgba8();
        assert_eq!(*decoded.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*decoded.get_pixel(1, 0), OPAQUE_BLACK);
        assert_eq!(*decoded.get_pixel(2, 0), TRANSPARENT);
        assert_eq!(*decoded.get_pixel(0, 1), OPAQUE_BLACK);
        assert_eq!(*decoded.get_pixel(1, 1), OPAQUE_BLACK);
        assert_eq!(*decoded.get_pixel(2, 1), TRANSPARENT);
    }

    #[test]
    fn test_process_missing_input_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let output = temp_dir.path().join("out.png");

        let result = process_icon(&ProcessIconConfig::new(
            temp_dir.path().join("missing.png"),
            &output,
        ));

        assert!(result.is_err());
        assert!(!output.exists());
    }
}
