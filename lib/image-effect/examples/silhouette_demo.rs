/// Silhouette demo
/// Renders a dark ring on a near-white background and turns it into an icon silhouette

use image::{Rgba, RgbaImage};
use image_effect::{ProcessIconConfig, process_icon};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let (width, height) = (128u32, 128u32);
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let d = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
        if (36.0..52.0).contains(&d) {
            Rgba([40, 40, 60, 255])
        } else {
            // Paper-white with a little scan noise
            let n = ((x * 7 + y * 13) % 20) as u8;
            Rgba([235 + n, 235 + n, 232 + n, 255])
        }
    });

    let input = output_dir.join("silhouette_input.png");
    img.save(&input)?;

    let output = output_dir.join("silhouette_output.png");
    let report = process_icon(&ProcessIconConfig::new(&input, &output))?;

    println!("✓ Generated {}", output.display());
    println!(
        "  {}x{}: {} transparent, {} opaque",
        report.width, report.height, report.transparent, report.opaque
    );

    Ok(())
}
