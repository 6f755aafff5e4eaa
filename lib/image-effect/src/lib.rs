pub mod codec;
pub mod process;
pub mod silhouette;

pub use codec::{IconCodec, save_png};
pub use process::{ProcessIconConfig, process_icon};
pub use silhouette::{Silhouette, SilhouetteReport};

use image::RgbaImage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error("Failed to persist output file")]
    Persist(#[from] tempfile::PersistError),

    #[error("Image processing error: {0}")]
    ImageProcessing(String),
}

pub trait Effect {
    fn apply(&self, image: RgbaImage) -> Option<RgbaImage>;
}
