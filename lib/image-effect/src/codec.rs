//! Decode and encode helpers
//!
//! Input files are read through an owned [`IconCodec`]; the file handle lives
//! exactly as long as the codec. Output is written to a temporary file next to
//! the target and renamed into place only after the PNG is fully encoded.

use crate::Result;
use image::{
    ExtendedColorType, ImageEncoder, ImageFormat, ImageReader, RgbaImage,
    codecs::png::PngEncoder,
};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

pub struct IconCodec {
    path: PathBuf,
    reader: ImageReader<BufReader<File>>,
}

impl IconCodec {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Content sniffing wins over the file extension
        let reader = ImageReader::open(path)?.with_guessed_format()?;

        log::debug!(
            "Opened {} (format: {:?})",
            path.display(),
            reader.format()
        );

        Ok(Self {
            path: path.to_path_buf(),
            reader,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Option<ImageFormat> {
        self.reader.format()
    }

    /// Decodes the whole image and normalizes it to 8-bit RGBA.
    pub fn decode(self) -> Result<RgbaImage> {
        let image = self.reader.decode()?;
        log::debug!(
            "Decoded {} as {:?} {}x{}",
            self.path.display(),
            image.color(),
            image.width(),
            image.height()
        );

        Ok(image.into_rgba8())
    }
}

/// Writes `image` as an RGBA PNG, replacing `path` only once the encode succeeded.
///
/// A symlink at `path` is written through. An existing file keeps its
/// permissions; a new one gets `0666` filtered by the umask.
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let target = if path.is_symlink() {
        fs::canonicalize(path)?
    } else {
        path.to_path_buf()
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let existing = fs::metadata(&target).ok().map(|meta| meta.permissions());

    let mut builder = tempfile::Builder::new();
    builder.prefix(".icon-silhouette-").suffix(".png.tmp");

    // Temp files default to 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut temp = builder.tempfile_in(dir)?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        PngEncoder::new(&mut writer).write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;

    if let Some(permissions) = existing {
        temp.as_file().set_permissions(permissions)?;
    }

    temp.persist(&target)?;
    log::debug!("Wrote {}", target.display());

    Ok(())
}
