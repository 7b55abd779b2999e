use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::io::Reader as ImageReader;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageResult, RgbaImage};
use tracing::{debug, warn};

use crate::error::{IconError, Result};
use crate::manifest::{MANIFEST_FILE_NAME, Manifest, ManifestEntry};
use crate::sizes::{ICON_SIZES, IconSpec};

/// Edge length every source is normalized to before resizing.
pub const SOURCE_EDGE: u32 = 1024;

const FILTER: FilterType = FilterType::Lanczos3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub file_name: &'static str,
    pub pixel_size: u32,
    pub path: PathBuf,
}

/// What a successful run wrote to disk.
#[derive(Debug, Clone)]
pub struct Generated {
    pub icons: Vec<GeneratedIcon>,
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
}

// Format comes from the file content, falling back to the extension.
fn decode(path: &Path) -> ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// Decodes `path` and brings it to a 1024x1024 RGBA buffer.
pub fn load_source(path: &Path) -> Result<RgbaImage> {
    let img = decode(path).map_err(|source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let (w, h) = img.dimensions();
    let img = if (w, h) != (SOURCE_EDGE, SOURCE_EDGE) {
        warn!(
            width = w,
            height = h,
            "source image is {}x{}, resizing to {}x{}",
            w,
            h,
            SOURCE_EDGE,
            SOURCE_EDGE
        );
        img.resize_exact(SOURCE_EDGE, SOURCE_EDGE, FILTER)
    } else {
        img
    };

    Ok(img.to_rgba8())
}

/// Resamples `source` to a square of `edge` pixels.
pub fn resize_icon(source: &RgbaImage, edge: u32) -> RgbaImage {
    imageops::resize(source, edge, edge, FILTER)
}

fn write_icon(source: &RgbaImage, spec: &IconSpec, output_dir: &Path) -> Result<GeneratedIcon> {
    let pixel_size = spec.pixel_size();
    let path = output_dir.join(spec.file_name);
    resize_icon(source, pixel_size)
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| IconError::WriteIcon { path: path.clone(), source })?;
    debug!(file = spec.file_name, pixel_size, "icon written");
    Ok(GeneratedIcon { file_name: spec.file_name, pixel_size, path })
}

/// Writes every icon of [`ICON_SIZES`] plus `Contents.json` into `output_dir`.
///
/// The source must exist; nothing is created otherwise. The output directory
/// (and missing parents) is created after the source decodes. A failed write
/// aborts the run and leaves already written files in place.
pub fn generate(source_path: &Path, output_dir: &Path) -> Result<Generated> {
    if !source_path.exists() {
        return Err(IconError::MissingInput { path: source_path.to_path_buf() });
    }

    let source = load_source(source_path)?;

    fs::create_dir_all(output_dir).map_err(|source| IconError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut icons = Vec::with_capacity(ICON_SIZES.len());
    let mut entries = Vec::with_capacity(ICON_SIZES.len());
    for spec in &ICON_SIZES {
        let icon = write_icon(&source, spec, output_dir)?;
        println!("Generated: {} ({}x{})", icon.file_name, icon.pixel_size, icon.pixel_size);
        icons.push(icon);
        entries.push(ManifestEntry::from(spec));
    }

    let manifest = Manifest::from_entries(entries);
    let manifest_path = manifest.write_to(output_dir)?;
    println!("Generated: {}", MANIFEST_FILE_NAME);

    Ok(Generated { icons, manifest, manifest_path })
}
