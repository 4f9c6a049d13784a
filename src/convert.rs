use crate::constants::{
    DEFAULT_QUALITY, DEFAULT_WEBP_METHOD, MAX_QUALITY, MAX_WEBP_METHOD, MIN_QUALITY,
    SIZE_PREFIX, SUCCESS_PREFIX,
};
use crate::error::{ConversionError, Result};
use crate::utils::{calculate_reduction, create_progress_spinner, format_kb};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use webp::{Encoder, WebPConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOptions {
    pub quality: u8,
    pub method: u8,
}

impl ConversionOptions {
    pub fn new(quality: Option<u8>, method: Option<u8>) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(ConversionError::InvalidQuality(quality));
        }

        let method = method.unwrap_or(DEFAULT_WEBP_METHOD);
        if method > MAX_WEBP_METHOD {
            return Err(ConversionError::InvalidMethod(method));
        }

        Ok(Self { quality, method })
    }
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            method: DEFAULT_WEBP_METHOD,
        }
    }
}

/// Pixel layout handed to the WebP encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Keep the alpha channel (RGBA8).
    Alpha,
    /// Flatten to fully opaque RGB8.
    Opaque,
}

/// Sizes of the source and the written WebP file, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionReport {
    pub original_size: u64,
    pub converted_size: u64,
}

impl ConversionReport {
    pub fn reduction_percent(&self) -> f64 {
        calculate_reduction(self.original_size, self.converted_size)
    }
}

pub fn select_color_mode(img: &DynamicImage) -> ColorMode {
    if img.color().has_alpha() {
        ColorMode::Alpha
    } else {
        ColorMode::Opaque
    }
}

/// Encodes `img` as lossy WebP.
///
/// Images with an alpha channel are encoded from RGBA so transparency
/// survives; everything else is flattened to RGB first.
pub fn encode_webp(img: &DynamicImage, options: &ConversionOptions) -> Result<Vec<u8>> {
    let mut config = WebPConfig::new().map_err(|_| {
        ConversionError::WebPEncoding("failed to initialise encoder configuration".to_string())
    })?;
    config.lossless = 0;
    config.quality = f32::from(options.quality);
    config.method = i32::from(options.method);

    let (width, height) = img.dimensions();
    let encoded = match select_color_mode(img) {
        ColorMode::Alpha => {
            let rgba = img.to_rgba8();
            Encoder::from_rgba(rgba.as_raw(), width, height).encode_advanced(&config)
        }
        ColorMode::Opaque => {
            let rgb = img.to_rgb8();
            Encoder::from_rgb(rgb.as_raw(), width, height).encode_advanced(&config)
        }
    }
    .map_err(|e| ConversionError::WebPEncoding(format!("{:?}", e)))?;

    Ok(encoded.to_vec())
}

/// Decodes `input`, writes it to `output` as WebP and reports both file sizes.
///
/// The output is staged in a temporary file next to the destination and then
/// moved over it, so a failure never leaves a partial `.webp` behind.
pub fn convert_image(
    input: &Path,
    output: &Path,
    options: &ConversionOptions,
) -> Result<ConversionReport> {
    let img = ImageReader::open(input)?.with_guessed_format()?.decode()?;
    crate::verbose!(
        "{:?}: {}x{} {:?} -> {:?}",
        input,
        img.width(),
        img.height(),
        img.color(),
        select_color_mode(&img)
    );

    let encoded = encode_webp(&img, options)?;
    drop(img);
    write_atomically(output, &encoded)?;

    let original_size = fs::metadata(input)?.len();
    let converted_size = fs::metadata(output)?.len();

    Ok(ConversionReport {
        original_size,
        converted_size,
    })
}

fn write_atomically(output: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(bytes)?;
    staged.persist(output)?;
    Ok(())
}

/// Converts one file and logs the outcome. Failures are reported and
/// swallowed; the return value says whether a `.webp` was written.
pub fn convert_to_webp(input: &Path, output: &Path, options: &ConversionOptions) -> bool {
    let input_name = display_name(input);
    let output_name = display_name(output);

    let pb = create_progress_spinner(&format!("Converting {}...", input_name));
    let result = convert_image(input, output, options);
    pb.finish_and_clear();

    match result {
        Ok(report) => {
            crate::info!("{} {} -> {}", SUCCESS_PREFIX, input_name, output_name);
            crate::info!(
                "  {} Size: {} -> {} ({:.1}% reduction)",
                SIZE_PREFIX,
                format_kb(report.original_size),
                format_kb(report.converted_size),
                report.reduction_percent()
            );
            true
        }
        Err(e) => {
            crate::error!("Error: {} - {}", input.display(), e);
            false
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
