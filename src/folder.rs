use crate::constants::{INFO_PREFIX, OUTPUT_EXTENSION, SOURCE_EXTENSION};
use crate::convert::{convert_to_webp, ConversionOptions};
use crate::error::{ConversionError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of converting one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSummary {
    pub folder: PathBuf,
    /// `false` when the folder did not exist and nothing was attempted.
    pub found: bool,
    pub converted: usize,
    pub failed: usize,
}

impl FolderSummary {
    fn missing(folder: &Path) -> Self {
        Self {
            folder: folder.to_path_buf(),
            found: false,
            converted: 0,
            failed: 0,
        }
    }
}

pub fn is_png_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
        .unwrap_or(false)
}

/// `images/pc/logo.png` -> `images/pc/logo.webp`
pub fn webp_output_path(input_path: &Path) -> Result<PathBuf> {
    let file_stem = input_path
        .file_stem()
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| ConversionError::InvalidFileName(input_path.to_path_buf()))?;

    let mut file_name = file_stem.to_os_string();
    file_name.push(".");
    file_name.push(OUTPUT_EXTENSION);
    Ok(input_path.with_file_name(file_name))
}

/// Lists the PNG files directly inside `folder`, sorted by file name.
/// Subdirectories are not descended into.
pub fn collect_png_files(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(ConversionError::FolderNotFound(folder.to_path_buf()));
    }

    let mut png_files = Vec::new();
    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_png_file(path) {
            png_files.push(path.to_path_buf());
        }
    }

    Ok(png_files)
}

/// Converts every PNG in `folder` to WebP next to its source.
///
/// Never fails: a missing folder is reported and skipped, and per-file
/// errors are logged by [`convert_to_webp`] without stopping the loop.
pub fn process_folder(folder: &Path, options: &ConversionOptions) -> FolderSummary {
    let png_files = match collect_png_files(folder) {
        Ok(files) => files,
        Err(ConversionError::FolderNotFound(_)) => {
            crate::warn!("Folder not found: {}", folder.display());
            return FolderSummary::missing(folder);
        }
        Err(e) => {
            crate::error!("Failed to read folder {}: {}", folder.display(), e);
            return FolderSummary {
                found: true,
                ..FolderSummary::missing(folder)
            };
        }
    };

    crate::verbose!("Found {} PNG files in {}", png_files.len(), folder.display());

    let mut summary = FolderSummary {
        found: true,
        ..FolderSummary::missing(folder)
    };

    for input_path in &png_files {
        let converted = match webp_output_path(input_path) {
            Ok(output_path) => convert_to_webp(input_path, &output_path, options),
            Err(e) => {
                crate::error!("Error: {} - {}", input_path.display(), e);
                false
            }
        };

        if converted {
            summary.converted += 1;
        } else {
            summary.failed += 1;
        }
    }

    crate::info!(
        "\n{} {} files converted: {}",
        INFO_PREFIX,
        summary.converted,
        folder.display()
    );
    if summary.failed > 0 {
        crate::warn!("Failed files: {}", summary.failed);
    }

    summary
}
