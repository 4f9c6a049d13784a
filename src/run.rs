use crate::constants::{DEFAULT_FOLDERS, HEADER_RULE_WIDTH, START_PREFIX, SUCCESS_PREFIX};
use crate::convert::ConversionOptions;
use crate::folder::{process_folder, FolderSummary};
use std::path::{Path, PathBuf};

/// A folder to convert together with the label printed in its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFolder {
    pub label: String,
    pub path: PathBuf,
}

/// The `images/pc` and `images/mob` folders under `base_dir`.
pub fn default_folders(base_dir: &Path) -> Vec<TargetFolder> {
    DEFAULT_FOLDERS
        .iter()
        .map(|(label, relative)| TargetFolder {
            label: label.to_string(),
            path: base_dir.join(relative),
        })
        .collect()
}

/// Folders given explicitly on the command line, labelled by their own path.
pub fn explicit_folders(paths: &[PathBuf]) -> Vec<TargetFolder> {
    paths
        .iter()
        .map(|path| TargetFolder {
            label: path.display().to_string(),
            path: path.clone(),
        })
        .collect()
}

/// Converts each folder in order. A missing folder is skipped and the rest
/// are still processed.
pub fn run(folders: &[TargetFolder], options: &ConversionOptions) -> Vec<FolderSummary> {
    crate::info!("{} Starting WebP conversion...\n", START_PREFIX);

    let rule = "=".repeat(HEADER_RULE_WIDTH);
    let mut summaries = Vec::with_capacity(folders.len());
    for (index, target) in folders.iter().enumerate() {
        if index > 0 {
            crate::info!();
        }
        crate::info!("{}", rule);
        crate::info!("{} folder:", target.label);
        crate::info!("{}", rule);

        summaries.push(process_folder(&target.path, options));
    }

    crate::info!("\n{} All conversions complete!", SUCCESS_PREFIX);
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_folders() {
        let folders = default_folders(Path::new("/srv/site"));
        assert_eq!(
            folders,
            vec![
                TargetFolder {
                    label: "PC".to_string(),
                    path: PathBuf::from("/srv/site/images/pc"),
                },
                TargetFolder {
                    label: "MOB".to_string(),
                    path: PathBuf::from("/srv/site/images/mob"),
                },
            ]
        );
    }

    #[test]
    fn test_explicit_folders() {
        let folders = explicit_folders(&[PathBuf::from("assets/icons")]);
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].label, "assets/icons");
        assert_eq!(folders[0].path, PathBuf::from("assets/icons"));
    }

    #[test]
    fn test_run_missing_first_folder_does_not_stop_second() {
        let temp_dir = TempDir::new().unwrap();
        let mob = temp_dir.path().join("images").join("mob");
        fs::create_dir_all(&mob).unwrap();
        RgbImage::from_pixel(8, 8, Rgb([10, 20, 30]))
            .save_with_format(mob.join("menu.png"), ImageFormat::Png)
            .unwrap();

        let summaries = run(
            &default_folders(temp_dir.path()),
            &ConversionOptions::default(),
        );

        assert_eq!(summaries.len(), 2);
        assert!(!summaries[0].found);
        assert!(summaries[1].found);
        assert_eq!(summaries[1].converted, 1);
        assert!(mob.join("menu.webp").exists());
    }
}
