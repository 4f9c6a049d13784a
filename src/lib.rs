pub mod cli;
pub mod constants;
pub mod convert;
pub mod error;
pub mod folder;
pub mod logger;
pub mod run;
pub mod utils;

pub use convert::{
    convert_image, convert_to_webp, encode_webp, select_color_mode, ColorMode,
    ConversionOptions, ConversionReport,
};
pub use error::{ConversionError, Result};
pub use folder::{collect_png_files, is_png_file, process_folder, webp_output_path, FolderSummary};
pub use run::{default_folders, explicit_folders, run, TargetFolder};
