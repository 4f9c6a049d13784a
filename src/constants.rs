pub const DEFAULT_QUALITY: u8 = 85;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// libwebp encoder effort: 0 is fastest, 6 gives the smallest output.
pub const DEFAULT_WEBP_METHOD: u8 = 6;
pub const MAX_WEBP_METHOD: u8 = 6;

pub const SOURCE_EXTENSION: &str = "png";
pub const OUTPUT_EXTENSION: &str = "webp";

/// Folders converted when none are given on the command line, relative to the base directory.
pub const DEFAULT_FOLDERS: &[(&str, &str)] = &[("PC", "images/pc"), ("MOB", "images/mob")];

pub const HEADER_RULE_WIDTH: usize = 50;
pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const ERROR_PREFIX: &str = "❌";
pub const WARNING_PREFIX: &str = "⚠️";
pub const INFO_PREFIX: &str = "📋";
pub const SIZE_PREFIX: &str = "📊";
pub const START_PREFIX: &str = "🚀";
