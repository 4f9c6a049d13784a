use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "png-to-webp",
    about = "Convert the PNG images in images/pc and images/mob to WebP",
    long_about = "png-to-webp scans images/pc and images/mob (non-recursively) for .png files \
                  and writes a .webp next to each one, reporting the size before and after. \
                  Images with transparency keep their alpha channel; all others are encoded opaque. \
                  A file that fails to convert is reported and skipped.",
    version,
    after_help = "EXAMPLES:\n  \
    png-to-webp\n  \
    png-to-webp -b ./site -q 80\n  \
    png-to-webp ./assets/icons ./assets/banners -q 90 -m 4"
)]
pub struct Args {
    #[arg(
        help = "Folders to convert (default: images/pc and images/mob)",
        long_help = "Folders to convert instead of the defaults. \
                     When omitted, images/pc and images/mob under the base directory are used."
    )]
    pub folders: Vec<PathBuf>,

    #[arg(
        short = 'b',
        long,
        help = "Base directory for the default folders (default: current directory)"
    )]
    pub base_dir: Option<PathBuf>,

    #[arg(
        short = 'q',
        long,
        help = "WebP quality (1-100, default: 85)",
        long_help = "Lossy WebP quality from 1 (smallest) to 100 (best). \
                     Applied to every converted image."
    )]
    pub quality: Option<u8>,

    #[arg(
        short = 'm',
        long,
        help = "Encoder effort (0-6, default: 6)",
        long_help = "libwebp compression method. 0 is fastest, 6 is slowest and gives the smallest files."
    )]
    pub method: Option<u8>,

    #[arg(long, help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print image details for each file")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["png-to-webp"]).unwrap();
        assert!(args.folders.is_empty());
        assert_eq!(args.base_dir, None);
        assert_eq!(args.quality, None);
        assert_eq!(args.method, None);
        assert!(!args.quiet);
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_flags_and_folders() {
        let args = Args::try_parse_from([
            "png-to-webp", "a", "b", "-q", "70", "-m", "3", "--quiet",
        ])
        .unwrap();
        assert_eq!(args.folders, vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(args.quality, Some(70));
        assert_eq!(args.method, Some(3));
        assert!(args.quiet);
    }

    #[test]
    fn test_parse_rejects_non_numeric_quality() {
        assert!(Args::try_parse_from(["png-to-webp", "-q", "high"]).is_err());
    }
}
