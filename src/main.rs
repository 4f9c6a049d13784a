use anyhow::Context;
use clap::Parser;
use png_to_webp::cli::Args;
use png_to_webp::logger::{self, Verbosity};
use png_to_webp::{default_folders, explicit_folders, run, ConversionOptions};
use std::env;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::set_verbosity(Verbosity::from_flags(args.quiet, args.verbose));

    let options = ConversionOptions::new(args.quality, args.method)?;

    let folders = if args.folders.is_empty() {
        let base_dir = match args.base_dir {
            Some(dir) => dir,
            None => env::current_dir().context("Failed to resolve the current directory")?,
        };
        default_folders(&base_dir)
    } else {
        explicit_folders(&args.folders)
    };

    // Per-file and per-folder failures are reported inside `run`; they never
    // change the exit status.
    run(&folders, &options);

    Ok(())
}
