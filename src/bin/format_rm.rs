use std::path::PathBuf;

use clap::Parser;
use env_logger::{Env, Target};

/// Convert a space-aligned RepeatMasker-style file to tab-separated (TSV)
/// format and extract specific columns.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input text file that needs formatting.
    #[arg(value_name = "FILE")]
    input_file: PathBuf,
    /// Path for the main tab-separated output file.
    #[arg(value_name = "FILE")]
    main_output_file: PathBuf,
    /// Path for the extra output file containing 'matching_repeat' and
    /// 'repeat_class_family'.
    #[arg(value_name = "FILE")]
    extra_output_file: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .target(Target::Stdout)
        .init();

    if let Err(e) = rmfam::reformat(
        &cli.input_file,
        &cli.main_output_file,
        &cli.extra_output_file,
    ) {
        log::error!("Error: {}", e);
        std::process::exit(1);
    }
}
