use std::path::PathBuf;

use clap::Parser;
use env_logger::{Env, Target};

/// Adds a final column to a GFF file based on a lookup table, skipping
/// headers.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input GFF file.
    #[arg(value_name = "FILE")]
    main_input_file: PathBuf,
    /// Path to the 2-column, tab-delimited file mapping motifs to families.
    #[arg(value_name = "FILE")]
    te_family_input_list: PathBuf,
    /// Path for the new, annotated output file.
    #[arg(value_name = "FILE")]
    output_file: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .target(Target::Stdout)
        .init();

    log::info!("--- Starting Process ---");
    if let Err(e) = rmfam::annotate(
        &cli.main_input_file,
        &cli.te_family_input_list,
        &cli.output_file,
    ) {
        log::error!("Error: {}", e);
        std::process::exit(1);
    }
}
