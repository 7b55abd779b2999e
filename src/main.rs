use std::path::PathBuf;
use std::process::ExitCode;

use appiconset::config::Paths;
use appiconset::{IconError, generate, logger};
use clap::Parser;

/// Generates the iOS app icon set and Contents.json from one 1024x1024 image
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Source image, defaults to icon.png next to the program
    #[arg(value_name = "SOURCE")]
    source: Option<PathBuf>,

    /// Output directory, defaults to CastReader/Assets.xcassets/AppIcon.appiconset next to the program
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    logger::init();
    let cli = Cli::parse();
    let paths = Paths::resolve(cli.source, cli.output_dir);

    match generate(&paths.source, &paths.output_dir) {
        Ok(_) => {
            println!("\nDone! All icons saved to: {}", paths.output_dir.display());
            ExitCode::SUCCESS
        }
        Err(e @ IconError::MissingInput { .. }) => {
            let program = std::env::args().next().unwrap_or_else(|| "appiconset".to_string());
            eprintln!("Error: {}", e);
            eprintln!("Usage: {} [source_image.png] [output_dir]", program);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
