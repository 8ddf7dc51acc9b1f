// build-frontend: copy index.html into the dist folder with the API URL
// constant rewritten to the caller-supplied value.

use clap::Parser;
use site_build_tools::builder::{FrontendBuilder, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR};
use site_build_tools::logger;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// The API URL to inject.
    #[arg(long)]
    api_url: String,

    /// HTML page to build from.
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Distribution directory (created if absent).
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

fn main() -> site_build_tools::Result<()> {
    let args = Args::parse();
    logger::set_debug(args.debug);

    let builder = FrontendBuilder::new(args.input, args.output_dir);

    // A missing input page is reported explicitly with exit status 1.
    if !builder.input().exists() {
        println!("Error: {} not found.", builder.input().display());
        std::process::exit(1);
    }

    let report = builder.build(&args.api_url)?;

    println!(
        "Build complete. Output written to {} with API_URL={}",
        report.output.display(),
        report.api_url
    );
    Ok(())
}
