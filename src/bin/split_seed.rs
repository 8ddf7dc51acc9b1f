// split-seed: break one large multi-row INSERT statement into batches.
// Defaults mirror the original deploy invocation
// (backend/seed.sql -> backend/seed_chunked.sql, 20 rows per batch).

use clap::Parser;
use site_build_tools::logger;
use site_build_tools::progress::ProgressManager;
use site_build_tools::splitter::{SeedSplitter, DEFAULT_TABLE};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Enable debug logging (disables the progress bar).
    #[arg(long)]
    debug: bool,

    /// Maximum number of row tuples per output INSERT statement.
    #[arg(long, default_value_t = 20)]
    batch_size: usize,

    /// Table the seed INSERT targets.
    #[arg(long, default_value = DEFAULT_TABLE)]
    table: String,

    /// Write a JSON run summary to this file.
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// Seed SQL file to split.
    #[arg(default_value = "backend/seed.sql")]
    input: PathBuf,

    /// Output file for the batched statements.
    #[arg(default_value = "backend/seed_chunked.sql")]
    output: PathBuf,
}

fn main() -> site_build_tools::Result<()> {
    let args = Args::parse();
    logger::set_debug(args.debug);

    logger::debug(&format!("main: Input file: {}", args.input.display()));
    logger::debug(&format!("main: Output file: {}", args.output.display()));
    logger::debug(&format!("main: Batch size: {}", args.batch_size));

    let progress = ProgressManager::new(!args.debug);
    let splitter = SeedSplitter::new(&args.table, args.batch_size);

    // A missing INSERT header is a recoverable condition, not an error.
    let summary = match splitter.split_file(&args.input, &args.output, &progress)? {
        Some(summary) => summary,
        None => return Ok(()),
    };

    if let Some(path) = args.report_json.as_ref() {
        let report = serde_json::json!({
            "input": args.input.display().to_string(),
            "output": args.output.display().to_string(),
            "summary": &summary,
        });
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        logger::debug(&format!("main: Report written to {}", path.display()));
    }

    println!(
        "Successfully split {} rows into batches of {}.",
        summary.rows, summary.batch_size
    );
    Ok(())
}
