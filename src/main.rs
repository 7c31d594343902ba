//! `huffzip` command line front end.
//!
//! ```bash
//! huffzip compress notes.txt            # writes notes_compressed.txt
//! huffzip decompress notes_compressed.txt -o notes.txt
//! huffzip --verbose compress data.bin --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use huffzip::{compress_file, decompress_file, default_output_path, CompressionResult, Operation};

#[derive(Parser, Debug)]
#[command(name = "huffzip", version, about = "Huffman file compressor", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log codec details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file
    #[command(visible_alias = "c")]
    Compress(Target),
    /// Restore a file produced by `compress`
    #[command(visible_alias = "d")]
    Decompress(Target),
}

#[derive(clap::Args, Debug)]
struct Target {
    /// File to read
    input: PathBuf,

    /// File to write [default: <input>_compressed.txt or <input>_decompressed.txt]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the statistics as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "huffzip=debug" } else { "huffzip=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    let (operation, target) = match &args.command {
        Command::Compress(t) => (Operation::Compress, t),
        Command::Decompress(t) => (Operation::Decompress, t),
    };
    let output = target
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&target.input, operation));

    let outcome = match operation {
        Operation::Compress => compress_file(&target.input, &output),
        Operation::Decompress => decompress_file(&target.input, &output),
    };

    match outcome {
        Ok(result) => {
            report(&result, &output, target.json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("huffzip: {e}");
            ExitCode::FAILURE
        }
    }
}

fn report(result: &CompressionResult, output: &std::path::Path, json: bool) {
    if json {
        match serde_json::to_string_pretty(result) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("huffzip: cannot format statistics: {e}"),
        }
        return;
    }
    println!("{}", result.message());
    println!("  output:          {}", output.display());
    println!("  original size:   {} bytes", result.original_size());
    println!("  compressed size: {} bytes", result.compressed_size());
    println!("  ratio:           {:.3}", result.compression_ratio());
}
