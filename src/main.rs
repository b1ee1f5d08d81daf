use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use exactsize::resize_file;

/// Resize an image to exact pixel dimensions.
///
/// The image is stretched or shrunk to the requested size with a
/// high-quality filter; aspect ratio is not preserved. The output format is
/// chosen by the output file's extension.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Image file to read
    input: PathBuf,

    /// File to write; the extension selects the output format
    output: PathBuf,

    /// Target width in pixels
    #[arg(long, default_value_t = 480)]
    width: u32,

    /// Target height in pixels
    #[arg(long, default_value_t = 659)]
    height: u32,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(error) = resize_file(&cli.input, &cli.output, cli.width, cli.height) {
        eprintln!("exactsize: {error}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
