//! lumen - contrast enhancement for a single image
//!
//! Writes a logarithmic transform and a histogram-equalized version of the
//! input, then shows both next to the original with their histograms.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(author, version, about = "Logarithmic transform and histogram equalization for one image")]
#[command(long_about = "
Enhances the contrast of one image two ways and writes both results to the
current directory:

  <stem>_log.jpg      s = c * log(1 + r), min-max normalized
  <stem>_hist_eq.jpg  histogram equalization

Example:
  lumen photo.png
")]
struct Cli {
    /// Input image (PNG or JPEG)
    image: PathBuf,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version go to stdout and are not failures.
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    match commands::enhance::run(&cli.image) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
