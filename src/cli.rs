use clap::Parser;
use std::path::PathBuf;

/// Builds the sample reservoir catalog, lists it and saves it to disk.
#[derive(Debug, Parser)]
#[command(name = "reservoir-catalog")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Destination of the text form.
    #[arg(long, env = "RESERVOIR_TEXT_OUT", default_value = "reservoirs.txt")]
    pub text_out: PathBuf,

    /// Destination of the binary form.
    #[arg(long, env = "RESERVOIR_BINARY_OUT", default_value = "reservoirs.bin")]
    pub binary_out: PathBuf,

    /// Zero-based position removed before saving.
    #[arg(long, default_value_t = 1)]
    pub remove: usize,
}
