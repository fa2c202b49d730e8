use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Load an abs,rel,del,tag CSV file, print example filters, and plot it.")]
pub struct Cli {
    /// CSV file to load.
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,
}
