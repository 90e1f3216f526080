use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// TOML file to validate
    #[arg(value_name = "FILE", default_value = "netlify.toml")]
    pub file: PathBuf,
}
