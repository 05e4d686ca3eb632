use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "classy", version)]
#[command(about = "Find the most common class name combinations in HTML files")]
pub struct Config {
    /// Directory to scan for .html and .htm files
    pub root: PathBuf,

    /// Minimum number of spaces in a combination (a single class has none)
    #[arg(long, env = "CLASSY_NAMES", default_value_t = 1, allow_negative_numbers = true)]
    pub names: i64,

    /// Minimum number of occurrences for a combination to be reported
    #[arg(long, env = "CLASSY_THRESHOLD", default_value_t = 3, allow_negative_numbers = true)]
    pub threshold: i64,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Config { root: root.into(), names: 1, threshold: 3, json: false }
    }
}
