//! Class combination detection for HTML projects.
//!
//! This crate scans HTML documents for `class` attributes and reports which
//! combinations of classes recur often enough to be worth turning into a
//! reusable style or component.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use classy_combos::{Config, run_combo_check};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config { threshold: 5, ..Config::new("/path/to/site") };
//!
//! let result = run_combo_check(&cfg)?;
//!
//! // Use buffered output for better performance
//! let mut stdout = BufWriter::new(std::io::stdout());
//! classy_combos::print_report(&mut stdout, &result.entries)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod aggregate;
mod checker;
mod config;
mod ranker;
mod reporter;
mod types;

// Re-export public API
pub use aggregate::{CorpusCounts, accumulate};
pub use checker::run_combo_check;
pub use config::Config;
pub use ranker::rank;
pub use reporter::{print_json_report, print_report};
pub use types::{CheckResult, ReportEntry};
