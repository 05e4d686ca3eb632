use anyhow::Result;
use clap::Parser;
use classy_combos::Config;
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

fn main() {
    env_logger::init();

    let cfg = Config::parse();
    debug!("Parsed CLI arguments: {:?}", cfg);

    if let Err(err) = run(&cfg) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(cfg: &Config) -> Result<()> {
    let start = Instant::now();
    info!(
        "Running class combination check with names: {}, threshold: {}",
        cfg.names, cfg.threshold
    );

    let result = classy_combos::run_combo_check(cfg)?;
    debug!("Found {} report entries", result.entries.len());

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());
    if cfg.json {
        classy_combos::print_json_report(&mut stdout, &result.entries)?;
    } else {
        classy_combos::print_report(&mut stdout, &result.entries)?;
    }
    stdout.flush()?;

    info!(
        "Finished in {}ms on {} files ({} class attributes, {} distinct combinations)",
        start.elapsed().as_millis(),
        result.files_scanned,
        result.elements_scanned,
        result.distinct_signatures
    );
    Ok(())
}
