use anyhow::Result;
use log::{debug, info, trace, warn};
use std::path::{Path, PathBuf};

use classy_core::{Signature, collect_markup_files, signatures_in_file};

use crate::{
    aggregate::CorpusCounts,
    config::Config,
    ranker::rank,
    types::CheckResult,
};

pub fn run_combo_check(cfg: &Config) -> Result<CheckResult> {
    info!("Starting class combination check");
    info!("Using root directory: {}", cfg.root.display());

    let files = collect_markup_files(&cfg.root)?;
    if files.is_empty() {
        warn!("No markup files found under {}", cfg.root.display());
    }
    info!("Found {} markup files", files.len());

    let counts = count_signatures(&files, signatures_in_file)?;
    debug!(
        "Recorded {} class attributes, {} distinct signatures",
        counts.total(),
        counts.len()
    );

    let entries = rank(&counts, cfg.names, cfg.threshold);
    info!(
        "Class combination check complete. {} combinations (names >= {}, threshold >= {})",
        entries.len(),
        cfg.names,
        cfg.threshold
    );

    Ok(CheckResult {
        entries,
        files_scanned: files.len(),
        elements_scanned: counts.total(),
        distinct_signatures: counts.len(),
    })
}

/// Scan `files` one at a time in order, stopping at the first failure.
///
/// Nothing is returned for a run that fails, so a bad file never leaves a
/// partial count behind.
pub(crate) fn count_signatures<F>(files: &[PathBuf], mut scan_file: F) -> Result<CorpusCounts>
where
    F: FnMut(&Path) -> Result<Vec<Signature>>,
{
    let mut counts = CorpusCounts::new();
    for file in files {
        trace!("Scanning {}", file.display());
        let signatures = scan_file(file)?;
        counts.extend(signatures);
    }
    Ok(counts)
}
