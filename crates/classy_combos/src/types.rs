use classy_core::Signature;
use serde::Serialize;

/// One line of the report: a class combination and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub count: usize,
    pub signature: Signature,
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Entries that passed both thresholds, least frequent first
    pub entries: Vec<ReportEntry>,
    pub files_scanned: usize,
    pub elements_scanned: usize,
    pub distinct_signatures: usize,
}
