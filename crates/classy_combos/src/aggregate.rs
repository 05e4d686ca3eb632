use classy_core::Signature;
use std::collections::HashMap;

/// Occurrence count of every signature seen across the corpus.
#[derive(Debug, Clone, Default)]
pub struct CorpusCounts {
    counts: HashMap<Signature, usize>,
    total: usize,
}

impl CorpusCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, signature: Signature) {
        *self.counts.entry(signature).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn get(&self, signature: &Signature) -> usize {
        self.counts.get(signature).copied().unwrap_or(0)
    }

    /// Number of distinct signatures
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of signatures recorded, duplicates included
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Signature, usize)> {
        self.counts.iter().map(|(sig, &count)| (sig, count))
    }
}

impl Extend<Signature> for CorpusCounts {
    fn extend<I: IntoIterator<Item = Signature>>(&mut self, iter: I) {
        for signature in iter {
            self.record(signature);
        }
    }
}

impl FromIterator<Signature> for CorpusCounts {
    fn from_iter<I: IntoIterator<Item = Signature>>(iter: I) -> Self {
        let mut counts = CorpusCounts::new();
        counts.extend(iter);
        counts
    }
}

/// Count every signature in `signatures`.
pub fn accumulate(signatures: impl IntoIterator<Item = Signature>) -> CorpusCounts {
    signatures.into_iter().collect()
}
