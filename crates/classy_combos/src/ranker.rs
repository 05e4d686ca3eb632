use log::{debug, trace};

use crate::{aggregate::CorpusCounts, types::ReportEntry};

/// Order the corpus counts for reporting.
///
/// Entries are sorted by ascending count, ties broken by signature text, and
/// filtered so that only signatures with at least `min_words` separator
/// spaces and at least `min_count` occurrences remain. Negative thresholds
/// filter nothing, same as zero.
pub fn rank(counts: &CorpusCounts, min_words: i64, min_count: i64) -> Vec<ReportEntry> {
    let min_words = usize::try_from(min_words.max(0)).unwrap_or(usize::MAX);
    let min_count = usize::try_from(min_count.max(0)).unwrap_or(usize::MAX);

    let mut entries: Vec<ReportEntry> = counts
        .iter()
        .map(|(signature, count)| ReportEntry { count, signature: signature.clone() })
        .collect();
    entries.sort_unstable_by(|a, b| {
        a.count.cmp(&b.count).then_with(|| a.signature.cmp(&b.signature))
    });

    entries.retain(|entry| {
        let keep = entry.signature.word_count() >= min_words && entry.count >= min_count;
        if !keep {
            trace!("Dropping {:?} (count {})", entry.signature.as_str(), entry.count);
        }
        keep
    });
    debug!("Ranked {} of {} distinct signatures", entries.len(), counts.len());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use classy_core::{Signature, normalize};

    fn counts_of(pairs: &[(&str, usize)]) -> CorpusCounts {
        let mut counts = CorpusCounts::new();
        for (raw, n) in pairs {
            for _ in 0..*n {
                counts.record(normalize(raw));
            }
        }
        counts
    }

    fn lines(entries: &[ReportEntry]) -> Vec<(usize, &str)> {
        entries.iter().map(|e| (e.count, e.signature.as_str())).collect()
    }

    #[test]
    fn test_ascending_count_then_text() {
        let counts = counts_of(&[("a", 5), ("c b", 5), ("c", 2)]);
        let entries = rank(&counts, 0, 2);
        assert_eq!(lines(&entries), vec![(2, "c"), (5, "a"), (5, "b c")]);
    }

    #[test]
    fn test_tie_break_is_lexicographic() {
        let counts = counts_of(&[("z y", 4), ("a b", 4), ("m n", 4), ("a c", 4)]);
        let entries = rank(&counts, 1, 1);
        assert_eq!(lines(&entries), vec![(4, "a b"), (4, "a c"), (4, "m n"), (4, "y z")]);
    }

    #[test]
    fn test_word_filter_boundary() {
        let counts = counts_of(&[("solo", 3), ("pair one", 3)]);
        assert_eq!(lines(&rank(&counts, 1, 1)), vec![(3, "one pair")]);
        assert_eq!(lines(&rank(&counts, 0, 1)), vec![(3, "one pair"), (3, "solo")]);
        assert!(rank(&counts, 2, 1).is_empty());
    }

    #[test]
    fn test_count_filter_boundary() {
        let counts = counts_of(&[("a b", 3), ("c d", 2)]);
        assert_eq!(lines(&rank(&counts, 1, 3)), vec![(3, "a b")]);
        assert_eq!(lines(&rank(&counts, 1, 2)), vec![(2, "c d"), (3, "a b")]);
    }

    #[test]
    fn test_empty_signature_needs_zero_words() {
        let counts = counts_of(&[("", 4), ("   ", 1)]);
        assert!(rank(&counts, 1, 1).is_empty());
        assert_eq!(lines(&rank(&counts, 0, 1)), vec![(5, "")]);
    }

    #[test]
    fn test_zero_thresholds_keep_everything() {
        let counts = counts_of(&[("x", 1), ("y z", 2)]);
        let entries = rank(&counts, 0, 0);
        assert_eq!(entries.len(), counts.len());
    }

    #[test]
    fn test_negative_thresholds_act_like_zero() {
        let counts = counts_of(&[("", 1), ("x", 2), ("y z", 3)]);
        assert_eq!(rank(&counts, -1, -5), rank(&counts, 0, 0));
        assert_eq!(rank(&counts, i64::MIN, 0).len(), 3);
    }

    #[test]
    fn test_output_is_deterministic() {
        let pairs = [("q", 1), ("p o", 1), ("n", 1), ("m l k", 2), ("j", 2)];
        let forward = rank(&counts_of(&pairs), 0, 0);
        let mut reversed_pairs = pairs;
        reversed_pairs.reverse();
        let backward = rank(&counts_of(&reversed_pairs), 0, 0);
        assert_eq!(forward, backward);
        let sigs: Vec<&Signature> = forward.iter().map(|e| &e.signature).collect();
        assert_eq!(sigs[0].as_str(), "n");
    }
}
