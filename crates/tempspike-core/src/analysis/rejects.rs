use std::collections::HashMap;

use crate::RejectSummary;
use crate::protocols::tempspike::DecodeError;

/// Example contexts kept per reject kind.
pub(crate) const MAX_EXAMPLES: usize = 3;

#[derive(Debug, Default, Clone)]
pub(crate) struct RejectStats {
    pub count: u64,
    pub examples: Vec<String>,
}

pub(crate) fn add_reject(
    stats: &mut HashMap<&'static str, RejectStats>,
    err: &DecodeError,
    line: u64,
) {
    let entry = stats.entry(err.kind()).or_default();
    entry.count += 1;
    if entry.examples.len() < MAX_EXAMPLES {
        entry.examples.push(format!("line {line}: {err}"));
    }
}

pub(crate) fn build_reject_summaries(
    stats: HashMap<&'static str, RejectStats>,
) -> Vec<RejectSummary> {
    let mut rejects: Vec<RejectSummary> = stats
        .into_iter()
        .map(|(kind, stats)| RejectSummary {
            reason: kind.to_string(),
            count: stats.count,
            examples: stats.examples,
        })
        .collect();

    rejects.sort_by(|a, b| a.reason.cmp(&b.reason));
    rejects
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{MAX_EXAMPLES, add_reject, build_reject_summaries};
    use crate::protocols::tempspike::DecodeError;

    #[test]
    fn summaries_are_sorted_by_reason() {
        let mut stats = HashMap::new();
        add_reject(&mut stats, &DecodeError::SyncNotFound, 1);
        add_reject(&mut stats, &DecodeError::TooShort { bits: 10 }, 2);
        add_reject(&mut stats, &DecodeError::SyncNotFound, 3);

        let summaries = build_reject_summaries(stats);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].reason, "frame_too_short");
        assert_eq!(summaries[0].count, 1);
        assert_eq!(summaries[1].reason, "sync_not_found");
        assert_eq!(summaries[1].count, 2);
        assert_eq!(summaries[1].examples[0], "line 1: sync word not found");
    }

    #[test]
    fn examples_are_capped_but_counts_keep_growing() {
        let mut stats = HashMap::new();
        for line in 1..=5 {
            add_reject(&mut stats, &DecodeError::SyncNotFound, line);
        }

        let summaries = build_reject_summaries(stats);
        assert_eq!(summaries[0].count, 5);
        assert_eq!(summaries[0].examples.len(), MAX_EXAMPLES);
    }
}
