use std::collections::BTreeMap;

use crate::model::score::ScoreLabel;
use crate::patterns::accumulator::MatchAccumulator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchStats {
    pub nmatch: usize,
    pub nuni: usize,
    pub max_counts: usize,
}

impl MatchStats {
    pub fn from_matches(matches: &[usize]) -> Self {
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for &idx in matches {
            *counts.entry(idx).or_insert(0) += 1;
        }
        Self {
            nmatch: matches.len(),
            nuni: counts.len(),
            max_counts: counts.values().copied().max().unwrap_or(0),
        }
    }
}

struct ScoreRule {
    label: ScoreLabel,
    applies: fn(&MatchStats) -> bool,
}

// Rules overlap; order is significant and the first hit wins.
const SCORE_RULES: &[ScoreRule] = &[
    ScoreRule {
        label: ScoreLabel::Perf,
        applies: |s| s.nuni == 1 && s.nmatch >= 4,
    },
    ScoreRule {
        label: ScoreLabel::None,
        applies: |s| s.nmatch == 0,
    },
    ScoreRule {
        label: ScoreLabel::Good,
        applies: |s| s.max_counts == 4 && s.nmatch == 5,
    },
    ScoreRule {
        // max_counts / nmatch >= 2/3
        label: ScoreLabel::Good,
        applies: |s| 3 * s.max_counts >= 2 * s.nmatch && s.nmatch >= 6,
    },
    ScoreRule {
        label: ScoreLabel::Good,
        applies: |s| s.nuni == 1 && s.nmatch == 3,
    },
    ScoreRule {
        label: ScoreLabel::Ok,
        applies: |s| s.max_counts == 3 && s.nmatch == 4,
    },
    ScoreRule {
        label: ScoreLabel::Risk,
        applies: |s| s.nuni == 1 && s.nmatch == 2,
    },
];

/// Grade one feature from the reference indices it was matched to.
pub fn score_matches(matches: &[usize]) -> ScoreLabel {
    if matches.is_empty() {
        return ScoreLabel::None;
    }
    let stats = MatchStats::from_matches(matches);
    SCORE_RULES
        .iter()
        .find(|rule| (rule.applies)(&stats))
        .map(|rule| rule.label)
        .unwrap_or(ScoreLabel::Amb)
}

/// Grade every feature, in the accumulator's insertion order.
pub fn score_quad_matches<K: Ord + Clone>(acc: &MatchAccumulator<K>) -> Vec<ScoreLabel> {
    acc.iter()
        .map(|(_, record)| score_matches(&record.matches))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/patterns/score.rs"]
mod tests;
