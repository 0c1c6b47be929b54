//! Aggregate play-out statistics for a word list.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameRng, WordList};

use super::trajectory::play_out;

/// Questions needed for one target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetResult {
    pub target: String,
    pub questions: usize,
    pub found: bool,
}

/// Play-out statistics over several targets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Per-target results, in word list order.
    pub targets: Vec<TargetResult>,

    /// Mean questions per target.
    pub mean_questions: f64,

    /// Worst case.
    pub max_questions: usize,

    /// Targets that did not end on their own word (stalled on anagrams).
    pub unresolved: usize,
}

impl SolveReport {
    /// Play out every word of the list.
    pub fn for_words(words: &WordList) -> Result<Self, EngineError> {
        Self::for_targets(words, words.iter())
    }

    /// Play out `count` words picked at random (without repetition).
    pub fn sample(words: &WordList, count: usize, rng: &mut GameRng) -> Result<Self, EngineError> {
        let picked = rng.sample_indices(words.len(), count);
        let all = words.as_slice();
        Self::for_targets(words, picked.into_iter().map(|i| all[i].as_str()))
    }

    fn for_targets<'a>(
        words: &WordList,
        targets: impl Iterator<Item = &'a str>,
    ) -> Result<Self, EngineError> {
        let mut results = Vec::new();
        for target in targets {
            let trajectory = play_out(words, target)?;
            results.push(TargetResult {
                questions: trajectory.question_count(),
                found: trajectory.found_target(),
                target: trajectory.target,
            });
        }

        let total: usize = results.iter().map(|r| r.questions).sum();
        let mean_questions = if results.is_empty() {
            0.0
        } else {
            total as f64 / results.len() as f64
        };

        Ok(Self {
            max_questions: results.iter().map(|r| r.questions).max().unwrap_or(0),
            unresolved: results.iter().filter(|r| !r.found).count(),
            mean_questions,
            targets: results,
        })
    }
}
