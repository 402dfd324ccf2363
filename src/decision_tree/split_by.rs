//! Best-split search over categorical equality tests.
use std::fmt;
use std::collections::HashSet;

use crate::Sample;
use crate::error::Result;
use super::condition::BranchingCondition;
use super::impurity::{gini_index, impurity_reduction};

/// How to break ties between candidate splits
/// that have the same impurity reduction.
/// Candidates are enumerated attribute-major,
/// and the values of an attribute in order of first appearance.
/// * `TieBreak::FirstSeen` keeps the earliest candidate (`>`).
/// * `TieBreak::LastSeen` takes the latest candidate (`>=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TieBreak {
    #[default]
    #[value(name = "first")]
    FirstSeen,
    #[value(name = "last")]
    LastSeen,
}

impl TieBreak {
    /// Returns `true` if `candidate` replaces the current `best`.
    #[inline]
    fn prefers(&self, candidate: f64, best: f64) -> bool {
        match self {
            Self::FirstSeen => candidate > best,
            Self::LastSeen => candidate >= best,
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FirstSeen => "First seen",
            Self::LastSeen => "Last seen",
        };

        write!(f, "{name}")
    }
}

/// Returns the distinct values of column `attr_index`
/// over the rows `indices`, in order of first appearance.
pub fn unique_values<'a>(
    sample: &'a Sample,
    indices: &[usize],
    attr_index: usize,
) -> Vec<&'a str>
{
    let mut seen = HashSet::new();
    indices.iter()
        .map(|&i| sample[i][attr_index].as_str())
        .filter(|value| seen.insert(*value))
        .collect()
}

/// Returns the equality test that maximizes the impurity reduction
/// on the rows `indices`, together with that reduction.
///
/// Candidates that leave either side empty are skipped.
/// The running best starts at the baseline `0`,
/// so under `TieBreak::LastSeen` a candidate with zero reduction
/// may be returned. Callers must check the reduction themselves.
/// If every candidate is degenerate, or `indices` is empty,
/// returns `(None, 0.0)`.
pub fn best_split(
    sample: &Sample,
    indices: &[usize],
    attr_names: &[String],
    tie_break: TieBreak,
) -> Result<(Option<BranchingCondition>, f64)>
{
    if indices.is_empty() { return Ok((None, 0.0)); }

    let current_impurity = gini_index(sample, indices)?;

    let mut best_condition = None;
    let mut best_reduction = 0.0;
    for (i, name) in attr_names.iter().enumerate() {
        for value in unique_values(sample, indices, i) {
            let condition = BranchingCondition::new(name, i, value);
            let (lindices, rindices) = condition.partition(sample, indices)?;

            if lindices.is_empty() || rindices.is_empty() { continue; }

            let reduction = impurity_reduction(
                current_impurity, sample, &[&lindices[..], &rindices[..]]
            )?;

            if tie_break.prefers(reduction, best_reduction) {
                best_condition = Some(condition);
                best_reduction = reduction;
            }
        }
    }

    Ok((best_condition, best_reduction))
}
