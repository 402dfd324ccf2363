//! Gini impurity and impurity reduction of row sets.
//! A row set is given as a list of row indices into a [`Sample`].
use crate::Sample;
use crate::error::{Error, Result};

/// Class label counts of a row set.
/// Labels are kept in the order they first appear,
/// so that every sum over the labels is evaluated in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelCounts<'a> {
    counts: Vec<(&'a str, usize)>,
    total: usize,
}

impl<'a> LabelCounts<'a> {
    /// Count the labels of `sample[i]` for each `i` in `indices`.
    pub fn from_indices(sample: &'a Sample, indices: &[usize]) -> Self {
        let mut counts = Self::default();
        for &i in indices {
            counts.add(sample.label(i));
        }
        counts
    }

    fn add(&mut self, label: &'a str) {
        self.total += 1;
        match self.counts.iter_mut().find(|(y, _)| *y == label) {
            Some((_, n)) => { *n += 1; },
            None => { self.counts.push((label, 1)); },
        }
    }

    /// Returns the number of counted rows.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns the pairs `(label, count)` in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Returns the most frequent label and its count.
    /// On ties, the label that appeared last wins.
    pub fn majority(&self) -> Option<(&'a str, usize)> {
        self.iter()
            .fold(None, |best, (y, n)| match best {
                Some((_, m)) if m > n => best,
                _ => Some((y, n)),
            })
    }

    /// Returns the Gini impurity `1 - Σ p_c^2`.
    /// Returns `Err` if no rows are counted.
    pub fn gini(&self) -> Result<f64> {
        if self.total == 0 { return Err(Error::EmptyRows); }

        let total = self.total as f64;
        let correct = self.iter()
            .map(|(_, n)| (n as f64 / total).powi(2))
            .sum::<f64>();

        Ok((1.0 - correct).max(0.0))
    }
}

/// Returns the Gini impurity of the rows `indices` of `sample`.
/// An empty row set is rejected with [`Error::EmptyRows`].
pub fn gini_index(sample: &Sample, indices: &[usize]) -> Result<f64> {
    LabelCounts::from_indices(sample, indices).gini()
}

/// Returns `parent - Σ (|s_i| / N) gini(s_i)`
/// where `s_i` ranges over `subsets` and `N` is the total size.
/// The subsets are assumed to partition the parent row set.
pub fn impurity_reduction(
    parent_impurity: f64,
    sample: &Sample,
    subsets: &[&[usize]],
) -> Result<f64>
{
    let total = subsets.iter()
        .map(|subset| subset.len())
        .sum::<usize>();
    if total == 0 { return Err(Error::EmptyRows); }

    let mut weighted = 0.0;
    for subset in subsets {
        let weight = subset.len() as f64 / total as f64;
        weighted += weight * gini_index(sample, subset)?;
    }

    Ok(parent_impurity - weighted)
}
