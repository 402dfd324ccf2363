use crate::Sample;
use crate::error::{Error, Result};

use super::{
    split_by::{best_split, TieBreak},
    node::*,
    classifier::DecisionTreeClassifier,
};

use std::fmt;

/// The Decision Tree algorithm.
/// Given a categorical sample, [`DecisionTree`] greedily grows
/// a binary tree of equality tests that maximize the Gini impurity
/// reduction, and outputs a decision tree classifier
/// named [`DecisionTreeClassifier`].
///
/// A node becomes a leaf when no split reduces the impurity.
/// Each leaf predicts the majority label of its rows.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::decision_tree::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use catree::{Classifier, DecisionTreeBuilder, SampleReader};
///
/// let train = SampleReader::default()
///     .file("/path/to/train.tsv")
///     .read()
///     .unwrap();
/// let test = SampleReader::default()
///     .file("/path/to/test.tsv")
///     .read()
///     .unwrap();
///
/// let f = DecisionTreeBuilder::new()
///     .build()
///     .fit(&train)
///     .unwrap();
///
/// let predictions = f.predict_all(&test).unwrap();
/// println!("{predictions:?}");
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTree {
    tie_break: TieBreak,
}

impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(tie_break: TieBreak) -> Self {
        Self { tie_break, }
    }

    pub fn name(&self) -> &str {
        "Decision Tree"
    }

    pub fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Split criterion", "Gini index".to_string()),
            ("Tie break", format!("{}", self.tie_break)),
        ]);
        Some(info)
    }

    /// Grow a tree on every row of `sample`.
    /// Returns `Err(Error::EmptyRows)` if `sample` has no rows.
    pub fn fit(&self, sample: &Sample) -> Result<DecisionTreeClassifier> {
        if sample.is_empty() { return Err(Error::EmptyRows); }

        let n_sample = sample.shape().0;
        let indices = (0..n_sample).collect::<Vec<usize>>();

        let root = self.grow(sample, indices)?;
        Ok(DecisionTreeClassifier::from(root))
    }

    /// Grow the sub-tree on the rows `indices`.
    fn grow(&self, sample: &Sample, indices: Vec<usize>) -> Result<Box<Node>> {
        let (condition, reduction) = best_split(
            sample, &indices[..], sample.attribute_names(), self.tie_break
        )?;

        // No split reduces the impurity.
        let condition = match condition {
            Some(condition) if reduction > 0.0 => condition,
            _ => {
                let leaf = LeafNode::from_indices(sample, &indices[..])?;
                return Ok(Box::new(Node::leaf(leaf)));
            },
        };

        // Both sides are non-empty since `best_split`
        // skips degenerate candidates.
        let (lindices, rindices) = condition.partition(sample, &indices[..])?;

        let left  = self.grow(sample, lindices)?;
        let right = self.grow(sample, rindices)?;

        Ok(Box::new(Node::branch(condition, left, right)))
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Splitting criterion: Gini index\n\
            - Tie break: {}\
            ",
            self.tie_break,
        )?;

        write!(f, "----------")
    }
}
