//! Defines the `Classifier` trait shared by a whole tree and its nodes.
use crate::Sample;
use crate::error::Result;
use crate::decision_tree::LeafNode;

/// A trait that routes a row to the leaf that labels it.
pub trait Classifier {
    /// Returns the leaf that `row` reaches.
    /// Only the attribute fields of `row` are read,
    /// so a trailing label column is allowed but not required.
    fn classify(&self, row: &[String]) -> Result<&LeafNode>;

    /// Predicts the label of the given row.
    fn predict(&self, row: &[String]) -> Result<&str> {
        self.classify(row)
            .map(|leaf| leaf.label())
    }

    /// Predicts the labels of every row of `sample`.
    /// Stops at the first row that cannot be classified.
    fn predict_all(&self, sample: &Sample) -> Result<Vec<String>> {
        sample.rows()
            .iter()
            .map(|row| self.predict(row).map(str::to_string))
            .collect()
    }
}
