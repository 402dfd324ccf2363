use crate::decision_tree::{DecisionTree, TieBreak};

/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use catree::{DecisionTreeBuilder, SampleReader, TieBreak};
///
/// let sample = SampleReader::default()
///     .file("/path/to/train.tsv")
///     .read()
///     .unwrap();
/// let tree = DecisionTreeBuilder::new()
///     .tie_break(TieBreak::FirstSeen)
///     .build();
/// let f = tree.fit(&sample).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecisionTreeBuilder {
    tie_break: TieBreak,
}

impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, ties between splits go to the first one seen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rule that breaks ties between equally good splits.
    /// See [`TieBreak`].
    #[inline]
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::new(self.tie_break)
    }
}
