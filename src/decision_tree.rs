//! A Gini decision tree over categorical attributes.

/// Gini impurity of row sets.
pub mod impurity;
/// The equality test on branch nodes.
pub mod condition;
/// Best-split search.
pub mod split_by;
/// Defines the inner representation of `DecisionTreeClassifier`.
pub mod node;

pub(crate) mod builder;
pub(crate) mod dtree;
pub(crate) mod classifier;


pub use builder::DecisionTreeBuilder;
pub use classifier::DecisionTreeClassifier;
pub use condition::{BranchingCondition, LeftRight};
pub use dtree::DecisionTree;
pub use impurity::{gini_index, impurity_reduction};
pub use node::{BranchNode, LeafNode, Node};
pub use split_by::{best_split, TieBreak};
