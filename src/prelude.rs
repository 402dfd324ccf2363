//! Exports the learner, the classifier and the sample types.
//! 
pub use crate::decision_tree::{
    // Learner
    DecisionTree,
    DecisionTreeBuilder,
    TieBreak,


    // Grown tree
    DecisionTreeClassifier,
    BranchingCondition,
    LeafNode,
    Node,
};


pub use crate::classifier::Classifier;


pub use crate::sample::{
    Sample,
    SampleReader,
    write_predictions,
};
