//! 
//! A crate that grows a binary decision tree on categorical data
//! and labels new rows with it.
//! 
//! The tree is grown greedily.
//! Each branch node tests whether an attribute equals a value,
//! and is chosen to maximize the reduction of the Gini impurity
//! `1 - Σ p_c^2` over the rows that reach the node.
//! A node becomes a leaf when no test reduces the impurity;
//! the leaf predicts the majority label of its rows.
//! 
//! Samples are tab-separated text files whose first line is the header
//! and whose last column is the class label.
//! 
//! ```no_run
//! use catree::prelude::*;
//! 
//! let train = SampleReader::default()
//!     .file("/path/to/train.tsv")
//!     .read()
//!     .unwrap();
//! let f = DecisionTreeBuilder::new()
//!     .build()
//!     .fit(&train)
//!     .unwrap();
//! 
//! let row = vec!["blue".to_string(), "large".to_string()];
//! let leaf = f.classify(&row).unwrap();
//! println!("{leaf}");
//! ```

pub mod error;
pub mod sample;
pub mod classifier;
pub mod decision_tree;
pub mod logger;
pub mod cli;
pub mod prelude;


pub use error::{Error, Result};

pub use sample::{
    Row,
    Sample,
    SampleReader,
    write_predictions,
};

pub use classifier::Classifier;

pub use decision_tree::{
    BranchingCondition,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    LeafNode,
    Node,
    TieBreak,
};
