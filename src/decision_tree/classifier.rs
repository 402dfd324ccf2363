//! Defines the decision tree classifier.
use crate::Classifier;
use crate::error::{Error, Result};

use super::node::*;
use serde::{Serialize, Deserialize};

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Decision tree classifier.
/// This struct is just a wrapper of `Node`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
}

impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}

impl From<Box<Node>> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Box<Node>) -> Self {
        Self { root: *root }
    }
}

impl Classifier for DecisionTreeClassifier {
    fn classify(&self, row: &[String]) -> Result<&LeafNode> {
        self.root.classify(row)
    }
}

impl DecisionTreeClassifier {
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }

    pub fn n_nodes(&self) -> usize {
        self.root.n_nodes()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Write the current decision tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let path = path.as_ref();
        let write_error = |source| Error::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut f = File::create(path).map_err(write_error)?;
        let mut text = String::from("graph DecisionTree {\n");
        self.root.to_dot_info(0).0
            .into_iter()
            .for_each(|row| text.push_str(&row));
        text.push_str("}\n");

        f.write_all(text.as_bytes()).map_err(write_error)
    }

    /// Write the current decision tree as JSON.
    pub fn to_json_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let path = path.as_ref();
        let write_error = |source| Error::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(write_error)
    }

    /// Read a decision tree written by
    /// [`DecisionTreeClassifier::to_json_file`].
    pub fn from_json_file<P>(path: P) -> Result<Self>
        where P: AsRef<Path>
    {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let tree = serde_json::from_reader(BufReader::new(file))?;
        Ok(tree)
    }
}

impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt_indented(f, 0)
    }
}
