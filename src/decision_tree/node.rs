//! A node struct used in the decision tree algorithm.
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::{Classifier, Sample};
use crate::error::{Error, Result};
use super::condition::*;
use super::impurity::LabelCounts;

/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that have two childrens.
    Branch(BranchNode),

    /// A node that have no child.
    Leaf(LeafNode),
}

/// Represents the branch nodes of decision tree.
/// Rows satisfying `condition` go to `left`, the others go to `right`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) condition: BranchingCondition,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
}

impl BranchNode {
    pub fn condition(&self) -> &BranchingCondition {
        &self.condition
    }

    pub fn left(&self) -> &Node {
        &self.left
    }

    pub fn right(&self) -> &Node {
        &self.right
    }
}

/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) label: String,
    pub(super) confidence: f64,
}

impl LeafNode {
    /// Returns a `LeafNode` that predicts the majority label
    /// of the rows `indices`.
    /// The confidence is the fraction of the majority label.
    pub(crate) fn from_indices(sample: &Sample, indices: &[usize])
        -> Result<Self>
    {
        let counts = LabelCounts::from_indices(sample, indices);
        let (label, n) = counts.majority()
            .ok_or(Error::EmptyRows)?;

        let confidence = n as f64 / counts.total() as f64;
        Ok(Self { label: label.to_string(), confidence, })
    }

    /// The predicted class label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The fraction of the majority label, in `(0, 1]`.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

impl fmt::Display for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with confidence {}", self.label, self.confidence)
    }
}

impl Node {
    pub fn branch(
        condition: BranchingCondition,
        left: Box<Node>,
        right: Box<Node>,
    ) -> Self
    {
        Self::Branch(BranchNode { condition, left, right, })
    }

    pub fn leaf(leaf: LeafNode) -> Self {
        Self::Leaf(leaf)
    }

    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Self::Branch(b) => b.left.leaves() + b.right.leaves(),
            Self::Leaf(_) => 1,
        }
    }

    /// Returns the number of nodes of this sub-tree.
    pub fn n_nodes(&self) -> usize {
        match self {
            Self::Branch(b) => 1 + b.left.n_nodes() + b.right.n_nodes(),
            Self::Leaf(_) => 1,
        }
    }

    /// Returns the depth of this sub-tree.
    /// A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch(b) => 1 + b.left.depth().max(b.right.depth()),
            Self::Leaf(_) => 0,
        }
    }

    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Branch(b) => {
                let condition = format!(
                    "\tnode_{id} [ label = \"{attr} == {value} ?\" ];\n",
                    attr  = escape(&b.condition.attr_name),
                    value = escape(&b.condition.value),
                );

                let left_id = id + 1;
                let (     left,  right_id) = b.left.to_dot_info(left_id);
                let (mut right, return_id) = b.right.to_dot_info(right_id);

                let mut info = left;
                info.push(condition);
                info.append(&mut right);

                let left_edge = format!(
                    "\tnode_{id} -- node_{left_id} [ label = \"Yes\" ];\n",
                );
                info.push(left_edge);
                let right_edge = format!(
                    "\tnode_{id} -- node_{right_id} [ label = \"No\" ];\n",
                );
                info.push(right_edge);

                (info, return_id)
            },
            Self::Leaf(leaf) => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\\n{conf:.3}\", shape = box ];\n",
                    label = escape(&leaf.label),
                    conf  = leaf.confidence,
                );

                (vec![info], id + 1)
            }
        }
    }

    /// Write this sub-tree with one node per line.
    pub(crate) fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize)
        -> fmt::Result
    {
        let pad = "    ".repeat(indent);
        match self {
            Self::Branch(b) => {
                writeln!(f, "{pad}[{}]", b.condition)?;
                writeln!(f, "{pad}  yes:")?;
                b.left.fmt_indented(f, indent + 1)?;
                writeln!(f, "{pad}  no:")?;
                b.right.fmt_indented(f, indent + 1)
            },
            Self::Leaf(leaf) => writeln!(f, "{pad}{leaf}"),
        }
    }
}

impl Classifier for Node {
    fn classify(&self, row: &[String]) -> Result<&LeafNode> {
        match self {
            Self::Branch(b) => {
                match b.condition.split(row)? {
                    LeftRight::Left  => b.left.classify(row),
                    LeftRight::Right => b.right.classify(row),
                }
            },
            Self::Leaf(leaf) => Ok(leaf),
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
