//! Defines the categorical equality test used on branch nodes.
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::Sample;
use crate::error::{Error, Result};

/// The output of the function `split` of [`BranchingCondition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftRight {
    Left,
    Right,
}

/// The test `row[attr_index] == value`.
/// `attr_name` is descriptive only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchingCondition {
    pub attr_index: usize,
    pub attr_name: String,
    pub value: String,
}

impl BranchingCondition {
    #[inline]
    pub fn new(attr_name: &str, attr_index: usize, value: &str) -> Self {
        Self {
            attr_index,
            attr_name: attr_name.to_string(),
            value: value.to_string(),
        }
    }

    /// Returns `true` if `row` satisfies this condition.
    /// Returns `Err` if `row` has no field at `attr_index`.
    #[inline]
    pub fn test<S: AsRef<str>>(&self, row: &[S]) -> Result<bool> {
        let field = row.get(self.attr_index)
            .ok_or(Error::RowTooShort {
                index: self.attr_index,
                len: row.len(),
            })?;
        Ok(field.as_ref() == self.value)
    }

    /// Satisfied rows go left, the others go right.
    #[inline]
    pub fn split<S: AsRef<str>>(&self, row: &[S]) -> Result<LeftRight> {
        let lr = if self.test(row)? { LeftRight::Left } else { LeftRight::Right };
        Ok(lr)
    }

    /// Split `indices` into the rows that satisfy this condition
    /// and the rows that do not. The order of `indices` is kept.
    pub fn partition(&self, sample: &Sample, indices: &[usize])
        -> Result<(Vec<usize>, Vec<usize>)>
    {
        let mut lindices = Vec::new();
        let mut rindices = Vec::new();
        for &i in indices {
            match self.split(&sample[i])? {
                LeftRight::Left  => { lindices.push(i); },
                LeftRight::Right => { rindices.push(i); },
            }
        }
        Ok((lindices, rindices))
    }
}

impl fmt::Display for BranchingCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.attr_name, self.value)
    }
}
