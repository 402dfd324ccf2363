use std::io::BufRead;
use std::ops::Index;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A row of string fields.
/// The last field is the class label.
pub type Row = Vec<String>;

/// Used as the origin of samples that are not read from a file.
const IN_MEMORY: &str = "<memory>";

/// A categorical sample.
/// Every row has the same number of fields as the header,
/// and the last column of the header names the class label.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub(super) header: Vec<String>,
    pub(super) rows: Vec<Row>,
}

impl Sample {
    /// Construct a [`Sample`] from a header and its rows.
    /// Returns `Err` if the header is empty or some row
    /// has a different number of fields from the header.
    pub fn from_rows(header: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        if header.is_empty() {
            return Err(Error::MissingHeader { path: PathBuf::from(IN_MEMORY) });
        }

        for (i, row) in rows.iter().enumerate() {
            check_width(IN_MEMORY, i + 2, header.len(), row.len())?;
        }

        Ok(Self { header, rows })
    }

    /// Read a delimited text to [`Sample`].
    /// The first line is the header.
    /// Completely empty lines are skipped.
    /// `origin` only names the source in error messages.
    pub fn from_reader<R>(reader: R, delimiter: char, origin: &Path)
        -> Result<Self>
        where R: BufRead,
    {
        let read_error = |source| Error::Read {
            path: origin.to_path_buf(),
            source,
        };
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => split_line(&line.map_err(read_error)?, delimiter),
            None => {
                return Err(Error::MissingHeader {
                    path: origin.to_path_buf(),
                });
            },
        };

        let name = origin.display().to_string();
        let mut rows = Vec::new();
        for (i, line) in lines.enumerate() {
            let line = line.map_err(read_error)?;
            if line.is_empty() { continue; }

            let row = split_line(&line, delimiter);
            // Line numbers are 1-indexed and the header is line 1.
            check_width(&name, i + 2, header.len(), row.len())?;
            rows.push(row);
        }

        Ok(Self { header, rows })
    }

    /// Returns the header row, i.e.,
    /// the attribute names followed by the label column name.
    pub fn header(&self) -> &[String] {
        &self.header[..]
    }

    /// Returns the names of the non-label columns.
    pub fn attribute_names(&self) -> &[String] {
        &self.header[..self.header.len() - 1]
    }

    /// Returns the name of the label column.
    pub fn target_name(&self) -> &str {
        &self.header[self.header.len() - 1]
    }

    /// Returns a slice of the rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows[..]
    }

    /// Returns the class label of the `i`-th row.
    pub fn label(&self, i: usize) -> &str {
        let row = &self.rows[i];
        &row[row.len() - 1]
    }

    /// Returns the pair of the number of rows and attributes.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.header.len() - 1)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Index<usize> for Sample {
    type Output = [String];
    fn index(&self, i: usize) -> &Self::Output {
        &self.rows[i][..]
    }
}

fn split_line(line: &str, delimiter: char) -> Row {
    line.split(delimiter)
        .map(|field| field.to_string())
        .collect()
}

fn check_width(origin: &str, line: usize, expected: usize, found: usize)
    -> Result<()>
{
    if expected != found {
        return Err(Error::RaggedRow {
            origin: origin.to_string(),
            line,
            expected,
            found,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(text: &str) -> Result<Sample> {
        Sample::from_reader(Cursor::new(text), '\t', Path::new("toy.tsv"))
    }

    #[test]
    fn test_from_reader_01() {
        let sample = read("Color\tSize\tLabel\nred\tsmall\tyes\nblue\tlarge\tno\n")
            .unwrap();
        let res = sample.shape();
        let exp = (2, 2);
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
        assert_eq!(sample.attribute_names(), ["Color", "Size"]);
        assert_eq!(sample.target_name(), "Label");
        assert_eq!(sample.label(1), "no");
        assert_eq!(&sample[0], ["red", "small", "yes"]);
    }

    #[test]
    fn test_from_reader_crlf_and_blank_lines() {
        let sample = read("A\tLabel\r\nx\tyes\r\n\r\ny\tno\r\n\n").unwrap();
        let res = sample.rows().to_vec();
        let exp = vec![
            vec!["x".to_string(), "yes".to_string()],
            vec!["y".to_string(), "no".to_string()],
        ];
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_from_reader_keeps_empty_fields() {
        let sample = read("A\tB\tLabel\n\tb\tyes\n").unwrap();
        assert_eq!(&sample[0], ["", "b", "yes"]);
    }

    #[test]
    fn test_from_reader_ragged_row() {
        let res = read("A\tB\tLabel\nx\ty\tyes\nx\tno\n");
        match res {
            Err(Error::RaggedRow { origin, line, expected, found }) => {
                assert_eq!(origin, "toy.tsv");
                assert_eq!((line, expected, found), (3, 3, 2));
            },
            other => panic!("expected a ragged row error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_reader_missing_header() {
        let res = read("");
        assert!(
            matches!(res, Err(Error::MissingHeader { .. })),
            "expected a missing header error, got {res:?}."
        );
    }

    #[test]
    fn test_from_rows_ragged() {
        let header = vec!["A".to_string(), "Label".to_string()];
        let rows = vec![vec!["x".to_string()]];
        let res = Sample::from_rows(header, rows);
        assert!(matches!(res, Err(Error::RaggedRow { line: 2, .. })));
    }

    #[test]
    fn test_label_only_header() {
        let sample = read("Label\nyes\nno\n").unwrap();
        assert!(sample.attribute_names().is_empty());
        assert_eq!(sample.shape(), (2, 0));
    }
}
