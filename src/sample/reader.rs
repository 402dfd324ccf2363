use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};
use super::sample_struct::Sample;
use super::DEFAULT_DELIMITER;

/// A struct that returns [`Sample`].
/// # Example
/// ```no_run
/// use catree::SampleReader;
/// let sample = SampleReader::default()
///     .file("/path/to/train.tsv")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    delimiter: char,
}

impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self { file: None, delimiter: DEFAULT_DELIMITER, }
    }
}

impl<P> SampleReader<P> {
    /// Set the field separator.
    /// Default is `'\t'`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }

    /// Reads the file based on the arguments,
    /// and returns [`Sample`].
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let Some(file) = self.file else {
            panic!("The file name is not set. Use `SampleReader::file`.");
        };
        let path = file.as_ref();

        let handle = File::open(path)
            .map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Sample::from_reader(BufReader::new(handle), self.delimiter, path)
    }
}
