//! Struct `Sample` represents a batch of categorical rows.  

// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod reader;

// Writes labeled rows back to disk.
pub(crate) mod writer;


pub use reader::SampleReader;
pub use sample_struct::{Row, Sample};
pub use writer::write_predictions;

/// Field separator of the input and output files.
pub const DEFAULT_DELIMITER: char = '\t';
