use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use super::sample_struct::Sample;
use super::DEFAULT_DELIMITER;

/// Write `sample` to `path` with `predictions[i]` appended to the `i`-th row.
/// The header is written as is, so that each data row
/// has one more field than the header.
///
/// The whole file is rendered before it is created.
/// If writing fails half way, the file is removed.
/// Returns [`Error::PredictionCount`] without touching `path`
/// unless there is exactly one prediction per row.
pub fn write_predictions<P, S>(path: P, sample: &Sample, predictions: &[S])
    -> Result<()>
    where P: AsRef<Path>,
          S: AsRef<str>,
{
    let rows = sample.rows().len();
    if rows != predictions.len() {
        return Err(Error::PredictionCount {
            rows,
            predictions: predictions.len(),
        });
    }
    let path = path.as_ref();
    let sep = DEFAULT_DELIMITER.to_string();

    let mut text = sample.header().join(&sep);
    text.push('\n');
    for (row, label) in sample.rows().iter().zip(predictions) {
        text.push_str(&row.join(&sep));
        text.push(DEFAULT_DELIMITER);
        text.push_str(label.as_ref());
        text.push('\n');
    }

    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(write_error)?;
    if let Err(source) = file.write_all(text.as_bytes()) {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(write_error(source));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_predictions() {
        let header = vec!["Color".to_string(), "Label".to_string()];
        let rows = vec![
            vec!["red".to_string(), "yes".to_string()],
            vec!["blue".to_string(), "no".to_string()],
        ];
        let sample = Sample::from_rows(header, rows).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        write_predictions(&path, &sample, &["yes", "yes"][..]).unwrap();

        let res = fs::read_to_string(&path).unwrap();
        let exp = "Color\tLabel\nred\tyes\tyes\nblue\tno\tyes\n";
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_prediction_count_mismatch() {
        let header = vec!["Color".to_string(), "Label".to_string()];
        let rows = vec![
            vec!["red".to_string(), "yes".to_string()],
            vec!["blue".to_string(), "no".to_string()],
        ];
        let sample = Sample::from_rows(header, rows).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        let res = write_predictions(&path, &sample, &["yes"][..]);
        assert!(
            matches!(res, Err(Error::PredictionCount { rows: 2, predictions: 1 })),
            "got {res:?}."
        );
        assert!(!path.exists());
    }

    #[test]
    fn test_write_into_missing_directory() {
        let sample = Sample::from_rows(vec!["Label".to_string()], vec![])
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("out.tsv");
        let res = write_predictions(&path, &sample, &Vec::<String>::new()[..]);
        assert!(matches!(res, Err(Error::Write { .. })), "got {res:?}.");
    }
}
