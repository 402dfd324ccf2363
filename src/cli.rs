//! Command line front end:
//! grow a tree on the training file, label the test file.
use clap::Parser;

use crate::{
    Classifier,
    DecisionTreeBuilder,
    SampleReader,
    TieBreak,
    write_predictions,
};
use crate::error::{Error, Result};
use crate::logger::Logger;

use std::path::PathBuf;
use std::time::Instant;

/// Decision tree classification model.
#[derive(Parser, Debug, Clone)]
#[command(name = "catree")]
#[command(version)]
#[command(about = "Decision tree classification model", long_about = None)]
pub struct Args {
    /// Path to a training dataset file
    #[arg(value_name = "TRAIN_FILE")]
    pub train: PathBuf,

    /// Path to a test set file
    #[arg(value_name = "TEST_FILE")]
    pub test: PathBuf,

    /// Output file name
    #[arg(value_name = "OUTPUT_FILE")]
    pub result: PathBuf,

    /// Which of two equally good splits wins
    #[arg(long, value_enum, default_value_t = TieBreak::FirstSeen)]
    pub tie_break: TieBreak,

    /// Also write the tree as a Graphviz dot file
    #[arg(long, value_name = "PATH")]
    pub dot: Option<PathBuf>,

    /// Also write the tree as JSON
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Print the grown tree
    #[arg(long)]
    pub print_tree: bool,

    /// Do not print the run report
    #[arg(short, long)]
    pub quiet: bool,
}

/// Read both files, grow a tree on the training rows,
/// and write each test row with its predicted label appended.
/// Nothing is written to `args.result` unless every test row
/// has been classified.
pub fn run(args: &Args) -> Result<()> {
    let mut logger = Logger::new(args.quiet);

    let now = Instant::now();
    let train = SampleReader::default().file(&args.train).read()?;
    let test = SampleReader::default().file(&args.test).read()?;
    let detail = format!(
        "{} training rows, {} test rows",
        train.shape().0,
        test.shape().0,
    );
    logger.log("READ", &detail, now.elapsed().as_millis());

    let learner = DecisionTreeBuilder::new()
        .tie_break(args.tie_break)
        .build();
    logger.print_stats(
        &learner,
        (args.train.as_path(), &train),
        (args.test.as_path(), &test),
        &args.result,
    );

    let now = Instant::now();
    let f = learner.fit(&train)?;
    let train_error = f.predict_all(&train)?
        .into_iter()
        .enumerate()
        .filter(|(i, y)| train.label(*i) != y.as_str())
        .count() as f64
        / train.shape().0 as f64;
    logger.log_tree(&f, train_error, now.elapsed().as_millis());

    if args.print_tree {
        println!("{f}");
    }
    if let Some(path) = &args.dot {
        f.to_dot_file(path)?;
    }
    if let Some(path) = &args.model {
        f.to_json_file(path)?;
    }

    let now = Instant::now();
    let origin = args.test.display().to_string();
    let predictions = test.rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            f.predict(row)
                .map(str::to_string)
                .map_err(|source| Error::Row {
                    origin: origin.clone(),
                    row: i + 1,
                    source: Box::new(source),
                })
        })
        .collect::<Result<Vec<_>>>()?;
    write_predictions(&args.result, &test, &predictions[..])?;
    let detail = format!("{} rows labeled", predictions.len());
    logger.log("PREDICT", &detail, now.elapsed().as_millis());

    logger.finish(predictions.len(), &args.result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional() {
        let args = Args::try_parse_from(["catree", "a.tsv", "b.tsv", "c.tsv"])
            .unwrap();
        assert_eq!(args.train, PathBuf::from("a.tsv"));
        assert_eq!(args.test, PathBuf::from("b.tsv"));
        assert_eq!(args.result, PathBuf::from("c.tsv"));
        assert_eq!(args.tie_break, TieBreak::FirstSeen);
        assert!(!args.quiet && !args.print_tree);
        assert!(args.dot.is_none() && args.model.is_none());
    }

    #[test]
    fn test_parse_options() {
        let args = Args::try_parse_from([
            "catree", "-q", "--tie-break", "last", "--dot", "t.dot",
            "a.tsv", "b.tsv", "c.tsv",
        ]).unwrap();
        assert!(args.quiet);
        assert_eq!(args.tie_break, TieBreak::LastSeen);
        assert_eq!(args.dot, Some(PathBuf::from("t.dot")));
    }

    #[test]
    fn test_parse_missing_output() {
        let res = Args::try_parse_from(["catree", "a.tsv", "b.tsv"]);
        assert!(res.is_err());
    }
}
