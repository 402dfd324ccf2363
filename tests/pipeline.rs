use catree::cli::{run, Args};
use catree::{DecisionTreeClassifier, Error, TieBreak};

use std::fs;
use std::path::{Path, PathBuf};

fn dataset(name: &str) -> PathBuf {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/dataset");
    path.push(name);
    path
}

fn args(train: PathBuf, test: PathBuf, result: PathBuf) -> Args {
    Args {
        train,
        test,
        result,
        tie_break: TieBreak::FirstSeen,
        dot: None,
        model: None,
        print_tree: false,
        quiet: true,
    }
}

fn lines(path: &Path) -> Vec<Vec<String>> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| line.split('\t').map(String::from).collect())
        .collect()
}

#[test]
fn toy_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let result = dir.path().join("toy_result.tsv");
    run(&args(dataset("toy_train.tsv"), dataset("toy_test.tsv"), result.clone()))
        .unwrap();

    let res = fs::read_to_string(&result).unwrap();
    let exp = "\
        Color\tSize\tLabel\n\
        blue\tlarge\t?\tno\n\
        red\tsmall\t?\tyes\n\
        red\tlarge\t?\tno\n";
    assert_eq!(exp, res, "expected\n{exp}\ngot\n{res}");
}

#[test]
fn output_shape_follows_test_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = dir.path().join("weather_result.tsv");
    let test = dataset("weather_test.tsv");
    run(&args(dataset("weather_train.tsv"), test.clone(), result.clone()))
        .unwrap();

    let input = lines(&test);
    let output = lines(&result);
    assert_eq!(input.len(), output.len());
    assert_eq!(input[0], output[0], "the header is copied as is");
    for (x, y) in input.iter().zip(&output).skip(1) {
        assert_eq!(x.len() + 1, y.len());
        assert_eq!(x[..], y[..x.len()]);
    }

    let predictions = output.iter()
        .skip(1)
        .map(|row| row[row.len() - 1].as_str())
        .collect::<Vec<_>>();
    assert_eq!(predictions, ["No", "Yes", "No", "Yes"]);
}

#[test]
fn tie_break_option_and_exports() {
    let dir = tempfile::tempdir().unwrap();
    let result = dir.path().join("result.tsv");
    let dot = dir.path().join("tree.dot");
    let model = dir.path().join("tree.json");

    let mut args = args(
        dataset("weather_train.tsv"), dataset("weather_test.tsv"), result.clone()
    );
    args.tie_break = TieBreak::LastSeen;
    args.dot = Some(dot.clone());
    args.model = Some(model.clone());
    run(&args).unwrap();

    assert!(fs::read_to_string(&dot).unwrap().starts_with("graph DecisionTree {"));

    let f = DecisionTreeClassifier::from_json_file(&model).unwrap();
    assert_eq!((f.n_nodes(), f.leaves(), f.depth()), (13, 7, 4));
    assert_eq!(lines(&result).len(), 5);
}

#[test]
fn missing_training_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = dir.path().join("result.tsv");
    let train = dir.path().join("no_such_file.tsv");

    let res = run(&args(train.clone(), dataset("toy_test.tsv"), result.clone()));
    match res {
        Err(Error::Read { path, .. }) => assert_eq!(path, train),
        other => panic!("expected a read error, got {other:?}"),
    }
    assert!(!result.exists(), "no output is written on failure");
}

#[test]
fn ragged_test_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = dir.path().join("result.tsv");
    let test = dir.path().join("ragged.tsv");
    fs::write(&test, "Color\tSize\tLabel\nblue\tlarge\t?\nred\n").unwrap();

    let res = run(&args(dataset("toy_train.tsv"), test, result.clone()));
    assert!(
        matches!(
            res,
            Err(Error::RaggedRow { line: 3, expected: 3, found: 1, .. })
        ),
        "got {res:?}."
    );
    assert!(!result.exists(), "no output is written on failure");
}

#[test]
fn narrow_test_file() {
    // The test file lacks the `Size` column the tree needs.
    let dir = tempfile::tempdir().unwrap();
    let result = dir.path().join("result.tsv");
    let test = dir.path().join("narrow.tsv");
    fs::write(&test, "Color\nblue\nred\n").unwrap();

    let res = run(&args(dataset("toy_train.tsv"), test, result.clone()));
    match res {
        Err(Error::Row { row, source, .. }) => {
            assert_eq!(row, 2);
            assert!(matches!(*source, Error::RowTooShort { index: 1, len: 1 }));
        },
        other => panic!("expected a row error, got {other:?}"),
    }
    assert!(!result.exists(), "no output is written on failure");
}

#[test]
fn empty_training_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = dir.path().join("result.tsv");
    let train = dir.path().join("header_only.tsv");
    fs::write(&train, "Color\tSize\tLabel\n").unwrap();

    let res = run(&args(train, dataset("toy_test.tsv"), result.clone()));
    assert!(matches!(res, Err(Error::EmptyRows)), "got {res:?}.");
    assert!(!result.exists(), "no output is written on failure");
}
