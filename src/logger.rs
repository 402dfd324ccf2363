//! Console report of a training / labeling run.
use colored::Colorize;

use crate::{DecisionTree, DecisionTreeClassifier, Sample};

use std::path::Path;

const WIDTH: usize = 8;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;

/// Struct `Logger` prints the settings of a run
/// and one line per finished phase with its running time.
/// A quiet logger prints nothing.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    quiet: bool,
    time_acc: u128,
}

impl Logger {
    /// Create a new instance of `Logger`.
    pub fn new(quiet: bool) -> Self {
        Self { quiet, time_acc: 0 }
    }

    /// Returns the cumulative time of the logged phases in milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        self.time_acc
    }

    /// print current settings.
    pub fn print_stats(
        &self,
        learner: &DecisionTree,
        train: (&Path, &Sample),
        test: (&Path, &Sample),
        output: &Path,
    )
    {
        if self.quiet { return; }

        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!("\n{header}");

        for (key, (path, sample)) in [("Train", train), ("Test", test)] {
            let (n_sample, n_attribute) = sample.shape();
            println!(
                "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
                key.bold(),
                path.display().to_string().bold().green(),
            );
            println!(
                "    + {:<STAT_WIDTH$}\t{:>width$}",
                "# of rows",
                n_sample.to_string().bold().yellow(),
                width = STAT_WIDTH - 8,
            );
            println!(
                "    + {:<STAT_WIDTH$}\t{:>width$}",
                "# of attributes",
                n_attribute.to_string().bold().yellow(),
                width = STAT_WIDTH - 8,
            );
        }

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Learner".bold(),
            learner.name().bold().green(),
        );
        if let Some(info) = learner.info() {
            let line = info.into_iter()
                .map(|(key, val)| {
                    format!(
                        "    + {:<STAT_WIDTH$}\t{:>width$}",
                        key,
                        val.bold().yellow(),
                        width = STAT_WIDTH - 8
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            println!("{line}");
        }
        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Output".bold(),
            output.display().to_string().bold().green(),
            "".bold(),
        );
    }

    /// Print a finished phase that took `millis` milliseconds.
    pub fn log(&mut self, phase: &str, detail: &str, millis: u128) {
        self.time_acc += millis;
        if self.quiet { return; }

        println!(
            "{} {}\t{}\t{}",
            "[LOG]".bold().magenta(),
            format!("{:>WIDTH$}", phase).bold().red(),
            time_format(millis).bold().cyan(),
            detail,
        );
    }

    /// Print the size of the grown tree
    /// and its error on the training rows.
    pub fn log_tree(
        &mut self,
        f: &DecisionTreeClassifier,
        train_error: f64,
        millis: u128,
    )
    {
        let detail = format!(
            "{} nodes, {} leaves, depth {}, train error {:.5}",
            f.n_nodes(),
            f.leaves(),
            f.depth(),
            train_error,
        );
        self.log("TRAIN", &detail, millis);
    }

    /// Print the closing line.
    pub fn finish(&self, n_rows: usize, output: &Path) {
        if self.quiet { return; }

        println!(
            "{} {}\t{}\t{} rows written to {}\n",
            "[FIN]".bold().bright_green(),
            format!("{:>WIDTH$}", "DONE").bold().green(),
            time_format(self.elapsed_millis()).bold().cyan(),
            n_rows,
            output.display(),
        );
    }
}

fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_format() {
        assert_eq!(time_format(7), "  0.007s");
        assert_eq!(time_format(61_500), " 01m 01s");
        assert_eq!(time_format(3_720_000), " 01h 02m");
    }

    #[test]
    fn test_quiet_logger_accumulates_time() {
        let mut logger = Logger::new(true);
        logger.log("READ", "", 3);
        logger.log("TRAIN", "", 4);
        assert_eq!(logger.elapsed_millis(), 7);
    }
}
