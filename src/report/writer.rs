use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::experiment::tally::{GroupTally, TrialResult};

/// Line written between dataset groups in the detail output.
pub const GROUP_SEPARATOR: &str = "---------------------------------------------";

/// Owns the detail and summary outputs of one experiment.
///
/// Detail lines are
/// `label,baselineIterations,baselineError,augmentedIterations,augmentedError,baselineTestError,augmentedTestError`;
/// summary lines are `baselineWins,augmentedWins,ties`. Both outputs are
/// flushed at every group boundary, and again when the writer is dropped.
pub struct ReportWriter<W: Write> {
    detail: W,
    summary: W,
}

impl ReportWriter<BufWriter<File>> {
    /// Creates (or truncates) both output files.
    pub fn create(detail: &Path, summary: &Path) -> Result<Self> {
        Ok(ReportWriter::new(
            BufWriter::new(File::create(detail)?),
            BufWriter::new(File::create(summary)?),
        ))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(detail: W, summary: W) -> Self {
        ReportWriter { detail, summary }
    }

    pub fn write_trial(&mut self, trial: &TrialResult) -> Result<()> {
        writeln!(
            self.detail,
            "{},{},{},{},{},{},{}",
            trial.outcome.label(),
            trial.baseline.iterations,
            trial.baseline.error,
            trial.augmented.iterations,
            trial.augmented.error,
            trial.baseline.test_error,
            trial.augmented.test_error,
        )?;
        Ok(())
    }

    /// Closes a group: summary line, separator, then flush both outputs.
    ///
    /// Every step is attempted even if an earlier one fails, so a broken
    /// summary output never keeps the detail output from being separated and
    /// flushed. Returns the first error.
    pub fn finish_group(&mut self, tally: &GroupTally) -> Result<()> {
        let summary = writeln!(
            self.summary,
            "{},{},{}",
            tally.baseline_wins, tally.augmented_wins, tally.ties
        );
        let separator = writeln!(self.detail, "{GROUP_SEPARATOR}");
        let flushed = self.flush();
        summary?;
        separator?;
        flushed
    }

    /// Flushes both outputs, attempting the second even if the first fails.
    pub fn flush(&mut self) -> Result<()> {
        let detail = self.detail.flush();
        let summary = self.summary.flush();
        detail?;
        summary?;
        Ok(())
    }
}

impl<W: Write> Drop for ReportWriter<W> {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::error!(error = %e, "failed to flush report outputs");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::classify::{Outcome, RunSummary};

    fn trial(outcome: Outcome) -> TrialResult {
        TrialResult {
            trial: 0,
            outcome,
            baseline: RunSummary { iterations: 12, error: 0.5, test_error: 3.25 },
            augmented: RunSummary { iterations: 100, error: 0.75, test_error: 4.0 },
        }
    }

    #[test]
    fn detail_and_summary_layout() {
        let mut detail = Vec::new();
        let mut summary = Vec::new();
        {
            let mut w = ReportWriter::new(&mut detail, &mut summary);
            let mut tally = GroupTally::default();
            for o in [Outcome::BaselineWins, Outcome::Tie] {
                let t = trial(o);
                tally.record(t.outcome);
                w.write_trial(&t).unwrap();
            }
            w.finish_group(&tally).unwrap();
        }
        let detail = String::from_utf8(detail).unwrap();
        let summary = String::from_utf8(summary).unwrap();
        assert_eq!(
            detail,
            format!(
                "baseline-wins,12,0.5,100,0.75,3.25,4\ntie,12,0.5,100,0.75,3.25,4\n{GROUP_SEPARATOR}\n"
            )
        );
        assert_eq!(summary, "1,0,1\n");
    }

    /// In-memory output that can be switched to reject every write.
    #[derive(Default)]
    struct Sink {
        buf: Vec<u8>,
        broken: bool,
        flushes: usize,
    }

    impl Write for Sink {
        fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
            if self.broken {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
            }
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushes += 1;
            if self.broken {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
            }
            Ok(())
        }
    }

    #[test]
    fn broken_summary_still_separates_and_flushes_detail() {
        let mut detail = Sink::default();
        let mut summary = Sink { broken: true, ..Sink::default() };
        {
            let mut w = ReportWriter::new(&mut detail, &mut summary);
            w.write_trial(&trial(Outcome::Tie)).unwrap();
            let err = w.finish_group(&GroupTally { baseline_wins: 0, augmented_wins: 0, ties: 1 });
            assert!(matches!(err, Err(crate::error::HarnessError::Io(_))));
        }
        let text = String::from_utf8(detail.buf).unwrap();
        assert!(text.ends_with(&format!("{GROUP_SEPARATOR}\n")), "{text}");
        assert!(detail.flushes >= 1);
        assert!(summary.flushes >= 1);
    }

    #[test]
    fn broken_detail_does_not_lose_the_summary_line() {
        let mut detail = Sink { broken: true, ..Sink::default() };
        let mut summary = Sink::default();
        {
            let mut w = ReportWriter::new(&mut detail, &mut summary);
            assert!(w.write_trial(&trial(Outcome::BaselineWins)).is_err());
            assert!(w.finish_group(&GroupTally { baseline_wins: 1, augmented_wins: 0, ties: 0 }).is_err());
        }
        assert_eq!(String::from_utf8(summary.buf).unwrap(), "1,0,0\n");
        assert!(summary.flushes >= 1);
    }

    #[test]
    fn earlier_groups_reach_disk_before_later_ones_finish() {
        let dir = tempfile::tempdir().unwrap();
        let detail = dir.path().join("detail.txt");
        let summary = dir.path().join("summary.txt");
        let mut w = ReportWriter::create(&detail, &summary).unwrap();
        w.write_trial(&trial(Outcome::Tie)).unwrap();
        w.finish_group(&GroupTally { baseline_wins: 0, augmented_wins: 0, ties: 1 }).unwrap();
        w.write_trial(&trial(Outcome::AugmentedWins)).unwrap();

        // Second group still in progress; the first is already flushed.
        let on_disk = std::fs::read_to_string(&summary).unwrap();
        assert_eq!(on_disk, "0,0,1\n");
        assert!(std::fs::read_to_string(&detail).unwrap().contains(GROUP_SEPARATOR));

        drop(w);
        assert!(std::fs::read_to_string(&detail).unwrap().ends_with("augmented-wins,12,0.5,100,0.75,3.25,4\n"));
    }
}
