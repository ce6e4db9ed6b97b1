use std::path::{Path, PathBuf};

use rand::Rng;

use crate::data::csv::write_dataset;
use crate::data::dataset::{augment, sin_cos, FeatureMode};
use crate::error::Result;

/// File-name pieces for generated datasets.
///
/// Names are `prefix + repfix + [randfix|zerofix] + size + postfix`, where
/// `repfix` is `_N_` when rows are repeated `N` times and empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetNaming {
    pub prefix: String,
    pub postfix: String,
    pub randfix: String,
    pub zerofix: String,
    pub repeat: Option<usize>,
}

impl Default for DatasetNaming {
    fn default() -> Self {
        DatasetNaming {
            prefix: "SinCos".into(),
            postfix: ".csv".into(),
            randfix: "Rand".into(),
            zerofix: "Zero".into(),
            repeat: None,
        }
    }
}

impl DatasetNaming {
    pub fn repeat_count(&self) -> usize {
        self.repeat.unwrap_or(1)
    }

    fn repfix(&self) -> String {
        self.repeat.map(|n| format!("_{n}_")).unwrap_or_default()
    }

    pub fn file_name(&self, size: usize, mode: FeatureMode) -> String {
        let modefix = match mode {
            FeatureMode::Plain => "",
            FeatureMode::Random => self.randfix.as_str(),
            FeatureMode::Zero => self.zerofix.as_str(),
        };
        format!("{}{}{}{}{}", self.prefix, self.repfix(), modefix, size, self.postfix)
    }
}

/// Which files `generate_files` should produce.
#[derive(Debug, Clone, Default)]
pub struct GenerationPlan {
    pub sizes: Vec<usize>,
    pub random: bool,
    pub zero: bool,
    pub naming: DatasetNaming,
}

/// Outcome of one file in a generation run.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub mode: FeatureMode,
    pub result: Result<()>,
}

/// Writes the plain file for every size, then the random and zero variants
/// derived from it, into `dir`.
///
/// A failure on one file is logged and recorded; the remaining files are
/// still attempted.
pub fn generate_files<R: Rng + ?Sized>(plan: &GenerationPlan, dir: &Path, rng: &mut R) -> Vec<FileOutcome> {
    let mut modes = vec![FeatureMode::Plain];
    if plan.random {
        modes.push(FeatureMode::Random);
    }
    if plan.zero {
        modes.push(FeatureMode::Zero);
    }

    let mut outcomes = Vec::new();
    for &size in &plan.sizes {
        let plain = match sin_cos(size) {
            Ok(ds) => ds.repeat_rows(plan.naming.repeat_count()),
            Err(e) => {
                tracing::error!(size, error = %e, "cannot build dataset, skipping size");
                outcomes.push(FileOutcome {
                    path: dir.join(plan.naming.file_name(size, FeatureMode::Plain)),
                    mode: FeatureMode::Plain,
                    result: Err(e),
                });
                continue;
            }
        };

        for &mode in &modes {
            let path = dir.join(plan.naming.file_name(size, mode));
            let result = augment(&plain, mode, rng).and_then(|ds| write_dataset(&path, &ds));
            match &result {
                Ok(()) => tracing::info!(path = %path.display(), rows = plain.len(), "dataset written"),
                Err(e) => tracing::error!(path = %path.display(), error = %e, "error generating dataset file"),
            }
            outcomes.push(FileOutcome { path, mode, result });
        }
    }
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::csv::read_dataset;
    use rand::SeedableRng;

    #[test]
    fn default_names_match_legacy_layout() {
        let n = DatasetNaming::default();
        assert_eq!(n.file_name(1000, FeatureMode::Plain), "SinCos1000.csv");
        assert_eq!(n.file_name(1000, FeatureMode::Random), "SinCosRand1000.csv");
        assert_eq!(n.file_name(10, FeatureMode::Zero), "SinCosZero10.csv");
    }

    #[test]
    fn repeat_is_encoded_in_name() {
        let n = DatasetNaming { repeat: Some(3), ..DatasetNaming::default() };
        assert_eq!(n.file_name(50, FeatureMode::Random), "SinCos_3_Rand50.csv");
    }

    #[test]
    fn writes_all_requested_variants() {
        let dir = tempfile::tempdir().unwrap();
        let plan = GenerationPlan {
            sizes: vec![8, 16],
            random: true,
            zero: true,
            naming: DatasetNaming { repeat: Some(2), ..DatasetNaming::default() },
        };
        let mut rng = rand::rngs::StdRng::seed_from_u64(9);
        let outcomes = generate_files(&plan, dir.path(), &mut rng);
        assert_eq!(outcomes.len(), 6);
        assert!(outcomes.iter().all(|o| o.result.is_ok()));

        let plain = read_dataset(&dir.path().join("SinCos_2_8.csv"), 1).unwrap();
        let zero = read_dataset(&dir.path().join("SinCos_2_Zero8.csv"), 2).unwrap();
        assert_eq!(plain.len(), 16);
        assert_eq!(zero.len(), 16);
        for (z, p) in zero.rows.iter().zip(&plain.rows) {
            assert_eq!(z[1], 0.0);
            assert_eq!((z[0], z[2]), (p[0], p[1]));
        }
    }

    #[test]
    fn failure_on_one_size_does_not_stop_others() {
        let dir = tempfile::tempdir().unwrap();
        let plan = GenerationPlan { sizes: vec![0, 4], ..GenerationPlan::default() };
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let outcomes = generate_files(&plan, dir.path(), &mut rng);
        assert!(outcomes[0].result.is_err());
        assert!(outcomes[1].result.is_ok());
        assert!(dir.path().join("SinCos4.csv").exists());
    }
}
