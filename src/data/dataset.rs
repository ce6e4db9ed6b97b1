use std::f64::consts::PI;

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{HarnessError, Result};

/// How the extra input column of a generated dataset is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureMode {
    /// No extra column: rows are `x,y`.
    Plain,
    /// Independent uniform draw in [-1, 1) per row: `x,extra,y`.
    Random,
    /// Ablation control, extra column fixed at 0: `x,0,y`.
    Zero,
}

impl FeatureMode {
    pub fn from_name(name: &str) -> Option<FeatureMode> {
        match name.to_lowercase().as_str() {
            "plain" => Some(FeatureMode::Plain),
            "random" | "rand" => Some(FeatureMode::Random),
            "zero" => Some(FeatureMode::Zero),
            _ => None,
        }
    }
}

/// Column index the extra feature is inserted before (between `x` and `y`).
pub const EXTRA_COLUMN: usize = 1;

/// The function the networks are asked to approximate.
pub fn target(x: f64) -> f64 {
    x.sin() * (2.0 * x).cos()
}

/// Ordered rows of numeric fields. The first `input_count` fields of each
/// row are network inputs; the rest are desired outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub input_count: usize,
    pub rows: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn new(input_count: usize, rows: Vec<Vec<f64>>) -> Dataset {
        Dataset { input_count, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fields per row; 0 for an empty dataset.
    pub fn width(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn output_count(&self) -> usize {
        self.width().saturating_sub(self.input_count)
    }

    /// Fails unless the dataset is non-empty with exactly `inputs` input
    /// fields and `outputs` desired fields per row.
    pub fn check_shape(&self, inputs: usize, outputs: usize) -> Result<()> {
        if self.is_empty() {
            return Err(HarnessError::EmptyDataset);
        }
        if self.input_count != inputs {
            return Err(HarnessError::ShapeMismatch {
                what: "inputs",
                expected: inputs,
                actual: self.input_count,
            });
        }
        if self.output_count() != outputs {
            return Err(HarnessError::ShapeMismatch {
                what: "outputs",
                expected: outputs,
                actual: self.output_count(),
            });
        }
        Ok(())
    }

    pub fn input(&self, row: usize) -> &[f64] {
        &self.rows[row][..self.input_count]
    }

    pub fn desired(&self, row: usize) -> &[f64] {
        &self.rows[row][self.input_count..]
    }

    /// New dataset with one field inserted before `before` on every row.
    ///
    /// The new field is an input, so `before` must fall inside the input
    /// region (`0..=input_count`). All original fields keep their values and
    /// relative order.
    pub fn inject_column<F>(&self, before: usize, mut value_fn: F) -> Result<Dataset>
    where
        F: FnMut() -> f64,
    {
        if before > self.input_count {
            return Err(HarnessError::ColumnOutOfRange { column: before, max: self.input_count });
        }
        let rows = self.rows.iter()
            .map(|row| {
                let mut out = Vec::with_capacity(row.len() + 1);
                out.extend_from_slice(&row[..before]);
                out.push(value_fn());
                out.extend_from_slice(&row[before..]);
                out
            })
            .collect();
        Ok(Dataset { input_count: self.input_count + 1, rows })
    }

    /// Each row emitted `times` times consecutively.
    pub fn repeat_rows(&self, times: usize) -> Dataset {
        let rows = self.rows.iter()
            .flat_map(|row| std::iter::repeat(row.clone()).take(times))
            .collect();
        Dataset { input_count: self.input_count, rows }
    }
}

/// `size` evenly spaced samples of the target over `[0, 2π)`: rows `x,y`.
pub fn sin_cos(size: usize) -> Result<Dataset> {
    if size == 0 {
        return Err(HarnessError::EmptyDataset);
    }
    let step = (2.0 * PI) / size as f64;
    let rows = (0..size)
        .map(|i| {
            let x = i as f64 * step;
            vec![x, target(x)]
        })
        .collect();
    Ok(Dataset::new(1, rows))
}

/// Adds the extra column described by `mode` to a plain dataset.
/// `Plain` returns an unchanged copy.
pub fn augment<R: Rng + ?Sized>(plain: &Dataset, mode: FeatureMode, rng: &mut R) -> Result<Dataset> {
    match mode {
        FeatureMode::Plain => Ok(plain.clone()),
        FeatureMode::Random => plain.inject_column(EXTRA_COLUMN, || rng.gen::<f64>() * 2.0 - 1.0),
        FeatureMode::Zero => plain.inject_column(EXTRA_COLUMN, || 0.0),
    }
}

/// Generates a dataset of `size` rows in the given mode.
pub fn generate<R: Rng + ?Sized>(size: usize, mode: FeatureMode, rng: &mut R) -> Result<Dataset> {
    augment(&sin_cos(size)?, mode, rng)
}
