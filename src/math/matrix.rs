use rand::Rng;

/// Dense row-major matrix.
///
/// Storage is a single flat buffer so a layer's weights can be copied in and
/// out of a network-wide weight vector without reshaping: row `i` occupies
/// `data[i * cols .. (i + 1) * cols]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Uniform samples in [-1, 1) drawn from `rng`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let data = (0..rows * cols)
            .map(|_| rng.gen::<f64>() * 2.0 - 1.0)
            .collect();
        Matrix { rows, cols, data }
    }

    /// Wraps an existing row-major buffer. Panics if the length is wrong.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<f64>) -> Matrix {
        assert_eq!(data.len(), rows * cols, "flat buffer does not match {rows}x{cols}");
        Matrix { rows, cols, data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Row vector times matrix: `v (1×rows) · self (rows×cols)`.
    pub fn vec_mul(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(v.len(), self.rows, "vector length must equal matrix rows");
        let mut out = vec![0.0; self.cols];
        for (i, &vi) in v.iter().enumerate() {
            for (o, w) in out.iter_mut().zip(self.row(i)) {
                *o += vi * w;
            }
        }
        out
    }

    /// Matrix times column vector: `self (rows×cols) · v (cols×1)`.
    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(v.len(), self.cols, "vector length must equal matrix cols");
        (0..self.rows)
            .map(|i| self.row(i).iter().zip(v).map(|(w, x)| w * x).sum::<f64>())
            .collect()
    }

    /// `self -= lr * (a ⊗ b)` where `a` has `rows` entries and `b` has `cols`.
    pub fn sub_scaled_outer(&mut self, a: &[f64], b: &[f64], lr: f64) {
        assert_eq!(a.len(), self.rows);
        assert_eq!(b.len(), self.cols);
        for (i, &ai) in a.iter().enumerate() {
            let start = i * self.cols;
            for (w, &bj) in self.data[start..start + self.cols].iter_mut().zip(b) {
                *w -= lr * ai * bj;
            }
        }
    }
}
