use rand::Rng;
use std::f64::consts::PI;

/// Dense row-major matrix of `f64`.
///
/// Shape violations inside the arithmetic helpers are programming errors and
/// panic; callers validate caller-supplied vectors before reaching here.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        // Uniform draws on (0, 1] keep ln() finite.
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Fills a (rows, cols) matrix with samples from N(0, std_dev), row by row.
    pub fn normal<R: Rng + ?Sized>(rows: usize, cols: usize, std_dev: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for row in res.data.iter_mut() {
            for value in row.iter_mut() {
                *value = Matrix::sample_standard_normal(rng) * std_dev;
            }
        }
        res
    }

    /// Fan-in scaled initialization: N(0, 1/sqrt(cols)).
    ///
    /// `cols` is the number of incoming connections of each destination unit,
    /// so wider layers start with proportionally smaller weights.
    pub fn fan_in<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let std_dev = 1.0 / (cols as f64).sqrt();
        Matrix::normal(rows, cols, std_dev, rng)
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Matrix-vector product `self · v`.
    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(self.cols, v.len(), "Matrices are of incorrect sizes");
        self.data.iter()
            .map(|row| row.iter().zip(v.iter()).map(|(w, x)| w * x).sum())
            .collect()
    }

    /// Transposed matrix-vector product `selfᵀ · v`, without materializing the transpose.
    pub fn transpose_mul_vec(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(self.rows, v.len(), "Matrices are of incorrect sizes");
        let mut res = vec![0.0; self.cols];
        for (row, &scale) in self.data.iter().zip(v.iter()) {
            for (acc, w) in res.iter_mut().zip(row.iter()) {
                *acc += w * scale;
            }
        }
        res
    }

    /// In-place `self += scale · (col ⊗ row)`.
    ///
    /// `col` has length `rows`, `row` has length `cols`.
    pub fn add_scaled_outer(&mut self, scale: f64, col: &[f64], row: &[f64]) {
        assert_eq!(self.rows, col.len(), "Matrices are of incorrect sizes");
        assert_eq!(self.cols, row.len(), "Matrices are of incorrect sizes");
        for (weights, &c) in self.data.iter_mut().zip(col.iter()) {
            let factor = scale * c;
            for (w, &r) in weights.iter_mut().zip(row.iter()) {
                *w += factor * r;
            }
        }
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let cols = data.first().map_or(0, |row| row.len());
        assert!(data.iter().all(|row| row.len() == cols), "Ragged matrix rows");
        Matrix {
            rows: data.len(),
            cols,
            data
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn mul_vec_matches_hand_computation() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        assert_eq!(m.mul_vec(&[1.0, -1.0]), vec![-1.0, -1.0, -1.0]);
    }

    #[test]
    fn transpose_mul_vec_matches_hand_computation() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(m.transpose_mul_vec(&[0.5, -2.0]), vec![-7.5, -9.0, -10.5]);
    }

    #[test]
    fn add_scaled_outer_updates_every_cell() {
        let mut m = Matrix::zeros(2, 3);
        m.add_scaled_outer(0.5, &[1.0, 2.0], &[1.0, 0.0, -4.0]);
        assert_eq!(m.data, vec![vec![0.5, 0.0, -2.0], vec![1.0, 0.0, -4.0]]);
    }

    #[test]
    #[should_panic(expected = "incorrect sizes")]
    fn mul_vec_rejects_wrong_length() {
        Matrix::zeros(2, 3).mul_vec(&[1.0, 2.0]);
    }

    #[test]
    fn fan_in_spread_tracks_inverse_sqrt_of_cols() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let m = Matrix::fan_in(200, 100, &mut rng);
        let n = (m.rows * m.cols) as f64;
        let mean = m.data.iter().flatten().sum::<f64>() / n;
        let var = m.data.iter().flatten().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        assert!(mean.abs() < 0.01, "mean = {mean}");
        assert!((var.sqrt() - 0.1).abs() < 0.005, "std = {}", var.sqrt());
    }

    #[test]
    fn same_seed_gives_same_matrix() {
        let a = Matrix::fan_in(4, 5, &mut ChaCha8Rng::seed_from_u64(1));
        let b = Matrix::fan_in(4, 5, &mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
