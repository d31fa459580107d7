#[cfg(test)]
mod tests;

/// This module implements the proximal operators used by the penalties.
pub mod prox {
    use crate::Float;

    /// The soft-thresholding operator is the proximal operator of the L1
    /// penalty. It shrinks `x` towards zero by `threshold` and clamps it to
    /// exactly zero inside the `[-threshold, threshold]` band.
    pub fn soft_thresholding<F: Float>(x: F, threshold: F) -> F {
        if x > threshold {
            x - threshold
        } else if x < -threshold {
            x + threshold
        } else {
            F::zero()
        }
    }
}

/// This module contains numerical helper functions shared by the solver, the
/// tests and the benchmarks.
pub mod helpers {
    use crate::Float;
    use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

    /// This function computes the smallest regularization hyperparameter value
    /// yielding an all-zero solution. Fitting with an `alpha` greater or equal
    /// to this value drives every coefficient to zero in a single pass.
    pub fn compute_alpha_max<F: 'static + Float>(X: ArrayView2<F>, y: ArrayView1<F>) -> F {
        let n_samples = F::cast(X.shape()[0]);
        let Xty = X.t().dot(&y);
        let alpha_max = Xty.fold(F::zero(), |max_val, &x| x.abs().max(max_val));
        alpha_max / n_samples
    }

    /// This function solves a dense linear system using Gaussian elimination
    /// with back-substitution. It is small enough to spare a BLAS dependency
    /// and is used by the tests to compute an ordinary least squares reference
    /// through the normal equations.
    pub fn solve_lin_sys<F: 'static + Float>(
        A: ArrayView2<F>,
        b: ArrayView1<F>,
    ) -> Result<Array1<F>, &'static str> {
        let size = b.len();
        let mut system = Array2::<F>::zeros((size, size + 1));
        for i in 0..size {
            for j in 0..size {
                system[[i, j]] = A[[i, j]];
            }
            system[[i, size]] = b[i];
        }

        // Forward elimination
        for i in 0..size - 1 {
            for j in i..size - 1 {
                if system[[i, i]] == F::zero() {
                    continue;
                }
                let factor = system[[j + 1, i]] / system[[i, i]];
                for k in i..size + 1 {
                    system[[j + 1, k]] = system[[j + 1, k]] - factor * system[[i, k]];
                }
            }
        }

        // Back-substitution
        for i in (1..size).rev() {
            if system[[i, i]] == F::zero() {
                continue;
            }
            for j in (1..i + 1).rev() {
                let factor = system[[j - 1, i]] / system[[i, i]];
                for k in (0..size + 1).rev() {
                    system[[j - 1, k]] = system[[j - 1, k]] - factor * system[[i, k]];
                }
            }
        }

        let mut x = Array1::<F>::zeros(size);
        for i in 0..size {
            if system[[i, i]] == F::zero() {
                return Err("Infinitely many solutions or singular matrix");
            }
            x[i] = system[[i, size]] / system[[i, i]];
        }

        Ok(x)
    }
}

/// This module contains helper functions to efficiently write tests.
pub mod test_helpers {
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::{Array1, Array2, ArrayView1};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    pub fn assert_array_all_close<F>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    pub fn fill_random_vector(capacity: usize, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();

        let mut data: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..data.capacity() {
            data.push(normal.sample(&mut r));
        }
        data
    }

    /// Generates a dense regression problem `y = X w + e` with standard normal
    /// entries, drawn from a fixed seed so tests stay deterministic.
    pub fn generate_random_data(n_samples: usize, n_features: usize) -> (Array2<f64>, Array1<f64>) {
        let data_x = fill_random_vector(n_samples * n_features, 42);
        let data_w = fill_random_vector(n_features, 43);
        let data_e = fill_random_vector(n_samples, 44);

        let X = Array2::from_shape_vec((n_samples, n_features), data_x).unwrap();
        let true_w = Array1::from_shape_vec(n_features, data_w).unwrap();
        let noise = Array1::from_shape_vec(n_samples, data_e).unwrap();
        let y = X.dot(&true_w) + noise;

        (X, y)
    }
}
