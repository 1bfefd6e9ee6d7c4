const PIVOT_EPSILON: f64 = 1e-9;

/// Ordinary least squares with an intercept.
#[derive(Debug, Clone)]
pub struct LinearRegression {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearRegression {
    /// Solve the normal equations `(XᵀX) b = Xᵀy` with a leading intercept column.
    /// Columns that are linearly dependent on earlier ones (e.g. all-zero
    /// indicators) get a coefficient of zero.
    pub fn fit(x: &[Vec<f64>], y: &[f64]) -> Self {
        let p = x.first().map_or(0, Vec::len) + 1;

        // augmented [XᵀX | Xᵀy], row-major, p x (p + 1)
        let mut a = vec![vec![0.0; p + 1]; p];
        for (row, &target) in x.iter().zip(y) {
            let with_bias: Vec<f64> = std::iter::once(1.0).chain(row.iter().copied()).collect();
            for i in 0..p {
                for j in 0..p {
                    a[i][j] += with_bias[i] * with_bias[j];
                }
                a[i][p] += with_bias[i] * target;
            }
        }

        let solution = gauss_jordan(a, p);
        Self {
            intercept: solution[0],
            coefficients: solution[1..].to_vec(),
        }
    }

    pub fn predict(&self, row: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(row)
                .map(|(c, v)| c * v)
                .sum::<f64>()
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

/// Reduce the augmented system and read off one solution; free variables are 0.
fn gauss_jordan(mut a: Vec<Vec<f64>>, p: usize) -> Vec<f64> {
    let mut pivots: Vec<(usize, usize)> = Vec::new();
    let mut row = 0;

    for col in 0..p {
        if row == p {
            break;
        }
        let Some(best) = (row..p).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
        else {
            break;
        };
        if a[best][col].abs() < PIVOT_EPSILON {
            continue;
        }
        a.swap(row, best);

        let pivot = a[row][col];
        for v in a[row].iter_mut() {
            *v /= pivot;
        }
        for other in 0..p {
            if other != row {
                let factor = a[other][col];
                if factor != 0.0 {
                    for k in 0..=p {
                        a[other][k] -= factor * a[row][k];
                    }
                }
            }
        }
        pivots.push((row, col));
        row += 1;
    }

    let mut solution = vec![0.0; p];
    for (r, c) in pivots {
        solution[c] = a[r][p];
    }
    solution
}
