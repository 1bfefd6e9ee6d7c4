use std::collections::BTreeSet;
use std::sync::LazyLock;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use regex::Regex;

use crate::models::{Column, JobListing};

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("static regex is valid"));
static TARGET_ROLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Data|Analyst|Python").expect("static regex is valid"));

/// First run of digits in a cleaned salary, e.g. "60-80" -> 60.0.
pub fn first_number(salary: &str) -> Option<f64> {
    FIRST_NUMBER
        .find(salary)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Label used by the example classifier: data/analyst/python roles.
pub fn is_target_role(title: &str) -> bool {
    TARGET_ROLE.is_match(title)
}

/// Indicator encoding of one text column. Categories are sorted and the first
/// one is dropped, so it is encoded as all zeros. Empty cells are treated as
/// missing and also encode as all zeros.
#[derive(Debug, Clone)]
pub struct OneHot {
    categories: Vec<String>,
}

impl OneHot {
    pub fn fit<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let distinct: BTreeSet<&str> = values.into_iter().filter(|v| !v.is_empty()).collect();
        Self {
            categories: distinct.into_iter().skip(1).map(String::from).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.categories.len()
    }

    pub fn encode_into(&self, value: &str, out: &mut Vec<f64>) {
        out.extend(
            self.categories
                .iter()
                .map(|c| if c == value { 1.0 } else { 0.0 }),
        );
    }
}

/// One-hot encode `columns` of `rows`, concatenated left to right.
pub fn design_matrix(rows: &[&JobListing], columns: &[Column]) -> Vec<Vec<f64>> {
    let encoders: Vec<(Column, OneHot)> = columns
        .iter()
        .map(|&c| (c, OneHot::fit(rows.iter().map(|r| r.get(c)))))
        .collect();
    let width: usize = encoders.iter().map(|(_, e)| e.width()).sum();

    rows.iter()
        .map(|row| {
            let mut features = Vec::with_capacity(width);
            for (column, encoder) in &encoders {
                encoder.encode_into(row.get(*column), &mut features);
            }
            features
        })
        .collect()
}

/// Shuffle with a fixed seed and hold out `test_fraction` of the samples
/// (rounded up). Returns `(train, test)` index lists, or `None` when either
/// side would be empty.
pub fn train_test_split(
    n: usize,
    test_fraction: f64,
    seed: u64,
) -> Option<(Vec<usize>, Vec<usize>)> {
    let n_test = (n as f64 * test_fraction).ceil() as usize;
    if n_test == 0 || n_test >= n {
        return None;
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let train = indices.split_off(n_test);
    Some((train, indices))
}

pub fn select<T: Clone>(items: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| items[i].clone()).collect()
}
