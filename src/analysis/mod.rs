// Analyzer: descriptive charts and two example models over the cleaned CSV.

pub mod charts;
pub mod features;
pub mod regression;
pub mod tree;

use crate::models::{Column, Dataset, JobListing};

use self::features::{design_matrix, first_number, is_target_role, select, train_test_split};
use self::regression::LinearRegression;
use self::tree::DecisionTree;

const TOP_N: usize = 10;
const SALARY_BINS: usize = 20;
const TEST_FRACTION: f64 = 0.2;
const SEED: u64 = 42;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Held-out accuracy of the role classifier, if it could be trained.
    pub accuracy: Option<f64>,
    /// Held-out mean squared error of the salary regression, if it could be trained.
    pub mse: Option<f64>,
}

/// Print the charts, fit both models and print their metrics.
pub fn run(dataset: &Dataset) -> AnalysisReport {
    println!("{}", render_charts(dataset));

    let accuracy = classify(dataset);
    match accuracy {
        Some(acc) => println!("Classification accuracy: {acc:.2}"),
        None => tracing::warn!("Not enough rows to train the classifier"),
    }

    let mse = regress_salary(dataset);
    match mse {
        Some(mse) => println!("Salary regression mean squared error: {mse:.2}"),
        None => tracing::warn!("Not enough rows with a numeric salary to fit the regression"),
    }

    AnalysisReport { accuracy, mse }
}

fn top(dataset: &Dataset, column: Column) -> Vec<(String, usize)> {
    let mut counts = dataset.value_counts(column);
    counts.truncate(TOP_N);
    counts
}

fn salaried(dataset: &Dataset) -> Vec<(&JobListing, f64)> {
    dataset
        .iter()
        .filter_map(|job| first_number(job.get(Column::Salary)).map(|s| (job, s)))
        .collect()
}

pub fn render_charts(dataset: &Dataset) -> String {
    let salaries: Vec<f64> = salaried(dataset).into_iter().map(|(_, s)| s).collect();
    [
        charts::bar_chart(
            "Listings by location (top 10)",
            &top(dataset, Column::Location),
        ),
        charts::histogram("Salary distribution", &salaries, SALARY_BINS),
        charts::bar_chart(
            "Companies with most listings (top 10)",
            &top(dataset, Column::Company),
        ),
    ]
    .join("\n")
}

/// Decision tree predicting data/analyst/python roles from location and salary.
/// Returns held-out accuracy.
pub fn classify(dataset: &Dataset) -> Option<f64> {
    let rows: Vec<&JobListing> = dataset.iter().collect();
    let (train, test) = train_test_split(rows.len(), TEST_FRACTION, SEED)?;

    let x = design_matrix(&rows, &[Column::Location, Column::Salary]);
    let y: Vec<bool> = rows.iter().map(|r| is_target_role(&r.title)).collect();

    let tree = DecisionTree::fit(&select(&x, &train), &select(&y, &train));
    let predicted: Vec<bool> = test.iter().map(|&i| tree.predict(&x[i])).collect();
    Some(accuracy(&select(&y, &test), &predicted))
}

/// Linear regression of the first salary number on location, over rows that
/// carry a number. Returns held-out mean squared error.
pub fn regress_salary(dataset: &Dataset) -> Option<f64> {
    let (rows, y): (Vec<&JobListing>, Vec<f64>) = salaried(dataset).into_iter().unzip();
    let (train, test) = train_test_split(rows.len(), TEST_FRACTION, SEED)?;

    let x = design_matrix(&rows, &[Column::Location]);
    let model = LinearRegression::fit(&select(&x, &train), &select(&y, &train));
    let predicted: Vec<f64> = test.iter().map(|&i| model.predict(&x[i])).collect();
    Some(mean_squared_error(&select(&y, &test), &predicted))
}

pub fn accuracy(truth: &[bool], predicted: &[bool]) -> f64 {
    if truth.is_empty() {
        return 0.0;
    }
    let hits = truth.iter().zip(predicted).filter(|(a, b)| a == b).count();
    hits as f64 / truth.len() as f64
}

pub fn mean_squared_error(truth: &[f64], predicted: &[f64]) -> f64 {
    if truth.is_empty() {
        return 0.0;
    }
    truth
        .iter()
        .zip(predicted)
        .map(|(t, p)| (t - p).powi(2))
        .sum::<f64>()
        / truth.len() as f64
}
