use std::collections::HashMap;
use std::fmt;

use crate::models::listing::{Column, JobListing};

/// Ordered collection of listings, one row per job, columns as in [`Column`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<JobListing>,
}

impl Dataset {
    pub fn new(rows: Vec<JobListing>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[JobListing] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &JobListing> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<JobListing> {
        self.rows
    }

    /// First `n` rows, printable as an aligned table.
    pub fn head(&self, n: usize) -> Preview<'_> {
        Preview {
            rows: &self.rows[..n.min(self.rows.len())],
        }
    }

    /// Distinct values of `column` with their frequency, most frequent first.
    /// Equal counts keep the order in which the values first appeared.
    pub fn value_counts(&self, column: Column) -> Vec<(String, usize)> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(String, usize)> = Vec::new();
        for row in &self.rows {
            let value = row.get(column);
            match index.get(value) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(value, counts.len());
                    counts.push((value.to_string(), 1));
                }
            }
        }
        // stable sort keeps first-appearance order among ties
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

impl FromIterator<JobListing> for Dataset {
    fn from_iter<I: IntoIterator<Item = JobListing>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<JobListing>> for Dataset {
    fn from(rows: Vec<JobListing>) -> Self {
        Self::new(rows)
    }
}

const MAX_CELL_WIDTH: usize = 32;

pub struct Preview<'a> {
    rows: &'a [JobListing],
}

fn clip(cell: &str) -> String {
    if cell.chars().count() <= MAX_CELL_WIDTH {
        cell.to_string()
    } else {
        let mut out: String = cell.chars().take(MAX_CELL_WIDTH - 3).collect();
        out.push_str("...");
        out
    }
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                Column::ALL
                    .iter()
                    .map(|&c| match c {
                        Column::Location if row.location.is_none() => "NaN".to_string(),
                        Column::Salary if row.salary.is_none() => "NaN".to_string(),
                        _ => clip(row.get(c)),
                    })
                    .collect()
            })
            .collect();

        let index_width = self.rows.len().saturating_sub(1).to_string().len();
        let widths: Vec<usize> = Column::ALL
            .iter()
            .enumerate()
            .map(|(i, c)| {
                cells
                    .iter()
                    .map(|r| r[i].chars().count())
                    .chain(std::iter::once(c.header().chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (c, w) in Column::ALL.iter().zip(&widths) {
            write!(f, "  {:<w$}", c.header())?;
        }
        writeln!(f)?;
        for (i, row) in cells.iter().enumerate() {
            write!(f, "{i:<index_width$}")?;
            for (cell, w) in row.iter().zip(&widths) {
                write!(f, "  {cell:<w$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
