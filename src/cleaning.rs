use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Dataset, JobListing, NOT_INFORMED};

static NON_SALARY_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\d\-]").expect("static regex is valid"));

/// Normalize a freshly collected dataset for persistence.
///
/// Missing location/salary become "Não informado"; title, company and location
/// are trimmed and title-cased; salary is trimmed and reduced to digits and
/// hyphens. Rows are then deduplicated on the normalized (title, link) pair,
/// keeping the first occurrence. Running it on its own output changes nothing.
pub fn clean(dataset: Dataset) -> Dataset {
    if dataset.is_empty() {
        tracing::warn!("No data to clean");
        return dataset;
    }

    let before = dataset.len();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let cleaned: Dataset = dataset
        .into_rows()
        .into_iter()
        .map(normalize)
        .filter(|job| seen.insert((job.title.clone(), job.link.clone())))
        .collect();

    let dropped = before - cleaned.len();
    if dropped > 0 {
        tracing::info!("Removed {dropped} duplicate listings");
    }
    cleaned
}

fn normalize(job: JobListing) -> JobListing {
    let location = job.location.unwrap_or_else(|| NOT_INFORMED.to_string());
    let salary = job.salary.unwrap_or_else(|| NOT_INFORMED.to_string());

    JobListing {
        title: title_case(job.title.trim()),
        company: title_case(job.company.trim()),
        location: Some(title_case(location.trim())),
        salary: Some(strip_salary(salary.trim())),
        link: job.link,
    }
}

/// Upper-case the first letter of every run of letters and lower-case the rest.
/// Anything that is not a letter (space, digit, punctuation) starts a new word.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                // "ß" -> "Ss", "ﬁ" -> "Fi": only the first char of the expansion is upper
                let mut upper = ch.to_uppercase();
                if let Some(first) = upper.next() {
                    out.push(first);
                }
                out.extend(upper.flat_map(char::to_lowercase));
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Drop everything but digits and hyphens: "$60k-$80k" -> "60-80".
pub fn strip_salary(s: &str) -> String {
    NON_SALARY_CHARS.replace_all(s, "").into_owned()
}
