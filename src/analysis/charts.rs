use std::fmt::Write;

const BAR_WIDTH: usize = 40;

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (count * BAR_WIDTH).div_ceil(max);
    "█".repeat(len)
}

/// Horizontal bar chart, one line per `(label, count)` in the given order.
pub fn bar_chart(title: &str, bars: &[(String, usize)]) -> String {
    let mut out = format!("{title}\n");
    let max = bars.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let label_width = bars.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

    for (label, count) in bars {
        let _ = writeln!(out, "  {label:<label_width$} | {} {count}", bar(*count, max));
    }
    if bars.is_empty() {
        out.push_str("  (no data)\n");
    }
    out
}

/// Counts of `values` in `bins` equal-width buckets spanning min..=max.
/// A constant sample is spread over [v - 0.5, v + 0.5].
pub fn bin_counts(values: &[f64], bins: usize) -> Vec<(f64, f64, usize)> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        // the right edge belongs to the last bin
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, c)| (lo + i as f64 * width, lo + (i + 1) as f64 * width, c))
        .collect()
}

pub fn histogram(title: &str, values: &[f64], bins: usize) -> String {
    let bars: Vec<(String, usize)> = bin_counts(values, bins)
        .into_iter()
        .map(|(from, to, count)| (format!("{from:>10.0} - {to:<10.0}"), count))
        .collect();
    bar_chart(title, &bars)
}
