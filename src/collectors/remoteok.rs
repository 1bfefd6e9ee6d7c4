use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::models::{JobListing, LOCATION_DEFAULT, NOT_INFORMED};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid CSS")
}

static JOB_ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr.job"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector(r#"h2[itemprop="title"]"#));
static COMPANY: LazyLock<Selector> = LazyLock::new(|| selector(r#"h3[itemprop="name"]"#));
static LOCATION: LazyLock<Selector> = LazyLock::new(|| selector("div.location"));
static SALARY: LazyLock<Selector> = LazyLock::new(|| selector("div.salary"));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a.preventLink"));

/// Listings found on one page, plus how many job rows were dropped for
/// lacking a title, company or link.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    pub listings: Vec<JobListing>,
    pub skipped: usize,
}

/// Extract every `tr.job` row of a RemoteOK listing page, in document order.
pub fn parse_listings(html: &str, base_url: &str) -> ParsedPage {
    let document = Html::parse_document(html);
    let mut page = ParsedPage::default();

    for row in document.select(&JOB_ROW) {
        match parse_row(row, base_url) {
            Some(listing) => page.listings.push(listing),
            None => page.skipped += 1,
        }
    }

    page
}

fn parse_row(row: ElementRef<'_>, base_url: &str) -> Option<JobListing> {
    let title = first_text(row, &TITLE)?;
    let company = first_text(row, &COMPANY)?;
    let location = first_text(row, &LOCATION).unwrap_or_else(|| LOCATION_DEFAULT.to_string());
    let salary = first_text(row, &SALARY).unwrap_or_else(|| NOT_INFORMED.to_string());
    let href = row.select(&LINK).next()?.value().attr("href")?;

    Some(JobListing {
        title,
        company,
        location: Some(location),
        salary: Some(salary),
        link: format!("{base_url}{href}"),
    })
}

/// Text of the first match: each fragment trimmed, fragments joined with nothing.
fn first_text(row: ElementRef<'_>, sel: &Selector) -> Option<String> {
    row.select(sel).next().map(|el| {
        el.text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<String>()
    })
}
