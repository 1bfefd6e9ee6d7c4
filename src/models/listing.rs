use serde::{Deserialize, Serialize};

/// Location used when a job row carries no location node.
pub const LOCATION_DEFAULT: &str = "Remoto";

/// Placeholder for salary (and, after cleaning, location) when nothing was published.
pub const NOT_INFORMED: &str = "Não informado";

/// One scraped job posting. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobListing {
    #[serde(rename = "Título")]
    pub title: String,
    #[serde(rename = "Empresa")]
    pub company: String,
    #[serde(rename = "Local")]
    pub location: Option<String>,
    #[serde(rename = "Salário")]
    pub salary: Option<String>,
    #[serde(rename = "Link")]
    pub link: String,
}

impl JobListing {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: Option<&str>,
        salary: Option<&str>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            location: location.map(String::from),
            salary: salary.map(String::from),
            link: link.into(),
        }
    }

    /// Cell value for `column`; missing optional cells read as "".
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Title => &self.title,
            Column::Company => &self.company,
            Column::Location => self.location.as_deref().unwrap_or(""),
            Column::Salary => self.salary.as_deref().unwrap_or(""),
            Column::Link => &self.link,
        }
    }
}

/// Row shape as stored on disk. Every cell is text, including empty ones,
/// so a written dataset reads back unchanged.
#[derive(Debug, Deserialize)]
pub(crate) struct StoredListing {
    #[serde(rename = "Título")]
    title: String,
    #[serde(rename = "Empresa")]
    company: String,
    #[serde(rename = "Local")]
    location: String,
    #[serde(rename = "Salário")]
    salary: String,
    #[serde(rename = "Link")]
    link: String,
}

impl From<StoredListing> for JobListing {
    fn from(row: StoredListing) -> Self {
        Self {
            title: row.title,
            company: row.company,
            location: Some(row.location),
            salary: Some(row.salary),
            link: row.link,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Title,
    Company,
    Location,
    Salary,
    Link,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Title,
        Column::Company,
        Column::Location,
        Column::Salary,
        Column::Link,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Title => "Título",
            Column::Company => "Empresa",
            Column::Location => "Local",
            Column::Salary => "Salário",
            Column::Link => "Link",
        }
    }
}
