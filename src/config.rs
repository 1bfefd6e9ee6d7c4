use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "https://remoteok.io";
pub const DEFAULT_OUTPUT: &str = "vagas_remote_ok_tratadas.csv";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

/// Headers sent alongside the User-Agent on every request.
pub const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("Accept", "text/html,application/xhtml+xml,*/*;q=0.8"),
    ("Accept-Language", "en-US,en;q=0.9"),
];

/// Category pages scraped when no `--url` is given: data, Python and backend.
pub const DEFAULT_URLS: [&str; 3] = [
    "https://remoteok.io/remote-data-jobs",
    "https://remoteok.io/remote-python-jobs",
    "https://remoteok.io/remote-backend-jobs",
];

#[derive(Parser, Debug, Clone)]
#[command(name = "remote-jobs", about = "Remote job listing scraper and analyzer")]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Scrape listing pages, clean the result and write it as CSV
    Collect {
        /// Listing page to scrape (repeatable)
        #[arg(long = "url", default_values_t = DEFAULT_URLS.map(String::from))]
        urls: Vec<String>,

        /// Site root prepended to each job's relative link
        #[arg(long, env = "REMOTE_JOBS_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// User-Agent sent with every request
        #[arg(long, env = "REMOTE_JOBS_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
        user_agent: String,

        /// Pause after each page, in seconds
        #[arg(long, env = "REMOTE_JOBS_DELAY_SECS", default_value = "6")]
        delay_secs: u64,

        /// CSV file to (over)write
        #[arg(long, env = "REMOTE_JOBS_OUTPUT", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Load the cleaned CSV, render charts and fit the example models
    Analyze {
        /// CSV file produced by `collect`
        #[arg(long, env = "REMOTE_JOBS_INPUT", default_value = DEFAULT_OUTPUT)]
        input: PathBuf,
    },
}

/// Everything the collector needs, fixed for the lifetime of one run.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub urls: Vec<String>,
    pub base_url: String,
    pub user_agent: String,
    /// Extra request headers as (name, value); the User-Agent is set separately.
    pub headers: Vec<(String, String)>,
    pub delay: Duration,
    pub output: PathBuf,
}

fn default_headers() -> Vec<(String, String)> {
    DEFAULT_HEADERS
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            urls: DEFAULT_URLS.iter().map(|u| u.to_string()).collect(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: default_headers(),
            delay: Duration::from_secs(6),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl CollectorConfig {
    /// Build the collector config from the `collect` subcommand, if that is the one selected.
    pub fn from_command(command: &Command) -> Option<Self> {
        match command {
            Command::Collect {
                urls,
                base_url,
                user_agent,
                delay_secs,
                output,
            } => Some(Self {
                urls: urls.clone(),
                base_url: base_url.clone(),
                user_agent: user_agent.clone(),
                headers: default_headers(),
                delay: Duration::from_secs(*delay_secs),
                output: output.clone(),
            }),
            Command::Analyze { .. } => None,
        }
    }
}
