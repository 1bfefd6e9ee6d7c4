// tests/collect_e2e.rs
//
// End-to-end collect runs against a local axum server standing in for the
// listing site: real HTTP fetcher, parser, cleaner and CSV writer.

use std::path::PathBuf;
use std::time::Duration;

use axum::Router;
use axum::http::{HeaderMap, StatusCode, header::ACCEPT_LANGUAGE, header::USER_AGENT};
use axum::response::{Html, IntoResponse};
use axum::routing::get;

use remote_jobs::collectors::{Collector, HttpFetcher, PageFetcher};
use remote_jobs::config::{CollectorConfig, DEFAULT_HEADERS};
use remote_jobs::error::AppError;
use remote_jobs::models::{Dataset, JobListing};
use remote_jobs::{pipeline, storage};

const UA: &str = "remote-jobs-test/1.0";

const DATA_PAGE: &str = r#"<html><body><table id="jobsboard">
<tr class="job">
  <td><a class="preventLink" href="/remote-jobs/1"><h2 itemprop="title"> data Analyst </h2></a>
  <h3 itemprop="name">ACME </h3>
  <div class="salary">$60k-$80k</div></td>
</tr>
<tr class="job">
  <td><a class="preventLink" href="/remote-jobs/1"><h2 itemprop="title">Data Analyst</h2></a>
  <h3 itemprop="name">Acme</h3>
  <div class="location">Europe</div></td>
</tr>
<tr class="job">
  <td><h2 itemprop="title">No Link</h2><h3 itemprop="name">Ghost</h3></td>
</tr>
</table></body></html>"#;

const PYTHON_PAGE: &str = r#"<html><body><table>
<tr class="job">
  <td><a class="preventLink" href="/remote-jobs/2"><h2 itemprop="title">python backend DEV</h2></a>
  <h3 itemprop="name">snake co</h3>
  <div class="location">🌏 worldwide</div>
  <div class="salary">💰 $100k - $140k</div></td>
</tr>
</table></body></html>"#;

async fn page(headers: HeaderMap, body: &'static str) -> impl IntoResponse {
    // only answer clients that send the configured User-Agent
    match headers.get(USER_AGENT).and_then(|v| v.to_str().ok()) {
        Some(UA) => Html(body).into_response(),
        _ => StatusCode::FORBIDDEN.into_response(),
    }
}

async fn english_only(headers: HeaderMap) -> impl IntoResponse {
    let wanted = DEFAULT_HEADERS
        .iter()
        .find(|(name, _)| *name == "Accept-Language")
        .map(|(_, value)| *value);
    if headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()) == wanted {
        Html(PYTHON_PAGE).into_response()
    } else {
        StatusCode::NOT_ACCEPTABLE.into_response()
    }
}

async fn spawn_site() -> String {
    let app = Router::new()
        .route("/remote-data-jobs", get(|h: HeaderMap| page(h, DATA_PAGE)))
        .route("/remote-python-jobs", get(|h: HeaderMap| page(h, PYTHON_PAGE)))
        .route("/english-only", get(english_only))
        .route("/empty", get(|| async { Html("<html><body></body></html>") }))
        .route(
            "/broken",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test site");
    });
    format!("http://{addr}")
}

fn temp_csv() -> PathBuf {
    std::env::temp_dir().join(format!("remote-jobs-e2e-{}.csv", uuid::Uuid::new_v4()))
}

fn test_config(base: &str, paths: &[&str], output: PathBuf) -> CollectorConfig {
    CollectorConfig {
        urls: paths.iter().map(|p| format!("{base}{p}")).collect(),
        base_url: "https://remoteok.io".to_string(),
        user_agent: UA.to_string(),
        delay: Duration::ZERO,
        output,
        ..CollectorConfig::default()
    }
}

fn fetcher_with_ua(user_agent: &str) -> HttpFetcher {
    let config = CollectorConfig {
        user_agent: user_agent.to_string(),
        ..CollectorConfig::default()
    };
    HttpFetcher::from_config(&config).expect("build fetcher")
}

fn collector(base: &str, paths: &[&str], output: PathBuf) -> Collector<HttpFetcher> {
    let config = test_config(base, paths, output);
    let fetcher = HttpFetcher::from_config(&config).expect("build fetcher");
    Collector::new(config, fetcher)
}

#[tokio::test]
async fn fetcher_reports_server_errors_with_url() {
    let base = spawn_site().await;
    let fetcher = fetcher_with_ua(UA);

    let url = format!("{base}/broken");
    match fetcher.fetch(&url).await {
        Err(AppError::Status { url: failed, status }) => {
            assert_eq!(status, 500);
            assert_eq!(failed, url);
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetcher_sends_configured_user_agent() {
    let base = spawn_site().await;

    let ok = fetcher_with_ua(UA);
    assert!(ok.fetch(&format!("{base}/remote-data-jobs")).await.is_ok());

    let other = fetcher_with_ua("someone-else");
    assert!(matches!(
        other.fetch(&format!("{base}/remote-data-jobs")).await,
        Err(AppError::Status { status: 403, .. })
    ));
}

#[tokio::test]
async fn fetcher_sends_configured_header_set() {
    let base = spawn_site().await;
    let url = format!("{base}/english-only");

    let configured = collector(&base, &["/english-only"], temp_csv());
    assert_eq!(configured.collect().await.dataset.len(), 1);

    let bare = CollectorConfig {
        headers: Vec::new(),
        ..test_config(&base, &["/english-only"], temp_csv())
    };
    let fetcher = HttpFetcher::from_config(&bare).expect("build fetcher");
    assert!(matches!(
        fetcher.fetch(&url).await,
        Err(AppError::Status { status: 406, .. })
    ));
}

#[tokio::test]
async fn unreachable_host_is_a_request_error() {
    // bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = fetcher_with_ua(UA);
    assert!(matches!(
        fetcher.fetch(&format!("http://{addr}/")).await,
        Err(AppError::Request { .. })
    ));
}

#[tokio::test]
async fn server_error_page_is_skipped_and_run_continues() {
    let base = spawn_site().await;
    let collector = collector(&base, &["/broken", "/remote-python-jobs"], temp_csv());

    let report = collector.collect().await;
    assert_eq!(report.pages_failed, 1);
    assert_eq!(report.dataset.len(), 1);
    assert_eq!(report.dataset.rows()[0].title, "python backend DEV");
}

#[tokio::test]
async fn collect_writes_cleaned_csv() {
    let base = spawn_site().await;
    let output = temp_csv();
    let collector = collector(
        &base,
        &["/remote-data-jobs", "/broken", "/remote-python-jobs"],
        output.clone(),
    );

    let written = pipeline::run_collect(&collector).await.expect("collect run");
    assert_eq!(written, 2);

    let text = std::fs::read_to_string(&output).expect("read csv");
    assert_eq!(text.lines().next(), Some("Título,Empresa,Local,Salário,Link"));

    let stored = storage::read_csv(&output).expect("load csv");
    assert_eq!(
        stored,
        Dataset::new(vec![
            JobListing::new(
                "Data Analyst",
                "Acme",
                Some("Remoto"),
                Some("60-80"),
                "https://remoteok.io/remote-jobs/1",
            ),
            JobListing::new(
                "Python Backend Dev",
                "Snake Co",
                Some("🌏 Worldwide"),
                Some("100-140"),
                "https://remoteok.io/remote-jobs/2",
            ),
        ])
    );

    std::fs::remove_file(output).unwrap();
}

#[tokio::test]
async fn nothing_collected_writes_no_file() {
    let base = spawn_site().await;
    let output = temp_csv();
    let collector = collector(&base, &["/empty", "/broken"], output.clone());

    let written = pipeline::run_collect(&collector).await.expect("collect run");
    assert_eq!(written, 0);
    assert!(!output.exists(), "no file should be written for an empty run");
}

#[tokio::test]
async fn rerun_overwrites_previous_file() {
    let base = spawn_site().await;
    let output = temp_csv();

    let first = collector(
        &base,
        &["/remote-data-jobs", "/remote-python-jobs"],
        output.clone(),
    );
    pipeline::run_collect(&first).await.expect("first run");

    let second = collector(&base, &["/remote-python-jobs"], output.clone());
    pipeline::run_collect(&second).await.expect("second run");

    assert_eq!(storage::read_csv(&output).expect("load csv").len(), 1);
    std::fs::remove_file(output).unwrap();
}
