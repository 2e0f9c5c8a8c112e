//! Integration tests for the extraction pipeline
//!
//! These tests use wiremock to serve a paginated listing fixture and exercise
//! the full crawl-paginate-extract-persist cycle end-to-end.

use proxy_harvest::config::{Config, CrawlerConfig, OutputConfig};
use proxy_harvest::crawler::{build_http_client, HttpRenderer, Orchestrator, ProxyRecord};
use proxy_harvest::output::Sink;
use proxy_harvest::storage::{ExecutionLog, SqliteExecutionLog};
use std::path::Path;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn proxy_row(address: &str, port: u32) -> String {
    format!("<tr><td>{address}</td><td>{port}</td><td>BR</td><td>elite</td><td>http</td></tr>")
}

fn listing_page(rows: &[String], last_page_href: &str) -> String {
    format!(
        r#"<html><body>
        <table>{}</table>
        <ul class="pagination">
            <li><a href="?page=1">1</a></li>
            <li><a href="{last_page_href}">Last</a></li>
        </ul>
        </body></html>"#,
        rows.concat()
    )
}

/// Mounts a two-page listing: 3 rows on page 1, 2 rows on page 2
async fn mount_two_page_listing(server: &MockServer) {
    let page1 = listing_page(
        &[
            proxy_row("10.0.0.1", 8080),
            proxy_row("10.0.0.2", 3128),
            proxy_row("10.0.0.3", 80),
        ],
        "?page=2",
    );
    let page2 = listing_page(
        &[proxy_row("10.0.1.1", 1080), proxy_row("10.0.1.2", 8888)],
        "?page=2",
    );

    // Specific mock first: wiremock picks the first matching mock in mount order
    Mock::given(method("GET"))
        .and(path("/list"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page2))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page1))
        .mount(server)
        .await;
}

fn fixture_config(entry_url: &str, dir: &Path, job_count: u32, limit: u32) -> Config {
    Config {
        crawler: CrawlerConfig {
            base_url: entry_url.to_string(),
            job_count,
            max_concurrent_jobs: limit,
        },
        output: OutputConfig {
            snapshot_path: dir.join("proxies.json").display().to_string(),
            database_path: dir.join("proxies.db").display().to_string(),
            pages_dir: dir.join("html_pages").display().to_string(),
        },
    }
}

async fn run_batch(config: Config) {
    let log = SqliteExecutionLog::new(Path::new(&config.output.database_path))
        .expect("Failed to open execution log");
    let log: Arc<Mutex<dyn ExecutionLog + Send>> = Arc::new(Mutex::new(log));
    let sink = Sink::new(config.output.snapshot_path.clone(), log);

    let client = build_http_client().expect("Failed to build HTTP client");
    let orchestrator = Orchestrator::new(config, sink, move || HttpRenderer::new(client.clone()));

    let report = orchestrator.run().await;
    assert_eq!(report.jobs_failed, 0, "no job should fail against the fixture");
}

#[tokio::test]
async fn test_two_page_fixture_end_to_end() {
    let server = MockServer::start().await;
    mount_two_page_listing(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let entry_url = format!("{}/list", server.uri());
    let config = fixture_config(&entry_url, dir.path(), 1, 1);
    let snapshot_path = config.output.snapshot_path.clone();
    let database_path = config.output.database_path.clone();
    let pages_dir = config.output.pages_dir.clone();

    run_batch(config).await;

    // Snapshot holds all 5 records in page-then-row order
    let snapshot = std::fs::read_to_string(&snapshot_path).unwrap();
    let records: Vec<ProxyRecord> = serde_json::from_str(&snapshot).unwrap();
    let addresses: Vec<&str> = records.iter().map(|r| r.address.as_str()).collect();
    assert_eq!(
        addresses,
        vec!["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.1.1", "10.0.1.2"]
    );

    // Exactly one log row with the true record count and placeholder page count
    let log = SqliteExecutionLog::new(Path::new(&database_path)).unwrap();
    let runs = log.list_runs().unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].total_proxies, 5);
    assert_eq!(runs[0].total_pages, 0);
    assert!(runs[0].started_at < runs[0].finished_at);

    // One raw-markup artifact per crawled page
    assert!(Path::new(&pages_dir).join("page_1.html").exists());
    assert!(Path::new(&pages_dir).join("page_2.html").exists());
    assert!(!Path::new(&pages_dir).join("page_3.html").exists());
}

#[tokio::test]
async fn test_rerun_overwrites_snapshot_and_appends_log() {
    let server = MockServer::start().await;
    mount_two_page_listing(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let entry_url = format!("{}/list", server.uri());

    let config = fixture_config(&entry_url, dir.path(), 1, 1);
    let snapshot_path = config.output.snapshot_path.clone();
    let database_path = config.output.database_path.clone();

    run_batch(config).await;
    let first_snapshot = std::fs::read(&snapshot_path).unwrap();

    run_batch(fixture_config(&entry_url, dir.path(), 1, 1)).await;
    let second_snapshot = std::fs::read(&snapshot_path).unwrap();

    // Identical fixture input produces a byte-identical snapshot
    assert_eq!(first_snapshot, second_snapshot);

    // The log accumulates one independent row per completed job
    let log = SqliteExecutionLog::new(Path::new(&database_path)).unwrap();
    assert_eq!(log.list_runs().unwrap().len(), 2);
}

#[tokio::test]
async fn test_concurrent_jobs_share_sinks() {
    let server = MockServer::start().await;
    mount_two_page_listing(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let entry_url = format!("{}/list", server.uri());
    let config = fixture_config(&entry_url, dir.path(), 10, 3);
    let snapshot_path = config.output.snapshot_path.clone();
    let database_path = config.output.database_path.clone();

    run_batch(config).await;

    // The snapshot reflects some completed job's full record set; which job
    // wrote last is a known non-deterministic outcome.
    let snapshot = std::fs::read_to_string(&snapshot_path).unwrap();
    let records: Vec<ProxyRecord> = serde_json::from_str(&snapshot).unwrap();
    assert_eq!(records.len(), 5);

    // One log row per job regardless of interleaving
    let log = SqliteExecutionLog::new(Path::new(&database_path)).unwrap();
    let runs = log.list_runs().unwrap();
    assert_eq!(runs.len(), 10);
    assert!(runs.iter().all(|r| r.total_proxies == 5 && r.total_pages == 0));
}

#[tokio::test]
async fn test_single_page_listing_without_pagination() {
    let server = MockServer::start().await;

    let page = format!(
        "<html><body><table>{}</table></body></html>",
        proxy_row("192.168.0.1", 9090)
    );
    Mock::given(method("GET"))
        .and(path("/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let entry_url = format!("{}/list", server.uri());
    let config = fixture_config(&entry_url, dir.path(), 1, 1);
    let snapshot_path = config.output.snapshot_path.clone();
    let pages_dir = config.output.pages_dir.clone();

    run_batch(config).await;

    let records: Vec<ProxyRecord> =
        serde_json::from_str(&std::fs::read_to_string(&snapshot_path).unwrap()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].address, "192.168.0.1");
    assert_eq!(records[0].port, 9090);

    assert!(Path::new(&pages_dir).join("page_1.html").exists());
    assert!(!Path::new(&pages_dir).join("page_2.html").exists());
}
