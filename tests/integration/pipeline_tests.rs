//! Integration tests for the scrape pipeline
//!
//! These tests use wiremock as the portal endpoint and a temporary cache
//! directory to run the full pipeline end-to-end.

use ncaa_denied_courses::config::{CacheConfig, Config, PortalConfig};
use ncaa_denied_courses::crawler::scrape_state;
use ncaa_denied_courses::storage::CacheError;
use ncaa_denied_courses::{ParseError, ScrapeError};
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{body_string, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PORTAL_PATH: &str = "/hsportal/exec/hsAction";
const TEST_AGENT: &str = "TestAgent/1.0";

const STATE_LIST: &str = include_str!("../fixtures/schools_TX.html");
const EMPTY_LIST: &str = include_str!("../fixtures/schools_empty.html");
const CENTRAL_DETAIL: &str = include_str!("../fixtures/school_441234.html");
const LINCOLN_DETAIL: &str = include_str!("../fixtures/school_445678.html");
const EMPTY_DETAIL: &str = include_str!("../fixtures/school_empty_denied.html");
const NO_DENIED_DETAIL: &str = include_str!("../fixtures/school_no_denied.html");

const HEADER: &str = "hs_code,high_school_name,city,state,subject,course_weight,title,notes,max_credits,ok_through,reason_code,disability_course";

/// Creates a test configuration pointing at the mock portal
fn create_test_config(base_url: &str) -> Config {
    Config {
        portal: PortalConfig {
            endpoint: format!("{}{}", base_url, PORTAL_PATH),
            user_agent: TEST_AGENT.to_string(),
            timeout_secs: Some(10),
        },
        cache: CacheConfig::default(),
    }
}

/// Mounts the state search mock
async fn mount_state_list(server: &MockServer, body: &'static str) {
    Mock::given(method("POST"))
        .and(path(PORTAL_PATH))
        .and(header("user-agent", TEST_AGENT))
        .and(body_string(
            "hsCode=&ceebCode=&state=TX&city=&name=&hsActionSubmit=Search",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Mounts the detail page mock of one school
async fn mount_school(server: &MockServer, hs_code: &str, body: &'static str) {
    Mock::given(method("POST"))
        .and(path(PORTAL_PATH))
        .and(header("user-agent", TEST_AGENT))
        .and(body_string_contains(format!("hsCode={}&", hs_code)))
        .and(body_string_contains("&state=&"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .len()
}

async fn run(config: &Config, cache_root: &Path) -> (Result<(), ScrapeError>, String) {
    let mut output = Vec::new();
    let result = scrape_state(config, "TX", cache_root, &mut output)
        .await
        .map(|_| ());
    (result, String::from_utf8(output).expect("CSV is UTF-8"))
}

#[tokio::test]
async fn test_full_scrape_writes_joined_rows() {
    let mock_server = MockServer::start().await;
    mount_state_list(&mock_server, STATE_LIST).await;
    mount_school(&mock_server, "441234", CENTRAL_DETAIL).await;
    mount_school(&mock_server, "445678", LINCOLN_DETAIL).await;
    mount_school(&mock_server, "440001", EMPTY_DETAIL).await;

    let cache_dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri());

    let mut output = Vec::new();
    let stats = scrape_state(&config, "TX", cache_dir.path(), &mut output)
        .await
        .expect("Scrape failed");
    let csv = String::from_utf8(output).unwrap();

    let lines: Vec<&str> = csv.split_terminator("\r\n").collect();
    assert_eq!(
        lines,
        vec![
            HEADER,
            "441234,Central High School,Austin,TX,English,1.0,Creative Writing & Poetry,,0.50,2015,D,N",
            "441234,Central High School,Austin,TX,English,1.0,Journalism I,Elective only,1.00,,A,N",
            "441234,Central High School,Austin,TX,Mathematics,1.0,Algebra & Geometry,Below grade level,1.00,2018,B,Y",
            "441234,Central High School,Austin,TX,Social Science,0.5,\"Current Events, \"\"Today\"\"\",Taken before 9th grade,0.50,2012,C,N",
            "445678,Lincoln Academy & Prep,El Paso,TX,Natural/Physical Science,1.0,Earth Science (Lab),,1.00,2016,E,N",
        ]
    );

    assert_eq!(stats.schools, 3);
    assert_eq!(stats.schools_processed, 3);
    assert_eq!(stats.rows_written, 5);
    assert_eq!(stats.fetches, 4);
    assert_eq!(stats.cache_hits, 0);

    for name in [
        "schools_TX.html",
        "school_441234.html",
        "school_445678.html",
        "school_440001.html",
    ] {
        assert!(
            cache_dir.path().join(name).is_file(),
            "Expected cache file {}",
            name
        );
    }
}

#[tokio::test]
async fn test_cached_run_is_identical_and_offline() {
    let mock_server = MockServer::start().await;
    mount_state_list(&mock_server, STATE_LIST).await;
    mount_school(&mock_server, "441234", CENTRAL_DETAIL).await;
    mount_school(&mock_server, "445678", LINCOLN_DETAIL).await;
    mount_school(&mock_server, "440001", EMPTY_DETAIL).await;

    let cache_dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri());

    let (first_result, first_csv) = run(&config, cache_dir.path()).await;
    first_result.expect("First run failed");
    assert_eq!(request_count(&mock_server).await, 4);

    let (second_result, second_csv) = run(&config, cache_dir.path()).await;
    second_result.expect("Second run failed");

    assert_eq!(first_csv, second_csv);
    assert_eq!(
        request_count(&mock_server).await,
        4,
        "Second run must not touch the network"
    );
}

#[tokio::test]
async fn test_prepopulated_cache_needs_no_portal() {
    let mock_server = MockServer::start().await;
    let cache_dir = TempDir::new().unwrap();

    std::fs::write(cache_dir.path().join("schools_TX.html"), STATE_LIST).unwrap();
    std::fs::write(cache_dir.path().join("school_441234.html"), CENTRAL_DETAIL).unwrap();
    std::fs::write(cache_dir.path().join("school_445678.html"), LINCOLN_DETAIL).unwrap();
    std::fs::write(cache_dir.path().join("school_440001.html"), EMPTY_DETAIL).unwrap();

    let config = create_test_config(&mock_server.uri());
    let mut output = Vec::new();
    let stats = scrape_state(&config, "TX", cache_dir.path(), &mut output)
        .await
        .expect("Scrape failed");

    assert_eq!(stats.cache_hits, 4);
    assert_eq!(stats.fetches, 0);
    assert_eq!(stats.rows_written, 5);
    assert_eq!(request_count(&mock_server).await, 0);
}

#[tokio::test]
async fn test_empty_state_list_writes_header_only() {
    let mock_server = MockServer::start().await;
    mount_state_list(&mock_server, EMPTY_LIST).await;

    let cache_dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri());

    let (result, csv) = run(&config, cache_dir.path()).await;
    result.expect("Scrape failed");

    assert_eq!(csv, format!("{}\r\n", HEADER));
    assert_eq!(request_count(&mock_server).await, 1);
}

#[tokio::test]
async fn test_missing_denied_container_aborts_after_prior_rows() {
    let mock_server = MockServer::start().await;
    mount_state_list(&mock_server, STATE_LIST).await;
    mount_school(&mock_server, "441234", CENTRAL_DETAIL).await;
    mount_school(&mock_server, "445678", LINCOLN_DETAIL).await;
    mount_school(&mock_server, "440001", NO_DENIED_DETAIL).await;

    let cache_dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri());

    let (result, csv) = run(&config, cache_dir.path()).await;

    assert!(matches!(
        result,
        Err(ScrapeError::Parse(ParseError::MissingElement { .. }))
    ));

    // Header plus the rows of the two schools processed before the failure
    let lines: Vec<&str> = csv.split_terminator("\r\n").collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], HEADER);
    assert!(lines[5].starts_with("445678,"));

    // The page was cached before parsing failed
    assert!(cache_dir.path().join("school_440001.html").is_file());
}

#[tokio::test]
async fn test_error_status_body_still_used() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PORTAL_PATH))
        .and(body_string_contains("state=TX"))
        .respond_with(ResponseTemplate::new(500).set_body_string(EMPTY_LIST))
        .expect(1)
        .mount(&mock_server)
        .await;

    let cache_dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri());

    let (result, csv) = run(&config, cache_dir.path()).await;
    result.expect("Status codes are not checked");

    assert_eq!(csv, format!("{}\r\n", HEADER));
    assert!(cache_dir.path().join("schools_TX.html").is_file());
}

#[tokio::test]
async fn test_unexpected_state_page_is_fatal() {
    let mock_server = MockServer::start().await;
    mount_state_list(
        &mock_server,
        include_str!("../fixtures/session_expired.html"),
    )
    .await;

    let cache_dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri());

    let (result, csv) = run(&config, cache_dir.path()).await;

    assert!(matches!(
        result,
        Err(ScrapeError::Parse(ParseError::MissingElement { .. }))
    ));
    assert!(csv.is_empty(), "Header is written only after the list parses");
}

#[tokio::test]
async fn test_network_error_is_fatal() {
    let cache_dir = TempDir::new().unwrap();
    // Nothing listens on port 1
    let config = create_test_config("http://127.0.0.1:1");

    let (result, csv) = run(&config, cache_dir.path()).await;

    assert!(matches!(result, Err(ScrapeError::Http { .. })));
    assert!(csv.is_empty());
    assert!(!cache_dir.path().join("schools_TX.html").exists());
}

#[tokio::test]
async fn test_cache_root_creation_failure_is_fatal() {
    let dir = TempDir::new().unwrap();
    let occupied = dir.path().join("cache");
    std::fs::write(&occupied, b"a file, not a directory").unwrap();

    let config = create_test_config("http://127.0.0.1:1");
    let (result, _) = run(&config, &occupied).await;

    assert!(matches!(
        result,
        Err(ScrapeError::Cache(CacheError::CreateRoot { .. }))
    ));
}

#[tokio::test]
async fn test_cache_root_created_when_missing() {
    let mock_server = MockServer::start().await;
    mount_state_list(&mock_server, EMPTY_LIST).await;

    let dir = TempDir::new().unwrap();
    let cache_root = dir.path().join("nested").join("_ncaa_courses_cache");
    let config = create_test_config(&mock_server.uri());

    let (result, _) = run(&config, &cache_root).await;
    result.expect("Scrape failed");

    assert!(cache_root.join("schools_TX.html").is_file());
}
