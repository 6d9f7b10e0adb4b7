mod common;

use apidoc_search::index::{HttpFetcher, IndexLocation, load};
use apidoc_search::{LoadError, Query, SearchSession};
use assert2::{check, let_assert};
use common::{TempSite, fixture_payload, serve_once, site};
use rstest::rstest;

fn fetcher() -> HttpFetcher {
    // Ignore proxy settings from the environment; the test server is local
    HttpFetcher::new(
        reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("Failed to build HTTP client"),
    )
}

fn remote(addr: std::net::SocketAddr) -> IndexLocation {
    format!("http://{}/index.json", addr)
        .parse()
        .expect("valid URL")
}

/// Test: a 200 response with the fixture payload loads.
#[tokio::test(flavor = "multi_thread")]
async fn loads_over_http() {
    let addr = serve_once("200 OK", fixture_payload().to_string()).await;

    let_assert!(Ok(index) = load(&fetcher(), &remote(addr)).await);
    check!(index.symbol_count() == 9);
    check!(index.postings("widget").is_some());
}

/// Test: HTTP 500 is a load failure and leaves search inert.
#[tokio::test(flavor = "multi_thread")]
async fn server_error_is_a_load_failure() {
    let addr = serve_once("500 Internal Server Error", fixture_payload().to_string()).await;
    let_assert!(
        Err(LoadError::Status { status: 500, .. }) = load(&fetcher(), &remote(addr)).await
    );

    let addr = serve_once("500 Internal Server Error", String::new()).await;
    let session = SearchSession::new(remote(addr));
    check!(session.ensure_loaded(&fetcher()).await.is_none());
    check!(session.is_settled());
    check!(session.search(&Query::parse("widget")) == None);
}

/// Test: a successful status with a non-JSON body is a parse failure.
#[tokio::test(flavor = "multi_thread")]
async fn html_body_is_a_parse_failure() {
    let addr = serve_once("200 OK", "<html><body>Not Found</body></html>".to_string()).await;
    let_assert!(Err(LoadError::Parse(_)) = load(&fetcher(), &remote(addr)).await);
}

/// Test: nothing listening is a transport failure.
#[tokio::test(flavor = "multi_thread")]
async fn connection_refused_is_a_transport_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let_assert!(Err(LoadError::Transport { .. }) = load(&fetcher(), &remote(addr)).await);
}

/// Test: local files load with status 0, including `file://` URLs.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn loads_local_files(site: TempSite) {
    let path = site.path().join("index.json");

    let_assert!(Ok(index) = load(&fetcher(), &IndexLocation::Local(path.clone())).await);
    check!(index.term_count() == 7);

    let url = url::Url::from_file_path(&path).expect("absolute path");
    let location: IndexLocation = url.as_str().parse().expect("file URL");
    check!(location == IndexLocation::Local(path));
    check!(load(&fetcher(), &location).await.is_ok());
}

/// Test: a missing local file is an I/O failure.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_local_file_is_io_failure(site: TempSite) {
    let_assert!(
        Err(LoadError::Io { .. }) = load(&fetcher(), &site.location("missing.json")).await
    );
}
