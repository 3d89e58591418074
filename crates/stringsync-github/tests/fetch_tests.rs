use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use stringsync::{FileFetcher, RemoteError, RepoIdentity};
use stringsync_github::{GitHubClient, GitHubClientConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::new(GitHubClientConfig {
        raw_base_url: Some(server.uri()),
        ..Default::default()
    })
}

fn identity() -> RepoIdentity {
    RepoIdentity::new("octocat", "Hello-World")
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("stringsync-github-{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

const STRINGS_XML: &str =
    "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n    <string name=\"app\">App</string>\n</resources>\n";

#[tokio::test]
async fn fetch_writes_the_raw_file_to_dest() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/octocat/Hello-World/master/res/values-es/strings.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STRINGS_XML))
        .mount(&server)
        .await;

    let dir = temp_dir("writes");
    let dest = dir.join("octocat/Hello-World/strings-es.xml");

    client_for(&server)
        .fetch(&identity(), "res/values-es/strings.xml", &dest)
        .await
        .unwrap();

    assert_eq!(std::fs::read_to_string(&dest).unwrap(), STRINGS_XML);
    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn fetch_overwrites_an_existing_file() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/octocat/Hello-World/master/res/values/strings.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STRINGS_XML))
        .mount(&server)
        .await;

    let dir = temp_dir("overwrites");
    let dest = dir.join("strings.xml");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(&dest, "stale local content").unwrap();

    client_for(&server)
        .fetch(&identity(), "res/values/strings.xml", &dest)
        .await
        .unwrap();

    assert_eq!(std::fs::read_to_string(&dest).unwrap(), STRINGS_XML);
    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn fetch_honors_the_configured_branch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/octocat/Hello-World/main/res/values/strings.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STRINGS_XML))
        .mount(&server)
        .await;

    let client = GitHubClient::new(GitHubClientConfig {
        branch: "main".into(),
        raw_base_url: Some(server.uri()),
        ..Default::default()
    });

    let dir = temp_dir("branch");
    let dest = dir.join("strings.xml");
    client
        .fetch(&identity(), "res/values/strings.xml", &dest)
        .await
        .unwrap();

    assert!(dest.is_file());
    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn missing_remote_file_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = temp_dir("missing");
    let result = client_for(&server)
        .fetch(&identity(), "res/values/strings.xml", &dir.join("strings.xml"))
        .await;

    assert!(matches!(result, Err(RemoteError::NotFound(_))));
    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn transfer_observer_sees_progress() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/octocat/Hello-World/master/res/values/strings.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STRINGS_XML))
        .mount(&server)
        .await;

    let seen = Arc::new(AtomicU64::new(0));
    let observed = Arc::clone(&seen);
    let client = client_for(&server).with_transfer_observer(Box::new(move |received, _total| {
        observed.store(received, Ordering::Relaxed);
    }));

    let dir = temp_dir("observer");
    client
        .fetch(&identity(), "res/values/strings.xml", &dir.join("strings.xml"))
        .await
        .unwrap();

    // The first emission always passes the throttle.
    assert!(seen.load(Ordering::Relaxed) > 0);
    let _ = std::fs::remove_dir_all(&dir);
}
