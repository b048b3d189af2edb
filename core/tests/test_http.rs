// tests/test_http.rs
// Ekte HttpTransport (ureq, blocking) mot lokal mock-server.
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sportsee_core::metrics::DataSource;
use sportsee_core::{
    ClientConfig, DataClient, FailureKind, FetchError, FixtureProvider, HttpTransport, Resource,
    StaticFixtures, Transport,
};

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        ..ClientConfig::default()
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn live_activity_is_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/18/activity"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {
            "userId": 18,
            "sessions": [
                { "day": "2020-07-01", "kilogram": 70, "calories": 240 },
                { "day": "2020-07-02", "kilogram": 69, "calories": 220 }
            ]
        }})))
        .expect(1)
        .mount(&server)
        .await;

    let client = DataClient::new(config_for(&server)).expect("client");
    let (points, live) = tokio::task::spawn_blocking(move || {
        let points = client.get_user_activity(18).expect("activity");
        let live = client
            .metrics()
            .source_count(Resource::Activity, DataSource::Live);
        (points, live)
    })
    .await
    .unwrap();

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].day, 1);
    assert_eq!(points[1].weight_kg, 69.0);
    assert_eq!(live, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_falls_back_to_fixture() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/12"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = DataClient::new(config_for(&server)).expect("client");
    let (user, failures) = tokio::task::spawn_blocking(move || {
        let user = client.get_user_data(12).expect("fallback");
        let failures = client
            .metrics()
            .failure_count(Resource::User, FailureKind::Transport);
        (user, failures)
    })
    .await
    .unwrap();

    assert_eq!(user, StaticFixtures.fixture(12).unwrap().user);
    assert_eq!(failures, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/12/performance"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&config_for(&server));
    let err = tokio::task::spawn_blocking(move || transport.get_json("/user/12/performance"))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
    assert_eq!(err.kind(), FailureKind::Shape);
}

#[tokio::test(flavor = "multi_thread")]
async fn status_code_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&config_for(&server));
    let err = tokio::task::spawn_blocking(move || transport.get_json("/user/77"))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, FetchError::Status(404)), "got {err:?}");
}
