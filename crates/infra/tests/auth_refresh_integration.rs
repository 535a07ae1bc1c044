//! End-to-end behaviour of the 401 → refresh → replay pipeline against a
//! mock API server.

mod support;

use std::time::Duration;

use reqwest::StatusCode;
use support::{pair_json, profile_json, TestApi};
use tasks_domain::CredentialPair;
use tasks_infra::{ApiError, AuthExhaustedReason, OutboundRequest};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, ResponseTemplate};

async fn mount_refresh(test: &TestApi, refresh: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_string(refresh))
        .respond_with(response)
        .mount(&test.server)
        .await;
}

#[tokio::test]
async fn valid_credentials_pass_through_without_refresh() {
    let test = TestApi::logged_in("access-1", "refresh-1").await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json()))
        .expect(1)
        .mount(&test.server)
        .await;

    let profile = test.api.get_profile().await.expect("profile");

    assert_eq!(profile.display_name, "Ada");
    assert_eq!(test.hits("/auth/refresh").await, 0);
    assert_eq!(test.credentials().await, Some(CredentialPair::new("access-1", "refresh-1")));
}

#[tokio::test]
async fn expired_access_is_refreshed_and_request_replayed_once() {
    let test = TestApi::logged_in("stale", "refresh-1").await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&test.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json()))
        .expect(1)
        .mount(&test.server)
        .await;
    mount_refresh(
        &test,
        "refresh-1",
        ResponseTemplate::new(200).set_body_json(pair_json("fresh", "refresh-2")),
    )
    .await;

    let profile = test.api.get_profile().await.expect("replayed profile");

    assert_eq!(profile.id, "user-1");
    assert_eq!(test.hits("/auth/refresh").await, 1);
    assert_eq!(test.hits("/profile").await, 2);
    assert_eq!(test.credentials().await, Some(CredentialPair::new("fresh", "refresh-2")));
}

#[tokio::test]
async fn replay_keeps_request_id_and_body() {
    let test = TestApi::logged_in("stale", "refresh-1").await;
    Mock::given(method("POST"))
        .and(path("/lists"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&test.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/lists"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&test.server)
        .await;
    mount_refresh(
        &test,
        "refresh-1",
        ResponseTemplate::new(200).set_body_json(pair_json("fresh", "refresh-2")),
    )
    .await;

    let request = OutboundRequest::post("/lists")
        .json(&serde_json::json!({ "title": "Groceries" }))
        .expect("json body");
    let response = test.http.send(&request).await.expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let requests = test.server.received_requests().await.expect("recorded requests");
    let attempts: Vec<_> = requests.iter().filter(|r| r.url.path() == "/lists").collect();
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0].body, attempts[1].body);
    assert_eq!(
        attempts[0].headers.get("x-request-id"),
        attempts[1].headers.get("x-request-id")
    );
    assert_eq!(
        attempts[0].headers.get("x-request-id").and_then(|v| v.to_str().ok()),
        Some(request.id().to_string().as_str())
    );
}

#[tokio::test]
async fn second_401_is_propagated_without_another_refresh() {
    let test = TestApi::logged_in("stale", "refresh-1").await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Not a member"))
        .expect(2)
        .mount(&test.server)
        .await;
    mount_refresh(
        &test,
        "refresh-1",
        ResponseTemplate::new(200).set_body_json(pair_json("fresh", "refresh-2")),
    )
    .await;

    let err = test.api.get_profile().await.unwrap_err();

    match &err {
        ApiError::Business { status, body } => {
            assert_eq!(*status, StatusCode::UNAUTHORIZED);
            assert_eq!(body, "Not a member");
        }
        other => panic!("expected the replayed 401, got {other:?}"),
    }
    assert_eq!(test.hits("/auth/refresh").await, 1);
    assert_eq!(test.credentials().await, Some(CredentialPair::new("fresh", "refresh-2")));
    assert!(test.stored_profile().await.is_some());
}

#[tokio::test]
async fn missing_refresh_credential_clears_session_without_refresh_call() {
    let test = TestApi::logged_in("stale", "").await;
    Mock::given(method("GET"))
        .and(path("/lists"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Token expired"))
        .expect(1)
        .mount(&test.server)
        .await;

    let err = test.api.get_lists().await.unwrap_err();

    assert!(matches!(
        &err,
        ApiError::AuthExhausted(AuthExhaustedReason::NoRefreshCredential { body }) if body == "Token expired"
    ));
    assert_eq!(test.hits("/auth/refresh").await, 0);
    assert_eq!(test.credentials().await, None);
    assert_eq!(test.stored_profile().await, None);
}

#[tokio::test]
async fn logged_out_request_receiving_401_stays_logged_out() {
    let test = TestApi::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&test.server)
        .await;

    let err = test.api.get_profile().await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::AuthExhausted(AuthExhaustedReason::NoRefreshCredential { .. })
    ));
    assert_eq!(test.hits("/auth/refresh").await, 0);
}

#[tokio::test]
async fn rejected_refresh_clears_credentials_and_profile() {
    let test = TestApi::logged_in("stale", "revoked").await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&test.server)
        .await;
    mount_refresh(&test, "revoked", ResponseTemplate::new(401)).await;

    let err = test.api.get_profile().await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::AuthExhausted(AuthExhaustedReason::RefreshRejected(StatusCode::UNAUTHORIZED))
    ));
    assert_eq!(test.credentials().await, None);
    assert_eq!(test.stored_profile().await, None);
}

#[tokio::test]
async fn refresh_is_sent_without_bearer() {
    let test = TestApi::logged_in("stale", "refresh-1").await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&test.server)
        .await;
    mount_refresh(&test, "refresh-1", ResponseTemplate::new(401)).await;

    let _ = test.api.get_profile().await;

    let requests = test.server.received_requests().await.expect("recorded requests");
    let refresh = requests
        .iter()
        .find(|r| r.url.path() == "/auth/refresh")
        .expect("refresh call");
    assert!(refresh.headers.get("authorization").is_none());
    assert_eq!(
        refresh.headers.get("content-type").and_then(|v| v.to_str().ok()),
        Some("text/plain; charset=utf-8")
    );
}

#[tokio::test]
async fn malformed_refresh_response_is_a_failed_refresh() {
    let test = TestApi::logged_in("stale", "refresh-1").await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&test.server)
        .await;
    mount_refresh(&test, "refresh-1", ResponseTemplate::new(200).set_body_string("not json"))
        .await;

    let err = test.api.get_profile().await.unwrap_err();

    assert!(matches!(err, ApiError::AuthExhausted(AuthExhaustedReason::RefreshFailed(_))));
    assert_eq!(test.credentials().await, None);
}

#[tokio::test]
async fn non_auth_errors_never_trigger_refresh() {
    let test = TestApi::logged_in("access-1", "refresh-1").await;
    Mock::given(method("GET"))
        .and(path("/lists"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&test.server)
        .await;

    let err = test.api.get_lists().await.unwrap_err();

    assert!(matches!(err, ApiError::Business { status, ref body }
        if status == StatusCode::INTERNAL_SERVER_ERROR && body == "boom"));
    assert_eq!(test.hits("/auth/refresh").await, 0);
    assert!(test.credentials().await.is_some());
}

#[tokio::test]
async fn concurrent_requests_keep_independent_retry_state() {
    let test = TestApi::logged_in("stale", "refresh-1").await;
    for route in ["/lists", "/profile"] {
        Mock::given(method("GET"))
            .and(path(route))
            .and(header("authorization", "Bearer stale"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&test.server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/lists"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&test.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json()))
        .mount(&test.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pair_json("fresh", "refresh-1")))
        .mount(&test.server)
        .await;

    let (lists, profile) = futures::join!(test.api.get_lists(), test.api.get_profile());

    assert!(lists.expect("lists").is_empty());
    assert_eq!(profile.expect("profile").id, "user-1");
    let refreshes = test.hits("/auth/refresh").await;
    assert!((1..=2).contains(&refreshes), "unexpected refresh count {refreshes}");
    assert_eq!(test.credentials().await, Some(CredentialPair::new("fresh", "refresh-1")));
}

#[tokio::test]
async fn slow_response_surfaces_as_timeout() {
    let test = TestApi::with_timeout(Duration::from_millis(100)).await;
    test.set_credentials(Some(CredentialPair::new("access-1", "refresh-1"))).await;
    Mock::given(method("GET"))
        .and(path("/lists"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&test.server)
        .await;

    let err = test.api.get_lists().await.unwrap_err();

    assert!(matches!(err, ApiError::Timeout(timeout) if timeout == Duration::from_millis(100)));
    assert!(err.should_retry());
    assert!(test.credentials().await.is_some());
}

#[tokio::test]
async fn slow_refresh_surfaces_as_refresh_timeout() {
    let test = TestApi::with_timeout(Duration::from_millis(100)).await;
    test.set_credentials(Some(CredentialPair::new("stale", "refresh-1"))).await;
    Mock::given(method("GET"))
        .and(path("/lists"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&test.server)
        .await;
    mount_refresh(
        &test,
        "refresh-1",
        ResponseTemplate::new(200)
            .set_body_json(pair_json("fresh", "refresh-2"))
            .set_delay(Duration::from_millis(500)),
    )
    .await;

    let err = test.api.get_lists().await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::AuthExhausted(AuthExhaustedReason::RefreshTimedOut(timeout))
            if timeout == Duration::from_millis(100)
    ));
    assert_eq!(test.credentials().await, None);
}

#[tokio::test]
async fn refresh_token_is_posted_exactly_as_stored() {
    let test = TestApi::logged_in("stale", " refresh-1 ").await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&test.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json()))
        .mount(&test.server)
        .await;
    mount_refresh(
        &test,
        " refresh-1 ",
        ResponseTemplate::new(200).set_body_json(pair_json("fresh", "refresh-2")),
    )
    .await;

    test.api.get_profile().await.expect("profile after refresh");

    assert_eq!(test.credentials().await, Some(CredentialPair::new("fresh", "refresh-2")));
}
