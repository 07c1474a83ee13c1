mod common;

use anyhow::{bail, Result};
use authform::authform::{
    form::{LOGIN_FORM_ID, LOGIN_USERNAME_FIELD},
    storage::{TOKEN_KEY, USERNAME_KEY},
    AuthError, CredentialStore, NoticeLevel, Outcome, SubmitEvent, ValidationError,
};
use common::{can_bind_localhost, Harness};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn login_sends_one_post_with_lowercased_username() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({"username": "alice", "password": "PaSsWoRd"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc123"})))
        .expect(1)
        .mount(&server)
        .await;

    let harness = Harness::new(&server.uri())?;
    let mut event = SubmitEvent::login("Alice", "PaSsWoRd");
    let outcome = harness.controller.handle_login(&mut event).await;

    assert!(event.default_prevented());
    assert!(outcome.is_success());
    server.verify().await;
    Ok(())
}

#[tokio::test]
async fn login_success_stores_token_and_entered_username() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc123"})))
        .mount(&server)
        .await;

    let harness = Harness::new(&server.uri())?;
    let mut event = SubmitEvent::login("  MixedCase ", "secret");
    let outcome = harness.controller.handle_login(&mut event).await;

    match outcome {
        Outcome::LoggedIn { username } => assert_eq!(username, "MixedCase"),
        other => bail!("unexpected outcome: {other:?}"),
    }

    assert_eq!(harness.store.get(TOKEN_KEY)?, Some("abc123".to_string()));
    assert_eq!(harness.store.get(USERNAME_KEY)?, Some("MixedCase".to_string()));
    assert_eq!(harness.navigator.targets(), vec!["index.html".to_string()]);

    let notice = harness.only_notice()?;
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, "Login successful!");
    Ok(())
}

#[tokio::test]
async fn login_401_reports_server_reason_without_side_effects() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "bad creds"})))
        .expect(1)
        .mount(&server)
        .await;

    let harness = Harness::new(&server.uri())?;
    let mut event = SubmitEvent::login("alice", "wrong");
    let outcome = harness.controller.handle_login(&mut event).await;

    assert!(matches!(
        outcome,
        Outcome::Failed(AuthError::InvalidCredentials(_))
    ));
    assert!(harness.store.is_empty()?);
    assert!(harness.navigator.targets().is_empty());

    let notice = harness.only_notice()?;
    assert_eq!(notice.level, NoticeLevel::Failure);
    assert!(notice.message.contains("bad creds"));
    Ok(())
}

#[tokio::test]
async fn login_non_json_body_is_invalid_response() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }

    for status in [200, 401, 500] {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(status).set_body_string("<h1>oops</h1>"))
            .mount(&server)
            .await;

        let harness = Harness::new(&server.uri())?;
        let mut event = SubmitEvent::login("alice", "pw");
        let outcome = harness.controller.handle_login(&mut event).await;

        assert!(matches!(
            outcome,
            Outcome::Failed(AuthError::InvalidResponse { .. })
        ));
        assert!(harness.store.is_empty()?);
        assert!(harness.navigator.targets().is_empty());
        assert_eq!(
            harness.only_notice()?.message,
            "Server returned invalid JSON: <h1>oops</h1>"
        );
    }
    Ok(())
}

#[tokio::test]
async fn login_200_without_token_is_generic_failure() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "try later"})))
        .mount(&server)
        .await;

    let harness = Harness::new(&server.uri())?;
    let mut event = SubmitEvent::login("alice", "pw");
    let outcome = harness.controller.handle_login(&mut event).await;

    assert!(!outcome.is_success());
    assert!(harness.store.is_empty()?);
    assert_eq!(harness.only_notice()?.message, "Error: try later");
    Ok(())
}

#[tokio::test]
async fn login_server_error_uses_default_message() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .mount(&server)
        .await;

    let harness = Harness::new(&server.uri())?;
    let mut event = SubmitEvent::login("alice", "pw");
    harness.controller.handle_login(&mut event).await;

    assert_eq!(harness.only_notice()?.message, "Error: Login failed");
    Ok(())
}

#[tokio::test]
async fn login_with_blank_field_sends_nothing() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc"})))
        .expect(0)
        .mount(&server)
        .await;

    let harness = Harness::new(&server.uri())?;

    for (username, password) in [("", "pw"), ("alice", ""), ("  ", "  ")] {
        let mut event = SubmitEvent::login(username, password);
        let outcome = harness.controller.handle_login(&mut event).await;
        assert!(event.default_prevented());
        assert!(matches!(
            outcome,
            Outcome::Aborted(ValidationError::MissingLoginFields)
        ));
    }

    let mut event = SubmitEvent::new(LOGIN_FORM_ID).with_field(LOGIN_USERNAME_FIELD, "alice");
    let outcome = harness.controller.handle_login(&mut event).await;
    assert!(matches!(
        outcome,
        Outcome::Aborted(ValidationError::MissingElements)
    ));

    let notices = harness.notifier.notices();
    assert_eq!(notices.len(), 4);
    assert_eq!(
        notices[0].message,
        "Please enter both username and password!"
    );
    assert_eq!(notices[3].message, "Form elements not found!");
    assert!(harness.store.is_empty()?);

    server.verify().await;
    Ok(())
}

#[tokio::test]
async fn login_transport_failure_is_network_error() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    // Grab a free port and release it so nothing is listening there.
    let port = std::net::TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();

    let harness = Harness::new(&format!("http://127.0.0.1:{port}"))?;
    let mut event = SubmitEvent::login("alice", "pw");
    let outcome = harness.controller.handle_login(&mut event).await;

    assert!(matches!(outcome, Outcome::Failed(AuthError::Network(_))));
    assert!(harness.only_notice()?.message.starts_with("Network Error: "));
    assert!(harness.navigator.targets().is_empty());
    Ok(())
}

#[tokio::test]
async fn second_login_overwrites_token() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"username": "alice", "password": "one"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "first"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"username": "bob", "password": "two"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "second"})))
        .mount(&server)
        .await;

    let harness = Harness::new(&server.uri())?;
    harness
        .controller
        .handle_login(&mut SubmitEvent::login("alice", "one"))
        .await;
    harness
        .controller
        .handle_login(&mut SubmitEvent::login("Bob", "two"))
        .await;

    assert_eq!(harness.store.get(TOKEN_KEY)?, Some("second".to_string()));
    assert_eq!(harness.store.get(USERNAME_KEY)?, Some("Bob".to_string()));
    Ok(())
}
