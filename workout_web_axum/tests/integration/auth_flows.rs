use reqwest::StatusCode;

use crate::common::mock_browser::{location, set_cookies};
use crate::common::{GOOD_TOKEN, MockBrowser, TestServer};

#[tokio::test]
async fn test_login_failure_repopulates_username_only() {
    let server = TestServer::start().await;
    let browser = MockBrowser::new(&server.base_url);

    let response = browser
        .post_form("/login", &[("username", "bob"), ("password", "wrong")])
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookies(&response).is_empty());

    let body = response.text().await.unwrap();
    assert!(body.contains("invalid credentials"));
    assert!(body.contains(r#"value="bob""#));
    assert!(!body.contains("wrong"), "password must not be rendered back");
}

#[tokio::test]
async fn test_login_success_sets_cookie_and_redirects() {
    let server = TestServer::start().await;
    let browser = MockBrowser::new(&server.base_url);

    let response = browser
        .post_form(
            "/login?redirectTo=%2Fprofile",
            &[("username", "bob"), ("password", "password123")],
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/profile");

    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with(&format!("auth_token={GOOD_TOKEN};")));
    assert!(cookies[0].contains("HttpOnly"));
    assert!(cookies[0].contains("SameSite=Strict"));
}

#[tokio::test]
async fn test_login_ignores_offsite_redirect() {
    let server = TestServer::start().await;
    let browser = MockBrowser::new(&server.base_url);

    let response = browser
        .post_form(
            "/login?redirectTo=https%3A%2F%2Fevil.example%2F",
            &[("username", "bob"), ("password", "password123")],
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/workouts");
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let server = TestServer::start().await;
    let browser = MockBrowser::new(&server.base_url);

    let response = browser
        .post_form("/login", &[("username", "bob"), ("password", "")])
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.text().await.unwrap().contains("Password is required."));
    assert!(server.backend.calls().is_empty());
}

#[tokio::test]
async fn test_login_page_banners() {
    let server = TestServer::start().await;
    let browser = MockBrowser::new(&server.base_url);

    let body = browser
        .get("/login?registered=true")
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Registration successful. Please log in."));

    let body = browser
        .get("/login?reason=session_expired&redirectTo=%2Fprofile")
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Your session has expired. Please log in again."));
    assert!(body.contains(r#"action="/login?redirectTo=%2Fprofile""#));
}

#[tokio::test]
async fn test_login_page_redirects_signed_in_user() {
    let server = TestServer::start().await;
    let browser = MockBrowser::with_token(&server.base_url, GOOD_TOKEN);

    let response = browser.get("/login").await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/workouts");
}

#[tokio::test]
async fn test_register_success_redirects_to_login() {
    let server = TestServer::start().await;
    let browser = MockBrowser::new(&server.base_url);

    let response = browser
        .post_form(
            "/register",
            &[
                ("username", "alice"),
                ("email", "alice@example.com"),
                ("password", "password123"),
                ("bio", ""),
            ],
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login?registered=true");

    let calls = server.backend.calls_to("POST", "/users");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].authorization, None);
    assert_eq!(calls[0].body.as_ref().unwrap()["email"], "alice@example.com");
}

#[tokio::test]
async fn test_register_validation_keeps_input() {
    let server = TestServer::start().await;
    let browser = MockBrowser::new(&server.base_url);

    let response = browser
        .post_form(
            "/register",
            &[
                ("username", "alice"),
                ("email", "not-an-email"),
                ("password", "password123"),
                ("bio", "Climber"),
            ],
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.text().await.unwrap();
    assert!(body.contains("Email must be a valid email address."));
    assert!(body.contains(r#"value="alice""#));
    assert!(body.contains(r#"value="not-an-email""#));
    assert!(body.contains("Climber"));
    assert!(!body.contains("password123"));
    assert!(server.backend.calls().is_empty());
}

#[tokio::test]
async fn test_register_shows_backend_rejection() {
    let server = TestServer::start().await;
    let browser = MockBrowser::new(&server.base_url);

    let response = browser
        .post_form(
            "/register",
            &[
                ("username", "taken"),
                ("email", "taken@example.com"),
                ("password", "password123"),
            ],
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().await.unwrap().contains("username already exists"));
}

#[tokio::test]
async fn test_profile_update() {
    let server = TestServer::start().await;
    let browser = MockBrowser::with_token(&server.base_url, GOOD_TOKEN);

    let body = browser.get("/profile").await.unwrap().text().await.unwrap();
    assert!(body.contains("bob@example.com"));
    assert!(body.contains("Lifter"));

    let response = browser
        .post_form("/profile", &[("username", "x"), ("bio", "")])
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(
        response
            .text()
            .await
            .unwrap()
            .contains("Username must be between 3 and 20 characters.")
    );
    assert!(server.backend.calls_to("PUT", "/users/me").is_empty());
}
