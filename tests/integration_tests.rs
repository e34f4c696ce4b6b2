//! Integration tests for the wedding site
//!
//! These tests start the real router on a local port and drive it over
//! HTTP, with a fixed clock and a mocked EmailJS endpoint.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use wedding_site::{
    config::Config,
    content,
    countdown::Clock,
    server::{self, AppState, CountdownResponse, LocaleResponse, RsvpResponse},
};

// ==================== Test Helpers ====================

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn create_test_config(emailjs_url: &str, api_key: Option<&str>) -> Config {
    Config {
        port: 0,
        assets_dir: "assets".to_string(),
        wedding_date: content::wedding_target().unwrap(),
        emailjs_api_url: emailjs_url.to_string(),
        emailjs_service_id: "wedding_mail_service".to_string(),
        emailjs_template_id: "template_test".to_string(),
        emailjs_public_key: "public-key".to_string(),
        emailjs_private_key: None,
        rsvp_timeout_secs: 2,
        preferences_path: "data/preferences.json".to_string(),
        api_key: api_key.map(str::to_string),
    }
}

/// Serve the router on an ephemeral port and return its base URL.
async fn spawn_app(config: Config, now: DateTime<Utc>) -> String {
    let state = AppState::with_clock(config, Arc::new(FixedClock(now))).unwrap();
    let app = server::router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn two_days_before() -> DateTime<Utc> {
    // 2026-09-22T16:00:00+01:00 is 15:00 UTC
    Utc.with_ymd_and_hms(2026, 9, 20, 12, 30, 15).unwrap()
}

fn rsvp_body(attendance: &str) -> Value {
    json!({
        "name": "Aida Benali",
        "email": "aida@example.com",
        "attendance": attendance,
        "guestCount": "2",
        "dietaryRestrictions": "Vegetarian",
        "message": "Congratulations!"
    })
}

// ==================== Page Tests ====================

#[tokio::test]
async fn test_health_and_index() {
    let base = spawn_app(create_test_config("http://127.0.0.1:9", None), two_days_before()).await;
    let client = reqwest::Client::new();

    let health = client.get(format!("{}/health", base)).send().await.unwrap();
    assert_eq!(health.status(), 200);
    assert_eq!(health.text().await.unwrap(), "OK");

    let index = client.get(&base).send().await.unwrap();
    assert_eq!(index.status(), 200);
    let html = index.text().await.unwrap();
    assert!(html.contains("data-i18n=\"countdown.days\""));
    assert!(html.contains("/api/countdown"));
}

#[tokio::test]
async fn test_content_endpoint() {
    let base = spawn_app(create_test_config("http://127.0.0.1:9", None), two_days_before()).await;

    let body: Value = reqwest::get(format!("{}/api/content", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["timeline"].as_array().unwrap().len(), 5);
    assert_eq!(body["music"]["url"], "/assets/music.mp3");
}

// ==================== Countdown Tests ====================

#[tokio::test]
async fn test_countdown_before_wedding() {
    let base = spawn_app(create_test_config("http://127.0.0.1:9", None), two_days_before()).await;

    let countdown: CountdownResponse = reqwest::get(format!("{}/api/countdown", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(!countdown.expired);
    assert_eq!(countdown.days, 2);
    assert_eq!(countdown.hours, 2);
    assert_eq!(countdown.minutes, 29);
    assert_eq!(countdown.seconds, 45);
    assert_eq!(countdown.target, "2026-09-22T16:00:00+01:00");
}

#[tokio::test]
async fn test_countdown_after_wedding_shows_zeros() {
    let after = Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap();
    let base = spawn_app(create_test_config("http://127.0.0.1:9", None), after).await;

    let countdown: CountdownResponse = reqwest::get(format!("{}/api/countdown", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(countdown.expired);
    assert_eq!(
        (countdown.days, countdown.hours, countdown.minutes, countdown.seconds),
        (0, 0, 0, 0)
    );
}

// ==================== Locale Tests ====================

#[tokio::test]
async fn test_default_locale_is_english_ltr() {
    let base = spawn_app(create_test_config("http://127.0.0.1:9", None), two_days_before()).await;

    let locale: LocaleResponse = reqwest::get(format!("{}/api/locale", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(locale.code, "en");
    assert_eq!(locale.dir, "ltr");
    assert_eq!(locale.lang, "en");
    assert_eq!(locale.strings["nav.rsvp"], "RSVP");
}

#[tokio::test]
async fn test_locale_cookie_round_trip() {
    let base = spawn_app(create_test_config("http://127.0.0.1:9", None), two_days_before()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/locale", base))
        .json(&json!({ "code": "ar" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let cookie = response
        .headers()
        .get("set-cookie")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("wedding-language=ar"));

    let switched: LocaleResponse = response.json().await.unwrap();
    assert_eq!(switched.dir, "rtl");

    // A later visit carrying the cookie starts in Arabic
    let locale: LocaleResponse = client
        .get(format!("{}/api/locale", base))
        .header("cookie", "wedding-language=ar")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(locale.code, "ar");
    assert_eq!(locale.dir, "rtl");
    assert_eq!(locale.lang, "ar");
    assert_eq!(locale.native_name, "العربية");
}

#[tokio::test]
async fn test_toggle_switches_to_other_locale() {
    let base = spawn_app(create_test_config("http://127.0.0.1:9", None), two_days_before()).await;
    let client = reqwest::Client::new();

    let locale: LocaleResponse = client
        .post(format!("{}/api/locale/toggle", base))
        .header("cookie", "wedding-language=ar")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(locale.code, "en");
    assert_eq!(locale.dir, "ltr");
}

#[tokio::test]
async fn test_unsupported_locale_is_rejected() {
    let base = spawn_app(create_test_config("http://127.0.0.1:9", None), two_days_before()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/locale", base))
        .json(&json!({ "code": "fr" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert!(response.headers().get("set-cookie").is_none());
}

#[tokio::test]
async fn test_invalid_cookie_falls_back_to_default() {
    let base = spawn_app(create_test_config("http://127.0.0.1:9", None), two_days_before()).await;

    let locale: LocaleResponse = reqwest::Client::new()
        .get(format!("{}/api/locale", base))
        .header("cookie", "wedding-language=xx")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(locale.code, "en");
}

// ==================== Translate Tests ====================

#[tokio::test]
async fn test_translate_resolves_and_falls_back() {
    let base = spawn_app(create_test_config("http://127.0.0.1:9", None), two_days_before()).await;
    let client = reqwest::Client::new();

    let found: Value = client
        .get(format!("{}/api/translate?key=countdown.days", base))
        .header("cookie", "wedding-language=ar")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(found["lang"], "ar");
    assert_ne!(found["value"], "countdown.days");

    let missing: Value = client
        .get(format!("{}/api/translate?key=nav.nowhere", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(missing["value"], "nav.nowhere");
}

// ==================== RSVP Tests ====================

#[tokio::test]
async fn test_rsvp_success() {
    let emailjs = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .and(body_partial_json(json!({
            "service_id": "wedding_mail_service",
            "template_params": { "name": "Aida Benali", "guestCount": "2" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&emailjs)
        .await;

    let base = spawn_app(create_test_config(&emailjs.uri(), None), two_days_before()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/rsvp", base))
        .json(&rsvp_body("yes"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: RsvpResponse = response.json().await.unwrap();
    assert_eq!(body.title, "Thank You!");
}

#[tokio::test]
async fn test_rsvp_declined_message_is_localized() {
    let emailjs = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "template_params": { "attendance": "no", "guestCount": "N/A" }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&emailjs)
        .await;

    let base = spawn_app(create_test_config(&emailjs.uri(), None), two_days_before()).await;

    let body: RsvpResponse = reqwest::Client::new()
        .post(format!("{}/api/rsvp", base))
        .header("cookie", "wedding-language=ar")
        .json(&rsvp_body("no"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body.title, "شكراً لك!");
}

#[tokio::test]
async fn test_rsvp_invalid_form_is_not_sent() {
    let emailjs = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&emailjs)
        .await;

    let base = spawn_app(create_test_config(&emailjs.uri(), None), two_days_before()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/rsvp", base))
        .json(&json!({ "name": "A", "email": "not-an-email" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.unwrap();
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "email", "attendance"]);
}

#[tokio::test]
async fn test_rsvp_email_failure_returns_retry_prompt() {
    let emailjs = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal error"))
        .expect(1)
        .mount(&emailjs)
        .await;

    let base = spawn_app(create_test_config(&emailjs.uri(), None), two_days_before()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/rsvp", base))
        .json(&rsvp_body("yes"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 502);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["title"], "Error");
    assert_eq!(body["error"], "Failed to send RSVP. Please try again.");
}

#[tokio::test]
async fn test_malformed_bodies_get_json_errors() {
    let base = spawn_app(create_test_config("http://127.0.0.1:9", None), two_days_before()).await;
    let client = reqwest::Client::new();

    let rsvp = client
        .post(format!("{}/api/rsvp", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(rsvp.status(), 400);
    let body: Value = rsvp.json().await.unwrap();
    assert!(body["error"].is_string());

    let locale = client
        .post(format!("{}/api/locale", base))
        .body(r#"{"code":"ar"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(locale.status(), 415);
    let body: Value = locale.json().await.unwrap();
    assert!(body["error"].is_string());

    let translate = client
        .get(format!("{}/api/translate", base))
        .send()
        .await
        .unwrap();
    assert_eq!(translate.status(), 400);
    let body: Value = translate.json().await.unwrap();
    assert!(body["error"].is_string());
}

// ==================== Metrics Tests ====================

#[tokio::test]
async fn test_metrics_requires_api_key() {
    let base = spawn_app(
        create_test_config("http://127.0.0.1:9", Some("test-api-key")),
        two_days_before(),
    )
    .await;
    let client = reqwest::Client::new();

    let denied = client
        .get(format!("{}/api/metrics", base))
        .send()
        .await
        .unwrap();
    assert_eq!(denied.status(), 401);

    let allowed = client
        .get(format!("{}/api/metrics", base))
        .header("x-api-key", "test-api-key")
        .send()
        .await
        .unwrap();
    assert_eq!(allowed.status(), 200);

    let report: Value = allowed.json().await.unwrap();
    assert!(report.get("lookup_hit_rate").is_some());
    assert!(report.get("rsvp_sent").is_some());
}
