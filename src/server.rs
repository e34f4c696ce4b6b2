//! HTTP surface of the site.
//!
//! The page at `/` is a static shell. Everything dynamic comes from the
//! JSON endpoints below, which the shell calls from the browser:
//!
//! - `GET  /api/countdown`        remaining time or expiry
//! - `GET  /api/locale`           visitor locale, direction and flattened strings
//! - `POST /api/locale`           switch locale (`{"code": "ar"}`), sets the cookie
//! - `POST /api/locale/toggle`    language switcher button
//! - `GET  /api/translate?key=`   single dot-path lookup
//! - `GET  /api/content`          static wedding content
//! - `POST /api/rsvp`             validate and email an RSVP
//! - `GET  /api/metrics`          counters, behind `X-API-Key` when configured
//!
//! The locale preference travels in the `wedding-language` cookie, so each
//! request gets its own `LocaleResolver` and handlers share no mutable state.

use crate::config::Config;
use crate::content::{WeddingContent, CONTENT};
use crate::countdown::{compute, Clock, SystemClock};
use crate::i18n::strings::dictionary_tree;
use crate::i18n::{flatten, DocumentAttributes, LocaleError, LocaleResolver};
use crate::metrics::SiteMetrics;
use crate::preferences::CookiePreferences;
use crate::rsvp::{Attendance, EmailJsClient, EmailJsSettings, InvalidForm, RsvpForm};
use crate::security;
use anyhow::{Context, Result};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::{CookieJar, WithRejection};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Shared, read-only state for all handlers.
pub struct AppState {
    pub config: Config,
    pub mailer: EmailJsClient,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
        let mailer = EmailJsClient::new(EmailJsSettings::from_config(&config))?;
        Ok(Self {
            config,
            mailer,
            clock,
        })
    }
}

// ==================== Errors ====================

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error(transparent)]
    InvalidRsvp(#[from] InvalidForm),

    #[error(transparent)]
    MalformedJson(#[from] JsonRejection),

    #[error(transparent)]
    MalformedQuery(#[from] QueryRejection),

    /// Generic, localized retry prompt; the detail is only logged.
    #[error("{message}")]
    SubmissionFailed {
        title: &'static str,
        message: &'static str,
    },

    #[error("Invalid or missing API key")]
    Unauthorized,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Locale(e) => (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() })),
            ApiError::InvalidRsvp(InvalidForm(fields)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": self.to_string(), "fields": fields }),
            ),
            ApiError::MalformedJson(rejection) => {
                (rejection.status(), json!({ "error": rejection.body_text() }))
            }
            ApiError::MalformedQuery(rejection) => {
                (rejection.status(), json!({ "error": rejection.body_text() }))
            }
            ApiError::SubmissionFailed { title, message } => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": message, "title": title }),
            ),
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, json!({ "error": self.to_string() }))
            }
        };

        (status, Json(body)).into_response()
    }
}

// ==================== Router ====================

pub fn router(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/countdown", get(countdown))
        .route("/api/locale", get(get_locale).post(set_locale))
        .route("/api/locale/toggle", post(toggle_locale))
        .route("/api/translate", get(translate))
        .route("/api/content", get(content))
        .route("/api/rsvp", post(submit_rsvp))
        .route("/api/metrics", get(metrics))
        .nest_service("/assets", assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind, serve until Ctrl-C, then shut down gracefully.
pub async fn run(config: Config) -> Result<()> {
    let port = config.port;
    let state = Arc::new(AppState::new(config)?);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}

fn resolver_for(jar: CookieJar) -> LocaleResolver<CookiePreferences> {
    LocaleResolver::initialize(CookiePreferences::new(jar))
}

/// Response body for the resolver's locale, plus the jar carrying any
/// preference it wrote.
fn locale_reply(resolver: LocaleResolver<CookiePreferences>) -> (CookieJar, Json<LocaleResponse>) {
    let body = locale_response(&resolver);
    (resolver.into_store().into_jar(), Json(body))
}

// ==================== Handlers ====================

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountdownResponse {
    pub expired: bool,
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub target: String,
}

async fn countdown(State(state): State<Arc<AppState>>) -> Json<CountdownResponse> {
    let target = state.config.wedding_date;
    let countdown = compute(&target, &state.clock.now());
    let units = countdown.display_units();

    Json(CountdownResponse {
        expired: countdown.is_expired(),
        days: units.days,
        hours: units.hours,
        minutes: units.minutes,
        seconds: units.seconds,
        target: target.to_rfc3339(),
    })
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleResponse {
    pub code: String,
    pub dir: String,
    pub lang: String,
    pub native_name: String,
    pub strings: BTreeMap<String, String>,
}

fn locale_response(resolver: &LocaleResolver<CookiePreferences>) -> LocaleResponse {
    let locale = resolver.locale();
    let DocumentAttributes { dir, lang } = resolver.document_attributes();

    LocaleResponse {
        code: locale.code().to_string(),
        dir: dir.to_string(),
        lang: lang.to_string(),
        native_name: locale.native_name().to_string(),
        strings: flatten(dictionary_tree(locale)),
    }
}

async fn get_locale(jar: CookieJar) -> Json<LocaleResponse> {
    Json(locale_response(&resolver_for(jar)))
}

#[derive(Debug, Deserialize)]
pub struct SetLocaleRequest {
    pub code: String,
}

async fn set_locale(
    jar: CookieJar,
    WithRejection(Json(request), _): WithRejection<Json<SetLocaleRequest>, ApiError>,
) -> Result<(CookieJar, Json<LocaleResponse>), ApiError> {
    let mut resolver = resolver_for(jar);
    resolver.set_locale(&request.code)?;

    Ok(locale_reply(resolver))
}

async fn toggle_locale(jar: CookieJar) -> (CookieJar, Json<LocaleResponse>) {
    let mut resolver = resolver_for(jar);
    resolver.toggle();

    locale_reply(resolver)
}

#[derive(Debug, Deserialize)]
pub struct TranslateParams {
    pub key: String,
}

async fn translate(
    jar: CookieJar,
    WithRejection(Query(params), _): WithRejection<Query<TranslateParams>, ApiError>,
) -> Json<serde_json::Value> {
    let resolver = resolver_for(jar);
    let value = resolver.resolve(&params.key);

    Json(json!({ "key": params.key, "value": value, "lang": resolver.locale().code() }))
}

async fn content() -> Json<WeddingContent> {
    Json(CONTENT)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RsvpResponse {
    pub title: String,
    pub message: String,
}

async fn submit_rsvp(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    WithRejection(Json(form), _): WithRejection<Json<RsvpForm>, ApiError>,
) -> Result<Json<RsvpResponse>, ApiError> {
    let strings = resolver_for(jar).strings();
    let submission = form.validate()?;

    if let Err(e) = state.mailer.send(&submission).await {
        error!("RSVP submission failed: {}", e);
        return Err(ApiError::SubmissionFailed {
            title: strings.rsvp.error.title,
            message: strings.rsvp.error.message,
        });
    }

    let message = match submission.attendance {
        Attendance::Yes => strings.rsvp.success.message,
        Attendance::No => strings.rsvp.success.declined,
    };

    Ok(Json(RsvpResponse {
        title: strings.rsvp.success.title.to_string(),
        message: message.to_string(),
    }))
}

async fn metrics(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    if !security::is_authorized(state.config.api_key.as_deref(), &headers) {
        return Err(ApiError::Unauthorized);
    }

    Ok(Json(SiteMetrics::global().report()))
}
