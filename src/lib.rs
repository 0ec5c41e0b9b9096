//! Signup is a small account creation API.
//!
//! A request goes through [`controller::SignUpController`], which validates
//! the body, hands the account to an [`ports::AddAccount`] use case and
//! always answers with a `{status_code, body}` envelope.

#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod crypto;
pub mod database;
pub mod email;
pub mod error;
pub mod helpers;
pub mod model;
pub mod ports;
mod router;
pub mod telemetry;
pub mod usecases;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::http::{Method, StatusCode};
use axum::routing::{get, post};
use axum::{Router, middleware as AxumMiddleware};
use tower::ServiceBuilder;
use tower_http::LatencyUnit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};

use crate::config::Configuration;
use crate::controller::SignUpController;
use crate::crypto::Argon2Encrypter;
use crate::email::EmailValidatorAdapter;
use crate::model::AccountModel;
use crate::ports::Controller;
use crate::usecases::DbAddAccount;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// MUST NEVER be used in production.
#[cfg(test)]
pub async fn make_request(
    app: Router,
    method: Method,
    path: &str,
    body: String,
) -> axum::http::Response<axum::body::Body> {
    use axum::extract::Request;
    use axum::http::header;
    use tower::util::ServiceExt;

    app.oneshot(
        Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// State sharing between routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Configuration>,
    pub signup: Arc<dyn Controller<Output = AccountModel>>,
}

/// Create router.
pub fn app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        // Add high level tracing/logging to all requests.
        .layer(
            TraceLayer::new_for_http()
                .on_body_chunk(|chunk: &Bytes, latency: Duration, _span: &tracing::Span| {
                    tracing::trace!(size_bytes = chunk.len(), latency = ?latency, "sending body chunk")
                })
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                .on_request(DefaultOnRequest::new())
                .on_response(DefaultOnResponse::new().latency_unit(LatencyUnit::Micros)),
        )
        // Set a timeout.
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, Duration::from_secs(10)))
        // Add CORS preflight support.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(Any),
        );

    Router::new()
        // `GET /status.json` goes to `status`.
        .route("/status.json", get(router::status::status))
        // `POST /signup` goes to `signup`.
        .route("/signup", post(router::signup::handler))
        .with_state(state)
        .route_layer(AxumMiddleware::from_fn(telemetry::track))
        .layer(middleware)
}

/// Initialize the application state.
pub async fn initialize_state(
    config: Arc<Configuration>,
) -> Result<AppState, BoxError> {
    let repository = database::repository(config.postgres.as_ref()).await?;
    let encrypter = Argon2Encrypter::new(config.argon2.clone())?;

    let add_account = DbAddAccount::new(Box::new(encrypter), repository);
    let signup = SignUpController::new(
        Box::new(EmailValidatorAdapter),
        Box::new(add_account),
    );

    Ok(AppState {
        config,
        signup: Arc::new(signup),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initialize_state_in_memory() {
        let config = Arc::new(Configuration::default());
        let state = initialize_state(Arc::clone(&config)).await.unwrap();

        assert_eq!(*state.config, *config);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = make_request(
            app(router::state()),
            Method::GET,
            "/unknown",
            String::default(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
