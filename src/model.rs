//! Request and response envelopes, and account representations.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ServerError;

/// Incoming request as seen by a controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    /// Decoded JSON body, `None` when absent or undecodable.
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Create a request holding `body`.
    pub fn new(body: Value) -> Self {
        Self { body: Some(body) }
    }

    /// Read a top-level field of the body.
    ///
    /// Returns `None` when the body is absent or is not a JSON object.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.as_ref()?.as_object()?.get(name)
    }
}

/// Payload of a response envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody<T> {
    Data(T),
    Error(ServerError),
}

/// Response envelope returned by every controller call.
///
/// Build it with [`crate::helpers`], never by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse<T> {
    pub(crate) status_code: StatusCode,
    pub(crate) body: ResponseBody<T>,
}

impl<T> HttpResponse<T> {
    /// HTTP status of the envelope.
    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn body(&self) -> &ResponseBody<T> {
        &self.body
    }
}

impl<T: Serialize> IntoResponse for HttpResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.body)).into_response()
    }
}

/// Sanitized signup data handed to the account creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Created account.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow,
)]
pub struct AccountModel {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}
