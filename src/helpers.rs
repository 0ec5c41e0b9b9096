//! Response envelope builders.

use axum::http::StatusCode;

use crate::error::ServerError;
use crate::model::{HttpResponse, ResponseBody};

/// `200 OK` carrying `body`.
pub fn ok<T>(body: T) -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::OK,
        body: ResponseBody::Data(body),
    }
}

/// `400 Bad Request` carrying `error`.
pub fn bad_request<T>(error: ServerError) -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST,
        body: ResponseBody::Error(error),
    }
}

/// `500 Internal Server Error`. The cause is never exposed.
pub fn server_error<T>() -> HttpResponse<T> {
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        body: ResponseBody::Error(ServerError::Internal),
    }
}
