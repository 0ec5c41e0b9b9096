use axum::body::Bytes;
use axum::extract::State;
use serde_json::Value;

use crate::AppState;
use crate::model::{AccountModel, HttpRequest, HttpResponse};
use crate::ports::Controller;

/// Handler to sign up a user.
///
/// A body that is not JSON is handed over as absent.
pub async fn handler(
    State(state): State<AppState>,
    body: Bytes,
) -> HttpResponse<AccountModel> {
    let body = match serde_json::from_slice::<Value>(&body) {
        Ok(body) => Some(body),
        Err(err) => {
            tracing::debug!(error = %err, "signup body is not json");
            None
        },
    };

    state.signup.handle(HttpRequest { body }).await
}

#[cfg(test)]
mod tests {
    use crate::*;
    use axum::http::{Method, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};

    async fn signup(body: String) -> (StatusCode, Value) {
        let app = app(router::state());
        let response = make_request(app, Method::POST, "/signup", body).await;

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_signup_handler() {
        let (status, body) = signup(
            json!({
                "name": "valid_name",
                "email": "valid_email@mail.com",
                "password": "valid_password",
                "passwordConfirmation": "valid_password",
            })
            .to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "valid_name");
        assert_eq!(body["email"], "valid_email@mail.com");
        assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(
            body["password"]
                .as_str()
                .is_some_and(|pwd| pwd.starts_with("$argon2id$"))
        );
        assert!(body.get("passwordConfirmation").is_none());
    }

    #[tokio::test]
    async fn test_signup_with_invalid_email() {
        let (status, body) = signup(
            json!({
                "name": "valid_name",
                "email": "invalid_email",
                "password": "valid_password",
                "passwordConfirmation": "valid_password",
            })
            .to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "error": "InvalidParamError",
                "message": "Invalid param: email",
                "param": "email",
            })
        );
    }

    #[tokio::test]
    async fn test_signup_with_malformed_body() {
        let (status, body) = signup("{name: ".into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "MissingParamError");
        assert_eq!(body["param"], "name");
    }

    #[tokio::test]
    async fn test_signup_twice_is_server_error() {
        let app = app(router::state());
        let body = json!({
            "name": "valid_name",
            "email": "valid_email@mail.com",
            "password": "valid_password",
            "passwordConfirmation": "valid_password",
        })
        .to_string();

        let response =
            make_request(app.clone(), Method::POST, "/signup", body.clone()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = make_request(app, Method::POST, "/signup", body).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "ServerError");
        assert_eq!(body["message"], "Internal server error");
    }
}
