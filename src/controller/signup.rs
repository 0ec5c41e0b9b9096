//! Signup controller.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ServerError;
use crate::helpers::{bad_request, ok, server_error};
use crate::model::{AccountModel, AddAccountModel, HttpRequest, HttpResponse};
use crate::ports::{AddAccount, Controller, EmailValidator};

/// Fields every signup body must carry, in reporting order.
const REQUIRED_FIELDS: [&str; 4] =
    ["name", "email", "password", "passwordConfirmation"];

/// Validates a signup body then delegates account creation.
pub struct SignUpController {
    email_validator: Box<dyn EmailValidator>,
    add_account: Box<dyn AddAccount>,
}

impl SignUpController {
    /// Create a new [`SignUpController`].
    pub fn new(
        email_validator: Box<dyn EmailValidator>,
        add_account: Box<dyn AddAccount>,
    ) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }
}

#[async_trait]
impl Controller for SignUpController {
    type Output = AccountModel;

    async fn handle(&self, request: HttpRequest) -> HttpResponse<AccountModel> {
        let body = match Body::parse(&request) {
            Ok(body) => body,
            Err(err) => {
                tracing::debug!(error = %err, "signup body rejected");
                return bad_request(err);
            },
        };

        if body.password != body.password_confirmation {
            return bad_request(ServerError::invalid_param(
                "passwordConfirmation",
            ));
        }

        match self.email_validator.is_valid(body.email) {
            Ok(true) => {},
            Ok(false) => return bad_request(ServerError::invalid_param("email")),
            Err(err) => {
                tracing::error!(error = %err, "email validation failed");
                return server_error();
            },
        }

        let account = AddAccountModel {
            name: body.name.to_owned(),
            email: body.email.to_owned(),
            password: body.password.to_owned(),
        };

        match self.add_account.add(account).await {
            Ok(account) => ok(account),
            Err(err) => {
                tracing::error!(error = %err, "account creation failed");
                server_error()
            },
        }
    }
}

/// Signup body once every required field is present and textual.
struct Body<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    password_confirmation: &'a str,
}

impl<'a> Body<'a> {
    fn parse(request: &'a HttpRequest) -> Result<Self, ServerError> {
        // first falsy field wins, before any type check.
        if let Some(param) = REQUIRED_FIELDS
            .into_iter()
            .find(|param| !request.field(param).is_some_and(is_truthy))
        {
            return Err(ServerError::missing_param(param));
        }

        Ok(Self {
            name: text(request, "name")?,
            email: text(request, "email")?,
            password: text(request, "password")?,
            password_confirmation: text(request, "passwordConfirmation")?,
        })
    }
}

fn text<'a>(request: &'a HttpRequest, param: &str) -> Result<&'a str, ServerError> {
    request
        .field(param)
        .and_then(Value::as_str)
        .ok_or_else(|| ServerError::invalid_param(param))
}

/// `null`, `false`, zero and `""` count as missing.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
