//! Error handler for signup.
//!
//! [`ServerError`] is what a client sees in a response envelope.
//! [`ApplicationError`] is what collaborators return to a controller; it is
//! never sent as is.

use serde::{Serialize, Serializer};

pub type Result<T> = std::result::Result<T, ApplicationError>;

/// Error kinds carried by a response envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServerError {
    #[error("Missing param: {0}")]
    MissingParam(String),

    #[error("Invalid param: {0}")]
    InvalidParam(String),

    #[error("Internal server error")]
    Internal,
}

impl ServerError {
    /// Create a [`ServerError::MissingParam`].
    pub fn missing_param(param: impl Into<String>) -> Self {
        Self::MissingParam(param.into())
    }

    /// Create a [`ServerError::InvalidParam`].
    pub fn invalid_param(param: impl Into<String>) -> Self {
        Self::InvalidParam(param.into())
    }

    /// Name of the error kind, as exposed to clients.
    pub fn kind(&self) -> &'static str {
        match self {
            ServerError::MissingParam(_) => "MissingParamError",
            ServerError::InvalidParam(_) => "InvalidParamError",
            ServerError::Internal => "ServerError",
        }
    }

    /// Parameter the error is about, if any.
    pub fn param(&self) -> Option<&str> {
        match self {
            ServerError::MissingParam(param) | ServerError::InvalidParam(param) => {
                Some(param.as_str())
            },
            ServerError::Internal => None,
        }
    }
}

/// Wire representation of a [`ServerError`].
#[derive(Debug, Serialize)]
struct ResponseError<'a> {
    error: &'static str,
    message: String,
    param: Option<&'a str>,
}

impl Serialize for ServerError {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        ResponseError {
            error: self.kind(),
            message: self.to_string(),
            param: self.param(),
        }
        .serialize(serializer)
    }
}

/// Errors raised by collaborators (validators, use cases, repositories).
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("email is already used by another account")]
    EmailAlreadyInUse,

    #[error("internal error: {0}")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl ApplicationError {
    pub fn internal<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal(Box::new(err))
    }
}

/// Turn any foreign error into [`ApplicationError::Internal`].
pub trait ToInternal<T> {
    fn catch(self) -> Result<T>;
}

impl<T, E> ToInternal<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn catch(self) -> Result<T> {
        self.map_err(ApplicationError::internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_messages() {
        assert_eq!(
            ServerError::missing_param("name").to_string(),
            "Missing param: name"
        );
        assert_eq!(
            ServerError::invalid_param("email").to_string(),
            "Invalid param: email"
        );
        assert_eq!(ServerError::Internal.to_string(), "Internal server error");
    }

    #[test]
    fn test_kinds_compare_by_param() {
        assert_eq!(
            ServerError::missing_param("email"),
            ServerError::MissingParam("email".into())
        );
        assert_ne!(
            ServerError::missing_param("email"),
            ServerError::invalid_param("email")
        );
        assert_ne!(
            ServerError::missing_param("email"),
            ServerError::missing_param("name")
        );
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_value(ServerError::missing_param("password")).unwrap(),
            json!({
                "error": "MissingParamError",
                "message": "Missing param: password",
                "param": "password",
            })
        );
        assert_eq!(
            serde_json::to_value(ServerError::Internal).unwrap(),
            json!({
                "error": "ServerError",
                "message": "Internal server error",
                "param": null,
            })
        );
    }

    #[test]
    fn test_catch() {
        let res: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("disk on fire"));

        match res.catch() {
            Err(ApplicationError::Internal(err)) => {
                assert_eq!(err.to_string(), "disk on fire")
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
