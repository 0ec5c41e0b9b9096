//! Traits at the seams between controllers, use cases and adapters.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{AccountModel, AddAccountModel, HttpRequest, HttpResponse};

/// Request handler turning every outcome into an envelope.
#[async_trait]
pub trait Controller: Send + Sync {
    type Output;

    /// Handle `request`. Never fails: errors become envelopes.
    async fn handle(&self, request: HttpRequest) -> HttpResponse<Self::Output>;
}

/// Email format checker.
pub trait EmailValidator: Send + Sync {
    /// Whether `email` is well formed.
    fn is_valid(&self, email: &str) -> Result<bool>;
}

/// Account creation use case.
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Create a new account.
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel>;
}

/// One-way password hasher.
pub trait Encrypter: Send + Sync {
    fn encrypt(&self, value: &str) -> Result<String>;
}

/// Account persistence.
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    /// Store `account`, whose password is already hashed.
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel>;
}
