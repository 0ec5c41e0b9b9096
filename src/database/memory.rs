use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ApplicationError, Result};
use crate::model::{AccountModel, AddAccountModel};
use crate::ports::AddAccountRepository;

/// Accounts kept in process memory, keyed by lowercase email.
#[derive(Debug, Default, Clone)]
pub struct MemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, AccountModel>>>,
}

impl MemoryAccountRepository {
    /// Find an account by email, case-insensitively.
    #[cfg(test)]
    pub(crate) async fn find_by_email(&self, email: &str) -> Option<AccountModel> {
        self.accounts.read().await.get(&email.to_lowercase()).cloned()
    }
}

#[async_trait]
impl AddAccountRepository for MemoryAccountRepository {
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel> {
        let mut accounts = self.accounts.write().await;

        let key = account.email.to_lowercase();
        if accounts.contains_key(&key) {
            return Err(ApplicationError::EmailAlreadyInUse);
        }

        let account = AccountModel {
            id: super::generate_id(),
            name: account.name,
            email: account.email,
            password: account.password,
        };
        accounts.insert(key, account.clone());

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(email: &str) -> AddAccountModel {
        AddAccountModel {
            name: "valid_name".into(),
            email: email.into(),
            password: "hashed_password".into(),
        }
    }

    #[tokio::test]
    async fn test_add() {
        let repo = MemoryAccountRepository::default();

        let created = repo.add(account("valid_email@mail.com")).await.unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.name, "valid_name");
        assert_eq!(created.email, "valid_email@mail.com");
        assert_eq!(created.password, "hashed_password");

        assert_eq!(
            repo.find_by_email("VALID_EMAIL@mail.com").await,
            Some(created)
        );
    }

    #[tokio::test]
    async fn test_add_duplicate_email() {
        let repo = MemoryAccountRepository::default();
        repo.add(account("valid_email@mail.com")).await.unwrap();

        let res = repo.add(account("Valid_Email@mail.com")).await;
        assert!(matches!(res, Err(ApplicationError::EmailAlreadyInUse)));
    }
}
