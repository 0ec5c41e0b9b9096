//! Account creation use case implementation.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{AccountModel, AddAccountModel};
use crate::ports::{AddAccount, AddAccountRepository, Encrypter};

/// Hashes the password then stores the account.
pub struct DbAddAccount {
    encrypter: Box<dyn Encrypter>,
    repository: Box<dyn AddAccountRepository>,
}

impl DbAddAccount {
    pub fn new(
        encrypter: Box<dyn Encrypter>,
        repository: Box<dyn AddAccountRepository>,
    ) -> Self {
        Self {
            encrypter,
            repository,
        }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel> {
        let password = self.encrypter.encrypt(&account.password)?;

        let account = self
            .repository
            .add(AddAccountModel {
                password,
                ..account
            })
            .await?;

        metrics::counter!("signup_accounts_created_total").increment(1);
        tracing::info!(account_id = %account.id, "account created");

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryAccountRepository;
    use crate::error::ApplicationError;

    struct EncrypterStub {
        fail: bool,
    }

    impl Encrypter for EncrypterStub {
        fn encrypt(&self, value: &str) -> Result<String> {
            if self.fail {
                Err(ApplicationError::internal(std::io::Error::other(
                    "hasher crashed",
                )))
            } else {
                Ok(format!("hashed_{value}"))
            }
        }
    }

    fn account() -> AddAccountModel {
        AddAccountModel {
            name: "valid_name".into(),
            email: "valid_email@mail.com".into(),
            password: "valid_password".into(),
        }
    }

    #[tokio::test]
    async fn test_add_stores_hashed_password() {
        let repo = MemoryAccountRepository::default();
        let sut = DbAddAccount::new(
            Box::new(EncrypterStub { fail: false }),
            Box::new(repo.clone()),
        );

        let created = sut.add(account()).await.unwrap();
        assert_eq!(created.name, "valid_name");
        assert_eq!(created.email, "valid_email@mail.com");
        assert_eq!(created.password, "hashed_valid_password");

        let stored = repo.find_by_email("valid_email@mail.com").await.unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn test_add_encrypter_fails() {
        let repo = MemoryAccountRepository::default();
        let sut = DbAddAccount::new(
            Box::new(EncrypterStub { fail: true }),
            Box::new(repo.clone()),
        );

        assert!(matches!(
            sut.add(account()).await,
            Err(ApplicationError::Internal(_))
        ));
        assert_eq!(repo.find_by_email("valid_email@mail.com").await, None);
    }

    #[tokio::test]
    async fn test_add_repository_fails() {
        let sut = DbAddAccount::new(
            Box::new(EncrypterStub { fail: false }),
            Box::new(MemoryAccountRepository::default()),
        );

        sut.add(account()).await.unwrap();
        assert!(matches!(
            sut.add(account()).await,
            Err(ApplicationError::EmailAlreadyInUse)
        ));
    }
}
