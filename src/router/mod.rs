pub mod signup;
pub mod status;

/// State backed by in-memory storage and a cheap Argon2 setup.
/// MUST NEVER be used in production.
#[cfg(test)]
pub fn state() -> crate::AppState {
    use std::sync::Arc;

    use crate::config::{Argon2, Configuration};
    use crate::controller::SignUpController;
    use crate::crypto::Argon2Encrypter;
    use crate::database::MemoryAccountRepository;
    use crate::email::EmailValidatorAdapter;
    use crate::usecases::DbAddAccount;

    let encrypter = Argon2Encrypter::new(Some(Argon2 {
        memory_cost: 1024,
        iterations: 1,
        parallelism: 1,
        hash_length: 32,
    }))
    .expect("valid argon2 parameters");
    let add_account = DbAddAccount::new(
        Box::new(encrypter),
        Box::new(MemoryAccountRepository::default()),
    );

    crate::AppState {
        config: Arc::new(Configuration::default()),
        signup: Arc::new(SignUpController::new(
            Box::new(EmailValidatorAdapter),
            Box::new(add_account),
        )),
    }
}
