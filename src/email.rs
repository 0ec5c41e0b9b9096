//! Email format checking.

use validator::ValidateEmail;

use crate::error::Result;
use crate::ports::EmailValidator;

/// [`EmailValidator`] following the HTML5 / RFC 5322 rules of `validator`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailValidatorAdapter;

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> Result<bool> {
        Ok(email.validate_email())
    }
}
