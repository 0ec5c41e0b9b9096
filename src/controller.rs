//! HTTP controllers.

pub mod signup;

pub use signup::SignUpController;
