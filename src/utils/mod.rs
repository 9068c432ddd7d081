//! Utility functions shared by the services.
//!
//! - [`code_generator`] - Short code generation and shape checks
//! - [`url_validator`] - Target URL validation and sanitization
//! - [`user_validator`] - User payload, e-mail and password-strength checks

pub mod code_generator;
pub mod url_validator;
pub mod user_validator;
