// Authenticator: signup/login validation, bcrypt password hashing,
// JWT session tokens, and the per-request `AuthUser` extractor.

pub mod extractor;
pub mod handlers;
pub mod password;
pub mod service;
pub mod token;
pub mod validation;
