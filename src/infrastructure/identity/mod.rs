//! Identity verifier implementations.
//!
//! - `http`: token introspection against an external identity provider
//! - `dev`: structured dev tokens for local runs and tests

pub mod dev;
pub mod http;

pub use dev::DevTokenVerifier;
pub use http::HttpIdentityVerifier;
