//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST)
//! - [`IdentityProvider`] - external identity provider operations

pub mod http;
pub mod identity;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use identity::{AuthSession, FederatedChallenge, IdentityProvider, IssuedToken};
