//! Identity adapter: session ownership, user-change notification, and the
//! REST provider implementation.

pub mod rest_provider;
pub mod service;

pub use rest_provider::RestIdentityProvider;
pub use service::IdentityService;
