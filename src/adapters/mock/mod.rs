//! Mock adapters for tests.

pub mod http;
pub mod identity;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use identity::{MockIdentityProvider, ProviderCalls};
