//! Concrete implementations of the trait abstractions in [`crate::traits`].

pub mod mock;
pub mod reqwest_http;

pub use reqwest_http::ReqwestHttpClient;
