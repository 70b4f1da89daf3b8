//! weapon warehouse integration tests.

mod support;
mod reports;

#[cfg(feature = "http")]
mod http;
