//! Environment-selected API base URLs for the webinar frontend.
//!
//! An [`ApiConfig`] holds the active [`Environment`] and an [`EndpointMap`]
//! with one base URL per environment. Request URLs are built with
//! [`ApiConfig::endpoint`].

pub mod config;
pub mod endpoints;
pub mod environment;
pub mod error;

// Re-export commonly used items
pub use config::ApiConfig;
pub use endpoints::{EndpointMap, DEVELOPMENT_BASE_URL, PRODUCTION_BASE_URL};
pub use environment::Environment;
pub use error::{ConfigError, Result};
