use crate::environment::Environment;
use serde::{Deserialize, Serialize};

pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:3000";
pub const PRODUCTION_BASE_URL: &str = "https://webinar-75c9.onrender.com";

/// Base URL per environment. Every [`Environment`] has exactly one entry.
///
/// Values are origins (scheme, host and optional port) and are stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointMap {
    pub development: String,
    pub production: String,
}

impl EndpointMap {
    pub fn new(development: impl Into<String>, production: impl Into<String>) -> Self {
        Self {
            development: development.into(),
            production: production.into(),
        }
    }

    pub fn get(&self, environment: Environment) -> &str {
        match environment {
            Environment::Development => &self.development,
            Environment::Production => &self.production,
        }
    }

    pub fn set(&mut self, environment: Environment, base_url: impl Into<String>) {
        let slot = match environment {
            Environment::Development => &mut self.development,
            Environment::Production => &mut self.production,
        };
        *slot = base_url.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Environment, &str)> + '_ {
        Environment::ALL.into_iter().map(move |env| (env, self.get(env)))
    }
}

impl Default for EndpointMap {
    fn default() -> Self {
        Self::new(DEVELOPMENT_BASE_URL, PRODUCTION_BASE_URL)
    }
}
