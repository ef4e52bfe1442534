use crate::endpoints::EndpointMap;
use crate::environment::Environment;
use crate::error::{ConfigError, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::env;

pub const ENV_FILE_PATH_VAR: &str = "ENV_FILE_PATH";
pub const API_ENV_VAR: &str = "API_ENV";
pub const API_URL_DEVELOPMENT_VAR: &str = "API_URL_DEVELOPMENT";
pub const API_URL_PRODUCTION_VAR: &str = "API_URL_PRODUCTION";

/// Active environment plus the base URL known for each environment.
///
/// Build one at startup and hand it to whatever needs request URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    pub environment: Environment,
    pub endpoints: EndpointMap,
}

impl ApiConfig {
    pub fn new(environment: Environment, endpoints: EndpointMap) -> Self {
        Self {
            environment,
            endpoints,
        }
    }

    /// Built-in endpoints with the given environment selected.
    pub fn for_environment(environment: Environment) -> Self {
        Self::new(environment, EndpointMap::default())
    }

    /// Built-in endpoints with the environment called `name` selected.
    /// Names outside the known set fail with `UnknownEnvironment`.
    pub fn for_environment_name(name: &str) -> Result<Self> {
        Ok(Self::for_environment(name.parse()?))
    }

    /// Base URL of the selected environment, exactly as stored.
    pub fn base_url(&self) -> &str {
        self.endpoints.get(self.environment)
    }

    /// `base_url()` followed by `path`. Nothing is inserted or normalized,
    /// so callers pass paths that start with `/`.
    pub fn endpoint(&self, path: &str) -> String {
        let base_url = self.base_url();
        let mut url = String::with_capacity(base_url.len() + path.len());
        url.push_str(base_url);
        url.push_str(path);
        url
    }

    /// Switch to the environment called `name`. State is untouched on error.
    pub fn select(&mut self, name: &str) -> Result<()> {
        let environment = name.parse::<Environment>().map_err(|err| {
            warn!("Rejected API environment selector {:?}", name);
            err
        })?;
        debug!(
            "Switching API environment from {} to {}",
            self.environment, environment
        );
        self.environment = environment;
        Ok(())
    }

    /// Load from the process environment, reading a `.env` file first.
    ///
    /// `ENV_FILE_PATH` names the only env file to read; a failure to read it
    /// is an error. Without it an optional `.env` in the working directory is
    /// used.
    pub fn load() -> Result<Self> {
        match env::var(ENV_FILE_PATH_VAR) {
            Ok(path) if !is_blank(&path) => {
                info!("Loading environment from {}: {}", ENV_FILE_PATH_VAR, path);
                dotenv::from_filename(&path).map_err(|err| ConfigError::EnvFile {
                    path: path.clone(),
                    message: err.to_string(),
                })?;
            }
            _ => {
                dotenv::dotenv().ok();
            }
        }

        let config = Self::from_lookup(|key| env::var(key).ok())?;
        config.log_configuration();
        Ok(config)
    }

    /// Resolve the configuration from `lookup` instead of the process
    /// environment. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !is_blank(value));

        let environment = match non_empty(API_ENV_VAR) {
            Some(name) => name.parse()?,
            None => Environment::default(),
        };

        let mut endpoints = EndpointMap::default();
        for target in Environment::ALL {
            if let Some(base_url) = non_empty(Self::override_var(target)) {
                endpoints.set(target, base_url);
            }
        }

        Ok(Self::new(environment, endpoints))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn override_var(environment: Environment) -> &'static str {
        match environment {
            Environment::Development => API_URL_DEVELOPMENT_VAR,
            Environment::Production => API_URL_PRODUCTION_VAR,
        }
    }

    fn log_configuration(&self) {
        info!("API configuration loaded");
        info!("Environment: {}", self.environment);
        info!("Base URL: {}", self.base_url());
        for (environment, base_url) in self.endpoints.iter() {
            debug!("Known base URL for {}: {}", environment, base_url);
        }

        if self.environment.is_development() {
            warn!("Running against the development API at {}", self.base_url());
        }
    }
}

/// Empty and whitespace-only values count as unset.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
