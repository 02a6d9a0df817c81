//! Server configuration from the process environment.
//!
//! All values are read once at startup into an immutable [`ServerConfig`]
//! that is injected into handlers through shared state; nothing is mutated
//! at request time.

use std::path::PathBuf;

use crate::error::ServerError;

/// Immutable deployment configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Cloud project that owns the search data store.
    pub project_id: String,
    /// Region of the data store, `global` for most deployments.
    pub location: String,
    /// Data store identifier inside the default collection.
    pub data_store_id: String,
    /// Widget `configId` from the platform console, injected into the page.
    pub widget_config_id: String,
    /// Path to the service-account JSON key file.
    pub credentials_path: PathBuf,
    /// Listen address.
    pub host: String,
    /// Listen port.
    pub port: u16,
}

impl ServerConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when `GOOGLE_APPLICATION_CREDENTIALS`
    /// is unset or does not point at a readable file, or when `PORT` is not
    /// a valid port number. The process must not start in either case.
    pub fn load() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let credentials_path = lookup("GOOGLE_APPLICATION_CREDENTIALS")
            .map(PathBuf::from)
            .ok_or_else(|| {
                ServerError::Config(
                    "GOOGLE_APPLICATION_CREDENTIALS is not set; \
                     point it at the service-account JSON key"
                        .to_string(),
                )
            })?;

        if !credentials_path.is_file() {
            return Err(ServerError::Config(format!(
                "credentials file not found: {}",
                credentials_path.display()
            )));
        }

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ServerError::Config(format!("invalid PORT value: {raw}")))?,
            None => 5000,
        };

        Ok(Self {
            project_id: lookup("GCP_PROJECT_ID").unwrap_or_else(|| "your-project-id".to_string()),
            location: lookup("GCP_LOCATION").unwrap_or_else(|| "global".to_string()),
            data_store_id: lookup("GCP_DATA_STORE_ID")
                .unwrap_or_else(|| "your-datastore-id".to_string()),
            widget_config_id: lookup("WIDGET_CONFIG_ID")
                .unwrap_or_else(|| "your-config-id".to_string()),
            credentials_path,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
        })
    }

    /// The address the server binds to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
