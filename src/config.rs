//! Backend connection parameters parsed from environment variables.
//!
//! All seven values are required. Loading collects every missing or blank
//! variable before failing so a misconfigured deployment is fixed in one pass.

use std::fmt;

pub const ENDPOINT_VAR: &str = "APPWRITE_ENDPOINT";
pub const PROJECT_ID_VAR: &str = "APPWRITE_PROJECT_ID";
pub const DATABASE_ID_VAR: &str = "APPWRITE_DATABASE";
pub const USERS_COLLECTION_VAR: &str = "APPWRITE_USERS_COLLECTION";
pub const FILES_COLLECTION_VAR: &str = "APPWRITE_USERS_FILES";
pub const BUCKET_ID_VAR: &str = "APPWRITE_STORAGE";
pub const SECRET_KEY_VAR: &str = "APPWRITE_KEY";

/// Every required variable, in the order errors report them.
pub const REQUIRED_VARS: [&str; 7] = [
    ENDPOINT_VAR,
    PROJECT_ID_VAR,
    DATABASE_ID_VAR,
    USERS_COLLECTION_VAR,
    FILES_COLLECTION_VAR,
    BUCKET_ID_VAR,
    SECRET_KEY_VAR,
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// One or more required variables are unset or blank.
    #[error("missing required environment variables: {}", .vars.join(", "))]
    Missing { vars: Vec<&'static str> },
}

impl ConfigError {
    /// Names of the variables that were absent.
    #[must_use]
    pub fn missing_vars(&self) -> &[&'static str] {
        match self {
            Self::Missing { vars } => vars,
        }
    }
}

/// Immutable snapshot of the backend connection parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint_url: String,
    pub project_id: String,
    pub database_id: String,
    pub users_collection_id: String,
    pub files_collection_id: String,
    pub bucket_id: String,
    secret_key: String,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `APPWRITE_ENDPOINT`: API base URL, trailing `/` trimmed
    /// - `APPWRITE_PROJECT_ID`
    /// - `APPWRITE_DATABASE`
    /// - `APPWRITE_USERS_COLLECTION`
    /// - `APPWRITE_USERS_FILES`
    /// - `APPWRITE_STORAGE`: storage bucket id
    /// - `APPWRITE_KEY`: server API key
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming every unset or blank variable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming every key the lookup could not
    /// resolve to a non-blank value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let values = REQUIRED_VARS.map(|key| {
            let value = lookup(key).map(|raw| normalize(key, &raw)).unwrap_or_default();
            if value.is_empty() {
                missing.push(key);
            }
            value
        });

        if !missing.is_empty() {
            return Err(ConfigError::Missing { vars: missing });
        }

        let [endpoint_url, project_id, database_id, users_collection_id, files_collection_id, bucket_id, secret_key] = values;

        Ok(Self {
            endpoint_url,
            project_id,
            database_id,
            users_collection_id,
            files_collection_id,
            bucket_id,
            secret_key,
        })
    }

    /// Server API key. Kept out of `Debug` output.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

/// Trim surrounding whitespace; the endpoint also loses trailing slashes.
fn normalize(key: &str, raw: &str) -> String {
    let value = raw.trim();
    let value = if key == ENDPOINT_VAR { value.trim_end_matches('/') } else { value };
    value.to_owned()
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint_url", &self.endpoint_url)
            .field("project_id", &self.project_id)
            .field("database_id", &self.database_id)
            .field("users_collection_id", &self.users_collection_id)
            .field("files_collection_id", &self.files_collection_id)
            .field("bucket_id", &self.bucket_id)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
