//! API credential resolution
//!
//! Priority: explicit value > secrets file > environment variable.
//! A missing credential is a normal outcome, not an error.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::utils::debug_enabled;

/// An API key that never shows up in Debug output
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Credential(String);

impl Credential {
    /// Trimmed key, or None when blank
    pub(crate) fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Raw key value. Only for building requests.
    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Named secrets loaded from a TOML file of string values
#[derive(Debug, Default)]
pub(crate) struct SecretStore {
    values: HashMap<String, String>,
}

impl SecretStore {
    pub(crate) fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let table: toml::Table = toml::from_str(content)?;
        let values = table
            .into_iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
            .collect();
        Ok(Self { values })
    }

    /// Load from an explicit path (errors are fatal) or the default locations
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        if let Some(path) = explicit {
            let content = fs::read_to_string(path).map_err(|e| AppError::Secrets {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            return Self::from_toml(&content).map_err(|e| AppError::Secrets {
                path: path.display().to_string(),
                reason: e.to_string(),
            });
        }

        for path in Self::default_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::from_toml(&content) {
                    Ok(store) => {
                        if debug_enabled() {
                            eprintln!("[DEBUG] Loaded secrets from {}", path.display());
                        }
                        return Ok(store);
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Ok(Self::default())
    }

    fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("habitcoach").join("secrets.toml"));
            paths.push(home.join(".habitcoach-secrets.toml"));
        }
        paths
    }

    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

pub(crate) struct CredentialResolver {
    secrets: SecretStore,
    env: EnvLookup,
}

impl CredentialResolver {
    pub(crate) fn new(secrets: SecretStore, env: EnvLookup) -> Self {
        Self { secrets, env }
    }

    /// Resolver backed by the process environment
    pub(crate) fn from_process_env(secrets: SecretStore) -> Self {
        Self::new(secrets, Box::new(|name: &str| std::env::var(name).ok()))
    }

    pub(crate) fn resolve(
        &self,
        name: &str,
        explicit: Option<&str>,
        allow_fallback: bool,
    ) -> Option<Credential> {
        if let Some(credential) = explicit.and_then(Credential::new) {
            return Some(credential);
        }
        if !allow_fallback {
            return None;
        }
        if let Some(credential) = self.secrets.get(name).and_then(Credential::new) {
            if debug_enabled() {
                eprintln!("[DEBUG] {name} resolved from secrets file");
            }
            return Some(credential);
        }
        let credential = (self.env)(name).as_deref().and_then(Credential::new);
        if credential.is_some() && debug_enabled() {
            eprintln!("[DEBUG] {name} resolved from environment");
        }
        credential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(secrets: &str, env: &'static [(&'static str, &'static str)]) -> CredentialResolver {
        CredentialResolver::new(
            SecretStore::from_toml(secrets).unwrap(),
            Box::new(move |name: &str| {
                env.iter()
                    .find(|(k, _)| *k == name)
                    .map(|(_, v)| v.to_string())
            }),
        )
    }

    #[test]
    fn explicit_value_wins_and_is_trimmed() {
        let r = resolver(r#"OPENAI_API_KEY = "from-secrets""#, &[("OPENAI_API_KEY", "from-env")]);
        let key = r.resolve("OPENAI_API_KEY", Some("  sk-explicit \n"), true).unwrap();
        assert_eq!(key.expose(), "sk-explicit");
    }

    #[test]
    fn secrets_before_environment() {
        let r = resolver(r#"OPENAI_API_KEY = "from-secrets""#, &[("OPENAI_API_KEY", "from-env")]);
        let key = r.resolve("OPENAI_API_KEY", None, true).unwrap();
        assert_eq!(key.expose(), "from-secrets");
    }

    #[test]
    fn environment_is_last_resort() {
        let r = resolver("", &[("OPENWEATHER_API_KEY", " env-key ")]);
        let key = r.resolve("OPENWEATHER_API_KEY", Some("   "), true).unwrap();
        assert_eq!(key.expose(), "env-key");
    }

    #[test]
    fn fallback_disabled_ignores_other_sources() {
        let r = resolver(r#"OPENAI_API_KEY = "from-secrets""#, &[("OPENAI_API_KEY", "from-env")]);
        assert!(r.resolve("OPENAI_API_KEY", None, false).is_none());
    }

    #[test]
    fn absent_everywhere_is_none() {
        let r = resolver("", &[]);
        assert!(r.resolve("OPENAI_API_KEY", None, true).is_none());
    }

    #[test]
    fn debug_output_is_redacted() {
        let key = Credential::new("sk-secret").unwrap();
        assert!(!format!("{key:?}").contains("sk-secret"));
    }

    #[test]
    fn explicit_missing_secrets_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SecretStore::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn non_string_secret_values_are_ignored() {
        let store = SecretStore::from_toml("OPENAI_API_KEY = 42\nOTHER = \"x\"").unwrap();
        assert!(store.get("OPENAI_API_KEY").is_none());
        assert_eq!(store.get("OTHER"), Some("x"));
    }
}
