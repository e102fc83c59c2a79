use std::path::PathBuf;

use crate::error::ServerError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "frontend/dist";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("production") | Some("staging") => Environment::Production,
            _ => Environment::Development,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub environment: Environment,
}

impl ServerConfig {
    /// Reads `PORT`, `STATIC_DIR` and `ENVIRONMENT`, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let port = match lookup("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ServerError::InvalidPort(raw)),
            },
            None => DEFAULT_PORT,
        };
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let environment = Environment::parse(lookup("ENVIRONMENT").as_deref());

        Ok(Self {
            port,
            static_dir,
            environment,
        })
    }

    /// The bundle must exist before we start serving it.
    pub fn validate(&self) -> Result<(), ServerError> {
        if !self.static_dir.is_dir() {
            return Err(ServerError::MissingStaticDir(self.static_dir.clone()));
        }
        if !self.static_dir.join("index.html").is_file() {
            return Err(ServerError::MissingIndex(self.static_dir.clone()));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).expect("defaults are valid");
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("frontend/dist"));
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("STATIC_DIR", "/srv/site"),
            ("ENVIRONMENT", "production"),
        ]))
        .expect("valid config");
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn rejects_bad_ports() {
        for raw in ["zero", "0", "70000", ""] {
            assert!(matches!(
                ServerConfig::from_lookup(lookup(&[("PORT", raw)])),
                Err(ServerError::InvalidPort(_))
            ));
        }
    }

    #[test]
    fn validate_requires_index_html() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = ServerConfig {
            port: 3000,
            static_dir: dir.path().to_path_buf(),
            environment: Environment::Development,
        };
        assert!(matches!(config.validate(), Err(ServerError::MissingIndex(_))));

        std::fs::write(dir.path().join("index.html"), "<html></html>").expect("write index");
        assert!(config.validate().is_ok());

        let missing = ServerConfig {
            static_dir: dir.path().join("nope"),
            ..config
        };
        assert!(matches!(missing.validate(), Err(ServerError::MissingStaticDir(_))));
    }
}
