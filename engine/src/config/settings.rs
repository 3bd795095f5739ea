// Process settings, loaded once at startup from environment variables and
// never mutated afterwards. Handlers see them behind an Arc in the app state.
use crate::error::EngineError;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    /// Site name rendered in the layout header and page titles.
    pub site_name: String,
    pub host: String,
    pub port: u16,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            site_name: "Fábrica de Ferramentas".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl AppSettings {
    /// Reads SITE_NAME, HOST and PORT from the environment, falling back to
    /// the defaults. A malformed PORT is a startup error, not a silent
    /// fallback.
    pub fn from_env() -> Result<Self, EngineError> {
        let mut settings = AppSettings::default();

        if let Ok(name) = std::env::var("SITE_NAME") {
            if !name.trim().is_empty() {
                settings.site_name = name.trim().to_string();
            }
        }
        if let Ok(host) = std::env::var("HOST") {
            if !host.trim().is_empty() {
                settings.host = host.trim().to_string();
            }
        }
        if let Ok(port) = std::env::var("PORT") {
            settings.port = port
                .trim()
                .parse::<u16>()
                .map_err(|e| EngineError::ConfigError(format!("Invalid PORT '{}': {}", port, e)))?;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.site_name, "Fábrica de Ferramentas");
        assert_eq!(settings.port, 3000);
    }
}
