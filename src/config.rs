//! Persistent user preferences for the portal

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Preferences surviving across sessions: display theme and the
/// remembered login email
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PortalConfig {
    /// Backing file; configs without one (missing platform dirs,
    /// test fixtures) are never persisted
    #[serde(skip)]
    path: Option<PathBuf>,
    /// Display theme ("light" | "dark")
    pub theme: Option<String>,
    /// Email pre-filled on the login screen
    pub remembered_email: Option<String>,
    /// Whether the remember-me box was checked
    pub remember_me: Option<bool>,
}

impl PortalConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "portal", "portal-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config dir
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file path. A missing file
    /// yields defaults backed by that path, so a later save creates it.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut config: PortalConfig = serde_json::from_str(&content)?;
            config.path = Some(path);
            return Ok(config);
        }

        Ok(Self {
            path: Some(path),
            ..Self::default()
        })
    }

    /// Save configuration to the path it was loaded from
    pub fn save(&self) -> Result<()> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(path, content)?;
        }
        Ok(())
    }

    /// Record remembered credentials after a login with remember-me
    pub fn remember(&mut self, email: &str) {
        self.remembered_email = Some(email.to_string());
        self.remember_me = Some(true);
    }

    /// Drop remembered credentials
    pub fn forget(&mut self) {
        self.remembered_email = None;
        self.remember_me = None;
    }

    /// Remembered email, present only when remember-me was checked
    pub fn remembered(&self) -> Option<&str> {
        if self.remember_me == Some(true) {
            self.remembered_email.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = PortalConfig::default();
        assert!(config.theme.is_none());
        assert!(config.remembered_email.is_none());
        assert!(config.remember_me.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = PortalConfig {
            theme: Some("dark".to_string()),
            remembered_email: Some("jane@corp.com".to_string()),
            remember_me: Some(true),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: PortalConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.theme, Some("dark".to_string()));
        assert_eq!(parsed.remembered_email, Some("jane@corp.com".to_string()));
        assert_eq!(parsed.remember_me, Some(true));
    }

    #[test]
    fn test_partial_serialization() {
        let config = PortalConfig {
            theme: Some("light".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: PortalConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.theme, Some("light".to_string()));
        assert!(parsed.remembered_email.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: PortalConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.theme.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"theme": "dark", "unknown_field": "value"}"#;
        let parsed: PortalConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.theme, Some("dark".to_string()));
    }

    #[test]
    fn test_remember_and_forget() {
        let mut config = PortalConfig::default();
        config.remember("jane@corp.com");
        assert_eq!(config.remembered(), Some("jane@corp.com"));

        config.forget();
        assert!(config.remembered().is_none());
        assert!(config.remembered_email.is_none());
    }

    #[test]
    fn test_remembered_requires_remember_me_flag() {
        let config = PortalConfig {
            remembered_email: Some("jane@corp.com".to_string()),
            remember_me: Some(false),
            ..Default::default()
        };
        assert!(config.remembered().is_none());
    }

    #[test]
    fn test_load_from_missing_file_yields_defaults() {
        let path = scratch_path();
        let config = PortalConfig::load_from(path).expect("defaults for missing file");
        assert!(config.theme.is_none());
        assert!(config.remembered_email.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = scratch_path();
        let mut config = PortalConfig::load_from(path.clone()).expect("fresh config");
        config.theme = Some("dark".to_string());
        config.remember("jane@corp.com");
        config.save().expect("save to scratch path");

        let reloaded = PortalConfig::load_from(path.clone()).expect("reload saved file");
        assert_eq!(reloaded.theme, Some("dark".to_string()));
        assert_eq!(reloaded.remembered(), Some("jane@corp.com"));

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn test_save_without_backing_file_is_noop() {
        // A pathless config (the test default) never touches the
        // filesystem
        let config = PortalConfig {
            theme: Some("dark".to_string()),
            ..Default::default()
        };
        assert!(config.save().is_ok());
    }

    fn scratch_path() -> PathBuf {
        std::env::temp_dir().join(format!("portal-tui-config-{}.json", uuid::Uuid::new_v4()))
    }
}
