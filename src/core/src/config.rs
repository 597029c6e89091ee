use crate::resources::BuildFlags;
use crate::shell::LookupFailure;
use anyhow::{Context, Result, anyhow};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_CONFIG_PATH: &str = "/system/etc/navbar.toml";

static INSTANCE: OnceLock<NavbarConfig> = OnceLock::new();

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub flags: BuildFlags,
    pub shell: ShellConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ShellConfig {
    /// Binder code of `IStatusBarService.toggleNavigationBar` on this ROM.
    pub toggle_transaction: Option<u32>,
    pub on_lookup_failure: LookupFailure,
}

impl NavbarConfig {
    pub fn init(path: &Path) -> Result<()> {
        let config = Self::load(path)?;

        INSTANCE
            .set(config)
            .map_err(|_| anyhow!("duplicate called"))?;

        Ok(())
    }

    pub fn instance() -> &'static Self {
        INSTANCE.get().expect("configs not initialized")
    }

    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text).with_context(|| format!("bad config {}", path.display())),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("{} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overlay() {
        let config = NavbarConfig::parse(
            r#"
            [flags]
            config_showNavigationBar = false
            config_showNavbarWhenFingerprintSensorBusy = true

            [shell]
            toggle-transaction = 42
            on-lookup-failure = "retry"
            "#,
        )
        .unwrap();

        assert!(!config.flags.show_navigation_bar);
        assert!(config.flags.show_navbar_when_fingerprint_sensor_busy);
        assert_eq!(config.shell.toggle_transaction, Some(42));
        assert_eq!(config.shell.on_lookup_failure, LookupFailure::Retry);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = NavbarConfig::load(Path::new("/nonexistent/navbar.toml")).unwrap();
        assert_eq!(config, NavbarConfig::default());
        assert!(config.flags.show_navigation_bar);
        assert_eq!(config.shell.on_lookup_failure, LookupFailure::Cache);
    }

    #[test]
    fn rejects_malformed_overlay() {
        assert!(NavbarConfig::parse("[flags]\nconfig_showNavigationBar = 3").is_err());
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = NavbarConfig::default();
        config.flags.show_navbar_in_keyguard = true;
        config.shell.toggle_transaction = Some(7);

        let text = toml::to_string(&config).unwrap();
        assert_eq!(NavbarConfig::parse(&text).unwrap(), config);
    }
}
