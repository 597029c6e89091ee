use serde::{Deserialize, Serialize};

/// Boolean resources baked into the running build.
pub trait DeviceConfig: Send + Sync {
    /// `config_showNavigationBar`
    fn show_navigation_bar(&self) -> bool;

    /// `config_showNavbarWhenFingerprintSensorBusy`
    fn show_navbar_when_fingerprint_sensor_busy(&self) -> bool;

    /// `config_showNavbarInLockTaskMode`
    fn show_navbar_in_lock_task_mode(&self) -> bool;

    /// `config_showNavbarInKeyguard`
    fn show_navbar_in_keyguard(&self) -> bool;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildFlags {
    #[serde(rename = "config_showNavigationBar")]
    pub show_navigation_bar: bool,
    #[serde(rename = "config_showNavbarWhenFingerprintSensorBusy")]
    pub show_navbar_when_fingerprint_sensor_busy: bool,
    #[serde(rename = "config_showNavbarInLockTaskMode")]
    pub show_navbar_in_lock_task_mode: bool,
    #[serde(rename = "config_showNavbarInKeyguard")]
    pub show_navbar_in_keyguard: bool,
}

impl Default for BuildFlags {
    fn default() -> Self {
        Self {
            show_navigation_bar: true,
            show_navbar_when_fingerprint_sensor_busy: false,
            show_navbar_in_lock_task_mode: false,
            show_navbar_in_keyguard: false,
        }
    }
}

impl DeviceConfig for BuildFlags {
    fn show_navigation_bar(&self) -> bool {
        self.show_navigation_bar
    }

    fn show_navbar_when_fingerprint_sensor_busy(&self) -> bool {
        self.show_navbar_when_fingerprint_sensor_busy
    }

    fn show_navbar_in_lock_task_mode(&self) -> bool {
        self.show_navbar_in_lock_task_mode
    }

    fn show_navbar_in_keyguard(&self) -> bool {
        self.show_navbar_in_keyguard
    }
}

#[cfg(test)]
mod tests {
    use super::BuildFlags;

    #[test]
    fn parses_resource_names() {
        let flags: BuildFlags = toml::from_str(
            r#"
            config_showNavigationBar = false
            config_showNavbarInKeyguard = true
            "#,
        )
        .unwrap();

        assert!(!flags.show_navigation_bar);
        assert!(flags.show_navbar_in_keyguard);
        assert!(!flags.show_navbar_in_lock_task_mode);
    }

    #[test]
    fn empty_table_uses_defaults() {
        let flags: BuildFlags = toml::from_str("").unwrap();
        assert_eq!(flags, BuildFlags::default());
    }
}
