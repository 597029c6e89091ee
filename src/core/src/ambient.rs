use anyhow::Result;

pub const SYSTEMUI_PACKAGE: &str = "com.android.systemui";
pub const PLATFORM_PACKAGE: &str = "android";

pub trait ActivityManager: Send + Sync {
    /// Remote query; may fail with a transport error.
    fn is_in_lock_task_mode(&self) -> Result<bool>;
}

pub trait KeyguardManager: Send + Sync {
    fn is_keyguard_locked(&self) -> bool;

    fn in_keyguard_restricted_input_mode(&self) -> bool;

    fn on_keyguard(&self) -> bool {
        self.is_keyguard_locked() || self.in_keyguard_restricted_input_mode()
    }
}

/// Whether `package` is the status bar shell or the platform itself.
pub fn is_system_ui(package: &str) -> bool {
    package == SYSTEMUI_PACKAGE || package == PLATFORM_PACKAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_package_names() {
        assert!(is_system_ui("com.android.systemui"));
        assert!(is_system_ui("android"));
        assert!(!is_system_ui("com.android.systemui.plugin"));
        assert!(!is_system_ui("com.example.android"));
    }
}
