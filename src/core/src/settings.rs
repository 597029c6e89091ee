use anyhow::Result;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt::{self, Display};

pub const NAVIGATION_BAR_ENABLED: &str = "navigation_bar_enabled";
pub const NAVIGATION_BAR_LOCKED: &str = "navigation_bar_locked";

/// Platform user id. Negative values are the pseudo-users of `UserHandle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UserId(pub i32);

impl UserId {
    pub const CURRENT: UserId = UserId(-2);
    pub const SYSTEM: UserId = UserId(0);
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::CURRENT => f.write_str("current"),
            UserId(id) => write!(f, "{id}"),
        }
    }
}

/// Per-user integer settings, the `Settings.Secure` table.
pub trait SettingsStore: Send + Sync {
    /// `Ok(None)` when the key has never been written.
    fn get_int(&self, key: &str, user: UserId) -> Result<Option<i32>>;

    fn put_int(&self, key: &str, value: i32, user: UserId) -> Result<()>;

    fn get_int_or(&self, key: &str, default: i32, user: UserId) -> i32 {
        match self.get_int(key, user) {
            Ok(value) => value.unwrap_or(default),
            Err(err) => {
                log::warn!("failed to read setting {key} for user {user}: {err:?}");
                default
            }
        }
    }
}

#[derive(Default)]
pub struct MemorySettings {
    values: RwLock<HashMap<(UserId, String), i32>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get_int(&self, key: &str, user: UserId) -> Result<Option<i32>> {
        Ok(self.values.read().get(&(user, key.to_string())).copied())
    }

    fn put_int(&self, key: &str, value: i32, user: UserId) -> Result<()> {
        self.values.write().insert((user, key.to_string()), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_key_falls_back_to_default() {
        let store = MemorySettings::new();
        assert_eq!(store.get_int_or(NAVIGATION_BAR_LOCKED, 0, UserId::CURRENT), 0);
        assert_eq!(store.get_int_or(NAVIGATION_BAR_ENABLED, 1, UserId::CURRENT), 1);
    }

    #[test]
    fn values_are_scoped_per_user() {
        let store = MemorySettings::new();
        store.put_int(NAVIGATION_BAR_LOCKED, 1, UserId(10)).unwrap();

        assert_eq!(store.get_int(NAVIGATION_BAR_LOCKED, UserId(10)).unwrap(), Some(1));
        assert_eq!(store.get_int(NAVIGATION_BAR_LOCKED, UserId::SYSTEM).unwrap(), None);
    }

    #[test]
    fn user_ids_render_like_the_settings_command() {
        assert_eq!(UserId::CURRENT.to_string(), "current");
        assert_eq!(UserId(10).to_string(), "10");
    }
}
