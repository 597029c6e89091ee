use navbar_misc::props::{self, Property};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Set by the emulator: `"1"` means hardware keys exist, `"0"` means they don't.
pub const QEMU_HW_MAINKEYS: &str = "qemu.hw.mainkeys";

pub trait PropertyStore: Send + Sync {
    fn get(&self, name: &str) -> Option<Property>;
}

pub struct SystemProperties;

impl PropertyStore for SystemProperties {
    fn get(&self, name: &str) -> Option<Property> {
        props::get(name)
    }
}

#[derive(Default)]
pub struct MemoryProperties {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, name: &str, value: &str) {
        self.values.write().insert(name.into(), value.into());
    }
}

impl PropertyStore for MemoryProperties {
    fn get(&self, name: &str) -> Option<Property> {
        self.values.read().get(name).cloned().map(Property::from)
    }
}

/// Hardware-keys override published through `qemu.hw.mainkeys`.
///
/// Only the literal values `"1"` and `"0"` count; anything else is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainKeysOverride {
    HardwareKeys,
    NoHardwareKeys,
}

impl MainKeysOverride {
    pub fn read(store: &dyn PropertyStore) -> Option<Self> {
        match store.get(QEMU_HW_MAINKEYS).as_deref() {
            Some("1") => Some(Self::HardwareKeys),
            Some("0") => Some(Self::NoHardwareKeys),
            _ => None,
        }
    }

    pub fn needs_navbar(self) -> bool {
        matches!(self, Self::NoHardwareKeys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_literal_values_override() {
        let store = MemoryProperties::new();
        assert_eq!(MainKeysOverride::read(&store), None);

        store.set(QEMU_HW_MAINKEYS, "1");
        assert_eq!(MainKeysOverride::read(&store), Some(MainKeysOverride::HardwareKeys));

        store.set(QEMU_HW_MAINKEYS, "0");
        assert_eq!(MainKeysOverride::read(&store), Some(MainKeysOverride::NoHardwareKeys));

        store.set(QEMU_HW_MAINKEYS, "true");
        assert_eq!(MainKeysOverride::read(&store), None);
    }
}
