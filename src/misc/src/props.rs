use std::ops::Deref;

#[cfg(target_os = "android")]
const PROP_VALUE_MAX: usize = 92;

#[cfg(target_os = "android")]
unsafe extern "C" {
    fn __system_property_get(
        name: *const std::ffi::c_char,
        value: *mut std::ffi::c_char,
    ) -> u32;
}

// https://cs.android.com/android/platform/superproject/main/+/main:system/libbase/parsebool.cpp;l=23-31;drc=61197364367c9e404c7da6900658f1b16c42d0da
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "y" | "yes" | "on" | "true" => Some(true),
        "0" | "n" | "no" | "off" | "false" => Some(false),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property(String);

impl From<String> for Property {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Property {
    /// Unparsable values count as off.
    pub fn is_on(&self) -> bool {
        parse_bool(self).unwrap_or_default()
    }
}

impl Deref for Property {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

/// Reads a system property. Empty values are reported as unset, matching bionic.
#[cfg(target_os = "android")]
pub fn get(name: &str) -> Option<Property> {
    use std::ffi::{CStr, CString};

    let name = CString::new(name).ok()?;
    let mut buffer = [0u8; PROP_VALUE_MAX + 1];

    let len = unsafe { __system_property_get(name.as_ptr(), buffer.as_mut_ptr() as _) };

    if len == 0 {
        return None;
    }

    let value = CStr::from_bytes_until_nul(&buffer).ok()?;
    Some(Property(value.to_string_lossy().into_owned()))
}

#[cfg(not(target_os = "android"))]
pub fn get(_name: &str) -> Option<Property> {
    None
}

pub fn prop_on(name: &str) -> bool {
    get(name).is_some_and(|it| it.is_on())
}
