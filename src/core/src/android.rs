//! Backends that talk to a running Android system through its shell tools.

mod dumpsys;
mod service;
mod settings;

pub use dumpsys::Dumpsys;
pub use service::{ServiceCall, StatusBarCall};
pub use settings::SecureSettings;
