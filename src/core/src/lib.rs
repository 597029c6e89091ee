pub mod ambient;
pub mod android;
pub mod config;
pub mod context;
pub mod handler;
pub mod policy;
pub mod props;
pub mod resources;
pub mod settings;
pub mod shell;

pub use context::Context;

use crate::config::NavbarConfig;
use crate::handler::Handler;
use crate::props::SystemProperties;
use crate::shell::StatusBarCell;
use std::sync::Arc;

/// Wires the policy to the running system.
pub fn system_context(config: &NavbarConfig, handler: Arc<dyn Handler>) -> anyhow::Result<Context> {
    let dumpsys = Arc::new(android::Dumpsys);

    Context::builder()
        .settings(Arc::new(android::SecureSettings))
        .resources(Arc::new(config.flags.clone()))
        .props(Arc::new(SystemProperties))
        .services(Arc::new(android::ServiceCall::new(
            config.shell.toggle_transaction,
        )))
        .activity(dumpsys.clone())
        .keyguard(dumpsys)
        .handler(handler)
        .status_bar(StatusBarCell::new(config.shell.on_lookup_failure))
        .build()
}
