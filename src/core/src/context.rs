use crate::ambient::{ActivityManager, KeyguardManager};
use crate::handler::Handler;
use crate::props::PropertyStore;
use crate::resources::DeviceConfig;
use crate::settings::SettingsStore;
use crate::shell::{ServiceManager, StatusBarCell};
use std::sync::Arc;

/// Everything the policy reads from or writes to.
///
/// Build one per process and share it so the status bar handle is resolved once.
pub struct Context {
    pub settings: Arc<dyn SettingsStore>,
    pub resources: Arc<dyn DeviceConfig>,
    pub props: Arc<dyn PropertyStore>,
    pub services: Arc<dyn ServiceManager>,
    pub activity: Arc<dyn ActivityManager>,
    pub keyguard: Arc<dyn KeyguardManager>,
    pub handler: Arc<dyn Handler>,
    pub(crate) status_bar: StatusBarCell,
}

impl Context {
    pub fn builder() -> ContextBuilder {
        ContextBuilder::default()
    }
}

#[derive(Default)]
pub struct ContextBuilder {
    settings: Option<Arc<dyn SettingsStore>>,
    resources: Option<Arc<dyn DeviceConfig>>,
    props: Option<Arc<dyn PropertyStore>>,
    services: Option<Arc<dyn ServiceManager>>,
    activity: Option<Arc<dyn ActivityManager>>,
    keyguard: Option<Arc<dyn KeyguardManager>>,
    handler: Option<Arc<dyn Handler>>,
    status_bar: Option<StatusBarCell>,
}

impl ContextBuilder {
    pub fn settings(mut self, settings: Arc<dyn SettingsStore>) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn resources(mut self, resources: Arc<dyn DeviceConfig>) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn props(mut self, props: Arc<dyn PropertyStore>) -> Self {
        self.props = Some(props);
        self
    }

    pub fn services(mut self, services: Arc<dyn ServiceManager>) -> Self {
        self.services = Some(services);
        self
    }

    pub fn activity(mut self, activity: Arc<dyn ActivityManager>) -> Self {
        self.activity = Some(activity);
        self
    }

    pub fn keyguard(mut self, keyguard: Arc<dyn KeyguardManager>) -> Self {
        self.keyguard = Some(keyguard);
        self
    }

    pub fn handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn status_bar(mut self, cell: StatusBarCell) -> Self {
        self.status_bar = Some(cell);
        self
    }

    pub fn build(self) -> anyhow::Result<Context> {
        use anyhow::Context as _;

        Ok(Context {
            settings: self.settings.context("missing settings store")?,
            resources: self.resources.context("missing device config")?,
            props: self.props.context("missing property store")?,
            services: self.services.context("missing service manager")?,
            activity: self.activity.context("missing activity manager")?,
            keyguard: self.keyguard.context("missing keyguard manager")?,
            handler: self.handler.context("missing handler")?,
            status_bar: self.status_bar.unwrap_or_default(),
        })
    }
}
