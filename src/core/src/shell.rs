use anyhow::Result;
use log::{debug, warn};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub const STATUS_BAR_SERVICE: &str = "statusbar";

/// The `IStatusBarService` surface this crate needs.
pub trait ShellService: Send + Sync {
    fn toggle_navigation_bar(&self, show: bool) -> Result<()>;
}

pub trait ServiceManager: Send + Sync {
    fn get_service(&self, name: &str) -> Option<Arc<dyn ShellService>>;
}

/// What to do after a lookup came back empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupFailure {
    /// Remember the miss for the rest of the process.
    #[default]
    Cache,
    /// Look the service up again on the next call.
    Retry,
}

/// Lazily resolved status bar handle, never invalidated once set.
pub struct StatusBarCell {
    service: OnceCell<Arc<dyn ShellService>>,
    missing: AtomicBool,
    lock: Mutex<()>,
    on_failure: LookupFailure,
}

impl StatusBarCell {
    pub fn new(on_failure: LookupFailure) -> Self {
        Self {
            service: OnceCell::new(),
            missing: AtomicBool::new(false),
            lock: Mutex::new(()),
            on_failure,
        }
    }

    pub fn get(&self, manager: &dyn ServiceManager) -> Option<Arc<dyn ShellService>> {
        if let Some(service) = self.service.get() {
            return Some(Arc::clone(service));
        }

        if self.gave_up() {
            return None;
        }

        let _guard = self.lock.lock();

        if let Some(service) = self.service.get() {
            return Some(Arc::clone(service));
        }

        if self.gave_up() {
            return None;
        }

        match manager.get_service(STATUS_BAR_SERVICE) {
            Some(service) => {
                debug!("resolved {STATUS_BAR_SERVICE} service");
                Some(Arc::clone(self.service.get_or_init(|| service)))
            }
            None => {
                warn!("{STATUS_BAR_SERVICE} service not found");
                self.missing.store(true, Ordering::Release);
                None
            }
        }
    }

    fn gave_up(&self) -> bool {
        self.on_failure == LookupFailure::Cache && self.missing.load(Ordering::Acquire)
    }
}

impl Default for StatusBarCell {
    fn default() -> Self {
        Self::new(LookupFailure::default())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use anyhow::bail;
    use std::sync::atomic::AtomicUsize;

    #[derive(Default)]
    pub struct RecordingShell {
        pub calls: Mutex<Vec<bool>>,
        pub broken: AtomicBool,
    }

    impl ShellService for RecordingShell {
        fn toggle_navigation_bar(&self, show: bool) -> Result<()> {
            self.calls.lock().push(show);
            if self.broken.load(Ordering::SeqCst) {
                bail!("DeadObjectException");
            }
            Ok(())
        }
    }

    pub struct FakeServiceManager {
        pub shell: Option<Arc<RecordingShell>>,
        pub lookups: AtomicUsize,
    }

    impl FakeServiceManager {
        pub fn with(shell: Option<Arc<RecordingShell>>) -> Self {
            Self {
                shell,
                lookups: AtomicUsize::new(0),
            }
        }
    }

    impl ServiceManager for FakeServiceManager {
        fn get_service(&self, name: &str) -> Option<Arc<dyn ShellService>> {
            assert_eq!(name, STATUS_BAR_SERVICE);
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.shell
                .clone()
                .map(|shell| shell as Arc<dyn ShellService>)
        }
    }

    #[test]
    fn resolves_once() {
        let manager = FakeServiceManager::with(Some(Arc::default()));
        let cell = StatusBarCell::default();

        assert!(cell.get(&manager).is_some());
        assert!(cell.get(&manager).is_some());
        assert_eq!(manager.lookups.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cached_miss_is_not_retried() {
        let manager = FakeServiceManager::with(None);
        let cell = StatusBarCell::new(LookupFailure::Cache);

        assert!(cell.get(&manager).is_none());
        assert!(cell.get(&manager).is_none());
        assert_eq!(manager.lookups.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn retry_looks_up_again() {
        let manager = FakeServiceManager::with(None);
        let cell = StatusBarCell::new(LookupFailure::Retry);

        assert!(cell.get(&manager).is_none());
        assert!(cell.get(&manager).is_none());
        assert_eq!(manager.lookups.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn concurrent_callers_share_one_lookup() {
        let manager = Arc::new(FakeServiceManager::with(Some(Arc::default())));
        let cell = Arc::new(StatusBarCell::default());

        let workers: Vec<_> = (0..8)
            .map(|_| {
                let manager = Arc::clone(&manager);
                let cell = Arc::clone(&cell);
                std::thread::spawn(move || cell.get(manager.as_ref()).is_some())
            })
            .collect();

        for worker in workers {
            assert!(worker.join().unwrap());
        }
        assert_eq!(manager.lookups.load(Ordering::SeqCst), 1);
    }
}
