use crate::ambient::{ActivityManager, KeyguardManager};
use anyhow::Result;
use navbar_misc::command;
use navbar_utils::ext::ResultExt;

const DUMPSYS: &str = "dumpsys";

/// Reads lock-task and keyguard state out of `dumpsys` reports.
pub struct Dumpsys;

fn find_value<'a>(report: &'a str, keys: &[&str]) -> Option<&'a str> {
    report
        .split_whitespace()
        .filter_map(|token| token.split_once('='))
        .find(|(key, _)| keys.contains(key))
        .map(|(_, value)| value)
}

fn lock_task_active(report: &str) -> bool {
    find_value(report, &["mLockTaskModeState"]).is_some_and(|state| state != "NONE")
}

fn flag(report: &str, keys: &[&str]) -> bool {
    find_value(report, keys) == Some("true")
}

const SHOWING_KEYS: &[&str] = &["showing", "mIsShowing", "isShowing"];
const INPUT_RESTRICTED_KEYS: &[&str] = &["inputRestricted", "mInputRestricted", "isInputRestricted"];

/// Both keyguard flags judged from a single report.
fn keyguard_active(report: &str) -> bool {
    flag(report, SHOWING_KEYS) || flag(report, INPUT_RESTRICTED_KEYS)
}

impl Dumpsys {
    fn window_policy(&self) -> Option<String> {
        command::output(DUMPSYS, &["window", "policy"]).ok_or_warn()
    }
}

impl ActivityManager for Dumpsys {
    fn is_in_lock_task_mode(&self) -> Result<bool> {
        let report = command::output(DUMPSYS, &["activity", "activities"])?;
        Ok(lock_task_active(&report))
    }
}

impl KeyguardManager for Dumpsys {
    fn is_keyguard_locked(&self) -> bool {
        self.window_policy()
            .is_some_and(|report| flag(&report, SHOWING_KEYS))
    }

    fn in_keyguard_restricted_input_mode(&self) -> bool {
        self.window_policy()
            .is_some_and(|report| flag(&report, INPUT_RESTRICTED_KEYS))
    }

    fn on_keyguard(&self) -> bool {
        self.window_policy().is_some_and(|report| keyguard_active(&report))
    }
}
