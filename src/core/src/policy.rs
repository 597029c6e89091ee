//! Navigation bar enablement and lock policy.
//!
//! Every operation is best effort: store and transport failures are logged and
//! swallowed, and the queries fall back to their documented defaults.

use crate::ambient;
use crate::context::Context;
use crate::props::MainKeysOverride;
use crate::settings::{NAVIGATION_BAR_ENABLED, NAVIGATION_BAR_LOCKED, SettingsStore, UserId};
use log::{debug, info};
use navbar_utils::ext::ResultExt;
use serde::Serialize;
use std::time::Duration;

/// Gap between the disable and re-enable writes of [`reload_navigation_bar`].
pub const RELOAD_DELAY: Duration = Duration::from_millis(1000);

pub fn has_navbar_by_default(ctx: &Context) -> bool {
    match MainKeysOverride::read(ctx.props.as_ref()) {
        Some(over) => over.needs_navbar(),
        None => ctx.resources.show_navigation_bar(),
    }
}

pub fn is_navigation_bar_enabled(ctx: &Context) -> bool {
    if let Some(over) = MainKeysOverride::read(ctx.props.as_ref()) {
        return over.needs_navbar();
    }

    let default = ctx.resources.show_navigation_bar() as i32;
    ctx.settings
        .get_int_or(NAVIGATION_BAR_ENABLED, default, UserId::CURRENT)
        == 1
}

pub fn set_navigation_bar_enabled(ctx: &Context, enabled: bool) {
    write_enabled(ctx.settings.as_ref(), enabled);
}

fn write_enabled(settings: &dyn SettingsStore, enabled: bool) {
    debug!("{NAVIGATION_BAR_ENABLED} <- {enabled}");
    settings
        .put_int(NAVIGATION_BAR_ENABLED, enabled as i32, UserId::CURRENT)
        .log_if_error();
}

/// Turns the bar off, then back on after [`RELOAD_DELAY`] to force a redraw.
///
/// The re-enable is not cancellable; overlapping reloads interleave.
pub fn reload_navigation_bar(ctx: &Context) {
    write_enabled(ctx.settings.as_ref(), false);

    let settings = ctx.settings.clone();
    ctx.handler.post_delayed(
        RELOAD_DELAY,
        Box::new(move || write_enabled(settings.as_ref(), true)),
    );
}

pub fn is_navigation_bar_locked(ctx: &Context) -> bool {
    ctx.settings
        .get_int_or(NAVIGATION_BAR_LOCKED, 0, UserId::CURRENT)
        == 1
}

pub fn lock_navigation_bar(ctx: &Context) {
    ctx.settings
        .put_int(NAVIGATION_BAR_LOCKED, 1, UserId::CURRENT)
        .log_if_error();
    toggle_navigation_bar_directly(ctx, true);
}

pub fn restore_navigation_bar(ctx: &Context, toggle: bool) {
    ctx.settings
        .put_int(NAVIGATION_BAR_LOCKED, 0, UserId::CURRENT)
        .log_if_error();

    if toggle {
        toggle_navigation_bar_directly(ctx, is_navigation_bar_enabled(ctx));
    }
}

/// Asks the status bar to show or hide the bar, bypassing the settings.
pub fn toggle_navigation_bar_directly(ctx: &Context, show: bool) {
    let Some(service) = ctx.status_bar.get(ctx.services.as_ref()) else {
        return;
    };

    info!("toggle navigation bar: {show}");
    service.toggle_navigation_bar(show).ok_or_warn();
}

pub fn should_show_navbar_when_fingerprint_sensor_busy(
    ctx: &Context,
    client_package: &str,
) -> bool {
    let in_lock_task_mode = ctx
        .activity
        .is_in_lock_task_mode()
        .ok_or_warn()
        .unwrap_or(false);

    if in_lock_task_mode && !should_show_navbar_in_lock_task_mode(ctx) {
        return false;
    }

    if !ctx.resources.show_navbar_when_fingerprint_sensor_busy() {
        return false;
    }

    !ctx.keyguard.on_keyguard() && !ambient::is_system_ui(client_package)
}

pub fn should_show_navbar_in_lock_task_mode(ctx: &Context) -> bool {
    ctx.resources.show_navbar_in_lock_task_mode()
}

/// Keyguard only gets a bar as a fallback when it is otherwise disabled.
pub fn should_show_navbar_in_keyguard(ctx: &Context) -> bool {
    ctx.resources.show_navbar_in_keyguard() && !is_navigation_bar_enabled(ctx)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavbarState {
    pub has_navbar_by_default: bool,
    pub enabled: bool,
    pub locked: bool,
    pub show_in_lock_task_mode: bool,
    pub show_in_keyguard: bool,
}

impl NavbarState {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn snapshot(ctx: &Context) -> NavbarState {
    let state = NavbarState {
        has_navbar_by_default: has_navbar_by_default(ctx),
        enabled: is_navigation_bar_enabled(ctx),
        locked: is_navigation_bar_locked(ctx),
        show_in_lock_task_mode: should_show_navbar_in_lock_task_mode(ctx),
        show_in_keyguard: should_show_navbar_in_keyguard(ctx),
    };

    debug!("navbar state: {state:?}");
    state
}
