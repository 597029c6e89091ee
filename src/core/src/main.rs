mod cli;

use crate::cli::{Cli, Command};
use anyhow::{Result, anyhow};
use log::LevelFilter;
use navbar::config::NavbarConfig;
use navbar::handler::TokioHandler;
use navbar::policy::{self, RELOAD_DELAY};
use navbar_misc::debug_on;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio::time;

fn init_logger() {
    let level = if cfg!(debug_assertions) || debug_on!("trace") {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };

    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(level)
            .with_tag("navbar"),
    );

    #[cfg(not(target_os = "android"))]
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() -> Result<()> {
    init_logger();

    let args = Cli::parse_args();
    NavbarConfig::init(&args.config)?;

    Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main(args.command))
}

async fn async_main(command: Command) -> Result<()> {
    let handler = Arc::new(TokioHandler::current().ok_or_else(|| anyhow!("no runtime"))?);
    let ctx = navbar::system_context(NavbarConfig::instance(), handler)?;

    match command {
        Command::Status => println!("{}", policy::snapshot(&ctx).to_json()?),
        Command::HasDefault => println!("{}", policy::has_navbar_by_default(&ctx)),
        Command::Enabled { set: Some(enabled) } => {
            policy::set_navigation_bar_enabled(&ctx, enabled)
        }
        Command::Enabled { set: None } => println!("{}", policy::is_navigation_bar_enabled(&ctx)),
        Command::Reload => {
            policy::reload_navigation_bar(&ctx);
            // keep the queue alive until the re-enable has run
            time::sleep(RELOAD_DELAY + Duration::from_millis(100)).await;
        }
        Command::Locked => println!("{}", policy::is_navigation_bar_locked(&ctx)),
        Command::Lock => policy::lock_navigation_bar(&ctx),
        Command::Restore { toggle } => policy::restore_navigation_bar(&ctx, toggle),
        Command::FingerprintBusy { package } => println!(
            "{}",
            policy::should_show_navbar_when_fingerprint_sensor_busy(&ctx, &package)
        ),
        Command::LockTaskMode => println!("{}", policy::should_show_navbar_in_lock_task_mode(&ctx)),
        Command::Keyguard => println!("{}", policy::should_show_navbar_in_keyguard(&ctx)),
    }

    Ok(())
}
