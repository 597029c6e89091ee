use clap::{Parser, Subcommand};
use navbar::config::DEFAULT_CONFIG_PATH;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "navbarctl - query and drive the navigation bar policy", version)]
pub struct Cli {
    #[clap(long, help = "Path of the build flag overlay", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Print every query as JSON")]
    Status,

    #[clap(about = "Whether this build ships with a navigation bar")]
    HasDefault,

    #[clap(about = "Read, or write with --set, the enabled setting")]
    Enabled {
        #[clap(long, action = clap::ArgAction::Set)]
        set: Option<bool>,
    },

    #[clap(about = "Disable the bar, then enable it again a second later")]
    Reload,

    #[clap(about = "Whether the bar is locked")]
    Locked,

    #[clap(about = "Lock the bar and force it visible")]
    Lock,

    #[clap(about = "Unlock the bar")]
    Restore {
        #[clap(long, help = "Also push the enabled setting to the status bar")]
        toggle: bool,
    },

    #[clap(about = "Whether to show the bar while the fingerprint sensor is busy")]
    FingerprintBusy { package: String },

    #[clap(about = "Whether to show the bar in lock-task mode")]
    LockTaskMode,

    #[clap(about = "Whether to show the bar on the keyguard")]
    Keyguard,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
