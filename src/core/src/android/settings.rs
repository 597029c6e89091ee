use crate::settings::{SettingsStore, UserId};
use anyhow::{Result, bail};
use log::debug;
use navbar_misc::command;

const SETTINGS: &str = "settings";

/// `Settings.Secure` through the `settings` command.
pub struct SecureSettings;

fn parse_int(output: &str) -> Option<i32> {
    match output {
        "null" | "" => None,
        value => value.parse().ok(),
    }
}

impl SettingsStore for SecureSettings {
    fn get_int(&self, key: &str, user: UserId) -> Result<Option<i32>> {
        let user = user.to_string();
        let output = command::output(SETTINGS, &["--user", &user, "get", "secure", key])?;

        let value = parse_int(&output);
        if value.is_none() && output != "null" {
            debug!("ignoring non-integer value of {key}: {output:?}");
        }

        Ok(value)
    }

    fn put_int(&self, key: &str, value: i32, user: UserId) -> Result<()> {
        let user = user.to_string();
        let value = value.to_string();
        let output =
            command::output(SETTINGS, &["--user", &user, "put", "secure", key, &value])?;

        if output.contains("Exception") {
            bail!("settings put {key} failed: {output}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::parse_int;

    #[test]
    fn null_means_unset() {
        assert_eq!(parse_int("null"), None);
        assert_eq!(parse_int("1"), Some(1));
        assert_eq!(parse_int("yes"), None);
    }
}
