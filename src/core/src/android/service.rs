use crate::shell::{ServiceManager, ShellService};
use anyhow::{Result, bail};
use navbar_misc::command;
use navbar_utils::ext::ResultExt;
use std::sync::Arc;

const SERVICE: &str = "service";

/// Looks services up with `service check`.
///
/// `toggle_transaction` is the binder code of `toggleNavigationBar`, which
/// differs between ROMs. Without one no handle is ever handed out.
pub struct ServiceCall {
    toggle_transaction: Option<u32>,
}

impl ServiceCall {
    pub fn new(toggle_transaction: Option<u32>) -> Self {
        Self { toggle_transaction }
    }
}

impl ServiceManager for ServiceCall {
    fn get_service(&self, name: &str) -> Option<Arc<dyn ShellService>> {
        let code = self.toggle_transaction?;
        let output = command::output(SERVICE, &["check", name]).ok_or_warn()?;

        if !is_found(&output) {
            return None;
        }

        Some(Arc::new(StatusBarCall {
            name: name.into(),
            code,
        }))
    }
}

pub struct StatusBarCall {
    name: String,
    code: u32,
}

impl ShellService for StatusBarCall {
    fn toggle_navigation_bar(&self, show: bool) -> Result<()> {
        let code = self.code.to_string();
        let arg = (show as i32).to_string();
        let output = command::output(SERVICE, &["call", &self.name, &code, "i32", &arg])?;

        parcel_status(&output)
    }
}

fn is_found(output: &str) -> bool {
    output.ends_with(": found")
}

// Reply looks like `Result: Parcel(00000000    '....')`; the first word is the
// exception code written by the stub.
fn parcel_status(output: &str) -> Result<()> {
    let Some((_, reply)) = output.split_once("Parcel(") else {
        bail!("unexpected reply: {output}");
    };

    match reply.split_whitespace().next() {
        Some("00000000") => Ok(()),
        Some(word) if word.starts_with("Error") || word.contains(')') => {
            bail!("transaction failed: {output}")
        }
        Some(word) => bail!("remote exception {word}: {output}"),
        None => bail!("empty reply"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_check_output() {
        assert!(is_found("Service statusbar: found"));
        assert!(!is_found("Service statusbar: not found"));
    }

    #[test]
    fn decodes_parcel_status() {
        assert!(parcel_status("Result: Parcel(00000000    '....')").is_ok());
        assert!(parcel_status("Result: Parcel(ffffffff ffffffb4 '........')").is_err());
        assert!(parcel_status("Result: Parcel(Error: 0xffffffe0 \"Unknown error\")").is_err());
        assert!(parcel_status("service: not found").is_err());
    }

    #[test]
    fn no_transaction_code_means_no_handle() {
        assert!(ServiceCall::new(None).get_service("statusbar").is_none());
    }
}
