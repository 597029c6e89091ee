use anyhow::{Context, Result, bail};
use log::trace;
use std::process::Command;

/// Runs `program` with `args` and returns its trimmed stdout.
pub fn output(program: &str, args: &[&str]) -> Result<String> {
    trace!("exec: {program} {}", args.join(" "));

    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("failed to spawn {program}"))?;

    if !output.status.success() {
        bail!(
            "{program} exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::output;

    #[cfg(unix)]
    #[test]
    fn captures_trimmed_stdout() {
        assert_eq!(output("echo", &["  hello  "]).unwrap(), "hello");
    }

    #[test]
    fn missing_program_is_an_error() {
        assert!(output("/nonexistent/navbar-test-binary", &[]).is_err());
    }
}
