use log::{error, warn};
use std::fmt::Debug;

pub trait ResultExt<T> {
    /// Logs the error at `warn` level and drops it.
    fn ok_or_warn(self) -> Option<T>;

    fn log_if_error(self);
}

impl<T, E: Debug> ResultExt<T> for Result<T, E> {
    fn ok_or_warn(self) -> Option<T> {
        self.inspect_err(|err| warn!("{err:?}")).ok()
    }

    fn log_if_error(self) {
        if let Err(err) = self {
            error!("{err:?}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ResultExt;

    #[test]
    fn ok_or_warn_keeps_value() {
        let res: Result<u8, &str> = Ok(7);
        assert_eq!(res.ok_or_warn(), Some(7));
    }

    #[test]
    fn ok_or_warn_drops_error() {
        let res: Result<u8, &str> = Err("broken pipe");
        assert_eq!(res.ok_or_warn(), None);
    }
}
