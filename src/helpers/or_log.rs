/// Used to easily log and otherwise ignore an error
pub trait OrLog<T> {
    /// Logs the error (if any) at warn level and discards it
    fn or_log_warn(self, context: &str) -> Option<T>;
    /// Logs the error (if any) at error level and discards it
    fn or_log_error(self, context: &str) -> Option<T>;
}

impl<T, U> OrLog<T> for Result<T, U>
where
    U: std::fmt::Display,
{
    fn or_log_warn(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("{}: {}", context, e);
                None
            }
        }
    }

    fn or_log_error(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                error!("{}: {}", context, e);
                None
            }
        }
    }
}
