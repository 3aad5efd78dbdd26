use super::*;

/// Returned when an observer fails during a broadcast. Observers registered after the failing one
/// were not notified.
#[derive(Debug)]
pub struct NotifyError {
    /// Position of the failing registration in notification order, starting at 0
    pub position: usize,
    /// Handle of the failing registration
    pub key: ObserverKey,
    /// What the observer returned
    pub error: Box<dyn Error>,
}

pub type NotifyResult<T> = Result<T, NotifyError>;

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} at position {} failed: {}",
            self.key, self.position, self.error
        )
    }
}

impl Error for NotifyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.error.as_ref())
    }
}
