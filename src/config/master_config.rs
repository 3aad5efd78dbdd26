use super::*;

/// Configuration for the whole pattern-pages program
#[derive(Debug)]
pub struct MasterConfig {
    /// If to exit with success without running anything (for example, after showing --help)
    pub happy_exit: bool,
    /// Pages to run, in order
    pub pages: Vec<PageKind>,
    /// How long the observer page waits between its two broadcasts, None for no wait
    pub observer_pause: Option<Duration>,
    /// URLs the proxy page refuses to connect to
    pub blocked_urls: Vec<String>,
    /// Which formatting strategies the strategy page runs
    pub letter_case: LetterCase,
}

impl Default for MasterConfig {
    /// NOTE: the true default configuration you get when you run pattern-pages is determined by config_entries(), this
    /// is just an empty struct
    fn default() -> Self {
        Self {
            happy_exit: false,
            pages: Vec::new(),
            observer_pause: None,
            blocked_urls: Vec::new(),
            letter_case: LetterCase::Both,
        }
    }
}
