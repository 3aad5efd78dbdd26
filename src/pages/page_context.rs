use super::*;

/// Everything a page needs to run: where to print and the parts of the config that concern pages
pub struct PageContext {
    pub console: Console,
    pub observer_pause: Option<Duration>,
    pub blocked_urls: Vec<String>,
    pub letter_case: LetterCase,
}

impl PageContext {
    pub fn new(console: Console, conf: &MasterConfig) -> Self {
        Self {
            console,
            observer_pause: conf.observer_pause,
            blocked_urls: conf.blocked_urls.clone(),
            letter_case: conf.letter_case,
        }
    }
}
