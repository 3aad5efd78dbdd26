use super::*;

/// Where page output goes. A mockable interface to stdout.
pub trait ConsoleTrait {
    /// Print one line of human readable text
    fn print_line(&self, line: &str);
}

/// Shared because several observers print to the same console
pub type Console = Rc<dyn ConsoleTrait>;

pub fn stdout_console() -> Console {
    Rc::new(StdoutConsole)
}

struct StdoutConsole;

impl ConsoleTrait for StdoutConsole {
    fn print_line(&self, line: &str) {
        println!("{}", line);
    }
}
