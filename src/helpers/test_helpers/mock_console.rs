use super::*;

/// Records every printed line instead of writing to stdout
#[derive(Clone)]
pub struct MockConsole(Rc<RefCell<Vec<String>>>);

impl MockConsole {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Vec::new())))
    }

    pub fn get(&self) -> Console {
        Rc::new(self.clone())
    }

    pub fn lines(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl ConsoleTrait for MockConsole {
    fn print_line(&self, line: &str) {
        self.0.borrow_mut().push(line.to_string());
    }
}
