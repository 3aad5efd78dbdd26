use super::*;

#[derive(Debug)]
struct MockFilesystemInner {
    map: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct MockFilesystem(Rc<RefCell<MockFilesystemInner>>);

impl MockFilesystem {
    pub fn new() -> Self {
        MockFilesystem(Rc::new(RefCell::new(MockFilesystemInner {
            map: HashMap::new(),
        })))
    }

    pub fn add_file(self, path: &str, contents: &str) -> Self {
        self.0
            .borrow_mut()
            .map
            .insert(path.to_string(), contents.to_string());
        self
    }

    pub fn boxed(&self) -> Filesystem {
        Box::new(self.clone())
    }
}

impl FilesystemTrait for MockFilesystem {
    fn is_file(&self, path: &str) -> bool {
        self.0.borrow().map.contains_key(path)
    }

    fn read_to_string(&self, path: &str) -> std::io::Result<String> {
        match self.0.borrow().map.get(path) {
            Some(contents) => Ok(contents.clone()),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "file not found",
            )),
        }
    }
}
