use super::*;

type UpdateFn<S> = Box<dyn Fn(&S) -> Result<(), Box<dyn Error>>>;

struct MockObserverInner<S> {
    count: Cell<u32>,
    seen: RefCell<Vec<S>>,
    f: UpdateFn<S>,
}

/// Counts and records the states it is notified with. Clones share the same inner observer, so they
/// have the same identity as far as a publisher is concerned.
#[derive(derivative::Derivative)]
#[derivative(Clone(bound = ""))]
pub struct MockObserver<S>(Rc<MockObserverInner<S>>);

impl<S: Clone + 'static> MockObserver<S> {
    pub fn new() -> Self {
        Self::new_with_fn(|_| Ok(()))
    }

    pub fn new_terrified() -> Self {
        Self::new_with_fn(|_| panic!("mock observer should not have been notified"))
    }

    pub fn new_failing(message: &'static str) -> Self {
        Self::new_with_fn(move |_| Err(message.into()))
    }

    pub fn new_with_fn<F>(f: F) -> Self
    where
        F: Fn(&S) -> Result<(), Box<dyn Error>> + 'static,
    {
        Self(Rc::new(MockObserverInner {
            count: Cell::new(0),
            seen: RefCell::new(Vec::new()),
            f: Box::new(f),
        }))
    }

    /// Pushes `name` onto the shared log every time it is notified, for checking notification order
    pub fn new_logging(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Self {
        let log = log.clone();
        Self::new_with_fn(move |_| {
            log.borrow_mut().push(name);
            Ok(())
        })
    }

    pub fn get(&self) -> Rc<dyn Observer<S>> {
        self.0.clone()
    }

    pub fn notify_count(&self) -> u32 {
        self.0.count.get()
    }

    pub fn seen(&self) -> Vec<S> {
        self.0.seen.borrow().clone()
    }
}

impl<S: Clone> Observer<S> for MockObserverInner<S> {
    fn update(&self, state: &S) -> Result<(), Box<dyn Error>> {
        self.count.set(self.count.get() + 1);
        self.seen.borrow_mut().push(state.clone());
        (self.f)(state)
    }
}
