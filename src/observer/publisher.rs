use super::*;

/// Broadcasts state snapshots of type S to its observers. Single threaded: notifications happen
/// synchronously on the thread that calls notify_update().
#[derive(derivative::Derivative)]
#[derivative(Default(bound = ""))]
pub struct Publisher<S> {
    observers: ObserverList<S>,
}

impl<S> Publisher<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the registration with the given handle. Returns false if it was already removed.
    pub fn detach(&mut self, key: ObserverKey) -> bool {
        let removed = self.observers.remove_key(key);
        if removed {
            debug!("{} detached from {} publisher", key, short_type_name::<S>());
        }
        removed
    }

    pub fn contains(&self, observer: &Rc<dyn Observer<S>>) -> bool {
        self.observers.contains(observer)
    }

    /// Number of registrations, counting duplicates
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<S> Subject<S> for Publisher<S> {
    fn add_observer(&mut self, observer: &Rc<dyn Observer<S>>) -> ObserverKey {
        if self.observers.contains(observer) {
            debug!(
                "observer registered with {} publisher more than once, it will be notified once per registration",
                short_type_name::<S>()
            );
        }
        let key = self.observers.add(observer);
        debug!("{} added to {} publisher", key, short_type_name::<S>());
        key
    }

    fn delete_observer(&mut self, observer: &Rc<dyn Observer<S>>) -> Option<ObserverKey> {
        let key = self.observers.remove_first(observer);
        match key {
            Some(key) => debug!("{} deleted from {} publisher", key, short_type_name::<S>()),
            None => trace!(
                "deleted observer was not registered with {} publisher",
                short_type_name::<S>()
            ),
        }
        key
    }

    fn notify_update(&self, state: &S) -> NotifyResult<()> {
        trace!(
            "notifying {} observer(s) of {}",
            self.observers.len(),
            short_type_name::<S>()
        );
        for (position, (key, observer)) in self.observers.iter().enumerate() {
            match observer.upgrade() {
                Some(observer) => observer.update(state).map_err(|error| NotifyError {
                    position,
                    key,
                    error,
                })?,
                None => warn!(
                    "{} was dropped without being deleted from its publisher, skipping it",
                    key
                ),
            }
        }
        Ok(())
    }
}
