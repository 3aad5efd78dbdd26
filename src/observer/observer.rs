use super::*;

/// An object that can be notified when the state it watches changes.
pub trait Observer<S> {
    /// Called synchronously by the publisher for every broadcast. Returning an error aborts the
    /// rest of the broadcast.
    fn update(&self, state: &S) -> Result<(), Box<dyn Error>>;
}

/// Something observers can register with. Observers are held weakly, the subject never keeps one
/// alive.
pub trait Subject<S> {
    /// Registers the observer at the end of the notification order. Registering the same observer
    /// again adds a second registration, it is not deduplicated.
    fn add_observer(&mut self, observer: &Rc<dyn Observer<S>>) -> ObserverKey;

    /// Removes the first registration of this exact observer (by identity, not value). Returns
    /// None and changes nothing if it is not registered.
    fn delete_observer(&mut self, observer: &Rc<dyn Observer<S>>) -> Option<ObserverKey>;

    /// Notifies every registered observer in registration order, stopping at the first failure.
    fn notify_update(&self, state: &S) -> NotifyResult<()>;
}
