use super::*;

use slotmap::SlotMap;

new_key_type! {
    /// Handle for a single registration, returned by Subject::add_observer()
    pub struct ObserverKey;
}

impl std::fmt::Display for ObserverKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        format_slotmap_key(f, "observer", *self)
    }
}

struct Registration<S> {
    /// Obtained with thin_ptr() at registration time. Stored because the Weak can't produce it any
    /// more once the observer is dropped, and removal still has to be able to find it. The Weak keeps
    /// the allocation reserved, so the address can't be reused while the registration exists.
    ptr: usize,
    observer: Weak<dyn Observer<S>>,
}

/// An ordered list of registrations. Conceptually this is a list of Weaks.
///
/// You can't compare a Weak<dyn _> reliably, so identity is the thin pointer cast to usize. Each
/// registration gets its own key from the slotmap, so the same observer registered twice has two
/// keys. The slotmap does not remember insertion order, so the order is kept in a separate Vec.
#[derive(derivative::Derivative)]
#[derivative(Default(bound = ""))]
pub struct ObserverList<S> {
    registrations: SlotMap<ObserverKey, Registration<S>>,
    order: Vec<ObserverKey>,
}

impl<S> ObserverList<S> {
    pub fn add(&mut self, observer: &Rc<dyn Observer<S>>) -> ObserverKey {
        let key = self.registrations.insert(Registration {
            ptr: observer.thin_ptr() as usize,
            observer: Rc::downgrade(observer),
        });
        self.order.push(key);
        key
    }

    /// Removes the earliest registration of the given observer
    pub fn remove_first(&mut self, observer: &Rc<dyn Observer<S>>) -> Option<ObserverKey> {
        let observer_ptr = observer.thin_ptr() as usize;
        let position = self.order.iter().position(|key| {
            self.registrations
                .get(*key)
                .map_or(false, |registration| registration.ptr == observer_ptr)
        })?;
        let key = self.order.remove(position);
        self.registrations.remove(key);
        Some(key)
    }

    /// Returns false if the key is stale or never belonged to this list
    pub fn remove_key(&mut self, key: ObserverKey) -> bool {
        if self.registrations.remove(key).is_none() {
            return false;
        }
        // Vec::remove() rather than swap_remove() keeps the notification order intact
        if let Some(position) = self.order.iter().position(|k| *k == key) {
            self.order.remove(position);
        }
        true
    }

    pub fn contains(&self, observer: &Rc<dyn Observer<S>>) -> bool {
        let observer_ptr = observer.thin_ptr() as usize;
        self.registrations
            .values()
            .any(|registration| registration.ptr == observer_ptr)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registrations in the order they were added
    pub fn iter(&self) -> impl Iterator<Item = (ObserverKey, &Weak<dyn Observer<S>>)> + '_ {
        self.order.iter().filter_map(move |key| {
            self.registrations
                .get(*key)
                .map(|registration| (*key, &registration.observer))
        })
    }
}
