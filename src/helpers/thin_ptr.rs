use std::rc::{Rc, Weak};

/// The address of a shared allocation with any vtable metadata stripped, usable as an identity.
pub trait ThinPtr {
    fn thin_ptr(&self) -> *const ();
}

/// Rc::ptr_eq() compares vtables for trait objects. See https://github.com/rust-lang/rust/issues/46139. Use this
/// instead
impl<T: ?Sized> ThinPtr for Rc<T> {
    fn thin_ptr(&self) -> *const () {
        Rc::as_ptr(self) as *const ()
    }
}

/// Null if the allocation has already been dropped
impl<T: ?Sized> ThinPtr for Weak<T> {
    fn thin_ptr(&self) -> *const () {
        match self.upgrade() {
            Some(rc) => rc.thin_ptr(),
            None => std::ptr::null(),
        }
    }
}
