//! The observer registry: a publisher broadcasts state snapshots to the observers registered with it

use super::*;

mod notify_error;
#[allow(clippy::module_inception)]
mod observer;
mod observer_list;
mod publisher;
mod traffic_light;

pub use notify_error::{NotifyError, NotifyResult};
pub use observer::{Observer, Subject};
pub use observer_list::ObserverKey;
pub use publisher::Publisher;
pub use traffic_light::{Car, Pedestrian, TrafficLight};

use observer_list::ObserverList;
