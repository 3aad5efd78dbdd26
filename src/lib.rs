//! Small demonstrations of classic object oriented design patterns, each a runnable page. The
//! observer registry is the part meant for reuse.

#[macro_use(new_key_type)]
extern crate slotmap;

#[macro_use]
extern crate log;

use std::{
    collections::HashSet,
    error::Error,
    rc::{Rc, Weak},
    time::Duration,
};

pub mod config;
pub mod helpers;
pub mod observer;
pub mod pages;

pub use config::*;
pub use helpers::*;
pub use observer::*;
pub use pages::*;
