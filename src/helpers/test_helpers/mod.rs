use super::*;

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

mod mock_console;
mod mock_filesystem;
mod mock_observer;

pub use mock_console::*;
pub use mock_filesystem::*;
pub use mock_observer::*;
