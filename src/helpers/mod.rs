//! General useful bits and bobs

use super::*;

mod console;
mod filesystem;
mod format_slotmap_key;
mod or_log;
mod short_type_name;
#[cfg(test)]
mod test_helpers;
mod thin_ptr;

pub use console::{stdout_console, Console, ConsoleTrait};
pub use filesystem::{real_filesystem, Filesystem, FilesystemTrait};
pub use format_slotmap_key::format_slotmap_key;
pub use or_log::OrLog;
pub use short_type_name::short_type_name;
#[cfg(test)]
pub use test_helpers::*;
pub use thin_ptr::ThinPtr;
