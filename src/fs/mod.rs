//! Filesystem module.
//!
//! Provides:
//! - Name sanitization for files and folders
//! - Directory management

pub mod naming;
pub mod paths;

pub use naming::{mix_folder_name, sanitize_name, track_file_name, DENYLIST};
pub use paths::ensure_dir;
