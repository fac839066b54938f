//! Shared infrastructure utilities for Keywright.
//!
//! Cross-cutting helpers that several Keywright crates need but that don't
//! belong in the IO-free `keywright-types` crate:
//!
//! - **`atomic_write`**: Crash-safe file persistence (temp + rename)
//! - **`lines`**: Newline-terminated line files
//! - **`display`**: Masking credentials for on-screen display

pub mod atomic_write;
pub mod display;
pub mod lines;

pub use atomic_write::{
    AtomicWriteOptions, FileSyncPolicy, PersistMode, atomic_write_with_options,
};
pub use display::{mask, numbered};
pub use lines::{read_lines, write_lines};
