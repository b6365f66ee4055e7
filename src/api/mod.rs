//! Purpose: Define the stable public API boundary for recload.
//! Exports: Loader, record, and error types needed by consumers.
//! Role: Public, additive-only surface; hides the internal module layout.
//! Invariants: This module is the only supported path to the loader.
//! Invariants: End-of-stream is `Ok(None)` from `first`/`next`, never an error.

pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::loader::{Record, RecordLoader};
