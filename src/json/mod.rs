//! Purpose: Internal JSON parsing boundary shared by runtime callsites.
//! Exports: `parse` module with decode helpers used by the loader.
//! Role: Single seam for the parser implementation and its capability probe.
//! Invariants: Runtime JSON decoding goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
