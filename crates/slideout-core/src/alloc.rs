//! Hash collections used across slideout.
//!
//! Re-exports of the AHash-backed map so the crates agree on a hasher.

pub use ahash::AHashMap as HashMap;
