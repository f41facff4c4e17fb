//! Pure pairing logic: derangement sampling and assignment building.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and are deterministic given the injected random source.

pub mod assignment;
pub mod derangement;
