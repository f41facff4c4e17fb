//! Random selector→presenter pairing for presentation rounds.
//!
//! Given an ordered participant list, draws a uniformly random derangement
//! (a permutation with no fixed point) and pairs each participant, as
//! selector, with another participant as presenter. Nobody is ever paired
//! with themselves, and everyone appears exactly once on each side of the
//! table.
//!
//! The crate enforces a strict separation:
//!
//! - **[`core`]**: Pure pairing logic (derangement sampling, assignment
//!   building, invariant validation). No I/O, deterministic given the
//!   injected random source, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config file, rules document).
//!
//! [`render`] turns a finished assignment list into the printable table; the
//! binary in `main.rs` wires the pieces into CLI commands.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod render;
