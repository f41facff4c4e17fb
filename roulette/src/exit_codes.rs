//! Stable exit codes for roulette CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid config, invalid participant count, or any other failure.
pub const INVALID: i32 = 1;
