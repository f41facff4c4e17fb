//! Side-effecting helpers for roulette commands.

pub mod config;
pub mod rules;
