//! Command implementations.

pub mod screen;
