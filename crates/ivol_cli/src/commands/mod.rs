//! Command implementations

pub mod demo;
pub mod solve;
