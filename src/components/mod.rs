//! Reusable view components.

pub mod circuit_background;
