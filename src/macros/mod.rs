//! Macro utilities for building construction arguments

pub mod arguments;
