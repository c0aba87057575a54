//! Utilities shared by the console core.

pub mod path;
