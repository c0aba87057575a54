//! Internal layer: input tokenizing, parameter classification, command tables
//! and dispatch, session state, and configuration.

pub mod config;
pub mod dispatch;
pub mod input;
pub mod param;
pub mod session;
