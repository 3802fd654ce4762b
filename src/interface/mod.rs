//! # Interface Layer
//!
//! Entry points reached from chat: one handler per command.

pub mod commands;
