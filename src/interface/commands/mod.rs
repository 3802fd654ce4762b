//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (e.g., .friends, .profile, .help).
//! These handlers are invoked by the Router.

pub mod friends;
pub mod help;
pub mod lookup;
pub mod profile;
pub mod reply;
