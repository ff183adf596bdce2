//! Tabspace: the tab workspace core of an AI browser shell.
//!
//! Owns open tabs and their bubble positions, derives the filtered and
//! grouped view the renderer draws, and relays AI work to a REST backend.
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
