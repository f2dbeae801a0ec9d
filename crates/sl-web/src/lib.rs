//! Web UI and interaction layer for the sleep logger.
//!
//! This crate wires the store and chart builder to an HTTP surface: one
//! embedded page with the submit form, and a small JSON API the page calls.

mod cli;
mod config;
pub mod handler;
mod html;
pub mod server;

pub use cli::{Cli, Commands};
pub use config::Config;
