//! sopguide - an interactive terminal walkthrough of a frontend development SOP.
//!
//! The library holds the guide content, the navigation state machines, and the
//! TUI that projects them. The `sopguide` binary adds the CLI on top.

pub mod app;
pub mod config;
pub mod content;
pub mod export;
pub mod links;
pub mod logging;
pub mod navigation;
pub mod ui;
