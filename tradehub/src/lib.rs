//! Headless core of the TradeHub page controller.
//!
//! Every user gesture maps to one controller call; controllers talk to the DOM
//! through small view traits and to the server through [`api::Transport`], so
//! the same state transitions run in the browser and in native tests.

pub mod actions;
pub mod api;
pub mod config;
pub mod controllers;
pub mod error;
pub mod payloads;
pub mod utils;

pub use actions::Action;
pub use api::{ApiClient, Transport};
pub use config::Config;
pub use error::ApiError;
