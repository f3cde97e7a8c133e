//! # Intelligent News TUI
//!
//! A terminal reader for the Intelligent News backend.
//!
//! ## Features
//! - Fetches `GET {backend}/news`, optionally filtered by `?category=`
//! - Category selector (general, business, entertainment, health, science, sports, technology)
//! - Loading, error and empty states with a fixed precedence
//! - Opens articles in the system browser
//! - One-shot plain-text mode for scripts
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod models;
pub mod constants;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{Article, Category, NewsPayload, UnknownCategory};
pub use config::Config;
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState, ViewBody};
pub use app::{AppState, AppActor};
pub use network::NetworkActor;
