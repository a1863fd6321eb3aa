//! # cinetui - TMDB movie discovery TUI
//!
//! A terminal client for browsing TMDB movie catalogs, built with Ratatui.
//! The home screen composes one horizontally scrollable row of movie cards
//! per catalog slice (trending, top rated, popular, upcoming); each row
//! fetches its own page of titles asynchronously and renders a skeleton, an
//! error line, or the cards.
//!
//! ## Architecture
//!
//! A single action loop (`app`) drives everything: terminal events become
//! [`action::Action`]s, components consume actions and emit follow-ups, and
//! network fetches run as spawned tasks whose results come back through the
//! same channel.
//!
//! ## Modules
//!
//! - [`app`] - The action loop
//! - [`components`] - Home screen composer, catalog rows, status bar
//! - [`tmdb`] - HTTP client and API types
//! - [`config`] - Configuration and keybindings
//! - [`tui`] - Terminal lifecycle and event stream
//! - [`widgets`] - Reusable render-only pieces

#![allow(dead_code)]

pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod mode;
pub mod text;
pub mod tmdb;
pub mod tui;
pub mod utils;
pub mod widgets;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
