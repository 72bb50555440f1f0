//! Dioxus components and browser bridge for the Zc dashboard.
//!
//! This crate provides:
//! - `web_fetch`: JSON GETs and timers over the browser's `fetch`/`setTimeout`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: the dashboard panels (gauge, history, stats, recommendations)

pub mod components;
pub mod state;
pub mod web_fetch;
