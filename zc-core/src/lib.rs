//! Core types and view logic for the Zc dashboard.
//!
//! This crate provides:
//! - `model`: serde projections of the backend's JSON responses
//! - `zone`: the single zone lookup table (color, emoji, terminal color)
//! - `gauge`, `history`, `stats`, `recommendations`: derived views shared by
//!   the web dashboard and the CLI
//! - `cycle`: the polling fetch cycle and its single-in-flight guard
//! - `client`: a native HTTP client (behind the `api` feature)

pub mod config;
pub mod cycle;
pub mod endpoints;
pub mod error;
pub mod gauge;
pub mod history;
pub mod model;
pub mod recommendations;
pub mod source;
pub mod stats;
pub mod zone;

#[cfg(feature = "api")]
pub mod client;
