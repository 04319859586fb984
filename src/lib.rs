//! # Connect Four
//!
//! Connect Four on the classic 6x7 grid: move application, four-in-a-row and
//! draw detection, undo, and a rule-based computer opponent. A terminal UI
//! built with Ratatui plays on top of the engine.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, sides, win/draw detection, move log, game state
//! - [`ai`] — Agent trait, the win/block/center heuristic, a random opponent
//! - [`ui`] — Terminal UI: board view, themes, drop animation
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
