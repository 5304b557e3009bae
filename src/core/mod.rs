//! # Core Application Logic
//!
//! This module contains the quiz's business logic.
//! It knows nothing about terminals or HTTP.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • QuizSession (engine) │
//!                    │  • App (screen state)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Question  │      │  --json    │
//!     │  Adapter   │      │  sources   │      │  handoff   │
//!     │ (ratatui)  │      │ (reqwest)  │      │  (stdout)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`quiz`]: The adaptive quiz engine: primary pass, retry pass, report
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Config file, env and CLI resolution
//! - [`text`]: HTML cleanup and id-ID date formatting

pub mod action;
pub mod config;
pub mod quiz;
pub mod state;
pub mod text;
