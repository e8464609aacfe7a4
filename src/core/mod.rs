//! # Core Logic
//!
//! This module contains sift's domain logic. It knows nothing about any
//! specific terminal technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • score (ranking)      │
//!                    │  • Search (state)       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (crossterm)│
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`score`]: fuzzy match quality for one candidate against the query
//! - [`state`]: the `Search` value and its keystroke transitions
//! - [`config`]: settings resolution (defaults → file → env → CLI)

pub mod config;
pub mod score;
pub mod state;
