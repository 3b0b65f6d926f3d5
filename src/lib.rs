//! # Virtual TA
//!
//! A virtual teaching assistant that answers course questions by searching
//! two static corpora: Discourse forum posts and course pages.
//!
//! Both corpora are loaded once at startup into an immutable in-memory
//! store. Matching is case-insensitive substring containment; the composed
//! answer cites at most two posts and two pages, in corpus scan order.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────┐   ┌────────────┐
//! │ posts.json   │──▶│             │   │   answer    │
//! │              │   │ CorpusStore │──▶│  (matching  │
//! │ pages dir    │──▶│ (read-only) │   │ + compose)  │
//! └──────────────┘   └─────────────┘   └─────┬──────┘
//!                                            │
//!                               ┌────────────┤
//!                               ▼            ▼
//!                          ┌─────────┐  ┌─────────┐
//!                          │   CLI   │  │  HTTP   │
//!                          │  (vta)  │  │ (axum)  │
//!                          └─────────┘  └─────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! vta sources                   # show loaded corpus sources
//! vta ask "docker"              # one-shot question from the terminal
//! vta serve                     # start the HTTP server
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`store`] | Corpus loading and read-only access |
//! | [`answer`] | Question matching and answer composition |
//! | [`server`] | HTTP server |

pub mod answer;
pub mod config;
pub mod models;
pub mod server;
pub mod store;
