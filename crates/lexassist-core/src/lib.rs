//! # LexAssist Core
//!
//! Request orchestration for the legal assistant.
//!
//! ```text
//! feature action ──► assembler ──► GeminiClient ──► citations / structured
//!      ▲                                                     │
//!      └──────────────────── AppState ◄──────────────────────┘
//! ```
//!
//! - `assembler` turns a [`GenerationRequest`](lexassist_types::GenerationRequest)
//!   into a GenerateContent body
//! - `citations` splices grounding markers into free text
//! - `structured` parses schema-constrained JSON output
//! - `client` is the single network suspension point
//! - `state` holds per-feature session state; `actions` runs features against it
//! - `config`, `storage`, `logger` and `paths` cover the data directory

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod actions;
pub mod assembler;
pub mod citations;
pub mod client;
pub mod config;
pub mod error;
pub mod extraction;
pub mod logger;
pub mod paths;
pub mod prompts;
pub mod service;
pub mod state;
pub mod storage;
pub mod structured;

// Re-export commonly used types
pub use actions::run_feature;
pub use client::{GeminiClient, ModelEndpoint};
pub use error::{AppError, AppResult};
pub use service::{generate_structured, generate_text};
pub use state::AppState;
pub use storage::LocalStore;
