//! # LexAssist Types
//!
//! Core types, models, and error definitions for LexAssist.
//!
//! - **`error`** - Typed error hierarchy for configuration and generation
//! - **`models`** - Domain models (requests, documents, usage, feature results)
//! - **`protocol`** - Gemini GenerateContent wire types
//!
//! ## Architecture Role
//!
//! `lexassist-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!          lexassist-types (this crate)
//!                  │
//!                  ▼
//!           lexassist-core
//!                  │
//!                  ▼
//!           lexassist-cli
//! ```

pub mod error;
pub mod models;
pub mod protocol;

// Re-export error types for convenience
pub use error::{ConfigError, GenerationError, TypedError};

// Re-export core model types
pub use models::{
    AppConfig, DocumentPayload, GenerationRequest, GenerationResult, MediaResolution, ThinkingLevel,
    UsageMetrics, UsageTotals, ViewContext,
};
