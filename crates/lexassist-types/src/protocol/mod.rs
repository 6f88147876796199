//! Protocol definitions for the Gemini GenerateContent API.
//!
//! Field names follow the REST contract (camelCase) exactly so that request
//! bodies and responses can be exchanged with the endpoint unchanged.

pub mod gemini;
pub mod grounding;

pub use gemini::{
    Candidate, Content, GeminiRole, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, InlineData, Part, PartMediaResolution, ThinkingConfig, Tool, UsageMetadata,
};
pub use grounding::{GroundingChunk, GroundingChunkWeb, GroundingMetadata, GroundingSupport, Segment};
