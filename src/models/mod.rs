//! Data models for the relay and the upstream Gemini API.
//!
//! - `relay`: the inbound `/gemini` request and response bodies
//! - `gemini`: the Generative Language `generateContent` wire types

// Author: kelexine (https://github.com/kelexine)

pub mod gemini;
pub mod relay;

pub use gemini::{GenerateContentRequest, GenerateContentResponse};
pub use relay::{PromptRequest, PromptResponse, FALLBACK_RESPONSE};
