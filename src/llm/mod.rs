pub mod capability;
pub mod client;
pub mod grounding;
pub mod tools;

pub use capability::{SearchGenerator, StructuredGenerator};
pub use client::LLMClient;
pub use grounding::{CitationExtractor, GeminiGroundingExtractor};
