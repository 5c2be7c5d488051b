pub mod cli;
pub mod config;
pub mod generator;
pub mod llm;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use generator::error::{AiBriefError, AiBriefErrorCode};
pub use generator::workflow::{BriefPipeline, launch};
pub use types::{Brief, BriefParseInput, BriefParseResult, Placement, ResearchSource};
