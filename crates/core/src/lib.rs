//! Scenarist Core Library
//!
//! Builds prompts from a channel profile, asks an OpenAI-compatible model for a
//! short-video script, and maps the reply onto a fixed six-part structure.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod parser;
pub mod prompt;
pub mod provider;
pub mod service;
pub mod types;

// Re-export commonly used items at crate root
pub use client::GenerationClient;
pub use config::{ConfigProvider, EnvConfig, GeneratorSettings, JsonModePolicy, Layered};
pub use error::{GenerationError, Result};
pub use format::{format_script_readable, format_sections_readable};
pub use parser::parse_script;
pub use prompt::{PromptPair, build_prompts};
pub use provider::{Provider, ProviderConfig};
pub use service::ScriptGenerator;
pub use types::{ChannelProfile, GeneratedScript, Language, Platform, ScriptSection};
