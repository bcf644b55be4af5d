use std::sync::Arc;

use crate::{
    client::GenerationClient,
    config::{ConfigProvider, EnvConfig, GeneratorSettings},
    error::Result,
    parser::parse_script,
    prompt::build_prompts,
    provider::Provider,
    types::{ChannelProfile, GeneratedScript},
};

/// Turns a channel profile and an idea into a structured script.
///
/// Holds no per-call state; concurrent `generate` calls share only the HTTP
/// connection pool and the read-only configuration.
#[derive(Clone)]
pub struct ScriptGenerator {
    provider: Provider,
    config: Arc<dyn ConfigProvider>,
    http: reqwest::Client,
}

impl ScriptGenerator {
    pub fn new(provider: Provider, config: Arc<dyn ConfigProvider>) -> Self {
        Self {
            provider,
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Generator for the default provider reading the process environment.
    pub fn from_env() -> Self {
        Self::new(Provider::default(), Arc::new(EnvConfig))
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Resolve settings without generating anything, e.g. to fail early on a missing key.
    pub fn settings(&self) -> Result<GeneratorSettings> {
        GeneratorSettings::resolve(self.provider, self.config.as_ref())
    }

    pub async fn generate(&self, channel: &ChannelProfile, idea: &str) -> Result<GeneratedScript> {
        let settings = self.settings()?;
        let prompts = build_prompts(channel, idea);

        let content = GenerationClient::new(&self.http, &settings)
            .send(&prompts)
            .await?;

        let sections = parse_script(&content);

        Ok(GeneratedScript {
            sections,
            raw_text: content,
        })
    }
}
