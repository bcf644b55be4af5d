//! Settings lookup for script generation.
//!
//! The generator never touches the process environment directly; it reads
//! settings through [`ConfigProvider`] so callers (and tests) decide where
//! values come from.

use std::collections::HashMap;

use crate::{
    error::{GenerationError, Result},
    provider::Provider,
};

/// Overrides the provider's chat-completions endpoint.
pub const API_URL_VAR: &str = "SCENARIST_API_URL";

/// Comma-separated model families that accept `response_format: json_object`.
pub const JSON_MODE_FAMILIES_VAR: &str = "SCENARIST_JSON_MODE_FAMILIES";

pub const DEFAULT_JSON_MODE_FAMILIES: [&str; 2] = ["gpt-4", "o3"];

/// Read-only mapping from setting name to value.
pub trait ConfigProvider: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Settings from the process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvConfig;

impl ConfigProvider for EnvConfig {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigProvider for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Two providers stacked; `top` wins whenever it has a value.
pub struct Layered<A, B> {
    pub top: A,
    pub base: B,
}

impl<A: ConfigProvider, B: ConfigProvider> ConfigProvider for Layered<A, B> {
    fn get(&self, key: &str) -> Option<String> {
        lookup(&self.top, key).or_else(|| lookup(&self.base, key))
    }
}

/// Blank values count as unset
fn lookup(config: &dyn ConfigProvider, key: &str) -> Option<String> {
    config
        .get(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Capability gate for the strict JSON-object response mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonModePolicy {
    families: Vec<String>,
}

impl Default for JsonModePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_JSON_MODE_FAMILIES)
    }
}

impl JsonModePolicy {
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            families: families.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma-separated family list, skipping blank entries
    pub fn parse(list: &str) -> Self {
        Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|family| !family.is_empty()),
        )
    }

    pub fn supports(&self, model: &str) -> bool {
        self.families.iter().any(|family| model.contains(family.as_str()))
    }

    pub fn families(&self) -> &[String] {
        &self.families
    }
}

/// Everything one generation call needs, resolved up front.
#[derive(Clone)]
pub struct GeneratorSettings {
    pub provider: Provider,
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub json_mode: JsonModePolicy,
}

impl std::fmt::Debug for GeneratorSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorSettings")
            .field("provider", &self.provider)
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("json_mode", &self.json_mode)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl GeneratorSettings {
    /// Fails with [`GenerationError::Configuration`] when the provider's key is unset.
    pub fn resolve(provider: Provider, config: &dyn ConfigProvider) -> Result<Self> {
        let defaults = provider.config();

        let api_key =
            lookup(config, defaults.key_var).ok_or_else(|| GenerationError::Configuration {
                setting: defaults.key_var.to_string(),
            })?;

        let model =
            lookup(config, defaults.model_var).unwrap_or_else(|| defaults.model.to_string());
        let api_url =
            lookup(config, API_URL_VAR).unwrap_or_else(|| defaults.api_url.to_string());
        let json_mode = lookup(config, JSON_MODE_FAMILIES_VAR)
            .map(|list| JsonModePolicy::parse(&list))
            .unwrap_or_default();

        Ok(Self {
            provider,
            api_key,
            api_url,
            model,
            json_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let err = GeneratorSettings::resolve(Provider::Openai, &config(&[])).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = GeneratorSettings::resolve(
            Provider::Openai,
            &config(&[("OPENAI_API_KEY", "   ")]),
        )
        .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn model_defaults_to_baseline() {
        let settings =
            GeneratorSettings::resolve(Provider::Openai, &config(&[("OPENAI_API_KEY", "k")]))
                .unwrap();
        assert_eq!(settings.model, "gpt-4o-mini");
        assert_eq!(settings.api_url, "https://api.openai.com/v1/chat/completions");
        assert_eq!(settings.json_mode, JsonModePolicy::default());
    }

    #[test]
    fn overrides_are_applied() {
        let settings = GeneratorSettings::resolve(
            Provider::Grok,
            &config(&[
                ("XAI_API_KEY", "k"),
                ("XAI_MODEL", "grok-3"),
                (API_URL_VAR, "http://localhost:9000/chat"),
                (JSON_MODE_FAMILIES_VAR, "grok, ,gpt-4"),
            ]),
        )
        .unwrap();
        assert_eq!(settings.model, "grok-3");
        assert_eq!(settings.api_url, "http://localhost:9000/chat");
        assert_eq!(settings.json_mode.families(), ["grok", "gpt-4"]);
        assert!(settings.json_mode.supports("grok-3"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let settings = GeneratorSettings::resolve(
            Provider::Openai,
            &config(&[("OPENAI_API_KEY", "sk-secret")]),
        )
        .unwrap();
        assert!(!format!("{settings:?}").contains("sk-secret"));
    }

    #[test]
    fn json_mode_matches_allow_listed_families() {
        let policy = JsonModePolicy::default();
        assert!(policy.supports("gpt-4o-mini"));
        assert!(policy.supports("gpt-4-turbo"));
        assert!(policy.supports("o3-mini"));
        assert!(!policy.supports("gpt-3.5-turbo"));
    }

    #[test]
    fn layered_prefers_top_layer() {
        let layered = Layered {
            top: config(&[("OPENAI_MODEL", "gpt-4.1"), ("OPENAI_API_KEY", "")]),
            base: config(&[("OPENAI_MODEL", "gpt-4o"), ("OPENAI_API_KEY", "base-key")]),
        };
        assert_eq!(layered.get("OPENAI_MODEL").as_deref(), Some("gpt-4.1"));
        assert_eq!(layered.get("OPENAI_API_KEY").as_deref(), Some("base-key"));
    }
}
