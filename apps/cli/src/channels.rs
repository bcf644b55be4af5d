use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use scenarist_core::ChannelProfile;
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Channel entry of the catalog file
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub profile: ChannelProfile,
}

pub fn get_root_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scenarist")
}

pub fn default_channels_path() -> PathBuf {
    get_root_config_dir().join("channels.json")
}

/// Load all channels from a JSON catalog file
pub async fn load_channels(path: &Path) -> Result<Vec<ChannelRecord>> {
    let json_content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read channel catalog {}", path.display()))?;
    let channels: Vec<ChannelRecord> = serde_json::from_str(&json_content)
        .with_context(|| format!("Invalid channel catalog {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = channels.len(), "Loaded channel catalog");
    Ok(channels)
}

pub fn find_channel<'a>(channels: &'a [ChannelRecord], id: &str) -> Result<&'a ChannelRecord> {
    match channels.iter().find(|channel| channel.id == id) {
        Some(channel) => Ok(channel),
        None => {
            let known = channels
                .iter()
                .map(|channel| channel.id.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            bail!("Unknown channel '{id}'. Known channels: {known}")
        }
    }
}

#[cfg(test)]
mod tests {
    use scenarist_core::{Language, Platform};

    use super::*;

    fn catalog() -> Vec<ChannelRecord> {
        serde_json::from_str(
            r#"[
                {
                    "id": "pasta",
                    "name": "Pasta Hacks",
                    "platform": "TIKTOK",
                    "language": "en",
                    "targetDurationSec": 30,
                    "niche": "cooking",
                    "audience": "young adults",
                    "tone": "energetic",
                    "blockedTopics": "",
                    "extraNotes": "no alcohol"
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn record_flattens_channel_profile() {
        let channels = catalog();
        let channel = find_channel(&channels, "pasta").unwrap();
        assert_eq!(channel.name, "Pasta Hacks");
        assert_eq!(channel.profile.platform, Platform::Tiktok);
        assert_eq!(channel.profile.language, Language::En);
        assert_eq!(channel.profile.extra_notes.as_deref(), Some("no alcohol"));
    }

    #[test]
    fn unknown_channel_lists_known_ids() {
        let channels = catalog();
        let err = find_channel(&channels, "travel").unwrap_err();
        assert!(err.to_string().contains("Known channels: pasta"));
    }
}
