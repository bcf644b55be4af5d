use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    #[default]
    YoutubeShorts,
    Tiktok,
    InstagramReels,
    VkClips,
}

impl Platform {
    /// Name used when talking to the model about the platform
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::YoutubeShorts => "YouTube Shorts",
            Platform::Tiktok => "TikTok",
            Platform::InstagramReels => "Instagram Reels",
            Platform::VkClips => "VK Clips",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
    Kk,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Ru => "Russian",
            Language::En => "English",
            Language::Kk => "Kazakh",
        }
    }
}

/// Production parameters of a channel, as read from the channel store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelProfile {
    pub platform: Platform,
    pub language: Language,
    pub target_duration_sec: u32,
    #[serde(default)]
    pub niche: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub blocked_topics: String,
    #[serde(default)]
    pub extra_notes: Option<String>,
}

impl Default for ChannelProfile {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            language: Language::default(),
            target_duration_sec: 15,
            niche: String::new(),
            audience: String::new(),
            tone: String::new(),
            blocked_topics: String::new(),
            extra_notes: None,
        }
    }
}

/// The six-part breakdown of a short video. Absent parts are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptSection {
    pub hook: String,
    pub main_action: String,
    pub finale: String,
    pub on_screen_text: String,
    pub voiceover: String,
    pub sounds: String,
}

impl ScriptSection {
    /// Wire keys in schema order
    pub const KEYS: [&'static str; 6] = [
        "hook",
        "mainAction",
        "finale",
        "onScreenText",
        "voiceover",
        "sounds",
    ];

    /// Fallback used when the response carries no usable JSON object
    pub fn degraded(raw_text: &str) -> Self {
        Self {
            main_action: raw_text.to_string(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_empty())
    }

    /// (key, value) pairs in schema order
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            (Self::KEYS[0], self.hook.as_str()),
            (Self::KEYS[1], self.main_action.as_str()),
            (Self::KEYS[2], self.finale.as_str()),
            (Self::KEYS[3], self.on_screen_text.as_str()),
            (Self::KEYS[4], self.voiceover.as_str()),
            (Self::KEYS[5], self.sounds.as_str()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedScript {
    pub sections: ScriptSection,
    /// Verbatim model output, kept even when structured parsing degraded
    pub raw_text: String,
}
