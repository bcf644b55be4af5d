use crate::types::ChannelProfile;

/// System and user messages for one generation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

static OUTPUT_SCHEMA: &str = r#"{
  "hook": "Hook (first 2-3 seconds, must grab attention)",
  "mainAction": "Main action (story development, key moments)",
  "finale": "Finale (climax, call to action, memorable moment)",
  "onScreenText": "On-screen text (captions, key phrases)",
  "voiceover": "Voiceover lines (exact text to be read)",
  "sounds": "Sound and music notes (atmosphere, effects)"
}"#;

/// Build the prompt pair for a channel and a free-text idea.
///
/// Channel parameters appear twice in the system prompt: once as a profile
/// and again as directives.
pub fn build_prompts(channel: &ChannelProfile, idea: &str) -> PromptPair {
    PromptPair {
        system: build_system_prompt(channel),
        user: format!("Write a script for a short video about: \"{idea}\""),
    }
}

fn build_system_prompt(channel: &ChannelProfile) -> String {
    let platform = channel.platform.display_name();
    let language = channel.language.display_name();
    let duration = channel.target_duration_sec;
    let blocked = channel.blocked_topics.as_str();
    let notes = channel
        .extra_notes
        .as_deref()
        .filter(|notes| !notes.is_empty());

    let mut prompt = String::new();

    prompt.push_str(&format!(
        "You are a professional scriptwriter for short vertical videos ({platform}).\n\n"
    ));
    prompt.push_str("Your task is to create structured scripts tailored to these parameters:\n\n");
    prompt.push_str(&format!("**Platform:** {platform}\n"));
    prompt.push_str(&format!("**Duration:** {duration} seconds\n"));
    prompt.push_str(&format!("**Language:** {language}\n"));
    prompt.push_str(&format!("**Niche:** {}\n", channel.niche));
    prompt.push_str(&format!("**Target audience:** {}\n", channel.audience));
    prompt.push_str(&format!("**Tone/Style:** {}\n", channel.tone));
    if !blocked.is_empty() {
        prompt.push_str(&format!("**Blocked topics:** {blocked}\n"));
    }
    if let Some(notes) = notes {
        prompt.push_str(&format!("**Additional notes:** {notes}\n"));
    }

    prompt.push_str("\n**Response format:**\n\n");
    prompt.push_str("Return a JSON object with exactly this structure:\n");
    prompt.push_str(OUTPUT_SCHEMA);
    prompt.push_str("\n\n**Important:**\n");
    prompt.push_str(&format!("- The script must fit exactly into {duration} seconds\n"));
    prompt.push_str(&format!("- Use the tone \"{}\"\n", channel.tone));
    prompt.push_str(&format!("- Keep the target audience in mind: {}\n", channel.audience));
    prompt.push_str(&format!("- Adapt to the specifics of {platform}\n"));
    if !blocked.is_empty() {
        prompt.push_str(&format!("- Avoid these topics: {blocked}\n"));
    }
    prompt.push_str(&format!("- All text must be written in {language}\n"));
    prompt.push_str("\nReturn ONLY valid JSON, without any additional commentary.");

    prompt
}
