use crate::types::{GeneratedScript, ScriptSection};

/// Headings in the same order as [`ScriptSection::fields`]
const SECTION_TITLES: [&str; 6] = [
    "Hook",
    "Main Action",
    "Finale",
    "On-Screen Text",
    "Voiceover",
    "Sounds & Music",
];

/// Format sections as human-readable markdown, skipping empty ones
pub fn format_sections_readable(sections: &ScriptSection) -> String {
    let mut output = String::new();

    for ((_, value), title) in sections.fields().into_iter().zip(SECTION_TITLES) {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        output.push_str(&format!("## {}\n\n", title));
        output.push_str(value);
        output.push_str("\n\n");
    }

    output
}

/// Format a generated script as human-readable markdown
pub fn format_script_readable(script: &GeneratedScript) -> String {
    if script.sections.is_empty() {
        // Nothing structured to show; the raw text is all there is
        return format!("{}\n", script.raw_text.trim());
    }

    format_sections_readable(&script.sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_non_empty_sections_in_schema_order() {
        let script = GeneratedScript {
            sections: ScriptSection {
                hook: "Fast pasta?".into(),
                sounds: "upbeat music".into(),
                ..ScriptSection::default()
            },
            raw_text: String::new(),
        };

        let output = format_script_readable(&script);
        assert_eq!(
            output,
            "## Hook\n\nFast pasta?\n\n## Sounds & Music\n\nupbeat music\n\n"
        );
    }

    #[test]
    fn every_section_gets_its_own_heading() {
        let sections = ScriptSection {
            hook: "h".into(),
            main_action: "m".into(),
            finale: "f".into(),
            on_screen_text: "o".into(),
            voiceover: "v".into(),
            sounds: "s".into(),
        };

        let output = format_sections_readable(&sections);
        assert_eq!(
            output,
            "## Hook\n\nh\n\n## Main Action\n\nm\n\n## Finale\n\nf\n\n\
             ## On-Screen Text\n\no\n\n## Voiceover\n\nv\n\n## Sounds & Music\n\ns\n\n"
        );
    }

    #[test]
    fn falls_back_to_raw_text_when_sections_are_empty() {
        let script = GeneratedScript {
            sections: ScriptSection::default(),
            raw_text: "  {}  ".into(),
        };
        assert_eq!(format_script_readable(&script), "{}\n");
    }
}
