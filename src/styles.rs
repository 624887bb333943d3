use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Descriptive suffixes appended to the user prompt, keyed by style name.
static STYLE_PROMPTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "vintage",
            "vintage retro style, old film photograph, warm tones, nostalgic",
        ),
        (
            "modern",
            "modern sleek style, high quality, professional photography",
        ),
        (
            "watercolor",
            "watercolor painting style, artistic, soft colors, painted texture",
        ),
        (
            "cyberpunk",
            "cyberpunk style, neon lights, futuristic, dark atmosphere",
        ),
        (
            "minimalist",
            "minimalist style, clean, simple, elegant composition",
        ),
    ])
});

pub const DEFAULT_STYLE: &str = "modern";

/// Suffix for a named style; unknown styles resolve to the empty suffix.
pub fn style_suffix(style: &str) -> &'static str {
    STYLE_PROMPTS.get(style).copied().unwrap_or("")
}

/// Compose the prompt sent upstream. The separator is kept even when the
/// suffix is empty, so an unknown style yields `"<prompt>, "`.
pub fn compose_prompt(prompt: &str, style: &str) -> String {
    format!("{}, {}", prompt, style_suffix(style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_style_suffix() {
        assert_eq!(
            style_suffix("cyberpunk"),
            "cyberpunk style, neon lights, futuristic, dark atmosphere"
        );
        assert_eq!(
            style_suffix("modern"),
            "modern sleek style, high quality, professional photography"
        );
    }

    #[test]
    fn test_unknown_style_is_empty() {
        assert_eq!(style_suffix("impressionist"), "");
        assert_eq!(style_suffix(""), "");
    }

    #[test]
    fn test_compose_keeps_trailing_separator() {
        assert_eq!(compose_prompt("a cat", "impressionist"), "a cat, ");
        assert_eq!(
            compose_prompt("a cat", "minimalist"),
            "a cat, minimalist style, clean, simple, elegant composition"
        );
    }
}
