//! Reaction keywords
//!
//! Fixed mapping from a reaction keyword to a display glyph, with a
//! `custom:<text>` escape hatch. The mapping is total: unrecognized
//! keywords resolve to an empty glyph, never an error.

/// A posted status reaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    Happy,
    Madness,
    Funny,
    Cry,
    Sad,
    /// `custom:<text>` - the suffix is used verbatim as the glyph
    Custom(String),
    /// Anything else
    Unknown,
}

impl Reaction {
    /// Parse a reaction keyword
    pub fn parse(keyword: &str) -> Self {
        match keyword {
            "happy" => Self::Happy,
            "madness" => Self::Madness,
            "funny" => Self::Funny,
            "cry" => Self::Cry,
            "sad" => Self::Sad,
            other => match other.split_once(':') {
                Some(("custom", text)) => Self::Custom(text.to_string()),
                _ => Self::Unknown,
            },
        }
    }

    /// The display glyph for this reaction
    pub fn glyph(&self) -> &str {
        match self {
            Self::Happy => "😄",
            Self::Madness => "😡",
            Self::Funny => "😆",
            Self::Cry => "😢",
            Self::Sad => "😔",
            Self::Custom(text) => text,
            Self::Unknown => "",
        }
    }
}

/// Resolve a reaction keyword straight to its glyph
pub fn resolve_reaction(keyword: &str) -> String {
    Reaction::parse(keyword).glyph().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_glyphs() {
        assert_eq!(resolve_reaction("happy"), "😄");
        assert_eq!(resolve_reaction("madness"), "😡");
        assert_eq!(resolve_reaction("funny"), "😆");
        assert_eq!(resolve_reaction("cry"), "😢");
        assert_eq!(resolve_reaction("sad"), "😔");
    }

    #[test]
    fn test_custom_suffix_used_verbatim() {
        assert_eq!(resolve_reaction("custom:bye"), "bye");
        assert_eq!(Reaction::parse("custom:"), Reaction::Custom(String::new()));
    }

    #[test]
    fn test_unknown_maps_to_empty() {
        assert_eq!(resolve_reaction("unknown"), "");
        assert_eq!(resolve_reaction(""), "");
        assert_eq!(Reaction::parse("happy:extra"), Reaction::Unknown);
    }
}
