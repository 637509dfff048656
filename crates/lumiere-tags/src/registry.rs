//! Tag registry
//!
//! Maps custom tag names to typed factories. Name rules follow the custom
//! element spec: a hyphen is required, the name starts with a lowercase ASCII
//! letter, and the handful of reserved hyphenated names are rejected.

use crate::TagFactory;
use std::collections::HashMap;

/// Tag definition
pub struct TagDefinition {
    pub name: String,
    pub observed_attributes: Vec<String>,
    pub factory: TagFactory,
}

impl TagDefinition {
    /// Whether the definition observes the given attribute name
    pub fn observes(&self, attribute: &str) -> bool {
        self.observed_attributes.iter().any(|a| a == attribute)
    }
}

/// Registry of defined tag names
#[derive(Default)]
pub struct TagRegistry {
    definitions: HashMap<String, TagDefinition>,
}

/// Tag registration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum TagError {
    #[error("Invalid tag name: {0}")]
    InvalidName(String),

    #[error("Tag already defined: {0}")]
    AlreadyDefined(String),
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a tag. Fails loudly on an invalid or duplicate name; dispatch
    /// problems surface here, at registration, not at use sites.
    pub fn define(
        &mut self,
        name: &str,
        observed_attributes: &[&str],
        factory: TagFactory,
    ) -> Result<(), TagError> {
        Self::validate_name(name)?;
        if self.definitions.contains_key(name) {
            return Err(TagError::AlreadyDefined(name.to_string()));
        }

        self.definitions.insert(
            name.to_string(),
            TagDefinition {
                name: name.to_string(),
                observed_attributes: observed_attributes.iter().map(|s| s.to_string()).collect(),
                factory,
            },
        );
        Ok(())
    }

    /// Get a tag definition
    pub fn get(&self, name: &str) -> Option<&TagDefinition> {
        self.definitions.get(name)
    }

    /// Check if a tag name is defined
    pub fn is_defined(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    fn validate_name(name: &str) -> Result<(), TagError> {
        if !name.contains('-') {
            return Err(TagError::InvalidName(format!(
                "'{name}' must contain a hyphen"
            )));
        }
        if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
            return Err(TagError::InvalidName(format!(
                "'{name}' must start with a lowercase letter"
            )));
        }

        const RESERVED: [&str; 8] = [
            "annotation-xml",
            "color-profile",
            "font-face",
            "font-face-src",
            "font-face-uri",
            "font-face-format",
            "font-face-name",
            "missing-glyph",
        ];
        if RESERVED.contains(&name) {
            return Err(TagError::InvalidName(format!(
                "'{name}' is a reserved element name"
            )));
        }
        Ok(())
    }
}
