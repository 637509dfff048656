//! Lumière tag components
//!
//! The Tag-Component pattern: each component binds one custom tag name to an
//! isolated rendering boundary wrapping one native element, and reacts to
//! lifecycle events (connect, disconnect, observed-attribute change). The
//! `TagRegistry` maps tag names to typed factories at registration time; the
//! `TagHost` owns live instances and drives their lifecycle against a
//! `Document`.

mod component;
mod host;
mod registry;
pub mod tags;

pub use component::{TagComponent, TagFactory};
pub use host::TagHost;
pub use registry::{TagDefinition, TagError, TagRegistry};

/// Register the full built-in tag vocabulary.
pub fn register_builtin_tags(registry: &mut TagRegistry) -> Result<(), TagError> {
    registry.define("lm-input", &[], tags::input::create)?;
    registry.define("lm-audio", &["src"], tags::audio::create)?;
    registry.define("lm-image", &["src"], tags::image::create)?;
    registry.define("lm-video", &["src"], tags::video::create)?;
    registry.define("lm-form", &[], tags::form::create)?;
    registry.define("lm-select", &["options"], tags::select::create)?;
    registry.define("lm-ul", &[], tags::list::create)?;
    registry.define("lm-css", &[], tags::css::create)?;
    registry.define("lm-ai", &[], tags::assist::create)?;
    registry.define("lm-upload", &[], tags::upload::create)?;
    registry.define("lm-map", &[], tags::map::create)?;
    Ok(())
}
