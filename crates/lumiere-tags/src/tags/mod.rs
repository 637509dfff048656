//! Built-in tag components
//!
//! One module per tag. Each `create` function is the registered factory.

pub mod assist;
pub mod audio;
pub mod css;
pub mod form;
pub mod image;
pub mod input;
pub mod list;
pub mod map;
pub mod select;
pub mod upload;
pub mod video;
