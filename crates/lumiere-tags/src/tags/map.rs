//! `<lm-map>` - map placeholder
//!
//! Reserved tag with no behavior.

use crate::component::TagComponent;
use lumiere_dom::{Console, Document, NodeId};

pub struct MapTag {
    host: NodeId,
}

impl TagComponent for MapTag {
    fn host(&self) -> NodeId {
        self.host
    }
}

/// Registered factory
pub fn create(_doc: &mut Document, host: NodeId, _console: Console) -> Box<dyn TagComponent> {
    Box::new(MapTag { host })
}
