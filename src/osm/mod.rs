//! Output side: the node sink seam and the OSM XML writer.

mod writer;

pub use writer::{OsmXmlWriter, DEFAULT_GENERATOR};

use anyhow::Result;

use crate::models::OsmNode;

/// Receives assembled nodes in emission order.
pub trait NodeSink {
    fn emit(&mut self, node: &OsmNode) -> Result<()>;
}

impl NodeSink for Vec<OsmNode> {
    fn emit(&mut self, node: &OsmNode) -> Result<()> {
        self.push(node.clone());
        Ok(())
    }
}
