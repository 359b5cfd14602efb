//! Output node handed to the emitter.

use super::TagSet;

/// A new OSM node with a synthetic negative identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct OsmNode {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    pub tags: TagSet,
}

impl OsmNode {
    pub fn new(id: i64, lat: f64, lon: f64, tags: TagSet) -> Self {
        Self { id, lat, lon, tags }
    }
}
