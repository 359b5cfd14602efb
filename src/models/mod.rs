//! Core data models for the GNS conversion.

pub mod node;
pub mod record;
pub mod tags;

pub use node::OsmNode;
pub use record::{FeatureClass, GnsRecord, NameType};
pub use tags::TagSet;
