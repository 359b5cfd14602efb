//! gns2osm - converts GNS gazetteer country files into OSM nodes.
//!
//! This library provides the record parser, the ADM1 index and resolver, the
//! feature classification table, node assembly, and the OSM XML writer used
//! by the `convert` binary.

pub mod admin;
pub mod assemble;
pub mod classify;
pub mod country;
pub mod error;
pub mod gns;
pub mod models;
pub mod osm;
pub mod pipeline;

pub use error::GnsError;
pub use models::{FeatureClass, GnsRecord, OsmNode, TagSet};
