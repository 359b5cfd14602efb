//! Builds output nodes from admitted records.

use thiserror::Error;

use crate::admin::{resolve_containment, AdminRegionIndex};
use crate::classify::FeatureClassifier;
use crate::country::CountryContext;
use crate::models::{FeatureClass, GnsRecord, NameType, OsmNode, TagSet};

pub const SOURCE: &str = "GNS";

/// A record whose designation code no rule recognises.
///
/// Its `Display` form is the operator diagnostic.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unmatched: fc={class} dsg={designation} nt={name_type} adm1={adm1} name={name}")]
pub struct Unclassified {
    pub class: FeatureClass,
    pub designation: String,
    pub name_type: NameType,
    pub adm1: String,
    pub name: String,
}

impl Unclassified {
    fn from_record(record: &GnsRecord) -> Self {
        Self {
            class: record.feature_class,
            designation: record.designation.clone(),
            name_type: record.name_type.clone(),
            adm1: record.adm1.clone().unwrap_or_default(),
            name: record.full_name.clone(),
        }
    }
}

/// Turns records into nodes, numbering accepted nodes -1, -2, ...
pub struct NodeAssembler<'a> {
    country: &'a CountryContext,
    regions: &'a AdminRegionIndex,
    classifier: &'a FeatureClassifier,
    next_id: i64,
}

impl<'a> NodeAssembler<'a> {
    pub fn new(
        country: &'a CountryContext,
        regions: &'a AdminRegionIndex,
        classifier: &'a FeatureClassifier,
    ) -> Self {
        Self {
            country,
            regions,
            classifier,
            next_id: -1,
        }
    }

    /// Number of nodes assembled so far.
    pub fn assembled(&self) -> usize {
        (-1 - self.next_id) as usize
    }

    /// Assemble one node.
    ///
    /// Tags are layered base, containment, measurements, classification, so
    /// later layers overwrite earlier ones on shared keys. An unclassified
    /// record consumes no identifier.
    pub fn assemble(&mut self, record: &GnsRecord) -> Result<OsmNode, Unclassified> {
        let classified = self
            .classifier
            .classify(record.feature_class, &record.designation, &record.full_name)
            .ok_or_else(|| Unclassified::from_record(record))?;

        let mut tags = TagSet::new();
        tags.insert("name", record.full_name.as_str());
        tags.insert("source", SOURCE);
        tags.insert("gns_uni", record.uni.as_str());
        tags.insert("gns_classification", record.designation.as_str());
        self.country.apply(&mut tags);

        if let Some(containment) = resolve_containment(record.adm1.as_deref(), self.regions) {
            containment.apply(&mut tags);
        }

        if let Some(ele) = record.elevation.filter(|e| *e != 0) {
            tags.insert("ele", ele.to_string());
        }
        if let Some(population) = record.population {
            tags.insert("population", population.to_string());
        }
        if let Some(pc) = &record.populated_place_class {
            tags.insert("gns_populated_place_classification", pc.as_str());
        }

        tags.merge(classified);

        let id = self.next_id;
        self.next_id -= 1;
        Ok(OsmNode::new(id, record.lat, record.lon, tags))
    }
}
