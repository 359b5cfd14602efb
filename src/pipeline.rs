//! Two-pass conversion driver.
//!
//! Pass 1 reads the whole input to build the ADM1 index. Pass 2 reads it
//! again and emits one node per admitted, classified record.

use anyhow::Result;
use std::collections::BTreeMap;
use std::io::Read;
use tracing::{info, warn};

use crate::admin::AdminRegionIndex;
use crate::assemble::NodeAssembler;
use crate::classify::FeatureClassifier;
use crate::country::CountryContext;
use crate::gns::GnsReader;
use crate::osm::NodeSink;

/// Counters for one pass-2 run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Lines parsed into records, variants included
    pub records: usize,
    pub variants: usize,
    pub malformed: usize,
    pub unmatched: usize,
    pub emitted: usize,
    /// Unmatched designation codes and how often each was seen
    pub unmatched_codes: BTreeMap<String, usize>,
}

impl ConvertStats {
    pub fn log_summary(&self) {
        info!(
            "Read {} records: {} nodes, {} variants skipped, {} unmatched, {} malformed",
            self.records, self.emitted, self.variants, self.unmatched, self.malformed
        );
        for (code, count) in &self.unmatched_codes {
            info!("  unmatched {}: {}", code, count);
        }
    }
}

/// Pass 1: index first-order administrative regions.
pub fn build_admin_index<R: Read>(input: R) -> Result<AdminRegionIndex> {
    let mut reader = GnsReader::new(input);
    let mut failure = None;
    let index = AdminRegionIndex::build(
        reader
            .by_ref()
            .map_while(|record| record.map_err(|e| failure = Some(e)).ok()),
    );
    if let Some(e) = failure {
        return Err(e);
    }
    info!(
        "Pass 1 complete: {} first-order regions ({} malformed lines)",
        index.len(),
        reader.malformed()
    );
    Ok(index)
}

/// Pass 2: classify and emit every admitted record.
pub fn convert<R: Read, S: NodeSink>(
    input: R,
    index: &AdminRegionIndex,
    country: &CountryContext,
    classifier: &FeatureClassifier,
    sink: &mut S,
) -> Result<ConvertStats> {
    let mut reader = GnsReader::new(input);
    let mut assembler = NodeAssembler::new(country, index, classifier);
    let mut stats = ConvertStats::default();

    for record in reader.by_ref() {
        let record = record?;
        stats.records += 1;

        if record.is_variant() {
            stats.variants += 1;
            continue;
        }

        match assembler.assemble(&record) {
            Ok(node) => {
                sink.emit(&node)?;
                stats.emitted += 1;
            }
            Err(unclassified) => {
                warn!(target: "gns2osm::unmatched", "{}", unclassified);
                stats.unmatched += 1;
                *stats
                    .unmatched_codes
                    .entry(unclassified.designation.to_ascii_uppercase())
                    .or_default() += 1;
            }
        }
    }

    stats.malformed = reader.malformed();
    Ok(stats)
}
