use hashbrown::HashMap;
use tracing::debug;

use crate::models::GnsRecord;

/// True for designation codes naming a first-order administrative division.
pub fn is_adm1_designation(code: &str) -> bool {
    code.get(..4)
        .map(|prefix| prefix.eq_ignore_ascii_case("ADM1"))
        .unwrap_or(false)
}

/// ADM1 code to region display name, for a single country file.
#[derive(Debug, Clone, Default)]
pub struct AdminRegionIndex {
    regions: HashMap<String, String>,
}

impl AdminRegionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from a complete pass over the input.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = GnsRecord>,
    {
        let mut index = Self::new();
        for record in records {
            index.observe(&record);
        }
        index
    }

    /// Record a region if this is a non-variant ADM1 record.
    ///
    /// A later record with the same ADM1 code replaces the earlier name.
    pub fn observe(&mut self, record: &GnsRecord) {
        if record.is_variant() || !is_adm1_designation(&record.designation) {
            return;
        }
        let Some(code) = record.adm1.as_deref() else {
            debug!("ADM1 record {:?} has no ADM1 code", record.full_name);
            return;
        };
        if let Some(previous) = self.regions.insert(code.to_string(), record.full_name.clone()) {
            debug!(
                "ADM1 code {} renamed from {:?} to {:?}",
                code, previous, record.full_name
            );
        }
    }

    /// Look up a region name by ADM1 code.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.regions.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::column;
    use crate::models::record::tests::line;

    fn record(dsg: &str, adm1: &str, nt: &str, name: &str) -> GnsRecord {
        line(&[
            (column::LAT, "10"),
            (column::LONG, "120"),
            (column::FC, "A"),
            (column::DSG, dsg),
            (column::ADM1, adm1),
            (column::NT, nt),
            (column::FULL_NAME, name),
        ])
        .parse()
        .unwrap()
    }

    #[test]
    fn test_last_write_wins() {
        let index = AdminRegionIndex::build(vec![
            record("ADM1", "07", "N", "Province of Bohol"),
            record("ADM1", "07", "N", "Bohol Province"),
        ]);
        assert_eq!(index.get("07"), Some("Bohol Province"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_variants_are_ignored() {
        let index = AdminRegionIndex::build(vec![
            record("ADM1", "07", "N", "Province of Bohol"),
            record("ADM1", "07", "V", "Bool"),
        ]);
        assert_eq!(index.get("07"), Some("Province of Bohol"));
    }

    #[test]
    fn test_only_adm1_designations() {
        let index = AdminRegionIndex::build(vec![
            record("PPL", "07", "N", "Tagbilaran"),
            record("adm1h", "21", "N", "Province of Old Region"),
            record("ADM2", "22", "N", "Some District"),
        ]);
        assert_eq!(index.get("07"), None);
        assert_eq!(index.get("21"), Some("Province of Old Region"));
        assert_eq!(index.get("22"), None);
    }

    #[test]
    fn test_missing_code_is_skipped() {
        let index = AdminRegionIndex::build(vec![record("ADM1", "", "N", "Nowhere")]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_adm1_designation_prefix() {
        assert!(is_adm1_designation("ADM1"));
        assert!(is_adm1_designation("adm1"));
        assert!(is_adm1_designation("ADM1H"));
        assert!(!is_adm1_designation("ADM"));
        assert!(!is_adm1_designation("ADM2"));
    }
}
