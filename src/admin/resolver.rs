use regex::Regex;
use std::sync::LazyLock;

use super::AdminRegionIndex;
use crate::models::TagSet;

static PROVINCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Province\s+of\s+\S.*").expect("province pattern"));
static PROVINCE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Province\s+of\s+(\S.*)").expect("province prefix pattern"));
static CITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcity\b").expect("city pattern"));

/// Enclosing first-order region of a record, as guessed from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Containment {
    /// `is_in:state`
    State(String),
    /// `is_in:city`
    City(String),
    /// plain `is_in`
    Region(String),
}

impl Containment {
    /// Classify a region name; "Province of" beats "city".
    pub fn classify(name: &str) -> Self {
        if let Some(m) = PROVINCE.find(name) {
            Containment::State(m.as_str().to_string())
        } else if CITY.is_match(name) {
            Containment::City(name.to_string())
        } else {
            Containment::Region(name.to_string())
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Containment::State(_) => "is_in:state",
            Containment::City(_) => "is_in:city",
            Containment::Region(_) => "is_in",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Containment::State(v) | Containment::City(v) | Containment::Region(v) => v,
        }
    }

    pub fn apply(&self, tags: &mut TagSet) {
        tags.insert(self.key(), self.value());
    }
}

/// The part of a region name after a leading "Province of".
///
/// Accepts the same whitespace as the `is_in:state` match, so a region that
/// tags its places as a state is itself renamed as one.
pub fn strip_province(name: &str) -> Option<&str> {
    PROVINCE_PREFIX
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Resolve an ADM1 code against the index.
///
/// An absent code, an unknown code, or an empty region name yields nothing.
pub fn resolve_containment(adm1: Option<&str>, index: &AdminRegionIndex) -> Option<Containment> {
    let name = index.get(adm1?)?.trim();
    if name.is_empty() {
        return None;
    }
    Some(Containment::classify(name))
}
