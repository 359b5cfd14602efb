//! Feature classification: designation code to OSM tags.
//!
//! Rules are evaluated top to bottom against the designation code and the
//! first matching rule decides the tags. Overlapping rules are kept in table
//! order even when an earlier rule makes a later one unreachable.

mod table;

use std::fmt;

use crate::admin::strip_province;
use crate::models::{FeatureClass, TagSet};

pub use table::DEFAULT_RULES;

/// Static list of `(key, value)` tags.
pub type TagPairs = &'static [(&'static str, &'static str)];

/// How a rule matches a designation code (always case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePattern {
    /// The whole code
    Exact(&'static str),
    /// Any code starting with the prefix
    Family(&'static str),
}

impl CodePattern {
    pub fn matches(&self, code: &str) -> bool {
        match self {
            CodePattern::Exact(exact) => code.eq_ignore_ascii_case(exact),
            CodePattern::Family(prefix) => code
                .get(..prefix.len())
                .map(|head| head.eq_ignore_ascii_case(prefix))
                .unwrap_or(false),
        }
    }

    /// True when every code this pattern matches is also matched by `earlier`.
    fn shadowed_by(&self, earlier: &CodePattern) -> bool {
        match (self, earlier) {
            (CodePattern::Exact(code), other) => other.matches(code),
            (CodePattern::Family(prefix), CodePattern::Family(_)) => earlier.matches(prefix),
            (CodePattern::Family(_), CodePattern::Exact(_)) => false,
        }
    }
}

impl fmt::Display for CodePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodePattern::Exact(code) => write!(f, "{}", code),
            CodePattern::Family(prefix) => write!(f, "{}*", prefix),
        }
    }
}

/// What a matching rule contributes to the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fixed tags
    Tags(TagPairs),
    /// Tags chosen by the record's feature class
    ByClass {
        class: FeatureClass,
        matched: TagPairs,
        otherwise: TagPairs,
    },
    /// First-order division: `place=state` with a leading "Province of"
    /// dropped from the name, `place=city` otherwise
    AdminRegion,
    /// Recognised but tagged elsewhere; contributes nothing
    AlreadyTagged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub pattern: CodePattern,
    pub action: Action,
}

impl Rule {
    pub const fn new(pattern: CodePattern, action: Action) -> Self {
        Self { pattern, action }
    }

    pub const fn exact(code: &'static str, tags: TagPairs) -> Self {
        Self::new(CodePattern::Exact(code), Action::Tags(tags))
    }

    pub const fn family(prefix: &'static str, tags: TagPairs) -> Self {
        Self::new(CodePattern::Family(prefix), Action::Tags(tags))
    }

    fn apply(&self, class: FeatureClass, name: &str) -> TagSet {
        match self.action {
            Action::Tags(tags) => tags.iter().copied().collect(),
            Action::ByClass {
                class: wanted,
                matched,
                otherwise,
            } => {
                let tags = if class == wanted { matched } else { otherwise };
                tags.iter().copied().collect()
            }
            Action::AdminRegion => admin_region_tags(name),
            Action::AlreadyTagged => TagSet::new(),
        }
    }
}

fn admin_region_tags(name: &str) -> TagSet {
    let mut tags = TagSet::new();
    match strip_province(name) {
        Some(province) => {
            tags.insert("name", province.trim());
            tags.insert("place", "state");
        }
        None => tags.insert("place", "city"),
    }
    tags
}

/// Ordered rule table evaluated first-match-wins.
#[derive(Debug, Clone)]
pub struct FeatureClassifier {
    rules: Vec<Rule>,
}

impl Default for FeatureClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }
}

impl FeatureClassifier {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Add a rule that takes precedence over every existing rule.
    pub fn prepend(&mut self, rule: Rule) {
        self.rules.insert(0, rule);
    }

    /// Add a rule consulted only when nothing else matches.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// First rule matching the code, with its position in the table.
    pub fn find(&self, code: &str) -> Option<(usize, &Rule)> {
        let code = code.trim();
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.pattern.matches(code))
    }

    /// Classify a feature.
    ///
    /// Returns `None` when no rule matches. A matching pass-through rule
    /// yields an empty tag set. `name` is only read by first-order division
    /// rules.
    pub fn classify(&self, class: FeatureClass, code: &str, name: &str) -> Option<TagSet> {
        self.find(code).map(|(_, rule)| rule.apply(class, name))
    }

    /// Positions of rules that an earlier rule always pre-empts.
    pub fn unreachable_rules(&self) -> Vec<usize> {
        self.rules
            .iter()
            .enumerate()
            .filter(|(idx, rule)| {
                self.rules[..*idx]
                    .iter()
                    .any(|earlier| rule.pattern.shadowed_by(&earlier.pattern))
            })
            .map(|(idx, _)| idx)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::is_adm1_designation;
    use FeatureClass::*;

    fn classify(class: FeatureClass, code: &str) -> Option<TagSet> {
        FeatureClassifier::default().classify(class, code, "Somewhere")
    }

    #[test]
    fn test_single_tag_rule() {
        let tags = classify(Hypsographic, "MT").unwrap();
        assert_eq!(tags.get("natural"), Some("peak"));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify(Hypsographic, "mt"), classify(Hypsographic, "MT"));
    }

    #[test]
    fn test_multi_tag_rule() {
        let tags = classify(Spot, "AIRB").unwrap();
        assert_eq!(tags.get("aeroway"), Some("airfield"));
        assert_eq!(tags.get("landuse"), Some("military"));
        assert_eq!(tags.get("military"), Some("airfield"));
    }

    #[test]
    fn test_gold_mine() {
        let tags = classify(Spot, "MNAU").unwrap();
        assert_eq!(tags.get("man_made"), Some("mine"));
        assert_eq!(tags.get("mine_ore"), Some("gold"));
    }

    #[test]
    fn test_estate_or_estuary() {
        let estate = classify(Spot, "ESTY").unwrap();
        assert_eq!(estate.get("landuse"), Some("farm"));
        assert_eq!(estate.get("waterway"), None);

        let estuary = classify(Hydrographic, "ESTY").unwrap();
        assert_eq!(estuary.get("waterway"), Some("river"));
        assert_eq!(estuary.get("landuse"), None);
    }

    #[test]
    fn test_capital_passes_through() {
        let tags = classify(PopulatedPlace, "PPLC").unwrap();
        assert!(tags.is_empty());
    }

    #[test]
    fn test_populated_place_family() {
        assert_eq!(
            classify(PopulatedPlace, "PPL").unwrap().get("place"),
            Some("village")
        );
        assert_eq!(
            classify(PopulatedPlace, "PPLX").unwrap().get("place"),
            Some("suburb")
        );
        // unlisted member of the family
        assert_eq!(
            classify(PopulatedPlace, "PPLZZ").unwrap().get("place"),
            Some("village")
        );
    }

    #[test]
    fn test_unmatched() {
        assert_eq!(classify(Spot, "ZZZZZ"), None);
        assert_eq!(classify(Spot, ""), None);
    }

    #[test]
    fn test_admin_region_strips_province() {
        let classifier = FeatureClassifier::default();
        let tags = classifier
            .classify(Administrative, "ADM1", "Province of Palawan")
            .unwrap();
        assert_eq!(tags.get("name"), Some("Palawan"));
        assert_eq!(tags.get("place"), Some("state"));

        let tags = classifier
            .classify(Administrative, "ADM1", "Province  of Cebu")
            .unwrap();
        assert_eq!(tags.get("name"), Some("Cebu"));
        assert_eq!(tags.get("place"), Some("state"));

        let tags = classifier
            .classify(Administrative, "ADM1", "City of Manila")
            .unwrap();
        assert_eq!(tags.get("name"), None);
        assert_eq!(tags.get("place"), Some("city"));
    }

    #[test]
    fn test_exact_does_not_match_longer_code() {
        // ISL and ISLS are separate rules
        assert_eq!(
            classify(Hypsographic, "ISL").unwrap().get("place"),
            Some("island")
        );
        assert_eq!(
            classify(Hypsographic, "ISLS").unwrap().get("place"),
            Some("archipelago")
        );
        assert!(CodePattern::Exact("ISL").matches("isl"));
        assert!(!CodePattern::Exact("ISL").matches("ISLS"));
    }

    #[test]
    fn test_first_match_wins_over_duplicates() {
        let classifier = FeatureClassifier::default();
        let (first, _) = classifier.find("PT").unwrap();
        let later: Vec<usize> = classifier
            .rules()
            .iter()
            .enumerate()
            .filter(|(_, r)| r.pattern.matches("PT"))
            .map(|(i, _)| i)
            .collect();

        assert!(later.len() > 1);
        assert_eq!(later[0], first);
        assert_eq!(
            classify(Hypsographic, "PT").unwrap().get("natural"),
            Some("cape")
        );
        // the portage rule sits behind the PT family
        assert_eq!(
            classify(Route, "PTGE").unwrap().get("natural"),
            Some("cape")
        );
    }

    #[test]
    fn test_unreachable_rules_are_reported() {
        let classifier = FeatureClassifier::default();
        let dead = classifier.unreachable_rules();
        let dead_codes: Vec<String> = dead
            .iter()
            .map(|i| classifier.rules()[*i].pattern.to_string())
            .collect();

        assert_eq!(dead_codes, vec!["PT", "PTGE"]);
    }

    #[test]
    fn test_deterministic() {
        let classifier = FeatureClassifier::default();
        for rule in classifier.rules() {
            let code = match rule.pattern {
                CodePattern::Exact(c) | CodePattern::Family(c) => c,
            };
            assert_eq!(
                classifier.classify(Spot, code, "X"),
                classifier.classify(Spot, code, "X")
            );
        }
    }

    #[test]
    fn test_prepend_overrides_table() {
        let mut classifier = FeatureClassifier::default();
        classifier.prepend(Rule::exact("MT", &[("natural", "volcano")]));
        classifier.push(Rule::exact("ZZZZZ", &[("place", "locality")]));

        assert_eq!(
            classifier
                .classify(Hypsographic, "MT", "")
                .unwrap()
                .get("natural"),
            Some("volcano")
        );
        assert!(classifier.classify(Spot, "ZZZZZ", "").is_some());
    }

    #[test]
    fn test_every_admin_code_hits_admin_rule() {
        let classifier = FeatureClassifier::default();
        for code in ["ADM1", "adm1", "ADM1H"] {
            assert!(is_adm1_designation(code));
            let (_, rule) = classifier.find(code).unwrap();
            assert_eq!(rule.action, Action::AdminRegion);
        }
    }
}
