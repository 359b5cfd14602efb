//! Insertion-ordered key/value tag bundle attached to an output node.

/// Ordered tag map with unique keys.
///
/// Re-inserting an existing key replaces its value in place, so the key keeps
/// the position of its first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    entries: Vec<(String, String)>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a tag.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Merge another set into this one; its values win on shared keys.
    pub fn merge(&mut self, other: TagSet) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TagSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tags = TagSet::new();
        tags.extend(iter);
        tags
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for TagSet {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_position() {
        let mut tags = TagSet::new();
        tags.insert("name", "Province of Palawan");
        tags.insert("source", "GNS");
        tags.insert("name", "Palawan");

        let collected: Vec<_> = tags.iter().collect();
        assert_eq!(collected, vec![("name", "Palawan"), ("source", "GNS")]);
    }

    #[test]
    fn test_merge_later_wins() {
        let mut base: TagSet = [("place", "city"), ("source", "GNS")].into_iter().collect();
        let fragment: TagSet = [("place", "state"), ("natural", "peak")].into_iter().collect();
        base.merge(fragment);

        assert_eq!(base.get("place"), Some("state"));
        assert_eq!(base.get("natural"), Some("peak"));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn test_missing_key() {
        let tags = TagSet::new();
        assert!(tags.is_empty());
        assert_eq!(tags.get("name"), None);
    }
}
