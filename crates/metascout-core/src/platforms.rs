//! Insertion-ordered, duplicate-free collection of canonical platform ids.

use serde::{Deserialize, Serialize};

/// Canonical platform ids in first-seen order, without duplicates.
///
/// The first element is what URL construction uses as "the" platform, so the
/// order is part of the contract: it always reflects the order in which the
/// source listed the platforms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PlatformSet(Vec<String>);

impl PlatformSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` unless it is already present. Returns `true` when added.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.0.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|existing| existing == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for PlatformSet {
    fn from(ids: Vec<String>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<PlatformSet> for Vec<String> {
    fn from(set: PlatformSet) -> Self {
        set.0
    }
}

impl FromIterator<String> for PlatformSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl<'a> IntoIterator for &'a PlatformSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
