//! Keep-tag resolution.
//!
//! Expands requested keep-tag names into the flat set of tag names whose
//! markup survives rendering. Bundle names (`hs`, `metadata`, `structure`,
//! `tables`, `lists`) expand to their members; any other name passes through
//! unchanged.

use std::collections::HashSet;

use crate::tags;

/// Set of tag names retained structurally by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeepTags {
    tags: HashSet<String>,
}

impl KeepTags {
    /// Resolve a keep-tag request, expanding bundles.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(requested: &[S]) -> Self {
        let mut tags = HashSet::new();
        for name in requested {
            let name = name.as_ref();
            match tags::bundle(name) {
                Some(members) => tags.extend(members.iter().map(|tag| (*tag).to_string())),
                None => {
                    tags.insert(name.to_string());
                }
            }
        }
        Self { tags }
    }

    /// Check if markup for `tag` is retained.
    #[inline]
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// True when nothing is retained and output is plain text.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of distinct retained tags.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }
}
