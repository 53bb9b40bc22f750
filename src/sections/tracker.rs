//! Cross-section domain collision tracking.

use std::collections::HashSet;

use colored::*;
use log::info;

use super::types::ClassifiedUrl;

/// A URL whose site had already been claimed by an earlier entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub url: String,
    pub site: String,
}

/// Sites seen so far and the collisions reported against them.
///
/// The tracker is owned by the caller: it is moved into a parse run and handed
/// back in the result, so several media lists can share one tracker or each
/// start from `CollisionTracker::default()`.
#[derive(Debug, Clone, Default)]
pub struct CollisionTracker {
    seen: HashSet<String>,
    collisions: Vec<Collision>,
}

impl CollisionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `record`'s site, returning `true` if it collides with an earlier one.
    ///
    /// Collisions are informational: the caller keeps the record either way.
    /// In flexible mode nothing is tracked or reported.
    pub fn observe(&mut self, record: &ClassifiedUrl, flexible: bool) -> bool {
        if flexible {
            return false;
        }

        if self.seen.contains(record.site()) {
            let notice = format!(
                " → {} is part of an already seen domain: {}",
                record.url(),
                record.site()
            );
            info!("{}", notice.as_str().blue().on_white());
            self.collisions.push(Collision {
                url: record.url().to_string(),
                site: record.site().to_string(),
            });
            return true;
        }

        self.seen.insert(record.site().to_string());
        false
    }

    pub fn is_seen(&self, site: &str) -> bool {
        self.seen.contains(site)
    }

    /// Collisions in the order they were detected.
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Number of distinct sites recorded.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}
