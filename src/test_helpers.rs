//! Shared test helpers for parser and aggregator tests.

use std::cell::Cell;
use std::collections::HashMap;

use crate::domain::{DomainDecomposition, SuffixResolver};

/// Table-driven resolver standing in for the real PSL.
///
/// Hosts in the table resolve to their entry; any other host uses its last
/// label as the suffix and the label before it as the domain. Every call is
/// counted.
#[derive(Default)]
pub struct FakeResolver {
    table: HashMap<String, DomainDecomposition>,
    calls: Cell<usize>,
}

impl FakeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, host: &str, subdomain: &str, domain: &str, suffix: &str) -> Self {
        self.table.insert(
            host.to_string(),
            DomainDecomposition::new(subdomain, domain, suffix),
        );
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl SuffixResolver for FakeResolver {
    fn resolve(&self, hostname: &str) -> DomainDecomposition {
        self.calls.set(self.calls.get() + 1);
        if let Some(entry) = self.table.get(hostname) {
            return entry.clone();
        }
        let labels: Vec<&str> = hostname.split('.').collect();
        match labels.as_slice() {
            [] | [_] => DomainDecomposition::new("", hostname, ""),
            [rest @ .., domain, suffix] => {
                DomainDecomposition::new(rest.join("."), *domain, *suffix)
            }
        }
    }
}
