// Shared test helpers for on-disk fixtures and a deterministic resolver.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use media_classifier::{DomainDecomposition, SuffixResolver};

/// Resolver that treats the last label as the suffix and counts its calls.
/// Keeps assertions independent of the bundled Public Suffix List.
#[derive(Default)]
pub struct LastLabelResolver {
    calls: Cell<usize>,
}

impl LastLabelResolver {
    #[allow(dead_code)] // Used by other test files
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl SuffixResolver for LastLabelResolver {
    fn resolve(&self, hostname: &str) -> DomainDecomposition {
        self.calls.set(self.calls.get() + 1);
        match hostname.rsplit_once('.') {
            Some((rest, suffix)) => match rest.rsplit_once('.') {
                Some((subdomain, domain)) => DomainDecomposition::new(subdomain, domain, suffix),
                None => DomainDecomposition::new("", rest, suffix),
            },
            None => DomainDecomposition::new("", hostname, ""),
        }
    }
}

/// Writes `content` to `dir/name`, creating parent directories.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, content).expect("Failed to write test file");
    path
}
