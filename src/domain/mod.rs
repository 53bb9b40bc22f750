//! Domain extraction utilities.
//!
//! This module splits hostnames into subdomain, registrable domain label and
//! public suffix using the Public Suffix List (PSL).
//!
//! Key items:
//! - `SuffixResolver` - the lookup capability the parser and aggregator consume
//! - `PslResolver` - the production resolver backed by the compiled-in PSL
//! - `registrable_site()` - joins domain and suffix into the "site" key

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

use serde::Serialize;

/// A hostname split into its PSL components.
///
/// For `www.example.co.uk` this is `{subdomain: "www", domain: "example", suffix: "co.uk"}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DomainDecomposition {
    /// Labels left of the registrable domain (empty if none)
    pub subdomain: String,
    /// Registrable domain label, without the suffix
    pub domain: String,
    /// Public suffix (may be empty for IP literals)
    #[serde(rename = "tld")]
    pub suffix: String,
}

impl DomainDecomposition {
    pub fn new(
        subdomain: impl Into<String>,
        domain: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            subdomain: subdomain.into(),
            domain: domain.into(),
            suffix: suffix.into(),
        }
    }
}

/// Resolves a bare hostname into its PSL components.
///
/// Implementations must be pure lookups; unknown suffixes are handled by the
/// implementation's own policy rather than reported as errors.
pub trait SuffixResolver {
    fn resolve(&self, hostname: &str) -> DomainDecomposition;
}

impl<R: SuffixResolver + ?Sized> SuffixResolver for &R {
    fn resolve(&self, hostname: &str) -> DomainDecomposition {
        (**self).resolve(hostname)
    }
}

impl<R: SuffixResolver + ?Sized> SuffixResolver for Arc<R> {
    fn resolve(&self, hostname: &str) -> DomainDecomposition {
        (**self).resolve(hostname)
    }
}

/// Resolver backed by the `psl` crate's compiled-in Public Suffix List.
///
/// Lookup happens on the lowercased host with trailing dots removed. Hosts
/// whose last label is not in the list fall under the PSL default rule, so the
/// last label becomes the suffix. IP literals have no suffix and are returned
/// whole as the domain, port included.
#[derive(Debug, Clone, Copy, Default)]
pub struct PslResolver;

impl SuffixResolver for PslResolver {
    fn resolve(&self, hostname: &str) -> DomainDecomposition {
        let host = hostname.trim_end_matches('.').to_ascii_lowercase();

        if is_ip_literal(&host) {
            return DomainDecomposition::new("", host, "");
        }

        let suffix = psl::suffix_str(&host).unwrap_or_default();
        let Some(registrable) = psl::domain_str(&host) else {
            // The host is itself a public suffix (or empty)
            return DomainDecomposition::new("", "", suffix);
        };

        let domain = registrable
            .strip_suffix(suffix)
            .and_then(|d| d.strip_suffix('.'))
            .unwrap_or(registrable);
        let subdomain = host
            .strip_suffix(registrable)
            .map(|s| s.trim_end_matches('.'))
            .unwrap_or_default();

        DomainDecomposition::new(subdomain, domain, suffix)
    }
}

/// True for IPv4, bare IPv6 and bracketed IPv6 hosts, with or without a `:port`.
fn is_ip_literal(host: &str) -> bool {
    if let Some(rest) = host.strip_prefix('[') {
        let Some((addr, tail)) = rest.split_once(']') else {
            return false;
        };
        return addr.parse::<Ipv6Addr>().is_ok() && (tail.is_empty() || is_port_suffix(tail));
    }
    if host.parse::<IpAddr>().is_ok() {
        return true;
    }
    match host.rsplit_once(':') {
        Some((addr, port)) => addr.parse::<Ipv4Addr>().is_ok() && port.parse::<u16>().is_ok(),
        None => false,
    }
}

fn is_port_suffix(tail: &str) -> bool {
    tail.strip_prefix(':')
        .is_some_and(|port| port.parse::<u16>().is_ok())
}

/// Joins the domain label and suffix into the registrable "site" key.
///
/// The join is unconditional: a decomposition with an empty suffix yields a
/// trailing dot (`"10.0.0.1."`), which keeps IP hosts distinct from names.
pub fn registrable_site(decomposition: &DomainDecomposition) -> String {
    format!("{}.{}", decomposition.domain, decomposition.suffix)
}
