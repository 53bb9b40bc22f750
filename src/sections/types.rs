//! Section, category and classified-record types.

use std::fmt;

use serde::{Serialize, Serializer};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::config::PERMITTED_SECTIONS;
use crate::domain::{registrable_site, SuffixResolver};
use crate::error_handling::ClassifyError;
use crate::url::clean_url;

/// The fixed set of sections accepted in strict mode.
///
/// `Global` never becomes a current section: its header injects the global
/// flat file instead.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    Global,
    National,
    Local,
    Blog,
    Removed,
    Special,
    All,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Parses a bracketed header name, rejecting anything outside the permitted set.
    pub fn parse_header(candidate: &str) -> Result<Self, ClassifyError> {
        candidate
            .parse()
            .map_err(|_| ClassifyError::InvalidSection {
                section: candidate.to_string(),
                permitted: PERMITTED_SECTIONS.iter().map(|s| s.to_string()).collect(),
            })
    }
}

/// Category label stored on a record.
///
/// Strict mode only produces `Section`; flexible mode only produces `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Section(Section),
    Custom(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Section(section) => section.as_str(),
            Category::Custom(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Section> for Category {
    fn from(section: Section) -> Self {
        Category::Section(section)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One classified media-list entry.
///
/// The `site` is always computed from `url` by the normalizer and resolver;
/// there is no way to set it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedUrl {
    category: Option<Category>,
    url: String,
    site: String,
}

impl ClassifiedUrl {
    /// Cleans `url`, resolves its host and builds the record.
    ///
    /// # Errors
    ///
    /// Returns `ClassifyError::InvalidScheme` if `url` is not http(s).
    pub fn classify<R>(
        category: Option<Category>,
        url: &str,
        resolver: &R,
    ) -> Result<Self, ClassifyError>
    where
        R: SuffixResolver + ?Sized,
    {
        let host = clean_url(url)?;
        let site = registrable_site(&resolver.resolve(host));
        Ok(Self {
            category,
            url: url.to_string(),
            site,
        })
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Registrable domain (`domain.suffix`) of the URL's host.
    pub fn site(&self) -> &str {
        &self.site
    }
}
