//! Media list parsing.
//!
//! A media list mixes `[section]` headers, `#` comments and URL lines:
//!
//! ```text
//! [global]
//! [national]
//! http://example.com/page.html
//! # a comment, ignored
//! [local]
//! https://other.example/path?x=1
//! ```
//!
//! Lines are cut at the first space and lines shorter than three characters
//! are noise. In strict mode a `[global]` header injects the global flat file.

use std::fs;
use std::path::Path;

use colored::*;
use log::{debug, info};

use super::tracker::CollisionTracker;
use super::types::{Category, ClassifiedUrl, Section};
use crate::config::{CategoryMode, ParserConfig, MIN_LINE_LENGTH};
use crate::domain::SuffixResolver;
use crate::error_handling::ClassifyError;

/// Result of one media-list parse run.
#[derive(Debug, Clone)]
pub struct ParsedMediaList {
    /// Records in input order, global-file records spliced in at their header
    pub records: Vec<ClassifiedUrl>,
    /// The tracker passed in, updated with this run's sites
    pub tracker: CollisionTracker,
    /// Comment and noise lines skipped (informational)
    pub skipped: usize,
}

/// Applies the shared line rules, returning `None` for lines to skip.
///
/// Strips the line terminator, drops `#` comments, cuts at the first space and
/// drops what is left if shorter than `MIN_LINE_LENGTH`.
pub(crate) fn clean_line(raw: &str) -> Option<&str> {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    let line = line.strip_suffix('\r').unwrap_or(line);

    if line.len() > 1 && line.starts_with('#') {
        return None;
    }

    let line = line.split(' ').next().unwrap_or_default();
    if line.chars().count() < MIN_LINE_LENGTH {
        return None;
    }
    Some(line)
}

/// Returns the candidate section name of a `[name]` header line.
///
/// The name is everything between the first and the last character, so text
/// trailing the `]` is kept as part of it. A line opening with `[` but lacking
/// a `]` is not a header.
fn section_header(line: &str) -> Option<&str> {
    if !line.starts_with('[') || !line.contains(']') {
        return None;
    }
    let inner = &line[1..];
    let end = inner.char_indices().last().map_or(0, |(i, _)| i);
    Some(&inner[..end])
}

/// Parses a categorized media list.
///
/// # Arguments
///
/// * `lines` - Media list lines, with or without terminators
/// * `config` - Strict (with global file) or flexible category mode
/// * `resolver` - Suffix lookup used to compute each record's site
/// * `tracker` - Collision state carried over from earlier runs (or a fresh one)
///
/// # Errors
///
/// - `ClassifyError::InvalidSection` if strict mode meets a header outside the
///   permitted set; the run stops and no records are returned.
/// - `ClassifyError::InvalidScheme` if a URL line is not http(s).
/// - `ClassifyError::Io` if the global file cannot be read.
pub fn parse_media_list<I, R>(
    lines: I,
    config: &ParserConfig,
    resolver: &R,
    mut tracker: CollisionTracker,
) -> Result<ParsedMediaList, ClassifyError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    R: SuffixResolver + ?Sized,
{
    let mut records = Vec::new();
    let mut current: Option<Category> = None;
    let mut skipped = 0usize;

    for raw in lines {
        let Some(line) = clean_line(raw.as_ref()) else {
            skipped += 1;
            continue;
        };

        if let Some(candidate) = section_header(line) {
            match &config.mode {
                CategoryMode::Flexible => {
                    let notice = format!("Importing URLs in category: {candidate}");
                    info!("{}", notice.as_str().green());
                    current = Some(Category::Custom(candidate.to_string()));
                }
                CategoryMode::Strict { global_file } => {
                    match Section::parse_header(candidate)? {
                        // One-shot injection, the current section stays as it was
                        Section::Global => records.extend(load_global_file(global_file, resolver)?),
                        section => current = Some(Category::Section(section)),
                    }
                }
            }
            continue;
        }

        let record = ClassifiedUrl::classify(current.clone(), line, resolver)?;
        tracker.observe(&record, config.is_flexible());
        records.push(record);
    }

    debug!(
        "Parsed media list: {} records, {} lines skipped, {} collisions",
        records.len(),
        skipped,
        tracker.collisions().len()
    );

    Ok(ParsedMediaList {
        records,
        tracker,
        skipped,
    })
}

/// Reads a media list from disk and parses it with [`parse_media_list`].
pub fn parse_media_file<R>(
    path: &Path,
    config: &ParserConfig,
    resolver: &R,
    tracker: CollisionTracker,
) -> Result<ParsedMediaList, ClassifyError>
where
    R: SuffixResolver + ?Sized,
{
    let content = fs::read_to_string(path).map_err(|e| ClassifyError::io(path, e))?;
    let parsed = parse_media_list(content.lines(), config, resolver, tracker)?;
    info!(
        "Imported {} URLs from {}",
        parsed.records.len(),
        path.display()
    );
    Ok(parsed)
}

/// Loads the flat global media file.
///
/// Every qualifying line becomes a `global` record. Headers are not
/// interpreted, so a `[x]` line is treated as a URL (and rejected as one).
///
/// # Errors
///
/// `ClassifyError::Io` if the file cannot be read, `ClassifyError::InvalidScheme`
/// for a non-http(s) line.
pub fn load_global_file<R>(path: &Path, resolver: &R) -> Result<Vec<ClassifiedUrl>, ClassifyError>
where
    R: SuffixResolver + ?Sized,
{
    let content = fs::read_to_string(path).map_err(|e| ClassifyError::io(path, e))?;

    let records = content
        .lines()
        .filter_map(clean_line)
        .map(|line| ClassifiedUrl::classify(Some(Section::Global.into()), line, resolver))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Loaded {} global entries from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::FakeResolver;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn global_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    fn parse(lines: &[&str], config: &ParserConfig) -> Result<ParsedMediaList, ClassifyError> {
        parse_media_list(lines, config, &FakeResolver::new(), CollisionTracker::new())
    }

    fn categories(parsed: &ParsedMediaList) -> Vec<Option<String>> {
        parsed
            .records
            .iter()
            .map(|r| r.category().map(|c| c.to_string()))
            .collect()
    }

    #[test]
    fn test_clean_line_strips_terminators() {
        assert_eq!(clean_line("http://a.com\n"), Some("http://a.com"));
        assert_eq!(clean_line("http://a.com\r\n"), Some("http://a.com"));
        assert_eq!(clean_line("http://a.com"), Some("http://a.com"));
    }

    #[test]
    fn test_clean_line_skips_comments_and_noise() {
        assert_eq!(clean_line("# http://a.com"), None);
        assert_eq!(clean_line("#"), None);
        assert_eq!(clean_line(""), None);
        assert_eq!(clean_line("ab"), None);
        assert_eq!(clean_line(" http://a.com"), None);
    }

    #[test]
    fn test_clean_line_truncates_at_space() {
        assert_eq!(
            clean_line("http://a.com/x some description"),
            Some("http://a.com/x")
        );
        assert_eq!(clean_line("[local] trailing"), Some("[local]"));
    }

    #[test]
    fn test_section_header_extraction() {
        assert_eq!(section_header("[national]"), Some("national"));
        assert_eq!(section_header("[a]b"), Some("a]"));
        assert_eq!(section_header("[national"), None);
        assert_eq!(section_header("http://a.com/[x]"), None);
    }

    #[test]
    fn test_url_before_header_has_no_category() {
        let parsed = parse(&["http://a.com", "[local]", "http://b.com"], &ParserConfig::flexible())
            .unwrap();
        assert_eq!(categories(&parsed), vec![None, Some("local".to_string())]);
    }

    #[test]
    fn test_preserves_input_order_and_sections() {
        let lines = [
            "[national]",
            "http://example.com/page.html",
            "# a comment, ignored",
            "[local]",
            "https://other.example/path?x=1",
            "http://third.example",
        ];
        let parsed = parse(&lines, &ParserConfig::strict("unused")).unwrap();
        let urls: Vec<&str> = parsed.records.iter().map(|r| r.url()).collect();
        assert_eq!(
            urls,
            vec![
                "http://example.com/page.html",
                "https://other.example/path?x=1",
                "http://third.example"
            ]
        );
        assert_eq!(
            categories(&parsed),
            vec![
                Some("national".to_string()),
                Some("local".to_string()),
                Some("local".to_string())
            ]
        );
        assert_eq!(parsed.records[1].site(), "other.example");
        assert_eq!(parsed.skipped, 1);
    }

    #[test]
    fn test_record_url_is_space_truncated_line() {
        let parsed = parse(
            &["[blog]", "http://blog.example.com/feed   my favourite blog"],
            &ParserConfig::default(),
        )
        .unwrap();
        assert_eq!(parsed.records[0].url(), "http://blog.example.com/feed");
    }

    #[test]
    fn test_global_header_injects_global_file() {
        let file = global_file("http://a.com\n");
        let parsed = parse(&["[global]"], &ParserConfig::strict(file.path())).unwrap();
        assert_eq!(parsed.records.len(), 1);
        let record = &parsed.records[0];
        assert_eq!(record.category(), Some(&Category::Section(Section::Global)));
        assert_eq!(record.url(), "http://a.com");
        assert_eq!(record.site(), "a.com");
    }

    #[test]
    fn test_global_header_keeps_current_section() {
        let file = global_file("# globals\nhttp://g.com\nhttps://h.org/x\n");
        let lines = [
            "[local]",
            "http://l1.com",
            "[global]",
            "http://l2.com",
        ];
        let parsed = parse(&lines, &ParserConfig::strict(file.path())).unwrap();
        assert_eq!(
            categories(&parsed),
            vec![
                Some("local".to_string()),
                Some("global".to_string()),
                Some("global".to_string()),
                Some("local".to_string()),
            ]
        );
    }

    #[test]
    fn test_global_before_any_header_leaves_category_unset() {
        let file = global_file("http://g.com\n");
        let parsed = parse(&["[global]", "http://x.com"], &ParserConfig::strict(file.path()))
            .unwrap();
        assert_eq!(
            categories(&parsed),
            vec![Some("global".to_string()), None]
        );
    }

    #[test]
    fn test_missing_global_file_is_io_error() {
        let result = parse(&["[global]"], &ParserConfig::strict("/nonexistent/global"));
        assert!(matches!(result, Err(ClassifyError::Io { .. })));
    }

    #[test]
    fn test_strict_mode_rejects_unknown_section() {
        let lines = ["[national]", "http://a.com", "[bogus]", "http://b.com"];
        match parse(&lines, &ParserConfig::default()) {
            Err(ClassifyError::InvalidSection { section, .. }) => assert_eq!(section, "bogus"),
            other => panic!("Expected InvalidSection, got {other:?}"),
        }
    }

    #[test]
    fn test_flexible_mode_accepts_any_section() {
        let parsed = parse(
            &["[sports]", "http://espn.com", "[bogus]", "http://b.com"],
            &ParserConfig::flexible(),
        )
        .unwrap();
        assert_eq!(
            categories(&parsed),
            vec![Some("sports".to_string()), Some("bogus".to_string())]
        );
    }

    #[test]
    fn test_flexible_mode_global_is_ordinary_label() {
        // No global file exists; flexible mode must not try to load one
        let parsed = parse(&["[global]", "http://a.com"], &ParserConfig::flexible()).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(
            parsed.records[0].category(),
            Some(&Category::Custom("global".to_string()))
        );
    }

    #[test]
    fn test_strict_collision_is_reported_but_kept() {
        let lines = ["[national]", "http://www.a.com", "[local]", "http://a.com/x"];
        let parsed = parse(&lines, &ParserConfig::default()).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.tracker.collisions().len(), 1);
        assert_eq!(parsed.tracker.collisions()[0].url, "http://a.com/x");
        assert_eq!(parsed.tracker.collisions()[0].site, "a.com");
    }

    #[test]
    fn test_flexible_collision_is_silent() {
        let lines = ["[one]", "http://www.a.com", "[two]", "http://a.com/x"];
        let parsed = parse(&lines, &ParserConfig::flexible()).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert!(parsed.tracker.collisions().is_empty());
        assert_eq!(parsed.tracker.seen_count(), 0);
    }

    #[test]
    fn test_global_records_are_not_tracked() {
        let file = global_file("http://a.com\n");
        let lines = ["[global]", "[local]", "http://a.com/local"];
        let parsed = parse(&lines, &ParserConfig::strict(file.path())).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert!(parsed.tracker.collisions().is_empty());
    }

    #[test]
    fn test_tracker_carries_across_runs() {
        let resolver = FakeResolver::new();
        let config = ParserConfig::default();
        let first = parse_media_list(
            ["[local]", "http://a.com"],
            &config,
            &resolver,
            CollisionTracker::new(),
        )
        .unwrap();
        let second =
            parse_media_list(["[blog]", "http://a.com/blog"], &config, &resolver, first.tracker)
                .unwrap();
        assert_eq!(second.tracker.collisions().len(), 1);
    }

    #[test]
    fn test_invalid_scheme_aborts_parse() {
        let result = parse(&["[local]", "www.example.com"], &ParserConfig::default());
        assert!(matches!(result, Err(ClassifyError::InvalidScheme(_))));
    }

    #[test]
    fn test_unclosed_bracket_is_treated_as_url() {
        let result = parse(&["[local"], &ParserConfig::default());
        match result {
            Err(ClassifyError::InvalidScheme(line)) => assert_eq!(line, "[local"),
            other => panic!("Expected InvalidScheme, got {other:?}"),
        }
    }

    #[test]
    fn test_accepts_lines_with_terminators() {
        let lines = vec!["[local]\n".to_string(), "http://a.com\r\n".to_string()];
        let parsed = parse_media_list(
            &lines,
            &ParserConfig::default(),
            &FakeResolver::new(),
            CollisionTracker::new(),
        )
        .unwrap();
        assert_eq!(parsed.records[0].url(), "http://a.com");
    }

    #[test]
    fn test_load_global_file_ignores_headers() {
        let file = global_file("[local]\n");
        let result = load_global_file(file.path(), &FakeResolver::new());
        assert!(matches!(result, Err(ClassifyError::InvalidScheme(_))));
    }

    #[test]
    fn test_parse_media_file() {
        let file = global_file("[special]\nhttp://s.example.com\n");
        let parsed = parse_media_file(
            file.path(),
            &ParserConfig::default(),
            &FakeResolver::new(),
            CollisionTracker::new(),
        )
        .unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].site(), "example.com");
    }

    #[test]
    fn test_multi_label_suffix_sites_collide() {
        let resolver = FakeResolver::new()
            .with_entry("www.bbc.co.uk", "www", "bbc", "co.uk")
            .with_entry("news.bbc.co.uk", "news", "bbc", "co.uk");
        let lines = ["[national]", "http://www.bbc.co.uk", "[local]", "http://news.bbc.co.uk/x"];
        let parsed =
            parse_media_list(lines, &ParserConfig::default(), &resolver, CollisionTracker::new())
                .unwrap();
        assert_eq!(parsed.records[0].site(), "bbc.co.uk");
        assert_eq!(parsed.tracker.collisions().len(), 1);
        assert_eq!(resolver.calls(), 2);
    }
}
