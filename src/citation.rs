//! Citation sources and the deduplicated reference list.
//!
//! The upstream service returns an ordered list of grounding descriptors
//! alongside the response text; inline `[n]` markers reference the n-th
//! descriptor (1-based). The list is sparse: entries may lack a `web`
//! object or a usable URI, and such markers render inert rather than as
//! broken links.
//!
//! Inline markers always resolve against the raw source list. The
//! reference list shown at the bottom of a report is a separate,
//! deduplicated-by-URI projection renumbered from 1; inline numbers are
//! never remapped to the deduplicated indices.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Anchor text shown for a linked reference whose source has no title.
pub const UNTITLED_REFERENCE: &str = "Sumber Referensi Medis";

/// One grounding descriptor as supplied by the upstream service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<WebSource>,
}

/// Web reference payload of a descriptor. Both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl WebSource {
    /// Returns the URI when present and non-empty.
    pub fn usable_uri(&self) -> Option<&str> {
        self.uri.as_deref().filter(|uri| !uri.is_empty())
    }
}

/// Resolves an inline `[index]` marker against the raw source list.
///
/// Returns the web payload only when the 1-based position exists and
/// carries a non-empty URI; anything else means the marker renders as an
/// inert, non-clickable label.
pub fn linked_source(sources: &[SourceEntry], index: usize) -> Option<&WebSource> {
    let web = sources.get(index.checked_sub(1)?)?.web.as_ref()?;
    web.usable_uri().map(|_| web)
}

/// One entry of the deduplicated reference list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reference {
    /// Sequential display index, renumbered from 1 in first-seen order.
    pub display_index: usize,
    pub uri: String,
    /// Source hostname with any leading `www.` removed.
    pub host: String,
    /// Title with trailing publisher branding stripped; empty when the
    /// source supplied no title.
    pub title: String,
}

impl Reference {
    /// Display title in `"host (title)"` form, or the host alone when the
    /// source had no title.
    pub fn display_title(&self) -> String {
        if self.title.is_empty() {
            self.host.clone()
        } else {
            format!("{} ({})", self.host, self.title)
        }
    }

    /// Clickable text for the reference link.
    pub fn anchor_text(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED_REFERENCE
        } else {
            &self.title
        }
    }
}

/// Builds the deduplicated reference list from the raw source list.
///
/// Entries are visited in original order; the first occurrence of each
/// usable URI gets the next sequential display index and later repeats are
/// skipped silently. Entries without a usable URI never appear.
pub fn unique_references(sources: &[SourceEntry]) -> Vec<Reference> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut references = Vec::new();

    for entry in sources {
        let Some(web) = entry.web.as_ref() else {
            continue;
        };
        let Some(uri) = web.usable_uri() else {
            continue;
        };
        if !seen.insert(uri) {
            continue;
        }

        references.push(Reference {
            display_index: references.len() + 1,
            uri: uri.to_string(),
            host: hostname_of(uri),
            title: clean_title(web.title.as_deref().unwrap_or("")),
        });
    }

    references
}

/// Strips trailing publisher branding from a source title.
///
/// Everything from the first `" - "` or `" | "` onward is removed,
/// whichever comes first, then the remainder is trimmed.
pub fn clean_title(title: &str) -> String {
    let dash = title.find(" - ");
    let pipe = title.find(" | ");
    let cut = match (dash, pipe) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    };
    match cut {
        Some(at) => title[..at].trim().to_string(),
        None => title.trim().to_string(),
    }
}

/// Extracts the hostname from a URI by plain string slicing.
///
/// The scheme is dropped, the remainder is cut at the first path, port,
/// query, or fragment delimiter, and a leading `www.` is removed.
/// Malformed URIs degrade to the raw string rather than failing.
pub fn hostname_of(uri: &str) -> String {
    let rest = uri.split_once("://").map_or(uri, |(_, rest)| rest);
    let end = rest.find(['/', ':', '?', '#']).unwrap_or(rest.len());
    let host = &rest[..end];
    host.strip_prefix("www.").unwrap_or(host).to_string()
}
