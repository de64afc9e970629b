//! Jobs list query state and its location encoding.
//!
//! Responsibilities:
//! - Hold the page number, search text, namespace, and facet selections.
//! - Parse them from a location query string and serialize them back.
//!
//! Invariants:
//! - Serialized order: namespace, page, search, type, status, dc, prefix.
//! - Defaults are omitted: page 1, empty search, empty selections, no namespace.
//! - Facet selections are JSON arrays, encoded like `encodeURIComponent`.
//! - Every change except a page change resets the page to 1.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use tracing::warn;

use super::facets::FacetKind;

/// Characters `encodeURIComponent` leaves alone, in addition to alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// UI state of the jobs list that round-trips through the location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobsQuery {
    namespace: Option<String>,
    page: usize,
    search: String,
    selections: [Vec<String>; 4],
}

impl Default for JobsQuery {
    fn default() -> Self {
        Self {
            namespace: None,
            page: 1,
            search: String::new(),
            selections: Default::default(),
        }
    }
}

impl JobsQuery {
    /// Parse a query string (without the leading `?`).
    ///
    /// Unknown parameters are ignored; malformed values fall back to defaults.
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::default();

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode(raw_key);
            let value = decode(raw_value);

            match key.as_str() {
                "namespace" => {
                    parsed.namespace = Some(value).filter(|ns| !ns.is_empty());
                }
                "page" => match value.parse::<usize>() {
                    Ok(page) => parsed.page = page.max(1),
                    Err(_) => warn!(value = %value, "Ignoring non-numeric page parameter"),
                },
                "search" => parsed.search = value,
                other => {
                    if let Some(kind) = FacetKind::from_param(other) {
                        match serde_json::from_str::<Vec<String>>(&value) {
                            Ok(keys) => parsed.selections[kind.index()] = keys,
                            Err(e) => warn!(
                                param = other,
                                error = %e,
                                "Ignoring malformed facet selection"
                            ),
                        }
                    }
                }
            }
        }

        parsed
    }

    /// Serialize to a query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if let Some(ns) = &self.namespace {
            pairs.push(("namespace", ns.clone()));
        }
        if self.page > 1 {
            pairs.push(("page", self.page.to_string()));
        }
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        for kind in FacetKind::ALL {
            let selection = self.selection(kind);
            if !selection.is_empty() {
                let json = serde_json::to_string(selection).unwrap_or_else(|_| "[]".to_string());
                pairs.push((kind.param_name(), json));
            }
        }

        pairs
            .into_iter()
            .map(|(key, value)| format!("{key}={}", utf8_percent_encode(&value, URI_COMPONENT)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Location of the jobs list carrying this query.
    pub fn to_location(&self, path: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selection(&self, kind: FacetKind) -> &[String] {
        &self.selections[kind.index()]
    }

    pub fn is_selected(&self, kind: FacetKind, key: &str) -> bool {
        self.selection(kind).iter().any(|k| k == key)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search != self.search {
            self.search = search;
            self.page = 1;
        }
    }

    pub fn set_namespace(&mut self, namespace: Option<String>) {
        let namespace = namespace.filter(|ns| !ns.is_empty());
        if namespace != self.namespace {
            self.namespace = namespace;
            self.page = 1;
        }
    }

    /// Add `key` to the selection, or remove it when present.
    pub fn toggle(&mut self, kind: FacetKind, key: &str) {
        let selection = &mut self.selections[kind.index()];
        match selection.iter().position(|k| k == key) {
            Some(idx) => {
                selection.remove(idx);
            }
            None => selection.push(key.to_string()),
        }
        self.page = 1;
    }

    /// Drop selected keys `keep` rejects. Returns true when anything was removed.
    ///
    /// Pruning keeps the current page: it follows a reload, not a user change.
    pub fn retain_selection(&mut self, kind: FacetKind, keep: impl Fn(&str) -> bool) -> bool {
        let selection = &mut self.selections[kind.index()];
        let before = selection.len();
        selection.retain(|key| keep(key));
        selection.len() != before
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
