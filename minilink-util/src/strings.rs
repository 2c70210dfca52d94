// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use crate::uri::encode_uri_component;
use memchr::memchr;
use regex::Regex;
use std::sync::OnceLock;

static BODY_REGEX: OnceLock<Regex> = OnceLock::new();

/// Split `s` at the first occurrence of the ASCII delimiter.
/// The delimiter itself is not part of either half.
pub fn split_delim(s: &str, delim: u8) -> Option<(&str, &str)> {
    debug_assert!(delim.is_ascii());
    memchr(delim, s.as_bytes()).map(|p| (&s[..p], &s[p + 1..]))
}

/// A mini program page: `path[?query]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagePath {
    path: String,
    raw_query: String,
}

impl PagePath {
    /// Split a page at its first '?'.
    ///
    /// The query part is kept literally, including any further '?'.
    pub fn split(page: &str) -> Self {
        let (path, raw_query) = split_delim(page, b'?').unwrap_or((page, ""));
        Self {
            path: path.to_string(),
            raw_query: raw_query.to_string(),
        }
    }

    /// The page path without any query.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The literal page query, without the leading '?'.
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// The page query, percent-encoded.
    pub fn encoded_query(&self) -> String {
        encode_uri_component(&self.raw_query)
    }

    /// The path followed by the percent-encoded `?query`.
    ///
    /// If there is no query, this is just the path.
    pub fn encoded_full_path(&self) -> String {
        if self.raw_query.is_empty() {
            self.path.clone()
        } else {
            format!(
                "{}{}",
                self.path,
                encode_uri_component(&format!("?{}", self.raw_query))
            )
        }
    }

    /// No page was given.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.raw_query.is_empty()
    }
}

/// Returns the content of the first `<body>` element of a HTML document.
///
/// Returns an empty string if there is no non-empty body.
pub fn extract_body(html: &str) -> &str {
    let re = BODY_REGEX.get_or_init(|| {
        Regex::new(r"(?i)<body[^>]*>([\s\S]+?)</body>").expect("body element regex")
    });
    re.captures(html)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}


// vim: ts=4 sw=4 expandtab
