// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use crate::errors::MalformedUriError;
use memchr::memchr;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Everything except the characters `encodeURIComponent` leaves alone.
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

/// Percent-encode a URI component.
///
/// Non-ASCII characters are encoded as their UTF-8 bytes.
pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Percent-decode a URI component.
///
/// Fails on a '%' that is not followed by two hex digits
/// and on escape sequences that do not form valid UTF-8.
pub fn decode_uri_component(s: &str) -> Result<String, MalformedUriError> {
    if !escapes_valid(s.as_bytes()) {
        return Err(MalformedUriError);
    }
    percent_decode_str(s)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| MalformedUriError)
}

fn escapes_valid(mut tail: &[u8]) -> bool {
    while let Some(p) = memchr(b'%', tail) {
        let Some(hex) = tail.get(p + 1..p + 3) else {
            return false;
        };
        if !hex.iter().all(u8::is_ascii_hexdigit) {
            return false;
        }
        tail = &tail[p + 3..];
    }
    true
}


// vim: ts=4 sw=4 expandtab
