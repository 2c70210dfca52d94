// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use minilink_pii::MaskKind;
use minilink_protocol::Platform;
use minilink_util::{MAX_UID_LEN, Query, QueryValue, split_delim};

/// Parse a `NAME=VALUE` command line argument.
pub fn parse_pair(s: &str) -> Result<(String, String), String> {
    match split_delim(s, b'=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("'{s}' is not in the form NAME=VALUE")),
    }
}

pub fn parse_platform(s: &str) -> Result<Platform, String> {
    Platform::from_name(&s.to_ascii_uppercase())
        .ok_or_else(|| format!("Unknown platform '{s}'. Expected ALIPAY, WECHAT, BYTEDANCE or JD."))
}

pub fn parse_mask_kind(s: &str) -> Result<MaskKind, String> {
    MaskKind::from_name(&s.to_ascii_lowercase())
        .ok_or_else(|| format!("Unknown kind '{s}'. Expected phone, idcard, email or name."))
}

pub fn parse_uid_len(s: &str) -> Result<usize, String> {
    let len: usize = s.parse().map_err(|e| format!("'{s}' is not a length: {e}"))?;
    if len > MAX_UID_LEN {
        return Err(format!("{len} exceeds the maximum length of {MAX_UID_LEN}"));
    }
    Ok(len)
}

/// Collect command line pairs into a query.
pub fn pairs_to_query(pairs: &[(String, String)]) -> Query<QueryValue> {
    pairs
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect()
}


// vim: ts=4 sw=4 expandtab
