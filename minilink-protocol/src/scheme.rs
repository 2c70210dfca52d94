// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use minilink_util::{MalformedUriError, Query, split_pairs};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Prefix of every Alipay scheme.
pub const ALIPAYS_PREFIX: &str = "alipays:";

/// Number of UTF-16 code units in an Alipay appId.
pub const ALIPAY_APPID_LEN: usize = 16;

/// Rejection of an Alipay scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemeError {
    /// The scheme does not start with [ALIPAYS_PREFIX].
    NotAlipays,
    /// The appId does not have [ALIPAY_APPID_LEN] UTF-16 code units.
    InvalidAppId(String),
    /// A parameter other than `appId`, `page` or `query`.
    UnsupportedParam(String),
    /// Broken percent-encoding.
    Malformed(MalformedUriError),
}

impl SchemeError {
    /// The rejection message as shown to users.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Display for SchemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::NotAlipays => write!(f, "! 非 {ALIPAYS_PREFIX} 开头"),
            Self::InvalidAppId(app_id) => write!(f, "! 非 {ALIPAY_APPID_LEN} 位 appId '{app_id}'"),
            Self::UnsupportedParam(name) => write!(f, "! 不支持参数 '{name}'"),
            Self::Malformed(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SchemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MalformedUriError> for SchemeError {
    fn from(e: MalformedUriError) -> Self {
        Self::Malformed(e)
    }
}

/// The parameters of an Alipay scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// The `page` parameter, decoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The `query` parameter split into its components.
    /// Components with an empty value are dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<Query>,
}

/// Parse an Alipay scheme into its parameters.
///
/// Parameters are checked in order and the first bad one rejects the scheme.
/// A parameter given more than once takes its last value.
pub fn scheme_to_params(scheme: &str) -> Result<SchemeParams, SchemeError> {
    if !scheme.starts_with(ALIPAYS_PREFIX) {
        return Err(SchemeError::NotAlipays);
    }

    let mut params = SchemeParams::default();
    for (name, value) in split_pairs(scheme)? {
        match name.as_str() {
            "appId" => {
                if value.encode_utf16().count() != ALIPAY_APPID_LEN {
                    log::debug!("Rejecting scheme '{scheme}': appId '{value}'");
                    return Err(SchemeError::InvalidAppId(value));
                }
                params.app_id = Some(value);
            }
            "page" => {
                params.path = Some(value);
            }
            "query" => {
                let query = split_pairs(&value)?
                    .into_iter()
                    .filter(|(_, v)| !v.is_empty())
                    .collect();
                params.query = Some(query);
            }
            _ => {
                log::debug!("Rejecting scheme '{scheme}': parameter '{name}'");
                return Err(SchemeError::UnsupportedParam(name));
            }
        }
    }
    Ok(params)
}


// vim: ts=4 sw=4 expandtab
