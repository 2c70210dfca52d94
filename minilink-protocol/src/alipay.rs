// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use crate::{
    link::{LinkGenerator, default_generator},
    scheme::{ALIPAYS_PREFIX, SchemeError},
};
use minilink_util::{Query, QueryValue, encode_query, encode_uri_component};

/// Structured Alipay scheme input.
#[derive(Debug, Clone, Default)]
pub struct AlipaySchemeRequest {
    pub app_id: String,
    /// Page path without query.
    pub page: String,
    /// Query appended to the page.
    pub page_query: Query<QueryValue>,
    /// Global mini program query.
    pub global_query: Query<QueryValue>,
}

/// A generated Alipay scheme and its long link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlipayScheme {
    pub full_scheme: String,
    pub long_link: Result<String, SchemeError>,
}

impl LinkGenerator {
    /// Wrap an Alipay scheme into a shareable https render link.
    pub fn alipay_long_link(&self, scheme: &str) -> Result<String, SchemeError> {
        if !scheme.starts_with(ALIPAYS_PREFIX) {
            log::debug!("Not generating a long link for '{scheme}'");
            return Err(SchemeError::NotAlipays);
        }
        Ok(format!(
            "{}?scheme={}",
            self.endpoints().alipay_render,
            encode_uri_component(scheme)
        ))
    }

    /// Build an Alipay scheme and its long link.
    pub fn alipay_scheme(&self, req: &AlipaySchemeRequest) -> AlipayScheme {
        let mut full_scheme = format!(
            "{}?appId={}&page={}",
            self.endpoints().alipay_scheme,
            req.app_id,
            req.page
        );
        if !req.page_query.is_empty() {
            // Part of the page value, so no '&' in front.
            full_scheme.push_str(&encode_uri_component(&format!(
                "?{}",
                encode_query(&req.page_query)
            )));
        }
        if !req.global_query.is_empty() {
            full_scheme.push_str(&format!(
                "&query={}",
                encode_uri_component(&encode_query(&req.global_query))
            ));
        }
        let long_link = self.alipay_long_link(&full_scheme);
        AlipayScheme {
            full_scheme,
            long_link,
        }
    }
}

/// Wrap an Alipay scheme into a long link on the built-in endpoints.
pub fn generate_alipay_long_link(scheme: &str) -> Result<String, SchemeError> {
    default_generator().alipay_long_link(scheme)
}

/// Build an Alipay scheme on the built-in endpoints.
pub fn generate_alipay_scheme(req: &AlipaySchemeRequest) -> AlipayScheme {
    default_generator().alipay_scheme(req)
}


// vim: ts=4 sw=4 expandtab
