// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use anyhow::{self as ah, Context as _, format_err as err};
use minilink_protocol::{Endpoints, LinkDefaults, LinkGenerator};
use serde::Deserialize;
use std::path::Path;

/// minilink configuration.
///
/// ```toml
/// [endpoints]
/// to_schema = "https://example.com/mini/to_schema.html"
///
/// [defaults]
/// wechat_path = "pages/index/index"
/// env_version = "release"
/// ```
///
/// Every key is optional and falls back to the built-in value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    endpoints: Endpoints,
    defaults: LinkDefaults,
}

impl Config {
    pub fn new_parse_file(path: &Path) -> ah::Result<Self> {
        let data = std::fs::read_to_string(path).context("Read configuration file")?;
        Self::new_parse_str(&data).context("Parse configuration file")
    }

    pub fn new_parse_str(data: &str) -> ah::Result<Self> {
        let this: Self = toml::from_str(data)?;
        this.check()?;
        Ok(this)
    }

    fn check(&self) -> ah::Result<()> {
        // Check [endpoints] section.
        for (name, value) in self.endpoints.iter() {
            if let Err(e) = check_base_url(value) {
                return Err(err!(
                    "The value of '{name}' under [endpoints] is invalid: {e}"
                ));
            }
        }

        // Check [defaults] section.
        if self.defaults.wechat_path.trim().is_empty() {
            return Err(err!("'wechat_path' under [defaults] is empty."));
        }
        if self.defaults.wechat_path.starts_with('/') {
            return Err(err!(
                "'wechat_path' under [defaults] must not start with '/'."
            ));
        }
        if self.defaults.env_version.trim().is_empty() {
            return Err(err!("'env_version' under [defaults] is empty."));
        }
        Ok(())
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn defaults(&self) -> &LinkDefaults {
        &self.defaults
    }

    /// Create a link generator on the configured endpoints.
    pub fn generator(&self) -> LinkGenerator {
        LinkGenerator::new(self.endpoints.clone(), self.defaults.clone())
    }
}

fn check_base_url(url: &str) -> ah::Result<()> {
    let Some((scheme, rest)) = url.split_once("://") else {
        return Err(err!("Not an URL: No '://' separator."));
    };
    if scheme.is_empty() || rest.is_empty() {
        return Err(err!("Not an URL: Empty scheme or location."));
    }
    if url.contains(['?', '#']) {
        return Err(err!("Base URL must not contain a query or fragment."));
    }
    if url.chars().any(char::is_whitespace) {
        return Err(err!("Base URL must not contain whitespace."));
    }
    Ok(())
}


// vim: ts=4 sw=4 expandtab
