// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use serde::Deserialize;

pub const ALIPAY_SCHEME: &str = "alipays://platformapi/startapp";
pub const ALIPAY_HTTPS: &str = "https://ds.alipay.com/";
pub const ALIPAY_RENDER: &str = "https://render.alipay.com/p/s/i/";
pub const WECHAT_SCHEME: &str = "weixin://dl/business/";
pub const TO_SCHEMA: &str = "https://static.youpinhaoche.com/mini/to_schema.html";
pub const JD_SCHEME: &str = "openapp.jdmobile://virtual";
pub const JDJR_SCHEME: &str = "openjdjrapp://com.jd.jrapp/jdminiprogram/open";

pub const WECHAT_DEFAULT_PATH: &str = "pages/tabbar/dashboard/dashboard";
pub const DEFAULT_ENV_VERSION: &str = "release";

/// Base URLs the links are built on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Endpoints {
    /// Alipay mini program start scheme.
    pub alipay_scheme: String,
    /// Alipay https landing page wrapping a scheme.
    pub alipay_https: String,
    /// Alipay render page used for long links.
    pub alipay_render: String,
    /// WeChat business deep link scheme.
    pub wechat_scheme: String,
    /// Redirect page for WeChat, ByteDance and JD https links.
    pub to_schema: String,
    /// JD mall virtual scheme.
    pub jd_scheme: String,
    /// JD Finance mini program scheme.
    pub jdjr_scheme: String,
}

impl Endpoints {
    /// All endpoints with their configuration names.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("alipay_scheme", self.alipay_scheme.as_str()),
            ("alipay_https", self.alipay_https.as_str()),
            ("alipay_render", self.alipay_render.as_str()),
            ("wechat_scheme", self.wechat_scheme.as_str()),
            ("to_schema", self.to_schema.as_str()),
            ("jd_scheme", self.jd_scheme.as_str()),
            ("jdjr_scheme", self.jdjr_scheme.as_str()),
        ]
        .into_iter()
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            alipay_scheme: ALIPAY_SCHEME.to_string(),
            alipay_https: ALIPAY_HTTPS.to_string(),
            alipay_render: ALIPAY_RENDER.to_string(),
            wechat_scheme: WECHAT_SCHEME.to_string(),
            to_schema: TO_SCHEMA.to_string(),
            jd_scheme: JD_SCHEME.to_string(),
            jdjr_scheme: JDJR_SCHEME.to_string(),
        }
    }
}

/// Values used when a link request leaves them out.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkDefaults {
    /// WeChat scheme path if no page is given.
    pub wechat_path: String,
    /// WeChat and ByteDance `envVersion` if none is given.
    pub env_version: String,
}

impl Default for LinkDefaults {
    fn default() -> Self {
        Self {
            wechat_path: WECHAT_DEFAULT_PATH.to_string(),
            env_version: DEFAULT_ENV_VERSION.to_string(),
        }
    }
}

// vim: ts=4 sw=4 expandtab
