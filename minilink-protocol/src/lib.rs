// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

//! # Mini program deep links
//!
//! ## Link layouts
//!
//! | Platform   | scheme                                                  | https                                  |
//! | ---------- | ------------------------------------------------------- | -------------------------------------- |
//! | ALIPAY     | `alipays://platformapi/startapp?appId=..&page=..&query=..` | `https://ds.alipay.com/?scheme=<enc>` |
//! | WECHAT     | `weixin://dl/business/?appid=..&path=..&query=..`       | `<to_schema>?miniType=..&path=..&query=..&envVersion=..` |
//! | BYTEDANCE  | none                                                    | like WECHAT, `query` is a JSON object  |
//! | JD         | `openapp.jdmobile://virtual?params=<json>`              | `<to_schema>?scheme=<enc>`             |
//! | JD Finance | `openjdjrapp://..?jrparam=<json>&jrlogin=false&jrcontainer=native` | `<to_schema>?scheme=<enc>`  |
//!
//! ## Encoding layers
//!
//! A query value is percent-encoded into its `name=value` string.
//! That string is percent-encoded again when it is placed into the
//! page path or into the `query` parameter of the scheme.
//! The complete scheme is percent-encoded once more inside the https link.

#![forbid(unsafe_code)]

mod alipay;
mod endpoints;
mod link;
mod scheme;

pub use alipay::{AlipayScheme, AlipaySchemeRequest, generate_alipay_long_link, generate_alipay_scheme};
pub use endpoints::{Endpoints, LinkDefaults};
pub use link::{
    JDJR_TYPE, LinkGenerator, LinkRequest, LinkResult, Platform, QueryInput, default_generator,
    generate_platform_link,
};
pub use scheme::{ALIPAY_APPID_LEN, ALIPAYS_PREFIX, SchemeError, SchemeParams, scheme_to_params};

// vim: ts=4 sw=4 expandtab
