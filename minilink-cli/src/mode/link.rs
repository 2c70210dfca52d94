// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use crate::{
    args::{pairs_to_query, parse_pair},
    print_json,
};
use anyhow::{self as ah, Context as _};
use clap::Args;
use minilink_protocol::{
    AlipaySchemeRequest, LinkGenerator, LinkRequest, Platform, QueryInput, SchemeError,
    scheme_to_params,
};
use serde_json::json;

#[derive(Args, Debug, Clone)]
pub struct LinkArgs {
    #[arg(long, short = 'a', id = "APPID")]
    app_id: String,

    /// Platform code of the redirect page.
    #[arg(long, short = 'm')]
    mini_type: Option<String>,

    /// Page path with optional query, e.g. 'pages/detail?id=1'.
    #[arg(long)]
    page: Option<String>,

    /// Pre-formatted global query string.
    #[arg(long, conflicts_with = "PAIR")]
    query: Option<String>,

    /// Global query parameter NAME=VALUE. May be given multiple times.
    #[arg(long = "param", id = "PAIR", value_parser = parse_pair)]
    params: Vec<(String, String)>,

    /// release, trial or develop.
    #[arg(long, short = 'e')]
    env_version: Option<String>,

    /// JD scheme type. 'jdjr' selects JD Finance.
    #[arg(long)]
    jd_type: Option<String>,
}

impl LinkArgs {
    fn request(&self, platform: Platform) -> LinkRequest {
        let query = match (&self.query, self.params.is_empty()) {
            (Some(text), _) => Some(QueryInput::from(text.as_str())),
            (None, false) => Some(QueryInput::from(pairs_to_query(&self.params))),
            (None, true) => None,
        };
        LinkRequest {
            platform: Some(platform),
            app_id: self.app_id.clone(),
            mini_type: self.mini_type.clone(),
            page: self.page.clone(),
            query,
            env_version: self.env_version.clone(),
            jd_type: self.jd_type.clone(),
        }
    }
}

fn print_scheme_error(e: &SchemeError) -> ah::Result<()> {
    print_json(&json!({ "message": e.message() }))
}

pub fn run_mode_link(
    generator: &LinkGenerator,
    platform: Platform,
    args: &LinkArgs,
) -> ah::Result<()> {
    let link = generator
        .generate(&args.request(platform))
        .context("Generate platform link")?;
    print_json(&link)
}

pub fn run_mode_alipay_scheme(
    generator: &LinkGenerator,
    app_id: &str,
    page: &str,
    page_query: &[(String, String)],
    global_query: &[(String, String)],
) -> ah::Result<()> {
    let req = AlipaySchemeRequest {
        app_id: app_id.to_string(),
        page: page.to_string(),
        page_query: pairs_to_query(page_query),
        global_query: pairs_to_query(global_query),
    };
    let scheme = generator.alipay_scheme(&req);
    let long_link = match &scheme.long_link {
        Ok(link) => json!(link),
        Err(e) => json!({ "message": e.message() }),
    };
    print_json(&json!({
        "fullScheme": scheme.full_scheme,
        "longLink": long_link,
    }))
}

pub fn run_mode_long_link(generator: &LinkGenerator, scheme: &str) -> ah::Result<()> {
    match generator.alipay_long_link(scheme) {
        Ok(link) => print_json(&json!({ "longLink": link })),
        Err(e) => print_scheme_error(&e),
    }
}

pub fn run_mode_parse(scheme: &str) -> ah::Result<()> {
    match scheme_to_params(scheme) {
        Ok(params) => print_json(&json!({ "params": params })),
        Err(e) => print_scheme_error(&e),
    }
}


// vim: ts=4 sw=4 expandtab
