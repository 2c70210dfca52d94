// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use crate::{
    args::{pairs_to_query, parse_pair},
    print_json,
};
use anyhow::{self as ah, Context as _};
use clap::Subcommand;
use minilink_util::{decode_query, decode_query_value, encode_query, url_parameters};
use serde_json::{Map, json};

#[derive(Subcommand, Debug, Clone)]
pub enum ParamsMode {
    /// Build a query string from NAME=VALUE pairs.
    Encode {
        #[arg(id = "PAIR", value_parser = parse_pair)]
        pairs: Vec<(String, String)>,
    },

    /// Decode a query string.
    Decode {
        query: String,

        /// Only print the value of this parameter.
        #[arg(long, short = 'k')]
        key: Option<String>,
    },

    /// Extract the parameters of a URL.
    Url { url: String },
}

pub fn run_mode_params(mode: &ParamsMode) -> ah::Result<()> {
    match mode {
        ParamsMode::Encode { pairs } => {
            println!("{}", encode_query(&pairs_to_query(pairs)));
            Ok(())
        }
        ParamsMode::Decode { query, key: None } => {
            let query = decode_query(query).context("Decode query string")?;
            print_json(&query)
        }
        ParamsMode::Decode {
            query,
            key: Some(key),
        } => {
            let value = decode_query_value(query, key).context("Decode query string")?;
            let mut out = Map::new();
            out.insert(key.clone(), json!(value));
            print_json(&out)
        }
        ParamsMode::Url { url } => print_json(&url_parameters(url)),
    }
}

// vim: ts=4 sw=4 expandtab
