// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

#![forbid(unsafe_code)]

mod errors;
pub mod query;
pub mod strings;
pub mod time;
pub mod uid;
pub mod uri;

pub use errors::MalformedUriError;
pub use query::{
    Query, QueryValue, decode_query, decode_query_value, encode_query, split_pairs, url_parameters,
};
pub use strings::{PagePath, extract_body, split_delim};
pub use time::format_seconds;
pub use uid::{MAX_UID_LEN, generate_uid};
pub use uri::{decode_uri_component, encode_uri_component};

// vim: ts=4 sw=4 expandtab
