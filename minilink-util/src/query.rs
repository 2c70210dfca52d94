// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use crate::{
    errors::MalformedUriError,
    strings::split_delim,
    uri::{decode_uri_component, encode_uri_component},
};
use regex::Regex;
use serde::{Serialize, Serializer, ser::SerializeMap as _};
use std::{
    fmt::{Display, Formatter},
    sync::OnceLock,
};

/// A `name=value` pair whose value is at least one character up to the next '&'.
///
/// Names are ASCII word characters only.
static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN_REGEX
        .get_or_init(|| Regex::new(r"([0-9A-Za-z_]+)=([^&]+)").expect("query token regex"))
}

/// A query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Float(f64),
}

/// Format a float like JavaScript's `String(number)`.
///
/// Plain decimal notation is used for decimal exponents from -7 to 20.
/// Anything else is written as `d.ddde+x` or `d.ddde-x`.
fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    if v < 0.0 {
        return format!("-{}", format_number(-v));
    }

    // Shortest round trip digits and exponent.
    let sci = format!("{v:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits = mantissa.replace('.', "");
    let k = digits.len() as i32;
    let n = exp + 1;

    if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let sign = if n > 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        let exp = (n - 1).abs();
        if rest.is_empty() {
            format!("{first}e{sign}{exp}")
        } else {
            format!("{first}.{rest}e{sign}{exp}")
        }
    }
}

impl Display for QueryValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::Str(v) => f.write_str(v),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => f.write_str(&format_number(*v)),
        }
    }
}

impl Serialize for QueryValue {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(v) => ser.serialize_str(v),
            Self::Int(v) => ser.serialize_i64(*v),
            // Integral floats are written without a fraction.
            Self::Float(v) if v.fract() == 0.0 && v.abs() < 9.0e15 => ser.serialize_i64(*v as i64),
            Self::Float(v) => ser.serialize_f64(*v),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<i32> for QueryValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for QueryValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for QueryValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

/// An insertion ordered set of query components.
///
/// Inserting an existing name replaces its value but keeps its position.
#[derive(Debug, Clone)]
pub struct Query<V = String> {
    comps: Vec<(String, V)>,
}

impl<V> Query<V> {
    pub fn new() -> Self {
        Self { comps: Vec::new() }
    }

    /// Insert or replace a component.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<V>) {
        let name = name.into();
        let value = value.into();
        if let Some(comp) = self.comps.iter_mut().find(|(n, _)| *n == name) {
            comp.1 = value;
        } else {
            self.comps.push((name, value));
        }
    }

    /// Returns the value of a query component, by name.
    /// Returns `None` if the component does not exist.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.comps.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.comps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.comps.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<V> Default for Query<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, K, W> FromIterator<(K, W)> for Query<V>
where
    K: Into<String>,
    W: Into<V>,
{
    fn from_iter<I: IntoIterator<Item = (K, W)>>(iter: I) -> Self {
        let mut this = Self::new();
        for (name, value) in iter {
            this.insert(name, value);
        }
        this
    }
}

/// Two queries are equal if they hold the same components in any order.
impl<V: PartialEq> PartialEq for Query<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(n, v)| other.get(n) == Some(v))
    }
}

impl<V: Eq> Eq for Query<V> {}

/// Serializes to a map in insertion order.
impl<V: Serialize> Serialize for Query<V> {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut map = ser.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Build a `name=value&...` string.
///
/// Values are percent-encoded, names are taken as-is.
pub fn encode_query<V: Display>(query: &Query<V>) -> String {
    query
        .iter()
        .map(|(name, value)| format!("{name}={}", encode_uri_component(&value.to_string())))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a possibly percent-encoded `name=value&...` string.
///
/// The whole string is decoded first and every value is decoded once more,
/// so values that were encoded twice come out in plain text.
/// Components that do not match `name=value` are skipped.
pub fn decode_query(s: &str) -> Result<Query, MalformedUriError> {
    let s = decode_uri_component(s)?;
    let mut query = Query::new();
    for caps in token_regex().captures_iter(&s) {
        query.insert(&caps[1], decode_uri_component(&caps[2])?);
    }
    Ok(query)
}

/// Like [decode_query], but only returns the value of `name`.
pub fn decode_query_value(s: &str, name: &str) -> Result<Option<String>, MalformedUriError> {
    let mut query = decode_query(s)?;
    Ok(query
        .comps
        .iter()
        .position(|(n, _)| n == name)
        .map(|i| query.comps.swap_remove(i).1))
}

/// Split the part after the first '?' into decoded `(name, value)` pairs.
///
/// Every '&' separated component yields a pair, including empty ones.
/// The name ends at the first '='. A component without '=' has an empty value.
pub fn split_pairs(s: &str) -> Result<Vec<(String, String)>, MalformedUriError> {
    let s = split_delim(s, b'?').map_or(s, |(_, q)| q);
    s.split('&')
        .map(|comp| {
            let (name, value) = split_delim(comp, b'=').unwrap_or((comp, ""));
            Ok((decode_uri_component(name)?, decode_uri_component(value)?))
        })
        .collect()
}

/// Extract the query parameters of an URL.
///
/// Only the text between the first and the second '?' is considered.
/// Components without a name or without '=' are skipped.
/// On a malformed value an error is logged and an empty query is returned.
pub fn url_parameters(url: &str) -> Query {
    let mut parts = url.split('?');
    parts.next();
    let Some(query_string) = parts.next() else {
        return Query::new();
    };

    let mut query = Query::new();
    for comp in query_string.split('&') {
        let mut pair = comp.split('=');
        let (Some(name), Some(value)) = (pair.next(), pair.next()) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        match decode_uri_component(value) {
            Ok(value) => query.insert(name, value),
            Err(e) => {
                log::error!("Failed to get URL parameters of '{url}': {e}");
                return Query::new();
            }
        }
    }
    query
}


// vim: ts=4 sw=4 expandtab
