// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use anyhow::{self as ah, Context as _, format_err as err};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Largest multiple of 36 that fits into a byte.
/// Random bytes at or above this are rejected to avoid bias.
const BYTE_LIMIT: u8 = 252;

/// Maximum number of random characters in a unique identifier.
pub const MAX_UID_LEN: usize = 1024;

fn to_base36(mut v: u128) -> String {
    let mut digits: Vec<char> = Vec::new();
    loop {
        digits.push(BASE36[(v % 36) as usize].into());
        v /= 36;
        if v == 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}

/// Generate a unique identifier: `<timestamp>-<random>`.
///
/// The timestamp is the milliseconds since the Unix epoch in base 36.
/// The random part consists of `len` base 36 characters.
/// `len` must not exceed [MAX_UID_LEN].
pub fn generate_uid(len: usize) -> ah::Result<String> {
    if len > MAX_UID_LEN {
        return Err(err!(
            "Unique ID length {len} exceeds the maximum of {MAX_UID_LEN}."
        ));
    }
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System time is before the Unix epoch")?;

    let mut random = String::with_capacity(len);
    let mut buf = [0_u8; 32];
    while random.len() < len {
        getrandom::fill(&mut buf).map_err(|e| err!("getrandom failed: {e}"))?;
        for b in buf.iter().filter(|b| **b < BYTE_LIMIT) {
            if random.len() == len {
                break;
            }
            random.push(BASE36[(*b % 36) as usize].into());
        }
    }

    Ok(format!("{}-{random}", to_base36(now.as_millis())))
}


// vim: ts=4 sw=4 expandtab
