// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use anyhow::{self as ah, Context as _};
use minilink_util::{format_seconds, generate_uid};

pub fn run_mode_uid(len: usize) -> ah::Result<()> {
    let uid = generate_uid(len).context("Generate unique ID")?;
    println!("{uid}");
    Ok(())
}

pub fn run_mode_format_seconds(seconds: u64, format: &str) -> ah::Result<()> {
    println!("{}", format_seconds(seconds, format));
    Ok(())
}

// vim: ts=4 sw=4 expandtab
