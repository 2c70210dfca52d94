// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use crate::print_json;
use anyhow as ah;
use clap::ValueEnum;
use minilink_pii::{MaskKind, MaskOptions, desensitize, is_id_card, is_phone, is_true_name};
use serde_json::json;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidateKind {
    Phone,
    Idcard,
    Name,
}

fn validate(kind: ValidateKind, value: &str) -> bool {
    match kind {
        ValidateKind::Phone => is_phone(value),
        ValidateKind::Idcard => is_id_card(value),
        ValidateKind::Name => is_true_name(value),
    }
}

pub fn run_mode_validate(kind: ValidateKind, value: &str) -> ah::Result<()> {
    print_json(&json!({ "valid": validate(kind, value) }))
}

pub fn run_mode_desensitize(
    kind: MaskKind,
    value: &str,
    start: Option<usize>,
    end: Option<usize>,
    mask: Option<&str>,
    count: Option<usize>,
) -> ah::Result<()> {
    let opts = MaskOptions {
        kind: Some(kind),
        start,
        end,
        mask: mask.map(str::to_string),
        count,
    };
    println!("{}", desensitize(value, &opts));
    Ok(())
}


// vim: ts=4 sw=4 expandtab
