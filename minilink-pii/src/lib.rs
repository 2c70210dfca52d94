// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

#![forbid(unsafe_code)]

mod desensitize;
mod validate;

pub use desensitize::{MAX_MASK_COUNT, MaskKind, MaskOptions, desensitize};
pub use validate::{is_id_card, is_phone, is_true_name};

// vim: ts=4 sw=4 expandtab
