// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

const DEFAULT_MASK: &str = "*";

/// Upper bound of mask repetitions.
pub const MAX_MASK_COUNT: usize = 1024;

/// What kind of value is masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    Phone,
    IdCard,
    Email,
    Name,
}

impl MaskKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "phone" => Some(Self::Phone),
            "idcard" => Some(Self::IdCard),
            "email" => Some(Self::Email),
            "name" => Some(Self::Name),
            _ => None,
        }
    }

    /// Kept (start, end) characters and mask repetitions.
    fn defaults(&self) -> (usize, usize, usize) {
        match self {
            Self::Name => (1, 0, 1),
            Self::Phone | Self::IdCard | Self::Email => (3, 4, 4),
        }
    }
}

/// Masking options.
///
/// Unset fields take the defaults of the [MaskKind].
/// Without a kind nothing is masked.
#[derive(Debug, Clone, Default)]
pub struct MaskOptions {
    pub kind: Option<MaskKind>,
    /// Number of leading characters to keep.
    pub start: Option<usize>,
    /// Number of trailing characters to keep.
    pub end: Option<usize>,
    pub mask: Option<String>,
    /// How often the mask is repeated, at most [MAX_MASK_COUNT] times.
    pub count: Option<usize>,
}

impl MaskOptions {
    pub fn new(kind: MaskKind) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: usize) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = Some(mask.into());
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Mask the middle part of a personal value.
///
/// Values not longer than `start + end` characters are returned unchanged,
/// as are e-mail addresses without a local part or without a domain.
/// The domain of an e-mail address ends at a second '@'.
pub fn desensitize(value: &str, opts: &MaskOptions) -> String {
    let Some(kind) = opts.kind else {
        return value.to_string();
    };
    let (def_start, def_end, def_count) = kind.defaults();
    let start = opts.start.unwrap_or(def_start);
    let end = opts.end.unwrap_or(def_end);
    let count = opts.count.unwrap_or(def_count).min(MAX_MASK_COUNT);
    let mask = opts.mask.as_deref().unwrap_or(DEFAULT_MASK);

    let chars: Vec<char> = value.chars().collect();
    let len = chars.len();
    if value.is_empty() || len <= start.saturating_add(end) {
        return value.to_string();
    }
    let head = |n: usize| -> String { chars[..n.min(len)].iter().collect() };
    let tail = |n: usize| -> String { chars[len - n.min(len)..].iter().collect() };

    match kind {
        MaskKind::Phone => format!("{}{}{}", head(start), mask.repeat(count), tail(end)),
        MaskKind::IdCard => format!(
            "{}{}{}",
            head(start),
            mask.repeat(len.saturating_sub(start).saturating_sub(end)),
            tail(end)
        ),
        MaskKind::Email => {
            let Some(at) = chars.iter().position(|c| *c == '@') else {
                return value.to_string();
            };
            if at == 0 || at == len - 1 {
                return value.to_string();
            }
            let local = head(at);
            let local: String = local.chars().take(start).collect();
            match opts.end {
                Some(end) if end > 0 => format!("{local}{}{}", mask.repeat(count), tail(end)),
                _ => {
                    let domain: String =
                        chars[at + 1..].iter().take_while(|c| **c != '@').collect();
                    format!("{local}{}@{domain}", mask.repeat(count))
                }
            }
        }
        MaskKind::Name => {
            if len <= 2 {
                format!("{}{DEFAULT_MASK}", chars[0])
            } else {
                format!("{}{}{}", chars[0], mask.repeat(len - 2), chars[len - 1])
            }
        }
    }
}


// vim: ts=4 sw=4 expandtab
