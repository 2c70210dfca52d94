// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

pub const DEFAULT_SECONDS_FORMAT: &str = "HH:mm:ss";

/// Format a number of seconds.
///
/// Every `HH`, `mm` and `ss` in `format` is replaced by the zero padded
/// hours, minutes and seconds. Hours are not wrapped at 24.
pub fn format_seconds(seconds: u64, format: &str) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;
    format
        .replace("HH", &format!("{hours:02}"))
        .replace("mm", &format!("{minutes:02}"))
        .replace("ss", &format!("{seconds:02}"))
}


// vim: ts=4 sw=4 expandtab
