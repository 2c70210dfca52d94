// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

#![forbid(unsafe_code)]

mod args;
mod mode;

use crate::{
    args::{parse_mask_kind, parse_pair, parse_platform, parse_uid_len},
    mode::{
        link::{LinkArgs, run_mode_alipay_scheme, run_mode_link, run_mode_long_link, run_mode_parse},
        misc::{run_mode_format_seconds, run_mode_uid},
        params::{ParamsMode, run_mode_params},
        pii::{ValidateKind, run_mode_desensitize, run_mode_validate},
    },
};
use anyhow::{self as ah, Context as _, format_err as err};
use clap::{Parser, Subcommand};
use minilink_conf::Config;
use minilink_pii::MaskKind;
use minilink_util::time::DEFAULT_SECONDS_FORMAT;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
struct Opts {
    /// Path to the configuration file.
    ///
    /// The built-in endpoints are used, if no configuration is given.
    #[arg(long, short = 'C', id = "PATH")]
    config: Option<PathBuf>,

    /// Show version information and exit.
    #[arg(long, short = 'v')]
    version: bool,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug, Clone)]
enum Mode {
    /// Generate the scheme and https link of a mini program page.
    Link {
        /// ALIPAY, WECHAT, BYTEDANCE or JD.
        #[arg(long, short = 'p', value_parser = parse_platform)]
        platform: minilink_protocol::Platform,

        #[command(flatten)]
        args: LinkArgs,
    },

    /// Build an Alipay scheme and its long link.
    AlipayScheme {
        #[arg(long, short = 'a', id = "APPID")]
        app_id: String,

        /// Page path without query.
        #[arg(long, default_value = "")]
        page: String,

        /// Page query parameter NAME=VALUE. May be given multiple times.
        #[arg(long, id = "PAGE-PAIR", value_parser = parse_pair)]
        page_query: Vec<(String, String)>,

        /// Global query parameter NAME=VALUE. May be given multiple times.
        #[arg(long, id = "GLOBAL-PAIR", value_parser = parse_pair)]
        global_query: Vec<(String, String)>,
    },

    /// Wrap an alipays: scheme into a shareable long link.
    LongLink { scheme: String },

    /// Parse an alipays: scheme into its parameters.
    Parse { scheme: String },

    /// Encode and decode query strings.
    Params {
        #[command(subcommand)]
        mode: ParamsMode,
    },

    /// Check a phone number, ID card number or real name.
    Validate {
        #[arg(value_enum)]
        kind: ValidateKind,
        value: String,
    },

    /// Mask the middle part of a personal value.
    Desensitize {
        /// phone, idcard, email or name.
        #[arg(value_parser = parse_mask_kind)]
        kind: MaskKind,

        value: String,

        /// Number of leading characters to keep.
        #[arg(long)]
        start: Option<usize>,

        /// Number of trailing characters to keep.
        #[arg(long)]
        end: Option<usize>,

        /// Mask string.
        #[arg(long)]
        mask: Option<String>,

        /// Number of mask repetitions.
        #[arg(long)]
        count: Option<usize>,
    },

    /// Generate a unique ID.
    Uid {
        /// Number of random characters, at most 1024.
        #[arg(long, short = 'l', default_value = "8", value_parser = parse_uid_len)]
        len: usize,
    },

    /// Format a number of seconds.
    FormatSeconds {
        seconds: u64,

        /// HH, mm and ss are replaced.
        #[arg(long, short = 'f', default_value = DEFAULT_SECONDS_FORMAT)]
        format: String,
    },
}

/// Print a value as pretty JSON to stdout.
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> ah::Result<()> {
    let text = serde_json::to_string_pretty(value).context("Serialize JSON output")?;
    println!("{text}");
    Ok(())
}

fn load_config(opts: &Opts) -> ah::Result<Config> {
    match &opts.config {
        Some(path) => {
            log::debug!("Loading configuration '{}'", path.display());
            Config::new_parse_file(path).context("Parse configuration")
        }
        None => {
            log::debug!("Using the built-in endpoints");
            Ok(Config::default())
        }
    }
}

fn main() -> ah::Result<()> {
    env_logger::init_from_env(
        env_logger::Env::new()
            .filter_or("MINILINK_LOG", "warn")
            .write_style_or("MINILINK_LOG_STYLE", "auto"),
    );

    let opts = Opts::parse();

    if opts.version {
        println!("minilink version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(mode) = &opts.mode else {
        return Err(err!(
            "'minilink' requires a subcommand but one was not provided. \
            Please run 'minilink --help' for more information."
        ));
    };

    let conf = load_config(&opts)?;
    let generator = conf.generator();

    match mode {
        Mode::Link { platform, args } => run_mode_link(&generator, *platform, args),
        Mode::AlipayScheme {
            app_id,
            page,
            page_query,
            global_query,
        } => run_mode_alipay_scheme(&generator, app_id, page, page_query, global_query),
        Mode::LongLink { scheme } => run_mode_long_link(&generator, scheme),
        Mode::Parse { scheme } => run_mode_parse(scheme),
        Mode::Params { mode } => run_mode_params(mode),
        Mode::Validate { kind, value } => run_mode_validate(*kind, value),
        Mode::Desensitize {
            kind,
            value,
            start,
            end,
            mask,
            count,
        } => run_mode_desensitize(*kind, value, *start, *end, mask.as_deref(), *count),
        Mode::Uid { len } => run_mode_uid(*len),
        Mode::FormatSeconds { seconds, format } => run_mode_format_seconds(*seconds, format),
    }
}

// vim: ts=4 sw=4 expandtab
