// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

macro_rules! define_simple_error {
    ($name:ident, $text:literal) => {
        #[derive(Debug, Copy, Clone, PartialEq, Eq)]
        pub struct $name;

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
                write!(f, $text)
            }
        }

        impl std::error::Error for $name {}
    };
}

// A '%' without two hex digits, or escapes that decode to invalid UTF-8.
define_simple_error!(MalformedUriError, "URI malformed");

// vim: ts=4 sw=4 expandtab
