// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

pub mod link;
pub mod misc;
pub mod params;
pub mod pii;

// vim: ts=4 sw=4 expandtab
