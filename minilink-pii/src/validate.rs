// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use regex::Regex;
use std::sync::OnceLock;

static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
static ID_CARD_REGEX: OnceLock<Regex> = OnceLock::new();
static NAME_REGEX: OnceLock<Regex> = OnceLock::new();

/// Mainland China mobile phone number.
const PHONE: &str = r"^1[3-9][0-9]{9}$";

/// 15 digit legacy or 18 character resident ID card number.
/// The check digit is not verified.
const ID_CARD: &str = concat!(
    r"^[1-9][0-9]{5}(?:",
    r"[0-9]{2}(?:0[1-9]|1[0-2])(?:0[1-9]|[12][0-9]|3[01])[0-9]{3}",
    r"|",
    r"(?:19|20)[0-9]{2}(?:0[1-9]|1[0-2])(?:0[1-9]|[12][0-9]|3[01])[0-9]{3}[0-9Xx]",
    r")$",
);

/// Chinese name of 2 to 20 characters, optionally with separator dots,
/// or latin name of 2 to 20 letters and spaces.
const NAME: &str = concat!(
    r"^(?:",
    r"[\x{4e00}-\x{9fa5}][\x{4e00}-\x{9fa5}.·。]{0,18}[\x{4e00}-\x{9fa5}]",
    r"|",
    r"[a-zA-Z][a-zA-Z\s]{0,18}[a-zA-Z]",
    r")$",
);

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("validation regex"))
}

pub fn is_phone(phone: &str) -> bool {
    regex(&PHONE_REGEX, PHONE).is_match(phone)
}

pub fn is_id_card(id_card: &str) -> bool {
    regex(&ID_CARD_REGEX, ID_CARD).is_match(id_card)
}

pub fn is_true_name(name: &str) -> bool {
    regex(&NAME_REGEX, NAME).is_match(name)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_phone() {
        assert!(is_phone("13812345678"));
        assert!(is_phone("15912345678"));
        assert!(is_phone("17612345678"));

        assert!(!is_phone("138123456789"));
        assert!(!is_phone("1381234567"));
        assert!(!is_phone("12812345678"));
        assert!(!is_phone("1"));
        assert!(!is_phone(""));
        assert!(!is_phone("1381234567８"));
    }

    #[test]
    fn test_id_card() {
        assert!(is_id_card("110101199003077758"));
        assert!(is_id_card("11010119900307775X"));
        assert!(is_id_card("11010119900307775x"));
        assert!(is_id_card("71010119900307775x"));
        assert!(is_id_card("81010119900307775x"));
        assert!(!is_id_card("1101011990030777"));

        assert!(!is_id_card("1234"));
        assert!(!is_id_card("12345678901234567"));
        assert!(!is_id_card("1234567890123456789"));
        assert!(!is_id_card("11010119900307775Y"));
        assert!(!is_id_card("110101199003077@5"));

        // 15 digit form.
        assert!(is_id_card("110101900307775"));
        assert!(is_id_card("110101850101123"));
        assert!(!is_id_card("11010190030777"));
        assert!(!is_id_card("1101019003077755"));
        assert!(!is_id_card("11010190030777X"));

        assert!(!is_id_card(""));
        assert!(!is_id_card(" 110101199003077758"));
        assert!(!is_id_card("110101199003077758 "));
        assert!(!is_id_card("1101011990 03077758"));

        assert!(is_id_card("110101190001017758"));
        assert!(is_id_card("110101200001017758"));
        assert!(!is_id_card("110101189901017758"));
        assert!(!is_id_card("110101210001017758"));
    }

    #[test]
    fn test_true_name() {
        assert!(is_true_name("张三"));
        assert!(is_true_name("李四"));
        assert!(is_true_name("王小明"));
        assert!(is_true_name("张.三"));
        assert!(is_true_name("李·四"));
        assert!(is_true_name("王。明"));

        assert!(!is_true_name("张"));
        assert!(!is_true_name("张三."));
        assert!(!is_true_name(".张三"));
        assert!(!is_true_name("张三1"));
        assert!(!is_true_name("张三!"));
        assert!(!is_true_name("张 三"));

        assert!(is_true_name("John"));
        assert!(is_true_name("Tom"));
        assert!(is_true_name("John Smith"));
        assert!(is_true_name("john"));
        assert!(is_true_name("JOHN"));

        assert!(!is_true_name("J"));
        assert!(!is_true_name("John1"));
        assert!(!is_true_name("John!"));
        assert!(!is_true_name("John "));
        assert!(!is_true_name(" John"));

        assert!(!is_true_name("张John"));
        assert!(!is_true_name("John张"));
        assert!(!is_true_name(""));
        assert!(!is_true_name("Abcdefghijklmnopqrstu"));
        assert!(is_true_name("Abcdefghijklmnopqrst"));
    }
}

// vim: ts=4 sw=4 expandtab
