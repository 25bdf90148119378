//! Property tests for formatting and BCAN conversion.
//!
//! Inputs are arbitrary strings for the format functions and
//! structure-conforming BCANs for conversion, drawn per country.
#![allow(clippy::expect_used)]

use ican_core::{
    PatternClass, ShortFormat, countries, electronic_format, from_bcan, is_valid, is_valid_bcan,
    print_format, short_format, to_bcan,
};
use proptest::prelude::*;

const ELECTRONIC_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Characters of `class` that survive electronic formatting unchanged.
fn alphabet(class: PatternClass) -> Vec<char> {
    ELECTRONIC_ALPHABET
        .chars()
        .filter(|&c| class.contains(c))
        .collect()
}

/// A country code together with a BCAN that satisfies its structure, for
/// every specification whose structure survives electronic formatting.
fn country_and_bcan() -> impl Strategy<Value = (String, String)> {
    let codes: Vec<&'static str> = countries()
        .iter()
        .filter(|spec| {
            spec.structure()
                .blocks()
                .iter()
                .all(|block| !alphabet(block.class).is_empty())
        })
        .map(ican_core::Specification::country_code)
        .collect();
    prop::sample::select(codes).prop_flat_map(|code| {
        let spec = countries().get(code).expect("selected from registry");
        let blocks: Vec<_> = spec
            .structure()
            .blocks()
            .iter()
            .map(|block| {
                prop::collection::vec(prop::sample::select(alphabet(block.class)), block.repeats)
            })
            .collect();
        (Just(code.to_owned()), blocks).prop_map(|(code, blocks)| {
            let bcan = blocks.into_iter().flatten().collect();
            (code, bcan)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn electronic_format_is_idempotent(s in ".*") {
        let once = electronic_format(&s);
        prop_assert_eq!(electronic_format(&once), once);
    }

    #[test]
    fn electronic_format_yields_uppercase_alphanumerics(s in ".*") {
        prop_assert!(electronic_format(&s)
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn print_format_round_trips_to_electronic(s in "[A-Za-z0-9 -]{0,40}") {
        prop_assert_eq!(electronic_format(&print_format(&s, " ")), electronic_format(&s));
    }

    #[test]
    fn print_format_never_ends_with_separator(s in "[A-Z0-9]{1,40}") {
        prop_assert!(!print_format(&s, " ").ends_with(' '));
    }

    #[test]
    fn short_format_keeps_head_and_tail(s in "[A-Z0-9]{8,40}") {
        let short = short_format(&s, &ShortFormat::default());
        prop_assert!(short.starts_with(&s[..4]));
        prop_assert!(short.ends_with(&s[s.len() - 4..]));
    }

    #[test]
    fn from_bcan_round_trips_through_to_bcan((code, bcan) in country_and_bcan()) {
        prop_assert!(is_valid_bcan(&code, &bcan, false));
        let full = from_bcan(&code, &bcan).expect("structure-conforming BCAN");
        prop_assert!(is_valid(&full, false), "{} not valid", full);
        let split = to_bcan(&full, " ").expect("valid code splits");
        prop_assert_eq!(from_bcan(&code, &split).expect("split BCAN"), full);
    }
}
