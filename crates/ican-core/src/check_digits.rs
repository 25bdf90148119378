//! ISO 13616 rearrangement and ISO 7064 MOD 97-10 check digits.
//!
//! Validation and generation share the same two steps: [`iso13616_prepare`]
//! turns an account code into a string of decimal digits, and
//! [`iso7064_mod97`] reduces that digit string modulo 97 without ever holding
//! more than nine digits in an integer.
//!
//! # References
//!
//! - ISO 13616-1, Annex B: moving the first four characters to the end and
//!   expanding letters to two-digit values.
//! - ISO 7064, MOD 97-10: a valid code reduces to a remainder of exactly 1.

/// Widest decimal prefix reduced in one step of [`iso7064_mod97`].
///
/// Nine digits plus a two-digit carried remainder never leave `u64`, and stay
/// within the 2^53 integer window of the reference algorithm.
const BLOCK_DIGITS: usize = 9;

/// Prepares an account code for MOD 97-10 reduction.
///
/// The first four characters (country code and check digits) are moved to the
/// end. Every ASCII letter is uppercased and replaced by its two-digit value
/// (`A` = 10 … `Z` = 35); digits are left untouched.
///
/// Any other character is passed through unchanged, so that a later call to
/// [`iso7064_mod97`] rejects the result instead of silently skipping it.
///
/// # Examples
///
/// ```
/// use ican_core::check_digits::iso13616_prepare;
///
/// assert_eq!(iso13616_prepare("BE68539007547034"), "539007547034111468");
/// ```
pub fn iso13616_prepare(code: &str) -> String {
    let split = code.char_indices().nth(4).map_or(code.len(), |(i, _)| i);
    let (head, tail) = code.split_at(split);

    let mut prepared = String::with_capacity(code.len() * 2);
    for ch in tail.chars().chain(head.chars()) {
        let upper = ch.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            let value = u32::from(upper) - u32::from('A') + 10;
            prepared.push_str(&value.to_string());
        } else {
            prepared.push(upper);
        }
    }
    prepared
}

/// Reduces a decimal digit string modulo 97.
///
/// The string is consumed front to back: the leading (at most nine) digits are
/// reduced, and the remainder is spliced back in front of the digits that are
/// still pending. This repeats until two digits or fewer remain, whose value
/// modulo 97 is returned.
///
/// Returns `None` for an empty string or one containing anything other than
/// ASCII digits.
///
/// # Examples
///
/// ```
/// use ican_core::check_digits::iso7064_mod97;
///
/// assert_eq!(iso7064_mod97("539007547034111468"), Some(1));
/// assert_eq!(iso7064_mod97("12a4"), None);
/// ```
pub fn iso7064_mod97(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut remainder = digits.to_owned();
    while remainder.len() > 2 {
        let take = remainder.len().min(BLOCK_DIGITS);
        let block: u64 = remainder[..take].parse().ok()?;
        remainder = format!("{}{}", block % 97, &remainder[take..]);
    }

    let tail: u32 = remainder.parse().ok()?;
    Some(tail % 97)
}

/// Returns `true` if `code` carries correct MOD 97-10 check digits.
///
/// Only the checksum is verified; length, country and structure checks belong
/// to [`crate::Specification::is_valid`].
///
/// # Examples
///
/// ```
/// use ican_core::check_digits::is_valid_checksum;
///
/// assert!(is_valid_checksum("BE68539007547034"));
/// assert!(!is_valid_checksum("BE68539007547035"));
/// ```
pub fn is_valid_checksum(code: &str) -> bool {
    iso7064_mod97(&iso13616_prepare(code)) == Some(1)
}

/// Computes the two check digits for `bcan` under `country_code`.
///
/// The code is assembled with a `00` placeholder, reduced, and the check
/// digits are `98 - remainder`, zero-padded to two characters.
///
/// Returns `None` if the assembled code contains characters the reduction
/// cannot interpret.
///
/// # Examples
///
/// ```
/// use ican_core::check_digits::compute_check_digits;
///
/// assert_eq!(compute_check_digits("BE", "539007547034").as_deref(), Some("68"));
/// ```
pub fn compute_check_digits(country_code: &str, bcan: &str) -> Option<String> {
    let remainder = iso7064_mod97(&iso13616_prepare(&format!("{country_code}00{bcan}")))?;
    Some(format!("{:02}", 98 - remainder))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn prepare_moves_prefix_and_expands_letters() {
        assert_eq!(
            iso13616_prepare("GB29NWBK60161331926819"),
            "2332112060161331926819161129"
        );
    }

    #[test]
    fn prepare_uppercases_before_expanding() {
        assert_eq!(iso13616_prepare("be68539007547034"), iso13616_prepare("BE68539007547034"));
    }

    #[test]
    fn prepare_passes_through_foreign_characters() {
        assert_eq!(iso13616_prepare("BE6-12"), "1211146-");
    }

    #[test]
    fn prepare_short_input_is_only_rotated() {
        assert_eq!(iso13616_prepare("BE"), "1114");
        assert_eq!(iso13616_prepare(""), "");
    }

    #[test]
    fn mod97_small_values() {
        assert_eq!(iso7064_mod97("0"), Some(0));
        assert_eq!(iso7064_mod97("96"), Some(96));
        assert_eq!(iso7064_mod97("97"), Some(0));
        assert_eq!(iso7064_mod97("98"), Some(1));
    }

    #[test]
    fn mod97_streams_past_integer_width() {
        // 10^2 = 3 (mod 97), so 10^30 = 3^15 = 85 (mod 97).
        let digits = format!("1{}", "0".repeat(30));
        assert_eq!(iso7064_mod97(&digits), Some(85));
    }

    #[test]
    fn mod97_rejects_empty_and_non_digits() {
        assert_eq!(iso7064_mod97(""), None);
        assert_eq!(iso7064_mod97("12-34"), None);
        assert_eq!(iso7064_mod97("١٢"), None);
    }

    #[test]
    fn checksum_valid_belgian_code() {
        assert!(is_valid_checksum("BE68539007547034"));
    }

    #[test]
    fn checksum_valid_british_code() {
        assert!(is_valid_checksum("GB29NWBK60161331926819"));
    }

    #[test]
    fn checksum_valid_crypto_code() {
        assert!(is_valid_checksum("CB661234567890ABCDEF1234567890ABCDEF12345678"));
    }

    #[test]
    fn checksum_rejects_corrupt_last_digit() {
        assert!(!is_valid_checksum("BE68539007547035"));
    }

    #[test]
    fn checksum_rejects_transposition() {
        assert!(!is_valid_checksum("BE86539007547034"));
    }

    #[test]
    fn checksum_rejects_separators() {
        assert!(!is_valid_checksum("BE68 5390 0754 7034"));
    }

    #[test]
    fn check_digits_belgian() {
        assert_eq!(compute_check_digits("BE", "539007547034").as_deref(), Some("68"));
    }

    #[test]
    fn check_digits_are_zero_padded() {
        assert_eq!(compute_check_digits("AE", "0331234567890123456").as_deref(), Some("07"));
    }

    #[test]
    fn generated_check_digits_validate() {
        let digits = compute_check_digits("NL", "ABNA0417164300").expect("alphanumeric bcan");
        assert!(is_valid_checksum(&format!("NL{digits}ABNA0417164300")));
    }

    #[test]
    fn check_digits_reject_foreign_characters() {
        assert_eq!(compute_check_digits("BE", "539-007547034"), None);
    }
}
