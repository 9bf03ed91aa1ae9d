//! Staking-token amount helpers.
//!
//! The staking token uses 18 on-chain decimals; the UI displays 6.
//! Integer math throughout, no floats near wei values.

use alloc::format;
use alloc::string::String;

/// On-chain decimal places of the staking token
pub const TOKEN_DECIMALS: u32 = 18;
/// Decimal places shown to the user
const DISPLAY_DECIMALS: u32 = 6;

const WEI_PER_TOKEN: u128 = 10u128.pow(TOKEN_DECIMALS);

/// Format a wei amount as a token string with 6 decimals, e.g. "1.500000"
pub fn format_token(wei: u128) -> String {
    let whole = wei / WEI_PER_TOKEN;
    let fraction = (wei % WEI_PER_TOKEN) / 10u128.pow(TOKEN_DECIMALS - DISPLAY_DECIMALS);
    format!("{}.{:06}", whole, fraction)
}

/// Parse a decimal token string ("1.5", "0.000001", ".25") into wei.
///
/// Rejects more than 18 fractional digits rather than rounding, and any
/// non-digit characters (no signs, no exponents).
pub fn parse_token(text: &str) -> Option<u128> {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (text, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut wei = if whole.is_empty() {
        0
    } else {
        parse_digits(whole)?.checked_mul(WEI_PER_TOKEN)?
    };

    if !fraction.is_empty() {
        let digits = fraction.len() as u32;
        if digits > TOKEN_DECIMALS {
            return None;
        }
        let scale = 10u128.pow(TOKEN_DECIMALS - digits);
        wei = wei.checked_add(parse_digits(fraction)?.checked_mul(scale)?)?;
    }

    Some(wei)
}

fn parse_digits(text: &str) -> Option<u128> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
