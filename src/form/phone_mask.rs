//! Live phone masking for the lead form.

use crate::domain::digits_only;

/// Most digits a Brazilian phone with area code can have.
pub const MAX_PHONE_DIGITS: usize = 11;

/// Reformat whatever the user typed into the phone mask.
///
/// Non-digits are dropped and input is capped at 11 digits. The mask grows
/// with the input: `DD`, `(DD) DDDD`, `(DD) DDDD-DDDD`, and switches to the
/// mobile layout `(DD) DDDDD-DDDD` on the eleventh digit.
///
/// # Example
///
/// ```
/// use ordemo_leads::form::format_phone;
///
/// assert_eq!(format_phone("1198765432"), "(11) 9876-5432");
/// assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
/// ```
pub fn format_phone(input: &str) -> String {
    let digits: String = digits_only(input).chars().take(MAX_PHONE_DIGITS).collect();
    let len = digits.len();

    match len {
        0..=2 => digits,
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}
