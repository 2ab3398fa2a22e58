//! Numeric string normalization for locale-ambiguous input
//!
//! Numeric cells arrive in European ("1.234.567,89"), US ("1,234,567.89"),
//! or plain decimal form, inferred per cell rather than per file. This
//! module rewrites any of them into a canonical dot-decimal string that
//! the standard float/integer parsers accept.

use std::borrow::Cow;

/// Normalize a numeric string into unambiguous dot-decimal form.
///
/// Disambiguation rules, in priority order:
/// 1. Both separators present, last ',' after last '.' — European:
///    dots are grouping, comma is the decimal point.
/// 2. Both present, last '.' after last ',' — US: commas are grouping.
/// 3. Only ',' present — decimal comma.
/// 4. Only '.', neither, or empty — already canonical, returned as-is.
///
/// Total and pure; never fails. Input that needs no rewriting is returned
/// borrowed.
pub fn normalize(text: &str) -> Cow<'_, str> {
    let last_dot = text.rfind('.');
    let last_comma = text.rfind(',');

    match (last_dot, last_comma) {
        (Some(dot), Some(comma)) if comma > dot => {
            // European format: strip grouping dots, comma becomes the decimal point
            Cow::Owned(text.replace('.', "").replace(',', "."))
        }
        (Some(_), Some(_)) => {
            // US format: strip grouping commas
            Cow::Owned(text.replace(',', ""))
        }
        (None, Some(_)) => {
            // Lone comma is a decimal separator
            Cow::Owned(text.replace(',', "."))
        }
        _ => Cow::Borrowed(text),
    }
}
