// src/utils.rs
// Codepoint-level helpers shared by the pipeline, the validator and the
// error Display impls.

use crate::CodePoint;

pub(crate) const CP_STOP: CodePoint = 0x2E;
pub(crate) const CP_FE0F: CodePoint = 0xFE0F;
pub(crate) const CP_HYPHEN: CodePoint = 0x2D;
pub(crate) const CP_UNDERSCORE: CodePoint = 0x5F;
pub(crate) const CP_XI_SMALL: CodePoint = 0x3BE;
pub(crate) const CP_XI_CAPITAL: CodePoint = 0x39E;

/// Decode a string into Unicode scalar values.
#[inline]
pub fn str_to_cps(s: &str) -> Vec<CodePoint> {
    s.chars().map(|c| c as CodePoint).collect()
}

/// Encode a sequence of scalar values back into a `String`.
///
/// Every codepoint produced by the pipeline originates from a `&str` or from
/// the compiled tables, so it is always a scalar value; anything else would
/// be a table bug and renders as U+FFFD rather than panicking.
pub fn cps_to_string(cps: &[CodePoint]) -> String {
    let mut out = String::with_capacity(cps.len());
    for &cp in cps {
        push_cp(&mut out, cp);
    }
    out
}

#[inline]
pub(crate) fn push_cp(out: &mut String, cp: CodePoint) {
    out.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER));
}

/// Drop every U+FE0F from a sequence.
pub fn filter_fe0f(cps: &[CodePoint]) -> Vec<CodePoint> {
    cps.iter().copied().filter(|&cp| cp != CP_FE0F).collect()
}

/// Render a codepoint for diagnostics: printable ASCII as itself, everything
/// else as `{HEX}`.
pub(crate) fn escape_cp(cp: CodePoint) -> String {
    if (0x20..=0x7E).contains(&cp) {
        // printable ASCII
        char::from_u32(cp).map(String::from).unwrap_or_default()
    } else {
        format!("{{{cp:X}}}")
    }
}

pub(crate) fn escape_cps(cps: &[CodePoint]) -> String {
    cps.iter().map(|&cp| escape_cp(cp)).collect()
}
