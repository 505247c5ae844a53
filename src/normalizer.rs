//! Public entry points: `normalize`, `beautify`, `tokenize`.
//!
//! [`EnsNameNormalizer`] owns the compiled table set. Construction is eager
//! and infallible on consistent tables; every operation afterwards is a pure
//! function over `&self`, so one instance can serve unbounded concurrent
//! callers.

use crate::error::ProcessError;
use crate::tables::Tables;
use crate::tokenize::tokenize_input;
use crate::tokens::{LabelKind, TokenizedName};
use crate::utils::{CP_XI_CAPITAL, CP_XI_SMALL, push_cp};
use crate::validate::validate_label;
use memchr::memchr_iter;

pub struct EnsNameNormalizer {
    tables: Tables,
}

impl Default for EnsNameNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EnsNameNormalizer {
    /// Build the normalizer from the compiled tables. The embedded data is
    /// checked at load; an inconsistency is a defect in the shipped tables,
    /// not a runtime condition.
    pub fn new() -> Self {
        Self {
            tables: Tables::load().expect("compiled tables are consistent - this is a bug"),
        }
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Diagnostic decomposition of `input`. Never fails; disallowed
    /// codepoints come back as tokens.
    pub fn tokenize(&self, input: &str) -> TokenizedName {
        TokenizedName {
            input: input.to_string(),
            tokens: tokenize_input(&self.tables, input),
        }
    }

    /// Canonicalize `input` into its unique ENSIP-15 form, or report the
    /// first violation.
    pub fn normalize(&self, input: &str) -> Result<String, ProcessError> {
        if is_normalized_ascii(input) {
            return Ok(input.to_string());
        }
        let tokenized = self.tokenize(input);
        let labels = tokenized.labels();
        let mut out = String::with_capacity(input.len());
        for (index, label) in labels.iter().enumerate() {
            validate_label(&self.tables, label, index)?;
            if index > 0 {
                out.push('.');
            }
            for &cp in &label.cps {
                push_cp(&mut out, cp);
            }
        }
        Ok(out)
    }

    /// Like [`normalize`](Self::normalize), but render emoji fully
    /// qualified and capitalize xi in non-Greek labels. The result is
    /// display-oriented: normalizing it again returns the `normalize`
    /// output.
    pub fn beautify(&self, input: &str) -> Result<String, ProcessError> {
        if is_normalized_ascii(input) {
            return Ok(input.to_string());
        }
        let tokenized = self.tokenize(input);
        let labels = tokenized.labels();
        let mut out = String::with_capacity(input.len());
        for (index, label) in labels.iter().enumerate() {
            let kind = validate_label(&self.tables, label, index)?;
            let greek = matches!(kind, LabelKind::Script("Greek"));
            if index > 0 {
                out.push('.');
            }
            for token in &label.tokens {
                if let crate::tokens::Token::Emoji { canonical, .. } = token {
                    // Emoji spans are kept verbatim, xi replacement does not
                    // reach inside them.
                    for &cp in canonical {
                        push_cp(&mut out, cp);
                    }
                } else {
                    for &cp in token.cps() {
                        if !greek && cp == CP_XI_SMALL {
                            push_cp(&mut out, CP_XI_CAPITAL);
                        } else {
                            push_cp(&mut out, cp);
                        }
                    }
                }
            }
        }
        Ok(out)
    }

    /// [`normalize`](Self::normalize) over raw bytes, reporting the byte
    /// offset of a UTF-8 decoding failure.
    pub fn normalize_bytes(&self, input: &[u8]) -> Result<String, ProcessError> {
        self.normalize(decode_utf8(input)?)
    }

    /// [`beautify`](Self::beautify) over raw bytes.
    pub fn beautify_bytes(&self, input: &[u8]) -> Result<String, ProcessError> {
        self.beautify(decode_utf8(input)?)
    }
}

/// Normalize with a freshly constructed [`EnsNameNormalizer`].
pub fn normalize(input: &str) -> Result<String, ProcessError> {
    EnsNameNormalizer::new().normalize(input)
}

/// Beautify with a freshly constructed [`EnsNameNormalizer`].
pub fn beautify(input: &str) -> Result<String, ProcessError> {
    EnsNameNormalizer::new().beautify(input)
}

/// Tokenize with a freshly constructed [`EnsNameNormalizer`].
pub fn tokenize(input: &str) -> TokenizedName {
    EnsNameNormalizer::new().tokenize(input)
}

#[cfg(feature = "simd")]
fn decode_utf8(input: &[u8]) -> Result<&str, ProcessError> {
    simdutf8::compat::from_utf8(input).map_err(|e| ProcessError::InvalidUtf8 {
        offset: e.valid_up_to(),
    })
}

#[cfg(not(feature = "simd"))]
fn decode_utf8(input: &[u8]) -> Result<&str, ProcessError> {
    std::str::from_utf8(input).map_err(|e| ProcessError::InvalidUtf8 {
        offset: e.valid_up_to(),
    })
}

/// Already-normalized ASCII names skip the pipeline entirely: lower-case
/// letters, digits, the permitted ASCII punctuation, and every label clean
/// of the structural rules. Anything else falls through to the full
/// pipeline, including every error case, so this path never decides
/// failures.
fn is_normalized_ascii(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    if !bytes
        .iter()
        .all(|&b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b':' | b'.'))
    {
        return false;
    }
    let mut start = 0;
    for stop in memchr_iter(b'.', bytes).chain(core::iter::once(bytes.len())) {
        if !is_clean_ascii_label(&bytes[start..stop]) {
            return false;
        }
        start = stop + 1;
    }
    true
}

fn is_clean_ascii_label(label: &[u8]) -> bool {
    if label.is_empty() {
        return false;
    }
    // reserved label extension, with the Punycode prefix passed through
    if label.len() >= 4
        && label[2] == b'-'
        && label[3] == b'-'
        && !(label[0] == b'x' && label[1] == b'n')
    {
        return false;
    }
    // underscores only as a leading run
    let leading = label.iter().take_while(|&&b| b == b'_').count();
    if label[leading..].contains(&b'_') {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_path_accepts_clean_names() {
        for name in ["hello.eth", "abc---", "xn--ls8h.eth", "_a.b-c", "a:b"] {
            assert!(is_normalized_ascii(name), "{name:?} should take the fast path");
        }
    }

    #[test]
    fn fast_path_defers_everything_else() {
        for name in ["", "Hello.eth", "a..b", "ab--cd", "a_b", "café", "a👍"] {
            assert!(!is_normalized_ascii(name), "{name:?} must use the pipeline");
        }
    }

    #[test]
    fn fast_path_agrees_with_the_pipeline() {
        let normalizer = EnsNameNormalizer::new();
        for name in ["hello.eth", "abc---", "xn--ls8h.eth", "_a.b-c"] {
            // the slow path must produce the identical answer
            let tokenized = normalizer.tokenize(name);
            let labels = tokenized.labels();
            let mut rendered = Vec::new();
            for (i, label) in labels.iter().enumerate() {
                validate_label(normalizer.tables(), label, i).expect("clean name");
                rendered.push(crate::utils::cps_to_string(&label.cps));
            }
            assert_eq!(rendered.join("."), name);
        }
    }

    #[test]
    fn bytes_entry_point_reports_utf8_offset() {
        let normalizer = EnsNameNormalizer::new();
        let result = normalizer.normalize_bytes(&[0x61, 0x62, 0xFF, 0x63]);
        assert_eq!(result, Err(ProcessError::InvalidUtf8 { offset: 2 }));
        assert_eq!(normalizer.normalize_bytes(b"abc").unwrap(), "abc");
    }
}
