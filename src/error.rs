//! Error types for normalization and table loading.
//!
//! `ProcessError` is the closed per-call error set: `normalize` and
//! `beautify` report the first failure detected for a label and never
//! continue past it. `tokenize` never returns an error; problematic input
//! surfaces as `Disallowed` tokens instead.
//!
//! Codepoints embedded in messages render as themselves when printable
//! ASCII and as `{HEX}` otherwise, so errors stay copy-pasteable even when
//! the offending input is invisible or confusable.

use crate::CodePoint;
use crate::utils::{escape_cp, escape_cps};
use thiserror::Error;

/// Failure raised while normalizing or beautifying a name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcessError {
    #[error("invalid utf-8 at byte offset {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("disallowed character {} at index {offset}", escape_cp(*.cp))]
    Disallowed { cp: CodePoint, offset: usize },

    #[error("empty label at index {index}")]
    EmptyLabel { index: usize },

    #[error("underscore allowed only at label start, found at index {offset}")]
    UnderscoreInMiddle { offset: usize },

    #[error("label extension {} is reserved", escape_cps(.cps))]
    LabelExtension { cps: Vec<CodePoint> },

    #[error("leading fenced character {}", escape_cp(*.cp))]
    LeadingFenced { cp: CodePoint },

    #[error("trailing fenced character {}", escape_cp(*.cp))]
    TrailingFenced { cp: CodePoint },

    #[error("consecutive fenced characters {}", escape_cps(.cps))]
    ConsecutiveFenced { cps: Vec<CodePoint> },

    #[error("character {} not allowed with {group} script", escape_cp(*.cp))]
    MixedScript { cp: CodePoint, group: &'static str },

    #[error("combining mark {} at label start", escape_cp(*.cp))]
    CombiningMarkFirst { cp: CodePoint },

    #[error("combining mark {} directly after emoji", escape_cp(*.cp))]
    CombiningMarkAfterEmoji { cp: CodePoint },

    #[error("combining mark {} not allowed in {group} script", escape_cp(*.cp))]
    CombiningMarkNotAllowed { group: &'static str, cp: CodePoint },

    #[error("more than {max} consecutive non-spacing marks")]
    NsmTooMany { max: usize },

    #[error("duplicate non-spacing mark {}", escape_cp(*.cp))]
    NsmDuplicate { cp: CodePoint },

    #[error("whole-script confusable: {group} label is confusable with {other}")]
    WholeConfusable {
        group: &'static str,
        other: &'static str,
    },

    #[error("{group} is a restricted script")]
    RestrictedScript { group: &'static str },
}

/// Integrity failure detected while building the compiled tables.
///
/// These can only be produced by inconsistent table data, never by user
/// input, which is why the facade treats them as startup bugs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("codepoint {} belongs to more than one character class", escape_cp(*.cp))]
    OverlappingClasses { cp: CodePoint },

    #[error("the label separator may not appear in the {set} set")]
    StopMisfiled { set: &'static str },

    #[error("mapping target {} is neither valid nor fenced", escape_cp(*.cp))]
    MappedTargetNotValid { cp: CodePoint },

    #[error("fenced codepoint {} is not valid", escape_cp(*.cp))]
    FencedNotValid { cp: CodePoint },

    #[error("non-spacing-mark limit is {found}, expected {expected}")]
    NsmLimit { expected: usize, found: usize },

    #[error("decomposition of {} has {len} codepoints", escape_cp(*.cp))]
    DecompositionLength { cp: CodePoint, len: usize },

    #[error("whole-confusable entry references unknown group `{name}`")]
    UnknownConfusableGroup { name: &'static str },

    #[error("empty emoji sequence in the emoji table")]
    EmptyEmojiSequence,
}
