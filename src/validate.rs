//! Per-label validation.
//!
//! Checks run in a fixed order and fail fast: emptiness, disallowed tokens,
//! the underscore rule, the ASCII and emoji-only shortcuts, fenced
//! placement, script-group resolution (with restricted scripts rejected),
//! combining-mark placement, the non-spacing-mark run rules, and finally
//! whole-script confusables. The first failure names the error for the
//! whole label.

use crate::CodePoint;
use crate::error::ProcessError;
use crate::tables::{ScriptGroup, Tables};
use crate::tokens::{Label, LabelKind, Token};
use crate::utils::{CP_HYPHEN, CP_UNDERSCORE};
use std::collections::BTreeSet;

pub(crate) fn validate_label(
    tables: &Tables,
    label: &Label,
    label_index: usize,
) -> Result<LabelKind, ProcessError> {
    // After collapse a label holds only Valid, Emoji and Disallowed tokens;
    // no tokens means nothing but ignored codepoints ever was here.
    if label.tokens.is_empty() {
        return Err(ProcessError::EmptyLabel { index: label_index });
    }

    for token in &label.tokens {
        if let Token::Disallowed { cp, offset } = token {
            return Err(ProcessError::Disallowed {
                cp: *cp,
                offset: *offset,
            });
        }
    }

    check_underscore(&label.cps)?;

    let all_emoji = label.tokens.iter().all(Token::is_emoji);
    if all_emoji {
        return Ok(LabelKind::Emoji);
    }

    let all_text = label.tokens.iter().all(Token::is_text);
    if all_text && label.cps.iter().all(|&cp| cp < 0x80) {
        check_label_extension(&label.cps)?;
        return Ok(LabelKind::Ascii);
    }

    check_fenced(tables, &label.cps)?;

    let text_cps: Vec<CodePoint> = label
        .tokens
        .iter()
        .filter(|t| t.is_text())
        .flat_map(|t| t.cps().iter().copied())
        .collect();

    let group = match resolve_group(tables, &text_cps)? {
        Some(group) => group,
        // Only combining marks left: the placement check below must fail.
        None => return Err(cm_position_error(tables, label)),
    };

    // Excluded scripts stay in the tables so tokenize can name them, but
    // no label may resolve to one.
    if group.restricted() {
        return Err(ProcessError::RestrictedScript {
            group: group.name(),
        });
    }

    check_combining_marks(tables, label, group)?;

    if group.check_nsm() {
        check_nsm_runs(tables, &text_cps)?;
    }

    check_whole_confusables(tables, group, &text_cps)?;

    Ok(LabelKind::Script(group.name()))
}

/// Underscores may only form a leading run.
fn check_underscore(cps: &[CodePoint]) -> Result<(), ProcessError> {
    let leading = cps
        .iter()
        .take_while(|&&cp| cp == CP_UNDERSCORE)
        .count();
    for (offset, &cp) in cps.iter().enumerate().skip(leading) {
        if cp == CP_UNDERSCORE {
            return Err(ProcessError::UnderscoreInMiddle { offset });
        }
    }
    Ok(())
}

/// Hyphens in both of the third and fourth positions are reserved, except
/// for the literal `xn` prefix which is kept verbatim (Punycode is passed
/// through, never decoded).
fn check_label_extension(cps: &[CodePoint]) -> Result<(), ProcessError> {
    if cps.len() >= 4
        && cps[2] == CP_HYPHEN
        && cps[3] == CP_HYPHEN
        && !(cps[0] == 0x78 && cps[1] == 0x6E)
    {
        return Err(ProcessError::LabelExtension {
            cps: cps[..4].to_vec(),
        });
    }
    Ok(())
}

/// Placement rules for fenced punctuation: none leading, no lone trailing
/// one, no interior run of two or more. A run of two or more that reaches
/// the end of the label is tolerated.
fn check_fenced(tables: &Tables, cps: &[CodePoint]) -> Result<(), ProcessError> {
    let Some(&first) = cps.first() else {
        return Ok(());
    };
    if tables.is_fenced(first) {
        return Err(ProcessError::LeadingFenced { cp: first });
    }
    let last = cps.len() - 1;
    let mut i = 1;
    while i <= last {
        if !tables.is_fenced(cps[i]) {
            i += 1;
            continue;
        }
        let mut j = i;
        while j < last && tables.is_fenced(cps[j + 1]) {
            j += 1;
        }
        if j == i {
            if i == last {
                return Err(ProcessError::TrailingFenced { cp: cps[i] });
            }
        } else if j < last {
            return Err(ProcessError::ConsecutiveFenced {
                cps: cps[i..=j].to_vec(),
            });
        }
        // a run ending at the last position falls through: tolerated
        i = j + 1;
    }
    Ok(())
}

/// Progressively intersect the groups containing each non-mark text
/// codepoint. Emoji never constrain the choice and combining marks are
/// judged separately, afterwards.
fn resolve_group<'a>(
    tables: &'a Tables,
    text_cps: &[CodePoint],
) -> Result<Option<&'a ScriptGroup>, ProcessError> {
    let mut candidates: Vec<&ScriptGroup> = Vec::new();
    let mut constrained = false;
    for &cp in text_cps {
        if tables.is_cm(cp) {
            continue;
        }
        if !constrained {
            candidates = tables.groups().iter().filter(|g| g.contains(cp)).collect();
            constrained = true;
            continue;
        }
        if candidates.iter().all(|g| !g.contains(cp)) {
            return Err(ProcessError::MixedScript {
                cp,
                group: candidates
                    .first()
                    .map(|g| g.name())
                    .unwrap_or("unresolved"),
            });
        }
        candidates.retain(|g| g.contains(cp));
    }
    if !constrained {
        return Ok(None);
    }
    match candidates.first().copied() {
        Some(group) => Ok(Some(group)),
        // A valid non-mark codepoint always belongs to some group; an empty
        // first candidate set would mean the tables and the valid set
        // disagree, which `Tables::load` rules out.
        None => Err(ProcessError::MixedScript {
            cp: *text_cps.first().unwrap_or(&0),
            group: "unresolved",
        }),
    }
}

/// The error for a label whose text is nothing but combining marks: the
/// first mark is either leading or directly behind an emoji.
fn cm_position_error(tables: &Tables, label: &Label) -> ProcessError {
    for (i, token) in label.tokens.iter().enumerate() {
        if !token.is_text() {
            continue;
        }
        let Some(&cp) = token.cps().first() else {
            continue;
        };
        debug_assert!(tables.is_cm(cp));
        if i == 0 {
            return ProcessError::CombiningMarkFirst { cp };
        }
        return ProcessError::CombiningMarkAfterEmoji { cp };
    }
    // Unreachable for the labels this is called with.
    ProcessError::EmptyLabel { index: 0 }
}

fn check_combining_marks(
    tables: &Tables,
    label: &Label,
    group: &ScriptGroup,
) -> Result<(), ProcessError> {
    let mut position = 0usize;
    for (i, token) in label.tokens.iter().enumerate() {
        if token.is_emoji() {
            position += token.cps().len();
            continue;
        }
        for (k, &cp) in token.cps().iter().enumerate() {
            if tables.is_cm(cp) {
                if position == 0 {
                    return Err(ProcessError::CombiningMarkFirst { cp });
                }
                if k == 0 && i > 0 && label.tokens[i - 1].is_emoji() {
                    return Err(ProcessError::CombiningMarkAfterEmoji { cp });
                }
                if !group.allows_cm(cp) {
                    return Err(ProcessError::CombiningMarkNotAllowed {
                        group: group.name(),
                        cp,
                    });
                }
            }
            position += 1;
        }
    }
    Ok(())
}

/// Non-spacing-mark runs: at most `nsm_max` long, no repeated mark inside a
/// run.
fn check_nsm_runs(tables: &Tables, text_cps: &[CodePoint]) -> Result<(), ProcessError> {
    let max = tables.nsm_max();
    let mut i = 0;
    while i < text_cps.len() {
        if !tables.is_nsm(text_cps[i]) {
            i += 1;
            continue;
        }
        let start = i;
        let mut seen: Vec<CodePoint> = Vec::with_capacity(max);
        while i < text_cps.len() && tables.is_nsm(text_cps[i]) {
            let cp = text_cps[i];
            if seen.contains(&cp) {
                return Err(ProcessError::NsmDuplicate { cp });
            }
            seen.push(cp);
            i += 1;
        }
        if i - start > max {
            return Err(ProcessError::NsmTooMany { max });
        }
    }
    Ok(())
}

/// Whole-script confusables: if every codepoint that sits in the confusable
/// index agrees on some other group, and that group also covers all the
/// remaining text codepoints, the label as a whole is confusable.
fn check_whole_confusables(
    tables: &Tables,
    group: &ScriptGroup,
    text_cps: &[CodePoint],
) -> Result<(), ProcessError> {
    let unique: BTreeSet<CodePoint> = text_cps
        .iter()
        .copied()
        .filter(|&cp| !tables.is_cm(cp))
        .collect();

    let mut candidates: Option<Vec<&'static str>> = None;
    let mut shared: Vec<CodePoint> = Vec::new();
    for &cp in &unique {
        match tables.confusable_groups(cp) {
            Some(names) => match candidates.as_mut() {
                Some(current) => current.retain(|name| names.contains(name)),
                None => candidates = Some(names.to_vec()),
            },
            None => shared.push(cp),
        }
    }

    let Some(candidates) = candidates else {
        return Ok(());
    };
    for name in candidates {
        if name == group.name() {
            continue;
        }
        let Some(other) = tables.group_by_name(name) else {
            continue;
        };
        if shared.iter().all(|&cp| other.contains(cp)) {
            return Err(ProcessError::WholeConfusable {
                group: group.name(),
                other: name,
            });
        }
    }
    Ok(())
}
