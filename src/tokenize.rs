//! The tokenization pipeline: emoji-first segmentation, per-codepoint
//! classification, collapse, selective NFC.
//!
//! The stream produced here contains only `Valid`, `Emoji`, `Stop` and
//! `Disallowed` tokens; `Mapped` and `Ignored` are consumed by the collapse
//! step. Label splitting happens afterwards on the finished stream.

use crate::CodePoint;
use crate::tables::{CharClass, Tables};
use crate::tokens::Token;
use crate::utils::str_to_cps;

pub(crate) fn tokenize_input(tables: &Tables, input: &str) -> Vec<Token> {
    let cps = str_to_cps(input);
    let mut tokens = Vec::with_capacity(cps.len());

    let mut i = 0;
    while i < cps.len() {
        // Emoji win over single-codepoint classification; the trie gives the
        // longest sequence starting here.
        if let Some(m) = tables.emoji.find(&cps, i) {
            let seq = tables.emoji.sequence(m.index);
            tokens.push(Token::Emoji {
                input: cps[i..i + m.consumed].to_vec(),
                canonical: seq.canonical.clone(),
                no_fe0f: seq.no_fe0f.clone(),
            });
            i += m.consumed;
            continue;
        }
        let cp = cps[i];
        match tables.classify(cp) {
            CharClass::Stop => tokens.push(Token::Stop),
            CharClass::Valid => tokens.push(Token::Valid { cps: vec![cp] }),
            CharClass::Mapped(seq) => tokens.push(Token::Mapped {
                cp,
                cps: seq.to_vec(),
            }),
            CharClass::Ignored => tokens.push(Token::Ignored { cp }),
            CharClass::Disallowed => tokens.push(Token::Disallowed { cp, offset: i }),
        }
        i += 1;
    }

    collapse(&mut tokens);
    if apply_nfc(tables, &mut tokens) {
        // Normalization never introduces new boundaries, so this is a no-op
        // in practice; it keeps the collapse invariant explicit.
        collapse(&mut tokens);
    }
    tokens
}

/// Merge each maximal run of text tokens into one `Valid` token, dropping
/// `Ignored` tokens on the way. Emoji, stops and disallowed tokens are
/// boundaries.
fn collapse(tokens: &mut Vec<Token>) {
    let mut out = Vec::with_capacity(tokens.len());
    let mut run: Vec<CodePoint> = Vec::new();
    for token in tokens.drain(..) {
        match token {
            Token::Valid { cps } | Token::Mapped { cps, .. } => run.extend(cps),
            Token::Ignored { .. } => {}
            boundary => {
                if !run.is_empty() {
                    out.push(Token::Valid {
                        cps: core::mem::take(&mut run),
                    });
                }
                out.push(boundary);
            }
        }
    }
    if !run.is_empty() {
        out.push(Token::Valid { cps: run });
    }
    *tokens = out;
}

/// Normalize each collapsed text token that the quick-check flags. Returns
/// whether anything changed.
fn apply_nfc(tables: &Tables, tokens: &mut [Token]) -> bool {
    let mut changed = false;
    for token in tokens.iter_mut() {
        if let Token::Valid { cps } = token
            && tables.nfc.needs_apply(cps)
        {
            let normalized = tables.nfc.normalize(cps);
            if *cps != normalized {
                *cps = normalized;
                changed = true;
            }
        }
    }
    changed
}
