//! Pipeline tokens and labels.
//!
//! Tokens are a plain sum type. `Mapped` and `Ignored` exist only between
//! segmentation and collapse; the stream handed to validation and rendering
//! contains `Valid`, `Emoji`, `Stop` and (for diagnostics) `Disallowed`.

use crate::CodePoint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Directly permitted codepoints.
    Valid { cps: Vec<CodePoint> },
    /// One source codepoint replaced by its mapping target(s).
    Mapped { cp: CodePoint, cps: Vec<CodePoint> },
    /// Silently dropped codepoint.
    Ignored { cp: CodePoint },
    /// Codepoint that invalidates its label. `offset` is the codepoint index
    /// in the original input.
    Disallowed { cp: CodePoint, offset: usize },
    /// The label separator U+002E.
    Stop,
    /// One emoji as parsed, with its two derived spellings.
    Emoji {
        /// Codepoints exactly as they appeared in the input.
        input: Vec<CodePoint>,
        /// Fully-qualified form.
        canonical: Vec<CodePoint>,
        /// Canonical form with FE0F removed; this is what `normalize` emits
        /// and what the label flattens to.
        no_fe0f: Vec<CodePoint>,
    },
}

impl Token {
    /// Codepoints this token contributes to its label.
    pub fn cps(&self) -> &[CodePoint] {
        match self {
            Token::Valid { cps } => cps,
            Token::Mapped { cps, .. } => cps,
            Token::Emoji { no_fe0f, .. } => no_fe0f,
            Token::Ignored { .. } | Token::Disallowed { .. } | Token::Stop => &[],
        }
    }

    pub fn is_emoji(&self) -> bool {
        matches!(self, Token::Emoji { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Token::Valid { .. } | Token::Mapped { .. })
    }

    pub fn is_disallowed(&self) -> bool {
        matches!(self, Token::Disallowed { .. })
    }
}

/// Output of [`crate::tokenize`]: the full token stream for a name, before
/// any per-label validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedName {
    pub input: String,
    pub tokens: Vec<Token>,
}

impl TokenizedName {
    /// Split the stream into labels at every `Stop`. Empty labels are
    /// retained; validation is what rejects them.
    pub fn labels(&self) -> Vec<Label> {
        split_labels(&self.tokens)
    }
}

/// A stop-free run of tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub tokens: Vec<Token>,
    /// Flattened codepoints: text tokens as-is, emoji contribute their
    /// FE0F-free form.
    pub cps: Vec<CodePoint>,
}

impl Label {
    /// Codepoints as they appeared in the input, to the extent the token
    /// stream retains them: emoji contribute their parsed spelling,
    /// disallowed codepoints are included, text tokens their codepoints.
    pub fn input_cps(&self) -> Vec<CodePoint> {
        let mut out = Vec::with_capacity(self.cps.len());
        for token in &self.tokens {
            match token {
                Token::Emoji { input, .. } => out.extend_from_slice(input),
                Token::Disallowed { cp, .. } | Token::Ignored { cp } => out.push(*cp),
                _ => out.extend_from_slice(token.cps()),
            }
        }
        out
    }
}

/// Classification a label receives once validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Ascii,
    Emoji,
    Script(&'static str),
}

impl LabelKind {
    pub fn name(&self) -> &'static str {
        match self {
            LabelKind::Ascii => "ASCII",
            LabelKind::Emoji => "Emoji",
            LabelKind::Script(name) => name,
        }
    }
}

pub(crate) fn split_labels(tokens: &[Token]) -> Vec<Label> {
    tokens
        .split(|t| matches!(t, Token::Stop))
        .map(|run| {
            let cps = run.iter().flat_map(|t| t.cps().iter().copied()).collect();
            Label {
                tokens: run.to_vec(),
                cps,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_retains_empty_labels() {
        let tokens = vec![
            Token::Valid { cps: vec![0x61] },
            Token::Stop,
            Token::Stop,
            Token::Valid { cps: vec![0x62] },
        ];
        let labels = split_labels(&tokens);
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0].cps, vec![0x61]);
        assert!(labels[1].cps.is_empty());
        assert_eq!(labels[2].cps, vec![0x62]);
    }

    #[test]
    fn label_flattens_emoji_without_fe0f() {
        let tokens = vec![
            Token::Valid { cps: vec![0x61] },
            Token::Emoji {
                input: vec![0x2764],
                canonical: vec![0x2764, 0xFE0F],
                no_fe0f: vec![0x2764],
            },
        ];
        let labels = split_labels(&tokens);
        assert_eq!(labels[0].cps, vec![0x61, 0x2764]);
    }

    #[test]
    fn empty_stream_is_one_empty_label() {
        let labels = split_labels(&[]);
        assert_eq!(labels.len(), 1);
        assert!(labels[0].cps.is_empty());
    }
}
