//! Emoji segmentation: a codepoint trie over every known emoji sequence.
//!
//! U+FE0F is the wrinkle. Canonical sequences carry it in fixed positions,
//! but user input may omit it (unqualified) or keep it. Instead of branching
//! at match time, insertion duplicates the path at every FE0F: one branch
//! consumes the selector, one skips it. Lookup is then a plain longest-match
//! walk for qualified and unqualified spellings alike.

use crate::CodePoint;
use crate::error::TableError;
use crate::tables::emoji_data;
use crate::utils::{CP_FE0F, filter_fe0f};
use std::collections::HashMap;

/// One emoji in its two derived spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiSequence {
    /// Fully-qualified form, FE0F present where mandated.
    pub canonical: Vec<CodePoint>,
    /// Canonical form with every FE0F removed.
    pub no_fe0f: Vec<CodePoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiMatch {
    /// Index into [`EmojiIndex::sequences`].
    pub index: usize,
    /// Codepoints consumed from the input.
    pub consumed: usize,
}

#[derive(Debug, Default)]
struct Node {
    children: HashMap<CodePoint, usize>,
    terminal: Option<usize>,
}

/// The sequence inventory plus its search trie.
#[derive(Debug)]
pub struct EmojiIndex {
    sequences: Vec<EmojiSequence>,
    nodes: Vec<Node>,
}

impl EmojiIndex {
    pub fn load() -> Result<Self, TableError> {
        let mut index = Self {
            sequences: Vec::new(),
            nodes: vec![Node::default()],
        };

        for &(lo, hi) in emoji_data::PRESENTATION_RANGES {
            for cp in lo..=hi {
                index.insert(vec![cp])?;
            }
        }
        for &cp in emoji_data::FE0F_SINGLES {
            index.insert(vec![cp, CP_FE0F])?;
        }
        let (tone_lo, tone_hi) = emoji_data::MODIFIERS;
        for &base in emoji_data::MODIFIER_BASES {
            for tone in tone_lo..=tone_hi {
                index.insert(vec![base, tone])?;
            }
        }
        for seq in emoji_data::ZWJ_SEQUENCES {
            index.insert(seq.to_vec())?;
        }
        for &(a, b) in emoji_data::FLAG_PAIRS {
            index.insert(vec![a, b])?;
        }
        for &base in emoji_data::KEYCAP_BASES {
            index.insert(vec![base, CP_FE0F, emoji_data::CP_KEYCAP])?;
        }

        Ok(index)
    }

    pub fn sequences(&self) -> &[EmojiSequence] {
        &self.sequences
    }

    pub fn sequence(&self, index: usize) -> &EmojiSequence {
        &self.sequences[index]
    }

    fn insert(&mut self, canonical: Vec<CodePoint>) -> Result<(), TableError> {
        if canonical.is_empty() {
            return Err(TableError::EmptyEmojiSequence);
        }
        let seq_index = self.sequences.len();

        // Frontier of trie positions reachable so far. An FE0F forks every
        // position into consume/skip; any other codepoint advances all of
        // them.
        let mut frontier: Vec<usize> = vec![0];
        for &cp in &canonical {
            if cp == CP_FE0F {
                let mut expanded = frontier.clone();
                for &node in &frontier {
                    let child = self.child(node, CP_FE0F);
                    if !expanded.contains(&child) {
                        expanded.push(child);
                    }
                }
                frontier = expanded;
            } else {
                let mut next = Vec::with_capacity(frontier.len());
                for &node in &frontier {
                    let child = self.child(node, cp);
                    if !next.contains(&child) {
                        next.push(child);
                    }
                }
                frontier = next;
            }
        }
        for node in frontier {
            // First registration wins: expanded spellings of two sequences
            // never collide because canonical forms are distinct after FE0F
            // removal.
            self.nodes[node].terminal.get_or_insert(seq_index);
        }

        let no_fe0f = filter_fe0f(&canonical);
        self.sequences.push(EmojiSequence { canonical, no_fe0f });
        Ok(())
    }

    fn child(&mut self, node: usize, cp: CodePoint) -> usize {
        if let Some(&child) = self.nodes[node].children.get(&cp) {
            return child;
        }
        let child = self.nodes.len();
        self.nodes.push(Node::default());
        self.nodes[node].children.insert(cp, child);
        child
    }

    /// Longest emoji match starting at `cps[start]`.
    pub fn find(&self, cps: &[CodePoint], start: usize) -> Option<EmojiMatch> {
        let mut node = 0;
        let mut best = None;
        for (offset, &cp) in cps[start..].iter().enumerate() {
            match self.nodes[node].children.get(&cp) {
                Some(&child) => node = child,
                None => break,
            }
            if let Some(index) = self.nodes[node].terminal {
                best = Some(EmojiMatch {
                    index,
                    consumed: offset + 1,
                });
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> EmojiIndex {
        EmojiIndex::load().expect("emoji tables load")
    }

    fn find_seq(index: &EmojiIndex, cps: &[CodePoint]) -> Option<(Vec<CodePoint>, usize)> {
        index
            .find(cps, 0)
            .map(|m| (index.sequence(m.index).canonical.clone(), m.consumed))
    }

    #[test]
    fn single_pictograph_matches() {
        let idx = index();
        let m = idx.find(&[0x1F600, 0x61], 0).expect("match");
        assert_eq!(m.consumed, 1);
        assert_eq!(idx.sequence(m.index).no_fe0f, vec![0x1F600]);
    }

    #[test]
    fn qualified_and_unqualified_spellings_match() {
        let idx = index();
        // ❤ and ❤️ both resolve to the FE0F-bearing canonical form
        let (canon_bare, n_bare) = find_seq(&idx, &[0x2764]).expect("bare");
        let (canon_full, n_full) = find_seq(&idx, &[0x2764, 0xFE0F]).expect("qualified");
        assert_eq!(canon_bare, vec![0x2764, 0xFE0F]);
        assert_eq!(canon_full, canon_bare);
        assert_eq!(n_bare, 1);
        assert_eq!(n_full, 2);
    }

    #[test]
    fn longest_match_wins() {
        let idx = index();
        // 👍 vs 👍🏻: the modifier sequence must be preferred
        let m = idx.find(&[0x1F44D, 0x1F3FB], 0).expect("match");
        assert_eq!(m.consumed, 2);
        assert_eq!(idx.sequence(m.index).no_fe0f, vec![0x1F44D, 0x1F3FB]);
    }

    #[test]
    fn zwj_sequence_with_interior_fe0f() {
        let idx = index();
        let full = [0x26F9, 0xFE0F, 0x200D, 0x2640, 0xFE0F];
        let bare = [0x26F9, 0x200D, 0x2640];
        let mixed = [0x26F9, 0xFE0F, 0x200D, 0x2640];
        for cps in [&full[..], &bare[..], &mixed[..]] {
            let (canon, consumed) = find_seq(&idx, cps).expect("match");
            assert_eq!(canon, full.to_vec());
            assert_eq!(consumed, cps.len());
        }
    }

    #[test]
    fn keycap_spellings() {
        let idx = index();
        let (canon, n) = find_seq(&idx, &[0x31, 0xFE0F, 0x20E3]).expect("qualified");
        assert_eq!(canon, vec![0x31, 0xFE0F, 0x20E3]);
        assert_eq!(n, 3);
        let (canon, n) = find_seq(&idx, &[0x31, 0x20E3]).expect("unqualified");
        assert_eq!(canon, vec![0x31, 0xFE0F, 0x20E3]);
        assert_eq!(n, 2);
        // a bare digit is not an emoji
        assert_eq!(idx.find(&[0x31, 0x61], 0), None);
    }

    #[test]
    fn flags_match_pairwise() {
        let idx = index();
        let m = idx.find(&[0x1F1FA, 0x1F1F8], 0).expect("US flag");
        assert_eq!(m.consumed, 2);
        // a lone regional indicator is not an emoji
        assert_eq!(idx.find(&[0x1F1FA, 0x61], 0), None);
    }

    #[test]
    fn no_match_on_plain_text() {
        let idx = index();
        assert_eq!(idx.find(&[0x61, 0x62], 0), None);
    }
}
