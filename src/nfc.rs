//! Canonical normalization (NFC) over codepoint sequences.
//!
//! The engine follows the standard shape: canonical decomposition (recursive,
//! with algorithmic Hangul), canonical reordering of non-starter runs, then
//! left-to-right recomposition honoring exclusions and blocking. It is total:
//! any sequence of scalar values normalizes without error.
//!
//! A quick-check set gates the whole pass. Text that contains no codepoint
//! which could decompose, reorder or compose is returned untouched, which
//! spares plain ASCII and simple scripts the entire engine.

use crate::CodePoint;
use crate::error::TableError;
use crate::tables::codepoints::CodepointSet;
use crate::tables::nfc_data;
use std::collections::HashMap;

// Hangul syllable arithmetic (Unicode 3.12).
const S_BASE: CodePoint = 0xAC00;
const L_BASE: CodePoint = 0x1100;
const V_BASE: CodePoint = 0x1161;
const T_BASE: CodePoint = 0x11A7;
const L_COUNT: CodePoint = 19;
const V_COUNT: CodePoint = 21;
const T_COUNT: CodePoint = 28;
const N_COUNT: CodePoint = V_COUNT * T_COUNT;
const S_COUNT: CodePoint = L_COUNT * N_COUNT;

/// Compiled normalization tables.
#[derive(Debug)]
pub struct NfcData {
    decomp: HashMap<CodePoint, (CodePoint, Option<CodePoint>)>,
    compose: HashMap<(CodePoint, CodePoint), CodePoint>,
    ranks: Vec<((CodePoint, CodePoint), u8)>,
    qc: CodepointSet,
}

impl NfcData {
    pub fn load() -> Result<Self, TableError> {
        let mut decomp = HashMap::with_capacity(nfc_data::DECOMP.len());
        for &(cp, targets) in nfc_data::DECOMP {
            match *targets {
                [a] => decomp.insert(cp, (a, None)),
                [a, b] => decomp.insert(cp, (a, Some(b))),
                _ => {
                    return Err(TableError::DecompositionLength {
                        cp,
                        len: targets.len(),
                    });
                }
            };
        }

        let exclusions = CodepointSet::from_ranges(nfc_data::EXCLUSIONS);
        let mut compose = HashMap::new();
        for (&cp, &(a, b)) in &decomp {
            if let Some(b) = b
                && !exclusions.contains(cp)
            {
                compose.insert((a, b), cp);
            }
        }

        let mut ranks: Vec<_> = nfc_data::RANKS.to_vec();
        ranks.sort_unstable_by_key(|&((lo, _), _)| lo);

        // Anything that can decompose, reorder or take part in a composition
        // must trigger the pass; everything else is NFC-inert.
        let mut qc = CodepointSet::builder();
        for &(cp, _) in nfc_data::DECOMP {
            qc.add(cp);
        }
        for &((lo, hi), _) in nfc_data::RANKS {
            qc.add_range(lo, hi);
        }
        for &(_, second) in compose.keys() {
            qc.add(second);
        }
        qc.add_range(V_BASE, V_BASE + V_COUNT - 1);
        qc.add_range(T_BASE + 1, T_BASE + T_COUNT - 1);
        let qc = qc.build();

        Ok(Self {
            decomp,
            compose,
            ranks,
            qc,
        })
    }

    /// Canonical combining class; 0 for starters.
    #[inline]
    pub fn rank(&self, cp: CodePoint) -> u8 {
        self.ranks
            .binary_search_by(|&((lo, hi), _)| {
                if cp < lo {
                    core::cmp::Ordering::Greater
                } else if cp > hi {
                    core::cmp::Ordering::Less
                } else {
                    core::cmp::Ordering::Equal
                }
            })
            .map(|i| self.ranks[i].1)
            .unwrap_or(0)
    }

    /// Cheap pre-pass: does the sequence contain anything NFC could change?
    #[inline]
    pub fn needs_apply(&self, cps: &[CodePoint]) -> bool {
        cps.iter().any(|&cp| self.qc.contains(cp))
    }

    /// Normalize to NFC. Returns the input unchanged when the quick check
    /// says the pass cannot alter it.
    pub fn normalize(&self, cps: &[CodePoint]) -> Vec<CodePoint> {
        if !self.needs_apply(cps) {
            return cps.to_vec();
        }
        let mut decomposed = Vec::with_capacity(cps.len() + 4);
        for &cp in cps {
            self.decompose_cp(cp, &mut decomposed);
        }
        self.reorder(&mut decomposed);
        self.compose(&decomposed)
    }

    fn decompose_cp(&self, cp: CodePoint, out: &mut Vec<CodePoint>) {
        if (S_BASE..S_BASE + S_COUNT).contains(&cp) {
            let s_index = cp - S_BASE;
            out.push(L_BASE + s_index / N_COUNT);
            out.push(V_BASE + (s_index % N_COUNT) / T_COUNT);
            let t_index = s_index % T_COUNT;
            if t_index > 0 {
                out.push(T_BASE + t_index);
            }
            return;
        }
        match self.decomp.get(&cp) {
            Some(&(a, b)) => {
                self.decompose_cp(a, out);
                if let Some(b) = b {
                    self.decompose_cp(b, out);
                }
            }
            None => out.push(cp),
        }
    }

    /// Stable-sort each maximal run of non-starters by combining class.
    fn reorder(&self, cps: &mut [CodePoint]) {
        let mut i = 0;
        while i < cps.len() {
            if self.rank(cps[i]) == 0 {
                i += 1;
                continue;
            }
            let start = i;
            while i < cps.len() && self.rank(cps[i]) != 0 {
                i += 1;
            }
            cps[start..i].sort_by_key(|&cp| self.rank(cp));
        }
    }

    fn compose(&self, cps: &[CodePoint]) -> Vec<CodePoint> {
        let mut out: Vec<CodePoint> = Vec::with_capacity(cps.len());
        let mut last_starter: Option<usize> = None;
        for &cp in cps {
            let cc = self.rank(cp);
            if let Some(si) = last_starter {
                // Blocked iff something sits between the starter and this
                // codepoint with a class not lower than ours.
                let blocked = out.len() > si + 1 && {
                    let prev = self.rank(out[out.len() - 1]);
                    prev >= cc
                };
                if !blocked
                    && let Some(composed) = self.compose_pair(out[si], cp)
                {
                    out[si] = composed;
                    continue;
                }
            }
            if cc == 0 {
                last_starter = Some(out.len());
            }
            out.push(cp);
        }
        out
    }

    fn compose_pair(&self, a: CodePoint, b: CodePoint) -> Option<CodePoint> {
        // Hangul L+V and LV+T.
        if (L_BASE..L_BASE + L_COUNT).contains(&a) && (V_BASE..V_BASE + V_COUNT).contains(&b) {
            return Some(S_BASE + ((a - L_BASE) * V_COUNT + (b - V_BASE)) * T_COUNT);
        }
        if (S_BASE..S_BASE + S_COUNT).contains(&a)
            && (a - S_BASE) % T_COUNT == 0
            && (T_BASE + 1..T_BASE + T_COUNT).contains(&b)
        {
            return Some(a + (b - T_BASE));
        }
        self.compose.get(&(a, b)).copied()
    }
}
