//! The compiled ENSIP-15 table set.
//!
//! Everything the pipeline consults at runtime is built here, once, from the
//! constants in the `data` modules: the character classifier, the script
//! groups, the whole-confusable index, the emoji trie and the NFC tables.
//! `Tables::load` also cross-checks the integrity invariants the data must
//! satisfy (class disjointness, mapping targets, the stop codepoint standing
//! apart), so that a broken table fails at startup instead of mid-lookup.
//!
//! The loaded set is immutable and `Send + Sync`; one instance can serve any
//! number of concurrent callers.

pub mod codepoints;
pub(crate) mod data;
pub(crate) mod emoji_data;
pub(crate) mod nfc_data;

use crate::CodePoint;
use crate::emoji::EmojiIndex;
use crate::error::TableError;
use crate::nfc::NfcData;
use crate::utils::CP_STOP;
use codepoints::CodepointSet;
use smallvec::{SmallVec, smallvec};
use std::collections::HashMap;

/// Replacement sequence for a mapped codepoint. Nearly always one or two
/// codepoints, so the payload stays inline.
pub type MappedSeq = SmallVec<[CodePoint; 2]>;

/// The five-way character classification. Exactly one class matches any
/// codepoint; `Tables::load` verifies the underlying sets are disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharClass {
    /// The label separator U+002E.
    Stop,
    /// Permitted as-is.
    Valid,
    /// Replaced by the attached sequence.
    Mapped(MappedSeq),
    /// Silently dropped.
    Ignored,
    /// Everything else, surrogates and out-of-range values included.
    Disallowed,
}

/// One script group, compiled.
#[derive(Debug)]
pub struct ScriptGroup {
    name: &'static str,
    primary: CodepointSet,
    secondary: CodepointSet,
    cm: CodepointSet,
    cm_absent: bool,
    check_nsm: bool,
    restricted: bool,
}

impl ScriptGroup {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Membership for script resolution: primary or secondary.
    #[inline]
    pub fn contains(&self, cp: CodePoint) -> bool {
        self.primary.contains(cp) || self.secondary.contains(cp)
    }

    /// May `cp` (a combining mark) appear inside this group's labels?
    #[inline]
    pub fn allows_cm(&self, cp: CodePoint) -> bool {
        !self.cm_absent && self.cm.contains(cp)
    }

    pub fn cm_absent(&self) -> bool {
        self.cm_absent
    }

    pub fn check_nsm(&self) -> bool {
        self.check_nsm
    }

    pub fn restricted(&self) -> bool {
        self.restricted
    }
}

#[derive(Debug)]
pub struct Tables {
    groups: Vec<ScriptGroup>,
    valid: CodepointSet,
    ignored: CodepointSet,
    fenced: CodepointSet,
    cm: CodepointSet,
    nsm: CodepointSet,
    nsm_max: usize,
    wholes: HashMap<CodePoint, &'static [&'static str]>,
    pub(crate) emoji: EmojiIndex,
    pub(crate) nfc: NfcData,
}

impl Tables {
    /// Build the full table set and verify its integrity invariants.
    pub fn load() -> Result<Self, TableError> {
        let groups: Vec<ScriptGroup> = data::GROUPS
            .iter()
            .map(|g| {
                let mut secondary = CodepointSet::builder();
                secondary.add_ranges(g.secondary);
                secondary.add_ranges(data::COMMON);
                ScriptGroup {
                    name: g.name,
                    primary: CodepointSet::from_ranges(g.primary),
                    secondary: secondary.build(),
                    cm: CodepointSet::from_ranges(g.cm),
                    cm_absent: g.cm_absent,
                    check_nsm: g.check_nsm,
                    restricted: g.restricted,
                }
            })
            .collect();

        let cm = CodepointSet::from_ranges(data::COMBINING_MARKS);
        let nsm = CodepointSet::from_ranges(data::NSM);

        let mut valid = CodepointSet::builder();
        for group in &groups {
            valid.add_set(&group.primary);
            valid.add_set(&group.secondary);
            valid.add_set(&group.cm);
        }
        valid.add_set(&cm);
        let valid = valid.build();

        let ignored = CodepointSet::from_ranges(data::IGNORED);
        let mut fenced = CodepointSet::builder();
        fenced.add_singles(data::FENCED);
        let fenced = fenced.build();

        let mut wholes = HashMap::with_capacity(data::WHOLE_CONFUSABLES.len());
        for &(cp, groups) in data::WHOLE_CONFUSABLES {
            wholes.insert(cp, groups);
        }

        let tables = Self {
            groups,
            valid,
            ignored,
            fenced,
            cm,
            nsm,
            nsm_max: data::NSM_MAX,
            wholes,
            emoji: EmojiIndex::load()?,
            nfc: NfcData::load()?,
        };
        tables.verify()?;
        Ok(tables)
    }

    fn verify(&self) -> Result<(), TableError> {
        // The stop codepoint belongs to no other class.
        if self.valid.contains(CP_STOP) {
            return Err(TableError::StopMisfiled { set: "valid" });
        }
        if self.mapped(CP_STOP).is_some() {
            return Err(TableError::StopMisfiled { set: "mapped" });
        }
        if self.ignored.contains(CP_STOP) {
            return Err(TableError::StopMisfiled { set: "ignored" });
        }

        // valid, mapped and ignored are pairwise disjoint.
        for cp in self.ignored.iter() {
            if self.valid.contains(cp) || self.mapped(cp).is_some() {
                return Err(TableError::OverlappingClasses { cp });
            }
        }
        let range_sources = data::MAPPED_RANGES
            .iter()
            .flat_map(|r| r.lo..=r.hi)
            .chain(data::MAPPED.keys().copied());
        for cp in range_sources {
            if self.valid.contains(cp) {
                return Err(TableError::OverlappingClasses { cp });
            }
        }

        // Every mapping target is valid (fenced targets are valid too, but
        // the invariant is stated over both sets).
        let range_targets = data::MAPPED_RANGES
            .iter()
            .flat_map(|r| r.to_lo..=r.to_lo + (r.hi - r.lo));
        let single_targets = data::MAPPED.values().flat_map(|seq| seq.iter().copied());
        for cp in range_targets.chain(single_targets) {
            if !self.valid.contains(cp) && !self.fenced.contains(cp) {
                return Err(TableError::MappedTargetNotValid { cp });
            }
        }

        for cp in self.fenced.iter() {
            if !self.valid.contains(cp) {
                return Err(TableError::FencedNotValid { cp });
            }
        }

        if self.nsm_max != 4 {
            return Err(TableError::NsmLimit {
                expected: 4,
                found: self.nsm_max,
            });
        }

        for &names in self.wholes.values() {
            for &name in names {
                if self.group_by_name(name).is_none() {
                    return Err(TableError::UnknownConfusableGroup { name });
                }
            }
        }

        Ok(())
    }

    /// Classify one codepoint. Precedence: stop, valid, mapped, ignored,
    /// disallowed; surrogates and values beyond Unicode are disallowed.
    pub fn classify(&self, cp: CodePoint) -> CharClass {
        if cp == CP_STOP {
            return CharClass::Stop;
        }
        if cp > 0x10FFFF || (0xD800..=0xDFFF).contains(&cp) {
            return CharClass::Disallowed;
        }
        if self.valid.contains(cp) {
            return CharClass::Valid;
        }
        if let Some(seq) = self.mapped(cp) {
            return CharClass::Mapped(seq);
        }
        if self.ignored.contains(cp) {
            return CharClass::Ignored;
        }
        CharClass::Disallowed
    }

    /// Replacement sequence for `cp`, if it is a mapped codepoint.
    pub fn mapped(&self, cp: CodePoint) -> Option<MappedSeq> {
        if let Some(&seq) = data::MAPPED.get(&cp) {
            return Some(MappedSeq::from_slice(seq));
        }
        for r in data::MAPPED_RANGES {
            if (r.lo..=r.hi).contains(&cp) {
                return Some(smallvec![r.to_lo + (cp - r.lo)]);
            }
        }
        None
    }

    #[inline]
    pub fn is_valid(&self, cp: CodePoint) -> bool {
        self.valid.contains(cp)
    }

    #[inline]
    pub fn is_ignored(&self, cp: CodePoint) -> bool {
        self.ignored.contains(cp)
    }

    #[inline]
    pub fn is_fenced(&self, cp: CodePoint) -> bool {
        self.fenced.contains(cp)
    }

    #[inline]
    pub fn is_cm(&self, cp: CodePoint) -> bool {
        self.cm.contains(cp)
    }

    #[inline]
    pub fn is_nsm(&self, cp: CodePoint) -> bool {
        self.nsm.contains(cp)
    }

    pub fn nsm_max(&self) -> usize {
        self.nsm_max
    }

    /// Script groups in resolution order.
    pub fn groups(&self) -> &[ScriptGroup] {
        &self.groups
    }

    pub fn group_by_name(&self, name: &str) -> Option<&ScriptGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Whole-confusable membership of `cp`, if any.
    pub fn confusable_groups(&self, cp: CodePoint) -> Option<&'static [&'static str]> {
        self.wholes.get(&cp).copied()
    }
}
