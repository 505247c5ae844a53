// src/tables/data.rs
// Compiled ENSIP-15 character tables: script groups, mapping rules and the
// small punctuation classes. Ranges are inclusive; singletons are written as
// one-codepoint ranges. `Tables::load` merges, indexes and cross-checks
// everything at startup.

use crate::CodePoint;
use phf::{Map, phf_map};

/// One script group. Order in `GROUPS` is the resolution order: the first
/// surviving group names the label.
pub struct GroupData {
    pub name: &'static str,
    pub primary: &'static [(CodePoint, CodePoint)],
    pub secondary: &'static [(CodePoint, CodePoint)],
    /// Combining marks usable inside this group. Marks outside the list are
    /// rejected even when globally valid.
    pub cm: &'static [(CodePoint, CodePoint)],
    /// No combining mark may appear at all.
    pub cm_absent: bool,
    /// Apply the non-spacing-mark run rules (length and uniqueness).
    pub check_nsm: bool,
    /// Excluded script: codepoints stay valid for diagnostics, but no label
    /// may resolve to this group.
    pub restricted: bool,
}

pub static GROUPS: &[GroupData] = &[
    GroupData {
        name: "Latin",
        primary: &[
            (0x61, 0x7A),
            (0xDF, 0xF6),
            (0xF8, 0xFF),
            // Latin Extended-A, lower case. Deprecated forms (ĳ, ŀ, ŉ) are
            // left out entirely.
            (0x101, 0x101), (0x103, 0x103), (0x105, 0x105), (0x107, 0x107),
            (0x109, 0x109), (0x10B, 0x10B), (0x10D, 0x10D), (0x10F, 0x10F),
            (0x111, 0x111), (0x113, 0x113), (0x115, 0x115), (0x117, 0x117),
            (0x119, 0x119), (0x11B, 0x11B), (0x11D, 0x11D), (0x11F, 0x11F),
            (0x121, 0x121), (0x123, 0x123), (0x125, 0x125), (0x127, 0x127),
            (0x129, 0x129), (0x12B, 0x12B), (0x12D, 0x12D), (0x12F, 0x12F),
            (0x131, 0x131), (0x135, 0x135), (0x137, 0x138), (0x13A, 0x13A),
            (0x13C, 0x13C), (0x13E, 0x13E), (0x142, 0x142), (0x144, 0x144),
            (0x146, 0x146), (0x148, 0x148), (0x14B, 0x14B), (0x14D, 0x14D),
            (0x14F, 0x14F), (0x151, 0x151), (0x153, 0x153), (0x155, 0x155),
            (0x157, 0x157), (0x159, 0x159), (0x15B, 0x15B), (0x15D, 0x15D),
            (0x15F, 0x15F), (0x161, 0x161), (0x163, 0x163), (0x165, 0x165),
            (0x167, 0x167), (0x169, 0x169), (0x16B, 0x16B), (0x16D, 0x16D),
            (0x16F, 0x16F), (0x171, 0x171), (0x173, 0x173), (0x175, 0x175),
            (0x177, 0x177), (0x17A, 0x17A), (0x17C, 0x17C), (0x17E, 0x17E),
        ],
        secondary: &[],
        cm: &[],
        cm_absent: false,
        check_nsm: false,
        restricted: false,
    },
    GroupData {
        name: "Greek",
        primary: &[(0x390, 0x390), (0x3AC, 0x3CE)],
        secondary: &[],
        cm: &[],
        cm_absent: false,
        check_nsm: false,
        restricted: false,
    },
    GroupData {
        name: "Cyrillic",
        primary: &[(0x430, 0x45F), (0x51B, 0x51B), (0x51D, 0x51D)],
        secondary: &[],
        cm: &[],
        cm_absent: false,
        check_nsm: false,
        restricted: false,
    },
    GroupData {
        name: "Hebrew",
        primary: &[(0x5D0, 0x5EA), (0x5EF, 0x5F2)],
        secondary: &[(0x5F4, 0x5F4)],
        cm: &[(0x591, 0x5BD), (0x5BF, 0x5BF), (0x5C1, 0x5C2), (0x5C7, 0x5C7)],
        cm_absent: false,
        check_nsm: true,
        restricted: false,
    },
    GroupData {
        name: "Arabic",
        primary: &[
            (0x620, 0x64A),
            (0x66E, 0x66F),
            (0x671, 0x6D3),
            (0x6D5, 0x6D5),
            (0x6EE, 0x6EF),
            (0x6FA, 0x6FF),
        ],
        secondary: &[(0x660, 0x669), (0x6F0, 0x6F9)],
        cm: &[
            (0x610, 0x61A),
            (0x64B, 0x65F),
            (0x670, 0x670),
            (0x6D6, 0x6DC),
            (0x6DF, 0x6E4),
            (0x6E7, 0x6E8),
            (0x6EA, 0x6ED),
        ],
        cm_absent: false,
        check_nsm: true,
        restricted: false,
    },
    GroupData {
        name: "Devanagari",
        primary: &[(0x904, 0x939), (0x93D, 0x940), (0x949, 0x94C), (0x950, 0x950)],
        secondary: &[(0x966, 0x96F)],
        cm: &[
            (0x900, 0x902),
            (0x93C, 0x93C),
            (0x941, 0x948),
            (0x94D, 0x94D),
            (0x951, 0x954),
            (0x962, 0x963),
        ],
        cm_absent: false,
        check_nsm: false,
        restricted: false,
    },
    GroupData {
        name: "Bengali",
        primary: &[
            (0x985, 0x98C),
            (0x98F, 0x990),
            (0x993, 0x9A8),
            (0x9AA, 0x9B0),
            (0x9B2, 0x9B2),
            (0x9B6, 0x9B9),
            (0x9BD, 0x9C0),
            (0x9C7, 0x9C8),
            (0x9CB, 0x9CC),
            (0x9CE, 0x9CE),
            (0x9DF, 0x9E1),
        ],
        secondary: &[(0x9E6, 0x9EF)],
        cm: &[(0x981, 0x981), (0x9BC, 0x9BC), (0x9C1, 0x9C4), (0x9CD, 0x9CD)],
        cm_absent: false,
        check_nsm: false,
        restricted: false,
    },
    GroupData {
        name: "Tamil",
        primary: &[
            (0xB85, 0xB8A),
            (0xB8E, 0xB90),
            (0xB92, 0xB95),
            (0xB99, 0xB9A),
            (0xB9C, 0xB9C),
            (0xB9E, 0xB9F),
            (0xBA3, 0xBA4),
            (0xBA8, 0xBAA),
            (0xBAE, 0xBB9),
            (0xBBE, 0xBBF),
            (0xBC1, 0xBC2),
            (0xBC6, 0xBC8),
            (0xBCA, 0xBCC),
        ],
        secondary: &[(0xBE6, 0xBEF)],
        cm: &[(0xBC0, 0xBC0), (0xBCD, 0xBCD)],
        cm_absent: false,
        check_nsm: false,
        restricted: false,
    },
    GroupData {
        name: "Thai",
        primary: &[(0xE01, 0xE2E), (0xE30, 0xE30), (0xE32, 0xE32), (0xE40, 0xE45)],
        secondary: &[(0xE50, 0xE59)],
        cm: &[(0xE31, 0xE31), (0xE34, 0xE3A), (0xE47, 0xE4E)],
        cm_absent: false,
        check_nsm: false,
        restricted: false,
    },
    GroupData {
        name: "Armenian",
        primary: &[(0x561, 0x586)],
        secondary: &[],
        cm: &[],
        cm_absent: true,
        check_nsm: false,
        restricted: false,
    },
    GroupData {
        name: "Georgian",
        primary: &[(0x10D0, 0x10FA)],
        secondary: &[],
        cm: &[],
        cm_absent: true,
        check_nsm: false,
        restricted: false,
    },
    GroupData {
        name: "Han",
        primary: &[(0x3400, 0x4DBF), (0x4E00, 0x9FFF)],
        secondary: &[],
        cm: &[],
        cm_absent: true,
        check_nsm: false,
        restricted: false,
    },
    GroupData {
        name: "Japanese",
        primary: &[(0x3041, 0x3096), (0x30A1, 0x30FA), (0x30FC, 0x30FC)],
        secondary: &[(0x3400, 0x4DBF), (0x4E00, 0x9FFF)],
        cm: &[],
        cm_absent: false,
        check_nsm: false,
        restricted: false,
    },
    GroupData {
        name: "Korean",
        primary: &[(0xAC00, 0xD7A3)],
        secondary: &[
            (0x1100, 0x1112),
            (0x1161, 0x1175),
            (0x11A8, 0x11C2),
            (0x4E00, 0x9FFF),
        ],
        cm: &[],
        cm_absent: true,
        check_nsm: false,
        restricted: false,
    },
    GroupData {
        name: "Runic",
        primary: &[(0x16A0, 0x16EA)],
        secondary: &[],
        cm: &[],
        cm_absent: true,
        check_nsm: false,
        restricted: true,
    },
    GroupData {
        name: "Ogham",
        primary: &[(0x1681, 0x169A)],
        secondary: &[],
        cm: &[],
        cm_absent: true,
        check_nsm: false,
        restricted: true,
    },
];

/// Codepoints permitted in every group (joined into each secondary set at
/// load time): ASCII digits, hyphen, underscore, the fenced punctuation
/// that is not script-specific, and ξ, which doubles as the ether symbol
/// and may sit in any label.
pub static COMMON: &[(CodePoint, CodePoint)] = &[
    (0x2D, 0x2D),
    (0x30, 0x39),
    (0x3A, 0x3A),
    (0x5F, 0x5F),
    (0xB7, 0xB7),
    (0x3BE, 0x3BE),
    (0x2019, 0x2019),
    (0x27CC, 0x27CC),
];

/// Combining marks that are globally valid. Whether a particular mark is
/// usable inside a label is decided per group (`GroupData::cm`).
pub static COMBINING_MARKS: &[(CodePoint, CodePoint)] = &[
    // U+034F (combining grapheme joiner) is carved out: it is ignored, not
    // valid.
    (0x300, 0x34E),
    (0x350, 0x36F),
    (0x591, 0x5BD),
    (0x5BF, 0x5BF),
    (0x5C1, 0x5C2),
    (0x5C7, 0x5C7),
    (0x610, 0x61A),
    (0x64B, 0x65F),
    (0x670, 0x670),
    (0x6D6, 0x6DC),
    (0x6DF, 0x6E4),
    (0x6E7, 0x6E8),
    (0x6EA, 0x6ED),
    (0x900, 0x902),
    (0x93C, 0x93C),
    (0x941, 0x948),
    (0x94D, 0x94D),
    (0x951, 0x954),
    (0x962, 0x963),
    (0x981, 0x981),
    (0x9BC, 0x9BC),
    (0x9C1, 0x9C4),
    (0x9CD, 0x9CD),
    (0xBC0, 0xBC0),
    (0xBCD, 0xBCD),
    (0xE31, 0xE31),
    (0xE34, 0xE3A),
    (0xE47, 0xE4E),
    (0x3099, 0x309A),
];

/// Non-spacing marks subject to the run rules (`NSM_MAX`, uniqueness).
pub static NSM: &[(CodePoint, CodePoint)] = &[
    (0x591, 0x5BD),
    (0x5BF, 0x5BF),
    (0x5C1, 0x5C2),
    (0x5C7, 0x5C7),
    (0x610, 0x61A),
    (0x64B, 0x65F),
    (0x670, 0x670),
    (0x6D6, 0x6DC),
    (0x6DF, 0x6E4),
    (0x6E7, 0x6E8),
    (0x6EA, 0x6ED),
];

pub const NSM_MAX: usize = 4;

/// Silently dropped codepoints: soft hyphen, CGJ, Mongolian free variation
/// selectors, variation selectors (incl. FE0F outside emoji), BOM and the
/// variation-selector supplement.
pub static IGNORED: &[(CodePoint, CodePoint)] = &[
    (0xAD, 0xAD),
    (0x34F, 0x34F),
    (0x180B, 0x180D),
    (0xFE00, 0xFE0F),
    (0xFEFF, 0xFEFF),
    (0xE0100, 0xE01EF),
];

/// Placement-restricted punctuation: apostrophe, hyphen, colon, middle dot,
/// gershayim, long division.
pub static FENCED: &[CodePoint] = &[0x2D, 0x3A, 0xB7, 0x5F4, 0x2019, 0x27CC];

/// Uniform-offset mapping blocks: `cp` in `[lo, hi]` maps to
/// `to_lo + (cp - lo)`.
pub struct MappedRange {
    pub lo: CodePoint,
    pub hi: CodePoint,
    pub to_lo: CodePoint,
}

pub static MAPPED_RANGES: &[MappedRange] = &[
    MappedRange { lo: 0x41, hi: 0x5A, to_lo: 0x61 },      // A-Z
    MappedRange { lo: 0xC0, hi: 0xD6, to_lo: 0xE0 },      // À-Ö
    MappedRange { lo: 0xD8, hi: 0xDE, to_lo: 0xF8 },      // Ø-Þ
    MappedRange { lo: 0x391, hi: 0x3A1, to_lo: 0x3B1 },   // Α-Ρ
    MappedRange { lo: 0x3A3, hi: 0x3AB, to_lo: 0x3C3 },   // Σ-Ϋ
    MappedRange { lo: 0x400, hi: 0x40F, to_lo: 0x450 },   // Ѐ-Џ
    MappedRange { lo: 0x410, hi: 0x42F, to_lo: 0x430 },   // А-Я
    MappedRange { lo: 0x531, hi: 0x556, to_lo: 0x561 },   // Ա-Ֆ
    MappedRange { lo: 0xFF10, hi: 0xFF19, to_lo: 0x30 },  // fullwidth digits
    MappedRange { lo: 0xFF21, hi: 0xFF3A, to_lo: 0x61 },  // fullwidth A-Z
    MappedRange { lo: 0xFF41, hi: 0xFF5A, to_lo: 0x61 },  // fullwidth a-z
];

/// Irregular mappings: case pairs outside the uniform blocks, compatibility
/// characters and the apostrophe canonicalization. One source codepoint may
/// map to several targets; the reverse is never expressed here.
pub static MAPPED: Map<u32, &'static [CodePoint]> = phf_map! {
    0x27u32 => &[0x2019],           // ' → ’
    0xAAu32 => &[0x61],             // ª
    0xB5u32 => &[0x3BC],            // µ
    0xBAu32 => &[0x6F],             // º
    // Latin Extended-A case pairs.
    0x100u32 => &[0x101], 0x102u32 => &[0x103], 0x104u32 => &[0x105],
    0x106u32 => &[0x107], 0x108u32 => &[0x109], 0x10Au32 => &[0x10B],
    0x10Cu32 => &[0x10D], 0x10Eu32 => &[0x10F], 0x110u32 => &[0x111],
    0x112u32 => &[0x113], 0x114u32 => &[0x115], 0x116u32 => &[0x117],
    0x118u32 => &[0x119], 0x11Au32 => &[0x11B], 0x11Cu32 => &[0x11D],
    0x11Eu32 => &[0x11F], 0x120u32 => &[0x121], 0x122u32 => &[0x123],
    0x124u32 => &[0x125], 0x126u32 => &[0x127], 0x128u32 => &[0x129],
    0x12Au32 => &[0x12B], 0x12Cu32 => &[0x12D], 0x12Eu32 => &[0x12F],
    0x130u32 => &[0x69, 0x307],     // İ → i + combining dot above
    0x134u32 => &[0x135], 0x136u32 => &[0x137], 0x139u32 => &[0x13A],
    0x13Bu32 => &[0x13C], 0x13Du32 => &[0x13E], 0x141u32 => &[0x142],
    0x143u32 => &[0x144], 0x145u32 => &[0x146], 0x147u32 => &[0x148],
    0x14Au32 => &[0x14B], 0x14Cu32 => &[0x14D], 0x14Eu32 => &[0x14F],
    0x150u32 => &[0x151], 0x152u32 => &[0x153], 0x154u32 => &[0x155],
    0x156u32 => &[0x157], 0x158u32 => &[0x159], 0x15Au32 => &[0x15B],
    0x15Cu32 => &[0x15D], 0x15Eu32 => &[0x15F], 0x160u32 => &[0x161],
    0x162u32 => &[0x163], 0x164u32 => &[0x165], 0x166u32 => &[0x167],
    0x168u32 => &[0x169], 0x16Au32 => &[0x16B], 0x16Cu32 => &[0x16D],
    0x16Eu32 => &[0x16F], 0x170u32 => &[0x171], 0x172u32 => &[0x173],
    0x174u32 => &[0x175], 0x176u32 => &[0x177], 0x178u32 => &[0xFF],
    0x179u32 => &[0x17A], 0x17Bu32 => &[0x17C], 0x17Du32 => &[0x17E],
    0x17Fu32 => &[0x73],            // ſ → s
    // Greek tonos capitals.
    0x386u32 => &[0x3AC], 0x388u32 => &[0x3AD], 0x389u32 => &[0x3AE],
    0x38Au32 => &[0x3AF], 0x38Cu32 => &[0x3CC], 0x38Eu32 => &[0x3CD],
    0x38Fu32 => &[0x3CE],
    // Cyrillic q/w capitals.
    0x51Au32 => &[0x51B], 0x51Cu32 => &[0x51D],
    // Devanagari nukta compositions (composition-excluded).
    0x958u32 => &[0x915, 0x93C], 0x959u32 => &[0x916, 0x93C],
    0x95Au32 => &[0x917, 0x93C], 0x95Bu32 => &[0x91C, 0x93C],
    0x95Cu32 => &[0x921, 0x93C], 0x95Du32 => &[0x922, 0x93C],
    0x95Eu32 => &[0x92B, 0x93C], 0x95Fu32 => &[0x92F, 0x93C],
    // Compatibility signs.
    0x2116u32 => &[0x6E, 0x6F],     // № → no
    0x2120u32 => &[0x73, 0x6D],     // ℠ → sm
    0x2122u32 => &[0x74, 0x6D],     // ™ → tm
    0x2126u32 => &[0x3C9],          // Ω (ohm) → ω
    0x212Au32 => &[0x6B],           // K (kelvin) → k
    0x212Bu32 => &[0xE5],           // Å (angstrom) → å
    // Fullwidth punctuation with a valid target.
    0xFF0Du32 => &[0x2D],
    0xFF1Au32 => &[0x3A],
    0xFF3Fu32 => &[0x5F],
};

/// Whole-script confusable index: confusable codepoint → the groups whose
/// members it can be mistaken for.
pub static WHOLE_CONFUSABLES: &[(CodePoint, &[&str])] = &[
    (0x3BD, &["Greek", "Latin"]),                // ν / v
    (0x3BF, &["Greek", "Latin", "Cyrillic"]),    // ο / o / о
    (0x3C1, &["Greek", "Latin", "Cyrillic"]),    // ρ / p / р
    (0x430, &["Cyrillic", "Latin"]),             // а / a
    (0x435, &["Cyrillic", "Latin"]),             // е / e
    (0x43E, &["Cyrillic", "Latin", "Greek"]),    // о / o / ο
    (0x440, &["Cyrillic", "Latin", "Greek"]),    // р / p / ρ
    (0x441, &["Cyrillic", "Latin"]),             // с / c
    (0x443, &["Cyrillic", "Latin"]),             // у / y
    (0x445, &["Cyrillic", "Latin"]),             // х / x
    (0x455, &["Cyrillic", "Latin"]),             // ѕ / s
    (0x456, &["Cyrillic", "Latin"]),             // і / i
    (0x458, &["Cyrillic", "Latin"]),             // ј / j
    (0x51B, &["Cyrillic", "Latin"]),             // ԛ / q
    (0x51D, &["Cyrillic", "Latin"]),             // ԝ / w
];
