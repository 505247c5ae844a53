// src/tables/nfc_data.rs
// Canonical normalization data for every decomposable codepoint the tables
// consider valid (or map into). Hangul syllables are handled algorithmically
// and have no entries here.

use crate::CodePoint;

/// Canonical decompositions. Targets have length 1 or 2; the loader rejects
/// anything else. Decomposition is recursive (e.g. ΐ → ϊ + ´ → ι + ¨ + ´).
pub static DECOMP: &[(CodePoint, &[CodePoint])] = &[
    // Latin-1 Supplement, lower case.
    (0xE0, &[0x61, 0x300]), (0xE1, &[0x61, 0x301]), (0xE2, &[0x61, 0x302]),
    (0xE3, &[0x61, 0x303]), (0xE4, &[0x61, 0x308]), (0xE5, &[0x61, 0x30A]),
    (0xE7, &[0x63, 0x327]), (0xE8, &[0x65, 0x300]), (0xE9, &[0x65, 0x301]),
    (0xEA, &[0x65, 0x302]), (0xEB, &[0x65, 0x308]), (0xEC, &[0x69, 0x300]),
    (0xED, &[0x69, 0x301]), (0xEE, &[0x69, 0x302]), (0xEF, &[0x69, 0x308]),
    (0xF1, &[0x6E, 0x303]), (0xF2, &[0x6F, 0x300]), (0xF3, &[0x6F, 0x301]),
    (0xF4, &[0x6F, 0x302]), (0xF5, &[0x6F, 0x303]), (0xF6, &[0x6F, 0x308]),
    (0xF9, &[0x75, 0x300]), (0xFA, &[0x75, 0x301]), (0xFB, &[0x75, 0x302]),
    (0xFC, &[0x75, 0x308]), (0xFD, &[0x79, 0x301]), (0xFF, &[0x79, 0x308]),
    // Latin Extended-A, lower case.
    (0x101, &[0x61, 0x304]), (0x103, &[0x61, 0x306]), (0x105, &[0x61, 0x328]),
    (0x107, &[0x63, 0x301]), (0x109, &[0x63, 0x302]), (0x10B, &[0x63, 0x307]),
    (0x10D, &[0x63, 0x30C]), (0x10F, &[0x64, 0x30C]), (0x113, &[0x65, 0x304]),
    (0x115, &[0x65, 0x306]), (0x117, &[0x65, 0x307]), (0x119, &[0x65, 0x328]),
    (0x11B, &[0x65, 0x30C]), (0x11D, &[0x67, 0x302]), (0x11F, &[0x67, 0x306]),
    (0x121, &[0x67, 0x307]), (0x123, &[0x67, 0x327]), (0x125, &[0x68, 0x302]),
    (0x129, &[0x69, 0x303]), (0x12B, &[0x69, 0x304]), (0x12D, &[0x69, 0x306]),
    (0x12F, &[0x69, 0x328]), (0x135, &[0x6A, 0x302]), (0x137, &[0x6B, 0x327]),
    (0x13A, &[0x6C, 0x301]), (0x13C, &[0x6C, 0x327]), (0x13E, &[0x6C, 0x30C]),
    (0x144, &[0x6E, 0x301]), (0x146, &[0x6E, 0x327]), (0x148, &[0x6E, 0x30C]),
    (0x14D, &[0x6F, 0x304]), (0x14F, &[0x6F, 0x306]), (0x151, &[0x6F, 0x30B]),
    (0x155, &[0x72, 0x301]), (0x157, &[0x72, 0x327]), (0x159, &[0x72, 0x30C]),
    (0x15B, &[0x73, 0x301]), (0x15D, &[0x73, 0x302]), (0x15F, &[0x73, 0x327]),
    (0x161, &[0x73, 0x30C]), (0x163, &[0x74, 0x327]), (0x165, &[0x74, 0x30C]),
    (0x169, &[0x75, 0x303]), (0x16B, &[0x75, 0x304]), (0x16D, &[0x75, 0x306]),
    (0x16F, &[0x75, 0x30A]), (0x171, &[0x75, 0x30B]), (0x173, &[0x75, 0x328]),
    (0x175, &[0x77, 0x302]), (0x177, &[0x79, 0x302]), (0x17A, &[0x7A, 0x301]),
    (0x17C, &[0x7A, 0x307]), (0x17E, &[0x7A, 0x30C]),
    // Greek, lower case with tonos / dialytika.
    (0x390, &[0x3CA, 0x301]),
    (0x3AC, &[0x3B1, 0x301]), (0x3AD, &[0x3B5, 0x301]), (0x3AE, &[0x3B7, 0x301]),
    (0x3AF, &[0x3B9, 0x301]), (0x3B0, &[0x3CB, 0x301]), (0x3CA, &[0x3B9, 0x308]),
    (0x3CB, &[0x3C5, 0x308]), (0x3CC, &[0x3BF, 0x301]), (0x3CD, &[0x3C5, 0x301]),
    (0x3CE, &[0x3C9, 0x301]),
    // Cyrillic.
    (0x439, &[0x438, 0x306]), (0x450, &[0x435, 0x300]), (0x451, &[0x435, 0x308]),
    (0x453, &[0x433, 0x301]), (0x457, &[0x456, 0x308]), (0x45C, &[0x43A, 0x301]),
    (0x45D, &[0x438, 0x300]), (0x45E, &[0x443, 0x306]),
    // Devanagari nukta forms (composition-excluded).
    (0x958, &[0x915, 0x93C]), (0x959, &[0x916, 0x93C]), (0x95A, &[0x917, 0x93C]),
    (0x95B, &[0x91C, 0x93C]), (0x95C, &[0x921, 0x93C]), (0x95D, &[0x922, 0x93C]),
    (0x95E, &[0x92B, 0x93C]), (0x95F, &[0x92F, 0x93C]),
    // Bengali nukta forms (composition-excluded).
    (0x9DC, &[0x9A1, 0x9BC]), (0x9DD, &[0x9A2, 0x9BC]), (0x9DF, &[0x9AF, 0x9BC]),
    // Hiragana with voicing marks.
    (0x304C, &[0x304B, 0x3099]), (0x304E, &[0x304D, 0x3099]),
    (0x3050, &[0x304F, 0x3099]), (0x3052, &[0x3051, 0x3099]),
    (0x3054, &[0x3053, 0x3099]), (0x3056, &[0x3055, 0x3099]),
    (0x3058, &[0x3057, 0x3099]), (0x305A, &[0x3059, 0x3099]),
    (0x305C, &[0x305B, 0x3099]), (0x305E, &[0x305D, 0x3099]),
    (0x3060, &[0x305F, 0x3099]), (0x3062, &[0x3061, 0x3099]),
    (0x3065, &[0x3064, 0x3099]), (0x3067, &[0x3066, 0x3099]),
    (0x3069, &[0x3068, 0x3099]), (0x3070, &[0x306F, 0x3099]),
    (0x3071, &[0x306F, 0x309A]), (0x3073, &[0x3072, 0x3099]),
    (0x3074, &[0x3072, 0x309A]), (0x3076, &[0x3075, 0x3099]),
    (0x3077, &[0x3075, 0x309A]), (0x3079, &[0x3078, 0x3099]),
    (0x307A, &[0x3078, 0x309A]), (0x307C, &[0x307B, 0x3099]),
    (0x307D, &[0x307B, 0x309A]), (0x3094, &[0x3046, 0x3099]),
    // Katakana with voicing marks.
    (0x30AC, &[0x30AB, 0x3099]), (0x30AE, &[0x30AD, 0x3099]),
    (0x30B0, &[0x30AF, 0x3099]), (0x30B2, &[0x30B1, 0x3099]),
    (0x30B4, &[0x30B3, 0x3099]), (0x30B6, &[0x30B5, 0x3099]),
    (0x30B8, &[0x30B7, 0x3099]), (0x30BA, &[0x30B9, 0x3099]),
    (0x30BC, &[0x30BB, 0x3099]), (0x30BE, &[0x30BD, 0x3099]),
    (0x30C0, &[0x30BF, 0x3099]), (0x30C2, &[0x30C1, 0x3099]),
    (0x30C5, &[0x30C4, 0x3099]), (0x30C7, &[0x30C6, 0x3099]),
    (0x30C9, &[0x30C8, 0x3099]), (0x30D0, &[0x30CF, 0x3099]),
    (0x30D1, &[0x30CF, 0x309A]), (0x30D3, &[0x30D2, 0x3099]),
    (0x30D4, &[0x30D2, 0x309A]), (0x30D6, &[0x30D5, 0x3099]),
    (0x30D7, &[0x30D5, 0x309A]), (0x30D9, &[0x30D8, 0x3099]),
    (0x30DA, &[0x30D8, 0x309A]), (0x30DC, &[0x30DB, 0x3099]),
    (0x30DD, &[0x30DB, 0x309A]), (0x30F4, &[0x30A6, 0x3099]),
    (0x30F7, &[0x30EF, 0x3099]), (0x30F8, &[0x30F0, 0x3099]),
    (0x30F9, &[0x30F1, 0x3099]), (0x30FA, &[0x30F2, 0x3099]),
];

/// Non-zero canonical combining classes, by inclusive range.
pub static RANKS: &[((CodePoint, CodePoint), u8)] = &[
    ((0x300, 0x314), 230),
    ((0x315, 0x315), 232),
    ((0x316, 0x319), 220),
    ((0x31A, 0x31A), 232),
    ((0x31B, 0x31B), 216),
    ((0x31C, 0x320), 220),
    ((0x321, 0x322), 202),
    ((0x323, 0x326), 220),
    ((0x327, 0x328), 202),
    ((0x329, 0x333), 220),
    ((0x334, 0x338), 1),
    ((0x339, 0x33C), 220),
    ((0x33D, 0x344), 230),
    ((0x345, 0x345), 240),
    ((0x346, 0x346), 230),
    ((0x347, 0x349), 220),
    ((0x34A, 0x34C), 230),
    ((0x34D, 0x34E), 220),
    ((0x350, 0x352), 230),
    ((0x353, 0x356), 220),
    ((0x357, 0x357), 230),
    ((0x358, 0x358), 232),
    ((0x359, 0x35A), 220),
    ((0x35B, 0x35B), 230),
    ((0x35C, 0x35C), 233),
    ((0x35D, 0x35E), 234),
    ((0x35F, 0x35F), 233),
    ((0x360, 0x361), 234),
    ((0x362, 0x362), 233),
    ((0x363, 0x36F), 230),
    // Hebrew accents and points.
    ((0x591, 0x591), 220),
    ((0x592, 0x595), 230),
    ((0x596, 0x596), 220),
    ((0x597, 0x599), 230),
    ((0x59A, 0x59A), 222),
    ((0x59B, 0x59B), 220),
    ((0x59C, 0x5A1), 230),
    ((0x5A2, 0x5A7), 220),
    ((0x5A8, 0x5A9), 230),
    ((0x5AA, 0x5AA), 220),
    ((0x5AB, 0x5AC), 230),
    ((0x5AD, 0x5AD), 222),
    ((0x5AE, 0x5AE), 228),
    ((0x5AF, 0x5AF), 230),
    ((0x5B0, 0x5B0), 10),
    ((0x5B1, 0x5B1), 11),
    ((0x5B2, 0x5B2), 12),
    ((0x5B3, 0x5B3), 13),
    ((0x5B4, 0x5B4), 14),
    ((0x5B5, 0x5B5), 15),
    ((0x5B6, 0x5B6), 16),
    ((0x5B7, 0x5B7), 17),
    ((0x5B8, 0x5B8), 18),
    ((0x5B9, 0x5BA), 19),
    ((0x5BB, 0x5BB), 20),
    ((0x5BC, 0x5BC), 21),
    ((0x5BD, 0x5BD), 22),
    ((0x5BF, 0x5BF), 23),
    ((0x5C1, 0x5C1), 24),
    ((0x5C2, 0x5C2), 25),
    ((0x5C7, 0x5C7), 18),
    // Arabic marks.
    ((0x610, 0x617), 230),
    ((0x618, 0x618), 30),
    ((0x619, 0x619), 31),
    ((0x61A, 0x61A), 32),
    ((0x64B, 0x64B), 27),
    ((0x64C, 0x64C), 28),
    ((0x64D, 0x64D), 29),
    ((0x64E, 0x64E), 30),
    ((0x64F, 0x64F), 31),
    ((0x650, 0x650), 32),
    ((0x651, 0x651), 33),
    ((0x652, 0x652), 34),
    ((0x653, 0x654), 230),
    ((0x655, 0x656), 220),
    ((0x657, 0x65B), 230),
    ((0x65C, 0x65C), 220),
    ((0x65D, 0x65E), 230),
    ((0x65F, 0x65F), 220),
    ((0x670, 0x670), 35),
    ((0x6D6, 0x6DC), 230),
    ((0x6DF, 0x6E2), 230),
    ((0x6E3, 0x6E3), 220),
    ((0x6E4, 0x6E4), 230),
    ((0x6E7, 0x6E8), 230),
    ((0x6EA, 0x6EA), 220),
    ((0x6EB, 0x6EC), 230),
    ((0x6ED, 0x6ED), 220),
    // Indic nukta and virama.
    ((0x93C, 0x93C), 7),
    ((0x94D, 0x94D), 9),
    ((0x951, 0x951), 230),
    ((0x952, 0x952), 220),
    ((0x953, 0x954), 230),
    ((0x9BC, 0x9BC), 7),
    ((0x9CD, 0x9CD), 9),
    ((0xBCD, 0xBCD), 9),
    // Thai.
    ((0xE38, 0xE39), 103),
    ((0xE3A, 0xE3A), 9),
    ((0xE48, 0xE4B), 107),
    // Kana voicing marks.
    ((0x3099, 0x309A), 8),
];

/// Composition exclusions: these decompose but never recompose.
pub static EXCLUSIONS: &[(CodePoint, CodePoint)] =
    &[(0x958, 0x95F), (0x9DC, 0x9DD), (0x9DF, 0x9DF)];
