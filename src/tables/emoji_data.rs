// src/tables/emoji_data.rs
// Emoji sequence inventory in canonical (fully-qualified) form. The loader
// expands these five shapes into one flat sequence list; the trie built from
// it accepts both qualified and unqualified spellings.

use crate::CodePoint;

/// Blocks whose codepoints are emoji on their own, no FE0F required.
pub static PRESENTATION_RANGES: &[(CodePoint, CodePoint)] = &[
    (0x231A, 0x231B),
    (0x23E9, 0x23EC),
    (0x23F0, 0x23F0),
    (0x23F3, 0x23F3),
    (0x25FD, 0x25FE),
    (0x2614, 0x2615),
    (0x2648, 0x2653),
    (0x267F, 0x267F),
    (0x2693, 0x2693),
    (0x26A1, 0x26A1),
    (0x26AA, 0x26AB),
    (0x26BD, 0x26BE),
    (0x26C4, 0x26C5),
    (0x26CE, 0x26CE),
    (0x26D4, 0x26D4),
    (0x26EA, 0x26EA),
    (0x26F2, 0x26F3),
    (0x26F5, 0x26F5),
    (0x26FA, 0x26FA),
    (0x26FD, 0x26FD),
    (0x2705, 0x2705),
    (0x270A, 0x270B),
    (0x2728, 0x2728),
    (0x274C, 0x274C),
    (0x274E, 0x274E),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2795, 0x2797),
    (0x27B0, 0x27B0),
    (0x27BF, 0x27BF),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x1F300, 0x1F320),
    (0x1F32D, 0x1F335),
    (0x1F337, 0x1F37C),
    (0x1F380, 0x1F393),
    (0x1F3A0, 0x1F3CA),
    (0x1F3CF, 0x1F3D3),
    (0x1F3E0, 0x1F3F0),
    (0x1F3F4, 0x1F3F4),
    (0x1F3F8, 0x1F43E),
    (0x1F440, 0x1F440),
    (0x1F442, 0x1F4FC),
    (0x1F4FF, 0x1F53D),
    (0x1F54B, 0x1F54E),
    (0x1F550, 0x1F567),
    (0x1F57A, 0x1F57A),
    (0x1F595, 0x1F596),
    (0x1F5A4, 0x1F5A4),
    (0x1F5FB, 0x1F64F),
    (0x1F680, 0x1F6C5),
    (0x1F6CC, 0x1F6CC),
    (0x1F6D0, 0x1F6D2),
    (0x1F6EB, 0x1F6EC),
    (0x1F6F4, 0x1F6FC),
    (0x1F7E0, 0x1F7EB),
    (0x1F90C, 0x1F93A),
    (0x1F93C, 0x1F945),
    (0x1F947, 0x1F978),
    (0x1F97A, 0x1F9CB),
    (0x1F9CD, 0x1F9FF),
    (0x1FA70, 0x1FA74),
    (0x1FA78, 0x1FA7A),
    (0x1FA80, 0x1FA86),
    (0x1FA90, 0x1FAA8),
    (0x1FAB0, 0x1FAB6),
    (0x1FAC0, 0x1FAC2),
    (0x1FAD0, 0x1FAD6),
];

/// Text-default pictographs: canonical form is `[cp, FE0F]`, the bare
/// codepoint is the unqualified spelling.
pub static FE0F_SINGLES: &[CodePoint] = &[
    0x261D, 0x2618, 0x2620, 0x2622, 0x2623, 0x2626, 0x262A, 0x262E, 0x262F,
    0x2638, 0x2639, 0x263A, 0x2660, 0x2663, 0x2665, 0x2666, 0x2695, 0x2696,
    0x2697, 0x2699, 0x26A0, 0x26B0, 0x26B1, 0x26F9, 0x2702, 0x2708, 0x2709,
    0x270C, 0x270D, 0x270F, 0x2712, 0x2714, 0x2716, 0x271D, 0x2721, 0x2733,
    0x2734, 0x2744, 0x2747, 0x2763, 0x2764, 0x27A1, 0x2B05, 0x2B06, 0x2B07,
    0x1F3F3, 0x1F441, 0x1F590, 0x1F5E8,
];

/// Bases that accept a Fitzpatrick modifier; `[base, tone]` for every tone
/// in `MODIFIERS`. The bare base is covered by the lists above.
pub static MODIFIER_BASES: &[CodePoint] = &[
    0x261D, 0x270A, 0x270B, 0x270C, 0x270D, 0x1F44A, 0x1F44B, 0x1F44C,
    0x1F44D, 0x1F44E, 0x1F44F, 0x1F450, 0x1F466, 0x1F467, 0x1F468, 0x1F469,
    0x1F590, 0x1F595, 0x1F596, 0x1F64C, 0x1F64F, 0x1F91A, 0x1F91B, 0x1F91C,
    0x1F91D, 0x1F91E, 0x1F91F, 0x1F932, 0x1F9D1,
];

pub const MODIFIERS: (CodePoint, CodePoint) = (0x1F3FB, 0x1F3FF);

/// ZWJ sequences, fully qualified.
pub static ZWJ_SEQUENCES: &[&[CodePoint]] = &[
    &[0x1F468, 0x200D, 0x1F4BB],                    // man technologist
    &[0x1F469, 0x200D, 0x1F4BB],                    // woman technologist
    &[0x1F9D1, 0x200D, 0x1F4BB],                    // technologist
    &[0x1F468, 0x200D, 0x1F373],                    // man cook
    &[0x1F469, 0x200D, 0x1F373],                    // woman cook
    &[0x1F468, 0x200D, 0x1F393],                    // man student
    &[0x1F469, 0x200D, 0x1F393],                    // woman student
    &[0x1F468, 0x200D, 0x2695, 0xFE0F],             // man health worker
    &[0x1F469, 0x200D, 0x2695, 0xFE0F],             // woman health worker
    &[0x1F471, 0x200D, 0x2640, 0xFE0F],             // woman: blond hair
    &[0x1F471, 0x200D, 0x2642, 0xFE0F],             // man: blond hair
    &[0x1F6B4, 0x200D, 0x2640, 0xFE0F],             // woman biking
    &[0x1F6B4, 0x200D, 0x2642, 0xFE0F],             // man biking
    &[0x1F3CA, 0x200D, 0x2640, 0xFE0F],             // woman swimming
    &[0x1F3CA, 0x200D, 0x2642, 0xFE0F],             // man swimming
    &[0x26F9, 0xFE0F, 0x200D, 0x2640, 0xFE0F],      // woman bouncing ball
    &[0x26F9, 0xFE0F, 0x200D, 0x2642, 0xFE0F],      // man bouncing ball
    &[0x2764, 0xFE0F, 0x200D, 0x1F525],             // heart on fire
    &[0x2764, 0xFE0F, 0x200D, 0x1FA79],             // mending heart
    &[0x1F3F3, 0xFE0F, 0x200D, 0x1F308],            // rainbow flag
    &[0x1F3F4, 0x200D, 0x2620, 0xFE0F],             // pirate flag
    &[0x1F441, 0xFE0F, 0x200D, 0x1F5E8, 0xFE0F],    // eye in speech bubble
    &[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F466],   // family: man, woman, boy
    &[0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x200D, 0x1F466],
];

/// Regional-indicator flag pairs.
pub static FLAG_PAIRS: &[(CodePoint, CodePoint)] = &[
    (0x1F1E7, 0x1F1F7), // BR
    (0x1F1E8, 0x1F1E6), // CA
    (0x1F1E8, 0x1F1ED), // CH
    (0x1F1E9, 0x1F1EA), // DE
    (0x1F1EB, 0x1F1F7), // FR
    (0x1F1EC, 0x1F1E7), // GB
    (0x1F1EE, 0x1F1F3), // IN
    (0x1F1EF, 0x1F1F5), // JP
    (0x1F1F0, 0x1F1F7), // KR
    (0x1F1F3, 0x1F1EC), // NG
    (0x1F1FA, 0x1F1E6), // UA
    (0x1F1FA, 0x1F1F8), // US
];

/// Keycap bases: canonical form is `[cp, FE0F, 20E3]`.
pub static KEYCAP_BASES: &[CodePoint] = &[
    0x23, 0x2A, 0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39,
];

pub const CP_KEYCAP: CodePoint = 0x20E3;
