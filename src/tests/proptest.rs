#[cfg(test)]
mod prop_tests {
    use crate::{EnsNameNormalizer, cps_to_string, nfc::NfcData, str_to_cps};
    use proptest::prelude::*;

    fn normalizer() -> EnsNameNormalizer {
        EnsNameNormalizer::new()
    }

    /// Alphabet with complete normalization coverage in the compiled
    /// tables: precomposed Latin/Greek/Cyrillic lower case, kana with their
    /// voicing marks, Hangul jamo and syllables. Free-standing Latin
    /// combining marks are exercised separately against our own engine.
    fn oracle_alphabet() -> Vec<char> {
        let mut cps: Vec<u32> = Vec::new();
        cps.extend(0x61..=0x7A);
        cps.extend(0xE0..=0xF6);
        cps.extend(0xF8..=0xFF);
        cps.extend(0x3B1..=0x3C9);
        cps.extend(0x3AC..=0x3AF);
        cps.extend([0x390, 0x3B0, 0x3CA, 0x3CB, 0x3CC, 0x3CD, 0x3CE]);
        cps.extend(0x430..=0x45F);
        cps.extend(0x3041..=0x3096);
        cps.extend([0x3099, 0x309A]);
        cps.extend(0x30A1..=0x30FA);
        cps.extend(0x1100..=0x1112);
        cps.extend(0x1161..=0x1175);
        cps.extend(0x11A8..=0x11C2);
        cps.extend(0xAC00..=0xAC20);
        cps.extend([0xD55C, 0xD558, 0xAE00]);
        cps.into_iter().filter_map(char::from_u32).collect()
    }

    fn oracle_string() -> impl Strategy<Value = String> {
        proptest::collection::vec(proptest::sample::select(oracle_alphabet()), 0..24)
            .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        // =====================================================================
        // ASCII preservation
        // =====================================================================

        // Clean lower-case ASCII labels come back byte-for-byte. The `xn`
        // prefix is exempt from the label-extension rule, so xn-- candidates
        // stay in the sample.
        #[test]
        fn ascii_names_are_preserved(s in "(xn)?[a-z0-9-]{1,32}") {
            prop_assume!(!(
                s.len() >= 4
                    && s.as_bytes()[2] == b'-'
                    && s.as_bytes()[3] == b'-'
                    && !s.starts_with("xn")
            ));
            let n = normalizer();
            let out = n.normalize(&s).unwrap();
            prop_assert_eq!(&out, &s);
            prop_assert_eq!(n.beautify(&s).unwrap(), s);
        }

        // Multi-label variant.
        #[test]
        fn ascii_multilabel_preserved(a in "[a-z0-9]{1,8}", b in "[a-z0-9]{1,8}") {
            let n = normalizer();
            let name = format!("{a}.{b}");
            prop_assert_eq!(n.normalize(&name).unwrap(), name);
        }

        // =====================================================================
        // Totality and idempotence
        // =====================================================================

        // tokenize accepts anything without panicking.
        #[test]
        fn tokenize_is_total(s in "\\PC{0,40}") {
            let n = normalizer();
            let tokenized = n.tokenize(&s);
            prop_assert_eq!(tokenized.input, s);
        }

        // Whenever normalize succeeds it is idempotent.
        #[test]
        fn normalize_idempotent_when_defined(s in "\\PC{0,24}") {
            let n = normalizer();
            if let Ok(once) = n.normalize(&s) {
                let twice = n.normalize(&once).unwrap_or_else(|e| {
                    panic!("normalize({once:?}) failed after succeeding once: {e:?}")
                });
                prop_assert_eq!(once, twice);
            }
        }

        // Whenever normalize succeeds, beautify agrees with it modulo
        // presentation.
        #[test]
        fn beautify_is_a_presentation_superset(s in "\\PC{0,24}") {
            let n = normalizer();
            if let Ok(normalized) = n.normalize(&s) {
                let beautified = n.beautify(&s).unwrap_or_else(|e| {
                    panic!("beautify({s:?}) failed although normalize succeeded: {e:?}")
                });
                prop_assert_eq!(n.normalize(&beautified).unwrap(), normalized);
            }
        }

        // =====================================================================
        // NFC engine
        // =====================================================================

        // Cross-check against the unicode-normalization crate on the
        // covered alphabet.
        #[test]
        fn nfc_matches_reference(s in oracle_string()) {
            use unicode_normalization::UnicodeNormalization;
            let nfc = NfcData::load().unwrap();
            let ours = cps_to_string(&nfc.normalize(&str_to_cps(&s)));
            let reference: String = s.nfc().collect();
            prop_assert_eq!(ours, reference);
        }

        // Our engine is idempotent even with free-standing marks thrown in.
        #[test]
        fn nfc_idempotent_with_free_marks(
            base in oracle_string(),
            marks in proptest::collection::vec(0x300u32..0x315, 0..4),
        ) {
            let nfc = NfcData::load().unwrap();
            let mut cps = str_to_cps(&base);
            cps.extend(marks);
            let once = nfc.normalize(&cps);
            let twice = nfc.normalize(&once);
            prop_assert_eq!(once, twice);
        }

        // The quick check never skips a string the engine would change.
        #[test]
        fn quick_check_is_conservative(s in "\\PC{0,24}") {
            let nfc = NfcData::load().unwrap();
            let cps = str_to_cps(&s);
            if !nfc.needs_apply(&cps) {
                prop_assert_eq!(nfc.normalize(&cps), cps);
            }
        }

        // =====================================================================
        // Confusables
        // =====================================================================

        // A Latin anchor mixed with any confusable codepoint always fails,
        // whichever check catches it first.
        #[test]
        fn latin_mixed_with_confusables_fails(
            anchor in "[bdfghklmnt]{1,4}",
            pick in 0usize..15,
        ) {
            let n = normalizer();
            let (cp, _) = crate::tables::data::WHOLE_CONFUSABLES[pick];
            let c = char::from_u32(cp).unwrap();
            let input = format!("{anchor}{c}");
            prop_assert!(n.normalize(&input).is_err(), "{input:?} should fail");
        }
    }
}
