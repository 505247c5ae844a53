#[cfg(test)]
mod integration_tests {
    use crate::{EnsNameNormalizer, LabelKind, ProcessError, cps_to_string};

    fn normalizer() -> EnsNameNormalizer {
        EnsNameNormalizer::new()
    }

    #[test]
    fn case_maps_per_label() {
        let n = normalizer();
        assert_eq!(n.normalize("Hello.ETH").unwrap(), "hello.eth");
        assert_eq!(n.beautify("Hello.ETH").unwrap(), "hello.eth");
    }

    #[test]
    fn punycode_is_passed_through_not_decoded() {
        let n = normalizer();
        assert_eq!(n.normalize("xn--ls8h.eth").unwrap(), "xn--ls8h.eth");
    }

    #[test]
    fn label_extension_is_rejected() {
        let n = normalizer();
        assert_eq!(
            n.normalize("ab--cd"),
            Err(ProcessError::LabelExtension {
                cps: vec![0x61, 0x62, 0x2D, 0x2D]
            })
        );
    }

    #[test]
    fn trailing_hyphen_run_is_tolerated_in_ascii() {
        let n = normalizer();
        assert_eq!(n.normalize("abc---").unwrap(), "abc---");
    }

    #[test]
    fn interior_fenced_pair_is_rejected() {
        let n = normalizer();
        assert_eq!(
            n.normalize("a''b"),
            Err(ProcessError::ConsecutiveFenced {
                cps: vec![0x2019, 0x2019]
            })
        );
    }

    #[test]
    fn leading_fenced_is_rejected() {
        let n = normalizer();
        assert_eq!(
            n.normalize("'abc"),
            Err(ProcessError::LeadingFenced { cp: 0x2019 })
        );
    }

    #[test]
    fn nfc_composes_combining_acute() {
        let n = normalizer();
        assert_eq!(n.normalize("cafe\u{301}.eth").unwrap(), "café.eth");
        // already composed input is untouched
        assert_eq!(n.normalize("café.eth").unwrap(), "café.eth");
    }

    #[test]
    fn cyrillic_lookalike_of_paypal_is_rejected() {
        let n = normalizer();
        assert_eq!(n.normalize("paypal").unwrap(), "paypal");
        let err = n.normalize("p\u{430}ypal").unwrap_err();
        assert!(
            matches!(
                err,
                ProcessError::MixedScript { .. } | ProcessError::WholeConfusable { .. }
            ),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn emoji_with_skin_tone_is_preserved() {
        let n = normalizer();
        assert_eq!(n.normalize("👍🏻").unwrap(), "👍🏻");
    }

    #[test]
    fn beautify_restores_fe0f() {
        let n = normalizer();
        // unqualified man-biking gets its selector back
        assert_eq!(
            n.beautify("🚴\u{200D}♂").unwrap(),
            "🚴\u{200D}♂\u{FE0F}"
        );
        assert_eq!(n.beautify("❤").unwrap(), "❤\u{FE0F}");
        // while normalize strips it
        assert_eq!(n.normalize("❤\u{FE0F}").unwrap(), "❤");
        // fully-qualified zwj form without FE0F stays as-is
        assert_eq!(n.beautify("👨\u{200D}💻").unwrap(), "👨\u{200D}💻");
    }

    #[test]
    fn empty_name_is_an_empty_label() {
        let n = normalizer();
        assert_eq!(
            n.normalize(""),
            Err(ProcessError::EmptyLabel { index: 0 })
        );
    }

    #[test]
    fn empty_label_reports_its_index() {
        let n = normalizer();
        assert_eq!(
            n.normalize("a.."),
            Err(ProcessError::EmptyLabel { index: 1 })
        );
    }

    // ====================================================================
    // Universal properties over a fixed corpus
    // ====================================================================

    const CORPUS: &[&str] = &[
        "hello.eth",
        "Hello.ETH",
        "xn--ls8h.eth",
        "abc---",
        "_origin",
        "cafe\u{301}",
        "café.eth",
        "привет123",
        "ελλάδα",
        "東京.eth",
        "にほん",
        "한국",
        "👍🏻.eth",
        "a\u{AD}b",
        "1\u{FE0F}\u{20E3}",
        "\u{5D0}\u{5E8}\u{5E5}",
        "\u{643}\u{64E}\u{62A}\u{64E}\u{628}",
    ];

    #[test]
    fn normalize_is_idempotent_on_the_corpus() {
        let n = normalizer();
        for input in CORPUS {
            let once = n.normalize(input).unwrap_or_else(|e| {
                panic!("corpus entry {input:?} should normalize, got {e:?}")
            });
            assert_eq!(n.normalize(&once).unwrap(), once, "not idempotent: {input:?}");
        }
    }

    #[test]
    fn beautify_normalizes_back_to_the_same_name() {
        let n = normalizer();
        for input in CORPUS {
            let normalized = n.normalize(input).unwrap();
            let beautified = n.beautify(input).unwrap();
            assert_eq!(
                n.normalize(&beautified).unwrap(),
                normalized,
                "beautify diverged for {input:?}"
            );
        }
    }

    #[test]
    fn tokenize_never_fails_even_on_garbage() {
        let n = normalizer();
        for input in ["", "!!!", "\u{0}\u{FFFF}", "a.!.b", "👍\u{301}", "xn--"] {
            let tokenized = n.tokenize(input);
            assert_eq!(tokenized.input, *input);
        }
    }

    #[test]
    fn every_emoji_sequence_round_trips() {
        let n = normalizer();
        for seq in n.tables().emoji.sequences() {
            let canonical = cps_to_string(&seq.canonical);
            let bare = cps_to_string(&seq.no_fe0f);
            assert_eq!(
                n.normalize(&canonical).unwrap(),
                bare,
                "normalize({canonical:?})"
            );
            assert_eq!(
                n.beautify(&canonical).unwrap(),
                canonical,
                "beautify({canonical:?})"
            );
            // the unqualified spelling reaches the same canonical forms
            assert_eq!(n.normalize(&bare).unwrap(), bare);
            assert_eq!(n.beautify(&bare).unwrap(), canonical);
        }
    }

    #[test]
    fn greek_labels_keep_their_xi() {
        let n = normalizer();
        assert_eq!(n.normalize("ξανά").unwrap(), "ξανά");
        assert_eq!(n.beautify("ξανά").unwrap(), "ξανά");
        // capital xi is case-mapped down, then kept for Greek labels
        assert_eq!(n.normalize("Ξανά").unwrap(), "ξανά");
    }

    #[test]
    fn xi_becomes_the_ether_symbol_outside_greek() {
        let n = normalizer();
        // ξ is common, so a Latin label may carry it
        assert_eq!(n.normalize("wξb").unwrap(), "wξb");
        assert_eq!(n.beautify("wξb").unwrap(), "wΞb");
        assert_eq!(n.beautify("wΞb").unwrap(), "wΞb");
        // and beautify stays inside the normalized name
        assert_eq!(n.normalize("wΞb").unwrap(), "wξb");
    }

    #[test]
    fn label_kinds_are_reported() {
        let n = normalizer();
        let cases: &[(&str, LabelKind)] = &[
            ("hello", LabelKind::Ascii),
            ("👍👍🏻", LabelKind::Emoji),
            ("café", LabelKind::Script("Latin")),
            ("мир", LabelKind::Script("Cyrillic")),
        ];
        for (input, expected) in cases {
            let tokenized = n.tokenize(input);
            let labels = tokenized.labels();
            let kind = crate::validate::validate_label(n.tables(), &labels[0], 0).unwrap();
            assert_eq!(kind, *expected, "{input:?}");
            assert_eq!(kind.name(), expected.name());
        }
    }

    #[test]
    fn mixing_primary_letters_with_each_confusable_always_fails() {
        let n = normalizer();
        for &(cp, _) in crate::tables::data::WHOLE_CONFUSABLES {
            let c = char::from_u32(cp).expect("confusable is a scalar value");
            let input = format!("b{c}");
            assert!(
                n.normalize(&input).is_err(),
                "mixing Latin b with U+{cp:04X} should fail"
            );
        }
    }

    #[test]
    fn restricted_scripts_never_normalize() {
        let n = normalizer();
        let group = n.tables().group_by_name("Runic").unwrap();
        assert!(group.restricted());
        assert_eq!(
            n.normalize("\u{16A0}\u{16A2}"),
            Err(ProcessError::RestrictedScript { group: "Runic" })
        );
        // the codepoints themselves stay diagnosable
        let tokenized = n.tokenize("\u{16A0}\u{16A2}");
        assert!(tokenized.tokens.iter().all(|t| t.is_text()));
    }

    #[test]
    fn hangul_composes_through_the_full_stack() {
        let n = normalizer();
        assert_eq!(
            n.normalize("\u{1112}\u{1161}\u{11AB}\u{AE00}").unwrap(),
            "한글"
        );
    }
}
