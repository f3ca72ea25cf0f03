// Testmode - tests/property_tests.rs
//
// Property-based tests for the pattern matcher and the line-list codec.
// These complement the example-driven unit tests with randomised coverage
// of the guarantees that hold for all inputs.

mod matcher_properties {
    use proptest::prelude::*;
    use testmode::core::like;

    /// Strategy for pattern text: an alphabet biased towards wildcard,
    /// escape, and regex metacharacters (including the private-use
    /// codepoints the translation reserves internally), mixed with
    /// fully arbitrary strings.
    fn pattern_text() -> impl Strategy<Value = String> {
        let biased = proptest::collection::vec(
            prop_oneof![
                Just('%'),
                Just('_'),
                Just('\\'),
                Just('['),
                Just(']'),
                Just('('),
                Just('.'),
                Just('*'),
                Just('$'),
                Just('a'),
                Just('B'),
                Just('0'),
                Just(' '),
                Just('é'),
                Just('\u{e000}'),
                Just('\u{e001}'),
            ],
            0..24,
        )
        .prop_map(|chars| chars.into_iter().collect::<String>());
        prop_oneof![biased, any::<String>()]
    }

    /// Strategy for literal pattern text: no wildcards, no escapes, no
    /// percent signs, but plenty of regex metacharacters.
    fn literal_text() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                Just('['),
                Just(']'),
                Just('('),
                Just(')'),
                Just('.'),
                Just('*'),
                Just('+'),
                Just('a'),
                Just('B'),
                Just('0'),
                Just(' '),
                Just('é'),
            ],
            0..16,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        /// Matching is total: any pattern against any subject returns a
        /// bool, never a panic.
        #[test]
        fn matching_never_panics(pattern in pattern_text(), subject in any::<String>()) {
            let _ = like::matches(&pattern, &subject);
        }

        /// The empty pattern and the lone percent wildcard match every
        /// subject.
        #[test]
        fn universal_patterns_match_all_subjects(subject in any::<String>()) {
            prop_assert!(like::matches("", &subject));
            prop_assert!(like::matches("%", &subject));
        }

        /// A wildcard-free pattern is a substring test, regardless of
        /// regex metacharacters in the pattern.
        #[test]
        fn literal_pattern_is_a_substring_test(lit in literal_text()) {
            let surrounded = format!("pre {lit} post");
            prop_assert!(like::matches(&lit, &lit));
            prop_assert!(like::matches(&lit, &surrounded));
        }

        /// Wrapping a literal in percent wildcards still finds it inside
        /// arbitrary surrounding text.
        #[test]
        fn percent_wrapped_literal_is_found_anywhere(
            lit in literal_text(),
            prefix in any::<String>(),
            suffix in any::<String>(),
        ) {
            let pattern = format!("%{lit}%");
            let subject = format!("{prefix}{lit}{suffix}");
            prop_assert!(like::matches(&pattern, &subject));
        }

        /// An underscore consumes exactly one character: n underscores
        /// match an n-character subject, n + 1 underscores do not.
        #[test]
        fn underscore_counts_characters(
            chars in proptest::collection::vec(
                any::<char>().prop_filter("dot does not match newline", |c| *c != '\n'),
                0..8,
            ),
        ) {
            let subject: String = chars.iter().collect();
            let exact = "_".repeat(chars.len());
            let one_more = format!("{exact}_");
            prop_assert!(like::matches(&exact, &subject));
            prop_assert!(!like::matches(&one_more, &subject));
        }

        /// An escaped wildcard only ever matches its literal character.
        #[test]
        fn escaped_percent_matches_only_literal_percent(lit in literal_text()) {
            let pattern = format!(r"{lit}\%");
            let with_percent = format!("{lit}%");
            let with_x = format!("{lit}x");
            prop_assert!(like::matches(&pattern, &with_percent));
            prop_assert!(!like::matches(&pattern, &with_x));
        }
    }
}

mod codec_properties {
    use proptest::prelude::*;
    use testmode::core::lines;

    /// Strategy for clean list entries: non-empty, already trimmed, and
    /// free of line terminators.
    fn clean_entry() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![Just('a'), Just('Z'), Just('3'), Just('%'), Just('-')],
            1..12,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        /// Decoding always yields trimmed, non-empty entries, and feeding
        /// the result back through changes nothing.
        #[test]
        fn decoded_entries_are_normalised(text in any::<String>()) {
            let entries = lines::to_list(text.as_str());
            for entry in &entries {
                prop_assert!(!entry.is_empty());
                prop_assert_eq!(entry.trim(), entry);
            }
            prop_assert_eq!(lines::to_list(entries.clone()), entries);
        }

        /// Encoding a clean list is a newline join, and decoding recovers
        /// the list exactly.
        #[test]
        fn clean_lists_survive_the_codec(
            entries in proptest::collection::vec(clean_entry(), 0..10),
        ) {
            let text = lines::to_text(entries.clone());
            prop_assert_eq!(&text, &entries.join("\n"));
            prop_assert_eq!(lines::to_list(text.as_str()), entries);
        }

        /// Surrounding whitespace and blank separator lines never change
        /// what a text block decodes to.
        #[test]
        fn padding_and_blank_lines_are_ignored(
            entries in proptest::collection::vec(clean_entry(), 0..10),
        ) {
            let padded: Vec<String> = entries
                .iter()
                .map(|e| format!("  {e}\t"))
                .collect();
            let text = padded.join("\n \n");
            prop_assert_eq!(lines::to_list(text.as_str()), entries);
        }
    }
}
