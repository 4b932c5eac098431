use bson_pipeline::stage::search_pattern;
use proptest::prelude::*;

fn anchored(keyword: &str) -> regex::Regex {
    regex::Regex::new(&format!("^(?:{})$", search_pattern(&[keyword]))).unwrap()
}

proptest! {
    #![proptest_config(proptest::test_runner::Config {
        failure_persistence: Some(Box::new(proptest::test_runner::FileFailurePersistence::WithSource("proptest-regressions"))),
        .. proptest::test_runner::Config::default()
    })]
    #[test]
    fn prop_escaped_keyword_matches_itself(k in "[ -~]{1,16}") {
        prop_assert!(anchored(&k).is_match(&k));
    }

    // Metacharacters must not act as wildcards, repetition or alternation.
    #[test]
    fn prop_metacharacters_do_not_match_other_text(
        head in "[a-z]{0,4}",
        meta in "[.*+?|]",
        tail in "[a-z]{0,4}"
    ) {
        let keyword = format!("{head}{meta}{tail}");
        let re = anchored(&keyword);
        let replaced = format!("{head}x{tail}");
        let removed = format!("{head}{tail}");
        let doubled = format!("{head}{meta}{meta}{tail}");
        prop_assert!(!re.is_match(&replaced));
        prop_assert!(!re.is_match(&removed));
        prop_assert!(!re.is_match(&doubled));
    }

    #[test]
    fn prop_pattern_matches_every_keyword(
        ks in proptest::collection::vec("[a-z.*+?()]{1,8}", 1..5)
    ) {
        let re = regex::RegexBuilder::new(&search_pattern(ks.as_slice()))
            .case_insensitive(true)
            .build()
            .unwrap();
        for k in &ks {
            prop_assert!(re.is_match(&k.to_uppercase()));
        }
    }
}
