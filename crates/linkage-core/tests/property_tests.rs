//! Property-based tests using proptest
//!
//! Invariants that hold for any pair of values:
//! - identical values score 1.0
//! - a non-empty value against an empty one scores 0.0
//! - scores are symmetric and within [0, 1]
//! - raising the minimum length never raises the score
//! - a contained value of at least the minimum length scores 1.0

use proptest::prelude::*;

use linkage_core::{Comparator, LongestCommonSubstring};

// Small alphabets produce plenty of overlapping common substrings
fn field_value() -> impl Strategy<Value = String> {
    prop_oneof!["[ab]{0,10}", "[abc ]{0,14}", "\\PC{0,12}"]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_identity(s in field_value(), minlen in 1usize..5) {
        let lcs = LongestCommonSubstring::with_minimum_length(minlen).unwrap();
        prop_assert_eq!(lcs.compare(&s, &s), 1.0);
    }

    #[test]
    fn prop_empty_floor(s in "\\PC{1,12}") {
        let lcs = LongestCommonSubstring::new();
        prop_assert_eq!(lcs.compare(&s, ""), 0.0);
        prop_assert_eq!(lcs.compare("", &s), 0.0);
    }

    #[test]
    fn prop_symmetric(s1 in field_value(), s2 in field_value(), minlen in 1usize..4) {
        let lcs = LongestCommonSubstring::with_minimum_length(minlen).unwrap();
        prop_assert_eq!(lcs.compare(&s1, &s2), lcs.compare(&s2, &s1));
    }

    #[test]
    fn prop_bounded(s1 in field_value(), s2 in field_value(), minlen in 1usize..4) {
        let lcs = LongestCommonSubstring::with_minimum_length(minlen).unwrap();
        let score = lcs.compare(&s1, &s2);
        prop_assert!((0.0..=1.0).contains(&score), "score out of range: {}", score);
    }

    #[test]
    fn prop_monotone_in_minimum_length(
        s1 in field_value(),
        s2 in field_value(),
        minlen in 1usize..4,
    ) {
        let lower = LongestCommonSubstring::with_minimum_length(minlen).unwrap();
        let higher = LongestCommonSubstring::with_minimum_length(minlen + 1).unwrap();
        prop_assert!(higher.compare(&s1, &s2) <= lower.compare(&s1, &s2));
    }

    #[test]
    fn prop_containment(
        prefix in "[a-z]{0,6}",
        inner in "[a-z]{2,8}",
        suffix in "[a-z]{0,6}",
    ) {
        let lcs = LongestCommonSubstring::new();
        let outer = format!("{}{}{}", prefix, inner, suffix);
        prop_assert_eq!(lcs.directional_score(&outer, &inner), 1.0);
        prop_assert_eq!(lcs.directional_score(&inner, &outer), 1.0);
        prop_assert_eq!(lcs.compare(&outer, &inner), 1.0);
    }
}
