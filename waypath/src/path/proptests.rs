//! Property-based tests for plain paths.
//!
//! Note: The normalize module already has property tests for normalization.
//! This module focuses on composition and relationships.

use super::{AbsolutePath, PathOps, PathRelationship, RelativePath};
use proptest::prelude::*;

// Strategy for generating path-like strings
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn absolute_path_strategy() -> impl Strategy<Value = AbsolutePath> {
    prop::collection::vec(segment_strategy(), 0..6).prop_map(|parts| {
        AbsolutePath::new(format!("/{}", parts.join("/"))).unwrap()
    })
}

// Relative parts that may climb with `..`
fn relative_part_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![segment_strategy(), Just("..".to_string()), Just(".".to_string())],
        0..6,
    )
    .prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // base.join(child.relative_to(base)) == child
    #[test]
    fn relative_to_then_join_is_identity(
        base in absolute_path_strategy(),
        child in absolute_path_strategy(),
    ) {
        let relative = child.relative_to(&base);
        prop_assert_eq!(base.join(&relative), child);
    }

    // A path never strictly descends from itself
    #[test]
    fn descends_from_excludes_self(path in absolute_path_strategy()) {
        prop_assert!(!path.descends_from(&path));
        prop_assert!(path.descends_from_inclusive(&path));
    }

    // Joining the empty part is identity
    #[test]
    fn join_empty_is_identity(path in absolute_path_strategy()) {
        prop_assert_eq!(path.join(""), path.clone());
        prop_assert_eq!(path.resolve(""), path);
    }

    // Joined paths stay normalized and absolute
    #[test]
    fn join_stays_absolute(base in absolute_path_strategy(), part in relative_part_strategy()) {
        let joined = base.join(&part);
        prop_assert!(joined.as_str().starts_with('/'));
        prop_assert!(!joined.segments().contains(&".."));
        prop_assert_eq!(AbsolutePath::new(joined.as_str()).unwrap(), joined);
    }

    // Relative joins renormalize to a fixed point
    #[test]
    fn relative_join_is_normalized(base in relative_part_strategy(), part in relative_part_strategy()) {
        let joined = RelativePath::new(&base).unwrap().join(&part);
        prop_assert_eq!(RelativePath::new(joined.as_str()).unwrap(), joined);
    }

    // An appended child always descends from its base
    #[test]
    fn joined_child_descends(base in absolute_path_strategy(), name in segment_strategy()) {
        let child = base.join(&name);
        prop_assert!(child.descends_from(&base));
        prop_assert_eq!(base.relationship(&child), PathRelationship::Ancestor);
        prop_assert_eq!(child.parent(), base);
    }

    // Resolving an absolute part ignores the base
    #[test]
    fn resolve_absolute_discards_base(
        base in absolute_path_strategy(),
        other in absolute_path_strategy(),
    ) {
        prop_assert_eq!(base.resolve(&other), other);
    }
}
