//! Property-based tests for URL paths.

use super::encoding::encode_component;
use super::{Query, RootPathUrl, UrlParts, UrlPathOps};
use proptest::prelude::*;

// Segments mixing unreserved and reserved characters, never dots-only
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_~ !$&'()*+,;=:@-]{1,10}".prop_filter("dot segment", |s| {
        !s.chars().all(|c| c == '.')
    })
}

// Query keys and values may carry anything except `%`
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.~!$&'()*+,;=:@/?#\\[\\]-]{0,10}"
}

fn parts_strategy() -> impl Strategy<Value = UrlParts> {
    (
        prop::collection::vec(segment_strategy(), 0..5),
        any::<bool>(),
        prop::option::of(prop::collection::vec(
            (component_strategy(), component_strategy()),
            0..4,
        )),
        prop::option::of(component_strategy()),
    )
        .prop_map(|(segments, directory, query, fragment)| {
            UrlParts {
                pathname: directory_path(&segments, directory),
                query: query.map(|pairs| pairs.into_iter().collect::<Query>()),
                fragment,
            }
        })
}

fn directory_path(segments: &[String], directory: bool) -> String {
    let mut path = format!("/{}", segments.join("/"));
    if directory && !segments.is_empty() {
        path.push('/');
    }
    path
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Decorations survive build then parse; the pathname comes back encoded
    #[test]
    fn build_then_parse_round_trips(parts in parts_strategy()) {
        let built = parts.to_string();
        let parsed = UrlParts::parse(&built);
        prop_assert_eq!(&parsed.query, &parts.query);
        prop_assert_eq!(&parsed.fragment, &parts.fragment);
        prop_assert_eq!(parsed.to_string(), built);
    }

    // Encoding is idempotent, so already-encoded text is never re-escaped
    #[test]
    fn encoding_is_idempotent(raw in ".{0,20}") {
        let once = encode_component(&raw);
        prop_assert_eq!(encode_component(&once), once);
    }

    // A URL built from its own href is the same URL
    #[test]
    fn href_reparses_to_itself(parts in parts_strategy()) {
        let url = RootPathUrl::new(parts.to_string()).unwrap();
        let again = RootPathUrl::new(url.href()).unwrap();
        prop_assert_eq!(again.href(), url.href());
        prop_assert_eq!(again.query(), url.query());
        prop_assert_eq!(again.fragment(), url.fragment());
    }

    // Joining the empty reference is identity
    #[test]
    fn join_empty_is_identity(parts in parts_strategy()) {
        let url = RootPathUrl::new(parts.to_string()).unwrap();
        prop_assert_eq!(url.join(""), url.clone());
        prop_assert_eq!(url.resolve("").unwrap(), url);
    }

    // base.join(child.relative_to(base)) == child, for files and directories
    #[test]
    fn relative_to_then_join_is_identity(
        base in prop::collection::vec(segment_strategy(), 0..4),
        base_directory in any::<bool>(),
        child in prop::collection::vec(segment_strategy(), 0..4),
        child_directory in any::<bool>(),
        query in prop::option::of(prop::collection::vec(
            (component_strategy(), component_strategy()),
            0..3,
        )),
    ) {
        let base = RootPathUrl::new(directory_path(&base, base_directory)).unwrap();
        let child = RootPathUrl::new(directory_path(&child, child_directory)).unwrap();
        let child = match query {
            Some(pairs) => child.replace_query(pairs.into_iter().collect::<Query>()),
            None => child,
        };
        let relative = child.relative_to(&base);
        prop_assert_eq!(base.join(&relative), child);
    }

    // Equal segments, or segments differing only in query, still rejoin
    #[test]
    fn relative_to_self_then_join_is_identity(
        segments in prop::collection::vec(segment_strategy(), 0..4),
        directory in any::<bool>(),
        query in prop::collection::vec((component_strategy(), component_strategy()), 0..3),
    ) {
        let base = RootPathUrl::new(directory_path(&segments, directory)).unwrap();
        prop_assert_eq!(base.join(base.relative_to(&base)), base.clone());

        let child = base.replace_query(query.into_iter().collect::<Query>());
        prop_assert_eq!(base.join(child.relative_to(&base)), child);
    }

    // A URL never strictly descends from itself
    #[test]
    fn descends_from_excludes_self(parts in parts_strategy()) {
        let url = RootPathUrl::new(parts.to_string()).unwrap();
        prop_assert!(!url.descends_from(&url));
        prop_assert!(url.descends_from_inclusive(&url));
    }
}
