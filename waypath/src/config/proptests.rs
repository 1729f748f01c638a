//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{SchemePolicy, UrlConfig};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn scheme_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9+.-]{0,8}"
}

fn config_strategy() -> impl Strategy<Value = UrlConfig> {
    (
        prop::option::of(prop::collection::vec(scheme_strategy(), 1..4)),
        prop::option::of(prop::collection::vec(scheme_strategy(), 0..4)),
    )
        .prop_map(|(hierarchical_schemes, extra_hierarchical_schemes)| UrlConfig {
            hierarchical_schemes,
            extra_hierarchical_schemes,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // A replacement list from the higher-precedence config always wins
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        let expected = high.hierarchical_schemes.clone().or(low.hierarchical_schemes.clone());
        prop_assert_eq!(merged.hierarchical_schemes, expected);
    }

    // Extras from both sides survive a merge
    #[test]
    fn config_merge_keeps_all_extras(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        let policy = SchemePolicy::from(&merged);
        for scheme in low.extra_hierarchical_schemes.iter().chain(&high.extra_hierarchical_schemes).flatten() {
            prop_assert!(policy.is_hierarchical(scheme));
        }
    }

    // Merging a config into itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut once = UrlConfig::default();
        ConfigMerger::merge_into(&mut once, &config);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &config);
        prop_assert_eq!(twice, once);
    }

    // Well-formed schemes validate unless they are known opaque schemes
    #[test]
    fn well_formed_schemes_validate(scheme in scheme_strategy()) {
        let config = UrlConfig {
            extra_hierarchical_schemes: Some(vec![scheme.clone()]),
            ..Default::default()
        };
        let result = ConfigValidator::validate(&config);
        if super::validator::OPAQUE_SCHEMES.contains(&scheme.as_str()) {
            prop_assert!(result.is_err());
        } else {
            prop_assert!(result.is_ok());
        }
    }
}
