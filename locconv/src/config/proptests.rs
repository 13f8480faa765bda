//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::ConfigValidator;
use crate::logging::LogLevel;
use crate::platform::Platform;
use proptest::prelude::*;

fn platform_strategy() -> impl Strategy<Value = Platform> {
    prop_oneof![Just(Platform::Posix), Just(Platform::Windows)]
}

fn log_level_strategy() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Quiet),
        Just(LogLevel::Normal),
        Just(LogLevel::Verbose)
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(platform_strategy()),
        prop::option::of(prop::collection::vec("[a-z][a-z0-9+.-]{0,8}", 0..5)),
        prop::option::of(log_level_strategy()),
    )
        .prop_map(|(platform, protocols, log_mode)| Config {
            platform,
            protocols,
            log_mode,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 1000,
        .. ProptestConfig::default()
    })]

    // Non-None scalars from the higher layer always win
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.platform, high.platform.or(low.platform));
        prop_assert_eq!(result.log_mode, high.log_mode.or(low.log_mode));
    }

    // Merged protocol lists keep every input protocol exactly once
    #[test]
    fn config_merge_protocols_union(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        let merged = result.protocols.clone().unwrap_or_default();
        for protocol in low.protocols.iter().flatten().chain(high.protocols.iter().flatten()) {
            let hits = merged.iter().filter(|p| p.eq_ignore_ascii_case(protocol)).count();
            prop_assert_eq!(hits, 1);
        }
    }

    // A merged config built from generated schemes always validates
    #[test]
    fn config_merge_result_validates(low in config_strategy(), high in config_strategy()) {
        let mut result = Config::default();
        ConfigMerger::merge_into(&mut result, &low);
        ConfigMerger::merge_into(&mut result, &high);
        prop_assert!(ConfigValidator::validate(&result).is_ok());
    }

    // Merging with an empty layer changes nothing once protocols are deduplicated
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut once = Config::default();
        ConfigMerger::merge_into(&mut once, &config);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &Config::default());
        prop_assert_eq!(once, twice);
    }
}
