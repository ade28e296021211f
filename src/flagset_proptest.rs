//! Property-based tests for flagette ordering and resolution.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::flagette::{AssignOper, Flagette};
    use crate::flagset::{FlagKey, FlagetteSet};
    use crate::options::Options;
    use crate::phases::{orchestrator, serialize};
    use proptest::prelude::*;

    fn options() -> Options {
        Options {
            config_filename: "/nonexistent/overlay-run/.env".into(),
            override_with_config_vars: false,
            env_prefix_flag_name: "env_prefix".to_string(),
            override_with_env_vars: false,
        }
    }

    /// Flagettes with distinct keys and sequence numbers 1..=n.
    fn sequenced_flagettes() -> impl Strategy<Value = Vec<(FlagKey, Flagette)>> {
        prop::collection::btree_map("[a-z]{1,8}", ("[a-z0-9]{0,6}", any::<bool>()), 0..16).prop_map(
            |entries| {
                entries
                    .into_iter()
                    .enumerate()
                    .map(|(index, (key, (value, equals)))| {
                        let oper = if equals {
                            AssignOper::Equals
                        } else {
                            AssignOper::Space
                        };
                        let mut flagette = Flagette::new(format!("--{}", key), oper, value);
                        flagette.set_sequence(index as u64 + 1);
                        (FlagKey::long(key), flagette)
                    })
                    .collect()
            },
        )
    }

    fn build(entries: &[(FlagKey, Flagette)]) -> FlagetteSet {
        let mut set = FlagetteSet::new();
        for (key, flagette) in entries {
            set.insert(key.clone(), flagette.clone());
        }
        set
    }

    // ============================================================================
    // serialization property tests
    // ============================================================================

    proptest! {
        /// Property: serialization ignores the order entries were inserted in
        #[test]
        fn serialization_is_insertion_order_independent(
            (entries, shuffled) in sequenced_flagettes()
                .prop_flat_map(|entries| (Just(entries.clone()), Just(entries).prop_shuffle()))
        ) {
            let ordered = serialize::execute(&build(&entries));
            let permuted = serialize::execute(&build(&shuffled));
            prop_assert_eq!(ordered, permuted);
        }

        /// Property: serialized output follows ascending sequence numbers
        #[test]
        fn serialization_follows_sequence(entries in sequenced_flagettes()) {
            let expected: Vec<String> = entries
                .iter()
                .flat_map(|(_, flagette)| flagette.to_args())
                .collect();
            prop_assert_eq!(serialize::execute(&build(&entries)), expected);
        }

        /// Property: an `=` flagette always serializes to `name=value`
        #[test]
        fn equals_flagette_is_single_token(key in "[a-z]{1,8}", value in "[ -~]{0,12}") {
            let mut set = FlagetteSet::new();
            let mut flagette = Flagette::new(format!("--{}", key), AssignOper::Equals, value.clone());
            flagette.set_sequence(1);
            set.insert(FlagKey::long(key.clone()), flagette);
            prop_assert_eq!(serialize::execute(&set), vec![format!("--{}={}", key, value)]);
        }
    }

    // ============================================================================
    // resolver property tests
    // ============================================================================

    proptest! {
        /// Property: a non-flag first token is returned as the command verbatim
        #[test]
        fn non_flag_first_token_is_command(
            command in "[a-zA-Z0-9_./][a-zA-Z0-9_./-]{0,15}",
            rest in prop::collection::vec("[a-z=-]{0,6}", 0..6),
        ) {
            let env: Vec<(String, String)> = Vec::new();
            let mut args = vec![command.clone()];
            args.extend(rest);
            let resolution = orchestrator::parse_with_env(&options(), &args, &env).unwrap();
            prop_assert_eq!(resolution.command, command);
        }

        /// Property: repeated resolution of the same input is byte-identical
        #[test]
        fn resolution_is_deterministic(rest in prop::collection::vec("-{0,2}[a-c]{1,2}(=[a-z]{0,3})?", 0..10)) {
            let env: Vec<(String, String)> = Vec::new();
            let mut args = vec!["run".to_string()];
            args.extend(rest);
            let first = orchestrator::parse_with_env(&options(), &args, &env).unwrap().args();
            let second = orchestrator::parse_with_env(&options(), &args, &env).unwrap().args();
            prop_assert_eq!(first, second);
        }
    }
}
