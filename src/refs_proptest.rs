//! Property-based tests for reference normalization.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::refs::version_label;
    use proptest::prelude::*;

    proptest! {
        /// Property: branch labels never contain a path separator
        #[test]
        fn branch_label_never_contains_separator(branch in "[^/]*") {
            let result = version_label(&format!("refs/heads/{}", branch));
            prop_assert!(
                !result.contains('/'),
                "label {:?} from branch {:?} contains a separator",
                result,
                branch
            );
        }

        /// Property: branch sanitization is idempotent
        /// (re-normalizing the output is a no-op)
        #[test]
        fn branch_sanitization_is_idempotent(branch in ".+") {
            let once = version_label(&format!("refs/heads/{}", branch));
            let twice = version_label(&format!("refs/heads/{}", once));
            prop_assert_eq!(once, twice);
        }

        /// Property: branch labels only contain characters from the safe class
        #[test]
        fn branch_label_restricted_charset(branch in ".+") {
            let result = version_label(&format!("refs/heads/{}", branch));
            for ch in result.chars() {
                prop_assert!(
                    ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-'),
                    "unsafe character {:?} in label {:?}",
                    ch,
                    result
                );
            }
        }

        /// Property: normalization is deterministic (same input = same output)
        #[test]
        fn normalization_is_deterministic(git_ref in ".*") {
            let result1 = version_label(&git_ref);
            let result2 = version_label(&git_ref);
            prop_assert_eq!(result1, result2);
        }

        /// Property: normalization never produces an empty label from a
        /// non-empty reference
        #[test]
        fn normalization_never_empty(git_ref in ".+") {
            let result = version_label(&git_ref);
            prop_assert!(!result.is_empty(), "empty label from {:?}", git_ref);
        }

        /// Property: semver release tags lose their v prefix
        #[test]
        fn tag_semver_v_prefix_stripped(major in 0u64..1000, minor in 0u64..1000, patch in 0u64..1000) {
            let result = version_label(&format!("refs/tags/v{}.{}.{}", major, minor, patch));
            prop_assert_eq!(result, format!("{}.{}.{}", major, minor, patch));
        }

        /// Property: merge pull refs become pr-<number>
        #[test]
        fn pull_merge_ref_becomes_pr_number(number in 1u64..1_000_000) {
            let result = version_label(&format!("refs/pull/{}/merge", number));
            prop_assert_eq!(result, format!("pr-{}", number));
        }
    }
}
