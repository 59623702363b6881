//! Extended property-based tests for URI normalization.

use proptest::prelude::*;

use crate::uri::{normalize, normalize_path, normalize_split};

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,12}".prop_filter("plain segments only", |s| s != "." && s != "..")
}

fn clean_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..=6).prop_map(|parts| parts.join("/"))
}

proptest! {
    /// A clean path passes through normalization unchanged
    #[test]
    fn clean_paths_are_fixpoints(path in clean_path_strategy()) {
        prop_assert_eq!(normalize(&path).unwrap(), path);
    }

    /// The scheme survives the round trip through normalize_split
    #[test]
    fn scheme_is_preserved(scheme in "[a-z]{1,8}", path in clean_path_strategy()) {
        let (split_scheme, split_path) = normalize_split(&format!("{scheme}://{path}")).unwrap();
        prop_assert_eq!(split_scheme, scheme);
        prop_assert_eq!(split_path, path);
    }

    /// A trailing slash in the input survives into the output
    #[test]
    fn trailing_slash_is_preserved(path in clean_path_strategy()) {
        let normalized = normalize(&format!("{path}/")).unwrap();
        prop_assert!(normalized.ends_with('/'));
    }

    /// Backslash input and forward slash input normalize identically
    #[test]
    fn separators_are_unified(parts in prop::collection::vec(segment_strategy(), 1..=5)) {
        let forward = parts.join("/");
        let backward = parts.join("\\");
        prop_assert_eq!(normalize(&forward).unwrap(), normalize(&backward).unwrap());
    }

    /// Interleaved single dots never change the outcome
    #[test]
    fn single_dots_are_inert(parts in prop::collection::vec(segment_strategy(), 1..=5)) {
        let plain = parts.join("/");
        let dotted = parts.join("/./");
        prop_assert_eq!(normalize(&dotted).unwrap(), normalize(&plain).unwrap());
    }

    /// normalize_path agrees with normalize modulo the trailing slash
    #[test]
    fn normalize_path_matches_normalize(path in clean_path_strategy()) {
        let with_slash = normalize_path(&path).unwrap();
        let plain = normalize(&path).unwrap();
        prop_assert_eq!(with_slash, format!("{plain}/"));
    }
}
