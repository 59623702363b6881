//! URI normalization functions.
//!
//! This module implements the segment-stack canonicalization used across the
//! whole crate: backslash unification, `.`/`..`/empty segment collapsing,
//! scheme splitting, and rejection of `..` sequences that would escape the
//! root.

use crate::error::{Error, Result};

/// Canonicalize a URI.
///
/// The result has no `.`, `..`, or empty path segments. A trailing `/` in
/// the input is preserved. Backslashes are converted to forward slashes, so
/// Windows-style input (`c:\foo\bar`) normalizes to `c:/foo/bar`. When the
/// input carries a `scheme://` part, the scheme is kept in the output.
///
/// # Errors
///
/// Returns [`Error::InvalidUri`] if a `..` segment would climb above the
/// root of the path, including above a Windows drive root such as `c:/`.
///
/// # Examples
///
/// ```
/// use strata::uri::normalize;
///
/// assert_eq!(normalize("path/to/../file.txt").unwrap(), "path/file.txt");
/// assert_eq!(normalize("//foo//").unwrap(), "/foo/");
/// assert_eq!(normalize("files://a/./b.txt").unwrap(), "files://a/b.txt");
/// assert!(normalize("path/../../file.txt").is_err());
/// ```
pub fn normalize(uri: &str) -> Result<String> {
    let (scheme, path) = normalize_split(uri)?;

    if scheme.is_empty() {
        Ok(path)
    } else {
        Ok(format!("{scheme}://{path}"))
    }
}

/// Canonicalize a URI and split it into its scheme and path parts.
///
/// Input without a `://` separator yields an empty scheme. The path part is
/// normalized exactly as by [`normalize`].
///
/// # Errors
///
/// Returns [`Error::InvalidUri`] under the same conditions as [`normalize`].
///
/// # Examples
///
/// ```
/// use strata::uri::normalize_split;
///
/// let (scheme, path) = normalize_split("files://sub/../test.json").unwrap();
/// assert_eq!(scheme, "files");
/// assert_eq!(path, "test.json");
///
/// let (scheme, path) = normalize_split("bare/path").unwrap();
/// assert_eq!(scheme, "");
/// assert_eq!(path, "bare/path");
/// ```
pub fn normalize_split(uri: &str) -> Result<(String, String)> {
    let unified = uri.replace('\\', "/");

    let (scheme, path) = match unified.split_once("://") {
        Some((scheme, path)) => (scheme.to_string(), path.to_string()),
        None => (String::new(), unified),
    };

    if path.is_empty() {
        return Ok((scheme, path));
    }

    let parts: Vec<&str> = path.split('/').collect();
    let mut stack: Vec<&str> = Vec::new();

    for (i, part) in parts.iter().enumerate() {
        if *part == ".." {
            let popped = stack.pop();
            let escaped = match popped {
                None => true,
                Some(p) if p.is_empty() => true,
                // A drive-letter segment ("c:") at the bottom of the stack
                // is a root: popping it would escape the drive.
                Some(p) => stack.is_empty() && p.find(':').is_some_and(|pos| pos > 0),
            };
            if escaped {
                return Err(Error::InvalidUri {
                    uri: uri.to_string(),
                    reason: "path escapes above the root".to_string(),
                });
            }
        } else if (i > 0 && part.is_empty()) || *part == "." {
            continue;
        } else {
            stack.push(part);
        }
    }

    // A trailing empty, ".", or ".." segment means the input ended with a
    // separator; keep the trailing slash in the output.
    if let Some(last) = parts.last() {
        if last.is_empty() || *last == "." || *last == ".." {
            stack.push("");
        }
    }

    Ok((scheme, stack.join("/")))
}

/// Normalize a directory path, guaranteeing exactly one trailing `/`.
///
/// The beginning of the path is left untouched (relative stays relative,
/// absolute stays absolute), but `c:\` becomes `c:/`. An empty path stays
/// empty.
///
/// # Errors
///
/// Returns [`Error::InvalidUri`] under the same conditions as [`normalize`].
///
/// # Examples
///
/// ```
/// use strata::uri::normalize_path;
///
/// assert_eq!(normalize_path("foo/bar").unwrap(), "foo/bar/");
/// assert_eq!(normalize_path("foo/bar///").unwrap(), "foo/bar/");
/// assert_eq!(normalize_path("").unwrap(), "");
/// ```
pub fn normalize_path(path: &str) -> Result<String> {
    let path = normalize(path)?;

    // Guard against producing "/" out of an empty result.
    if path.is_empty() {
        return Ok(path);
    }

    Ok(format!("{}/", path.trim_end_matches('/')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_table() {
        // (input, expected); None means rejection
        let cases: &[(&str, Option<&str>)] = &[
            ("", Some("")),
            ("./", Some("")),
            ("././/./", Some("")),
            ("././/../", None),
            ("/", Some("/")),
            ("//", Some("/")),
            ("///", Some("/")),
            ("/././", Some("/")),
            ("foo", Some("foo")),
            ("/foo", Some("/foo")),
            ("//foo", Some("/foo")),
            ("/foo/", Some("/foo/")),
            ("//foo//", Some("/foo/")),
            ("path/to/file.txt", Some("path/to/file.txt")),
            ("path/to/../file.txt", Some("path/file.txt")),
            ("path/to/../../file.txt", Some("file.txt")),
            ("path/to/../../../file.txt", None),
            ("/path/to/file.txt", Some("/path/to/file.txt")),
            ("/path/to/../file.txt", Some("/path/file.txt")),
            ("/path/to/../../file.txt", Some("/file.txt")),
            ("/path/to/../../../file.txt", None),
            ("c:\\", Some("c:/")),
            ("c:\\path\\to\\file.txt", Some("c:/path/to/file.txt")),
            ("c:\\path\\to\\../file.txt", Some("c:/path/file.txt")),
            ("c:\\path\\to\\../../file.txt", Some("c:/file.txt")),
            ("c:\\path\\to\\../../../file.txt", None),
            ("\\path\\to\\file.txt", Some("/path/to/file.txt")),
            ("\\path/to\\file.txt", Some("/path/to/file.txt")),
            ("stream://path/to/file.txt", Some("stream://path/to/file.txt")),
            ("stream://path/to/../file.txt", Some("stream://path/file.txt")),
            ("stream://path/to/../../file.txt", Some("stream://file.txt")),
            ("stream://path/to/../../../file.txt", None),
        ];

        for (input, expected) in cases {
            let result = normalize(input);
            match expected {
                Some(expected) => {
                    assert_eq!(
                        result.as_deref().ok(),
                        Some(*expected),
                        "normalize({input:?})"
                    );
                }
                None => assert!(result.is_err(), "normalize({input:?}) should fail"),
            }
        }
    }

    #[test]
    fn test_normalize_split_scheme() {
        let (scheme, path) = normalize_split("files://path/to/file.txt").unwrap();
        assert_eq!(scheme, "files");
        assert_eq!(path, "path/to/file.txt");
    }

    #[test]
    fn test_normalize_split_no_scheme() {
        let (scheme, path) = normalize_split("path/to/file.txt").unwrap();
        assert_eq!(scheme, "");
        assert_eq!(path, "path/to/file.txt");
    }

    #[test]
    fn test_normalize_split_empty_path() {
        let (scheme, path) = normalize_split("files://").unwrap();
        assert_eq!(scheme, "files");
        assert_eq!(path, "");
    }

    #[test]
    fn test_normalize_split_only_first_separator_counts() {
        let (scheme, path) = normalize_split("a://b://c").unwrap();
        assert_eq!(scheme, "a");
        assert_eq!(path, "b:/c");
    }

    #[test]
    fn test_normalize_rejects_escape_with_scheme() {
        let result = normalize("files://../file.txt");
        assert!(result.is_err());
        assert!(result.unwrap_err().is_invalid_uri());
    }

    #[test]
    fn test_normalize_path_adds_trailing_slash() {
        assert_eq!(normalize_path("foo").unwrap(), "foo/");
        assert_eq!(normalize_path("foo/").unwrap(), "foo/");
        assert_eq!(normalize_path("foo//").unwrap(), "foo/");
        assert_eq!(normalize_path("/foo/bar").unwrap(), "/foo/bar/");
    }

    #[test]
    fn test_normalize_path_empty_stays_empty() {
        assert_eq!(normalize_path("").unwrap(), "");
        assert_eq!(normalize_path("./").unwrap(), "");
    }

    #[test]
    fn test_normalize_path_root() {
        assert_eq!(normalize_path("/").unwrap(), "/");
    }

    #[test]
    fn test_normalize_path_windows_drive() {
        assert_eq!(normalize_path("c:\\data").unwrap(), "c:/data/");
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        // Strategy to generate well-formed URI strings
        fn uri_strategy() -> impl Strategy<Value = String> {
            (
                prop::option::of("[a-z]{1,8}"),
                prop::collection::vec("[a-zA-Z0-9_.-]{1,10}", 0..=5),
            )
                .prop_map(|(scheme, parts)| {
                    let path = parts.join("/");
                    match scheme {
                        Some(scheme) => format!("{scheme}://{path}"),
                        None => path,
                    }
                })
        }

        // Strategy for paths with ., .., and empty segments mixed in
        fn messy_path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec(
                prop_oneof![
                    Just(String::new()),
                    Just(".".to_string()),
                    Just("..".to_string()),
                    "[a-zA-Z0-9_-]{1,10}".prop_map(|s| s),
                ],
                1..=8,
            )
            .prop_map(|parts| parts.join("/"))
        }

        proptest! {
            /// Normalization is idempotent
            #[test]
            fn normalize_idempotent(s in uri_strategy()) {
                if let Ok(once) = normalize(&s) {
                    let twice = normalize(&once).unwrap();
                    prop_assert_eq!(once, twice);
                }
            }

            /// Normalized output never contains dot segments
            #[test]
            fn normalize_no_dot_segments(s in messy_path_strategy()) {
                if let Ok(normalized) = normalize(&s) {
                    for segment in normalized.split('/') {
                        prop_assert_ne!(segment, ".");
                        prop_assert_ne!(segment, "..");
                    }
                }
            }

            /// More leading .. segments than real segments always rejects
            #[test]
            fn normalize_rejects_escapes(
                real in prop::collection::vec("[a-z]{1,6}", 0..=3),
                extra in 1usize..=3,
            ) {
                let ups = real.len() + extra;
                let mut parts = real;
                parts.extend(std::iter::repeat("..".to_string()).take(ups));
                let uri = parts.join("/");
                prop_assert!(normalize(&uri).is_err());
            }

            /// normalize_path output always ends in a slash when non-empty
            #[test]
            fn normalize_path_trailing_slash(s in uri_strategy()) {
                if let Ok(path) = normalize_path(&s) {
                    if !path.is_empty() {
                        prop_assert!(path.ends_with('/'));
                        prop_assert!(!path.ends_with("//"));
                    }
                }
            }
        }
    }
}
