//! The priority-ordered search over streams and locations.
//!
//! Resolution walks the prefix groups of a scheme in reverse lexicographic
//! order, the streams of each matching group in registration order, and the
//! search roots of each stream in location priority order. The first
//! accepted candidate wins for singular queries; plural queries keep
//! walking and accumulate.

use super::{CacheEntry, Locator};
use crate::error::{Error, Result};
use crate::location::Location;
use crate::resource::Resource;
use crate::stream::Stream;
use crate::uri::normalize_split;

impl Locator {
    /// Resolves a query through the memo cache.
    ///
    /// Normalization failures are converted into the empty result and
    /// cached; an unregistered scheme propagates as an error and is not
    /// cached.
    pub(super) fn find_cached(&self, uri: &str, array: bool, all: bool) -> Result<CacheEntry> {
        let key = format!("{uri}@{}{}", u8::from(array), u8::from(all));

        if let Some(hit) = self.cache.borrow().get(&key) {
            return Ok(hit.clone());
        }

        let entry = match normalize_split(uri) {
            Ok((scheme, file)) => self.find(&scheme, &file, array, all)?,
            Err(Error::InvalidUri { .. }) => {
                // Malformed input resolves to "not found"
                if array {
                    CacheEntry::Many(Vec::new())
                } else {
                    CacheEntry::Single(None)
                }
            }
            Err(other) => return Err(other),
        };

        self.cache.borrow_mut().insert(key, entry.clone());

        Ok(entry)
    }

    /// The search algorithm proper.
    ///
    /// Results are ordered by prefix group (longest first), then stream
    /// priority within the group, then location priority. Callers depend on
    /// this ordering for "first match wins".
    fn find(&self, scheme: &str, file: &str, array: bool, all: bool) -> Result<CacheEntry> {
        let groups = self
            .streams
            .get(scheme)
            .ok_or_else(|| Error::SchemeNotFound {
                scheme: scheme.to_string(),
            })?;

        log::debug!("searching {scheme}://{file}");

        let mut results: Vec<Resource> = Vec::new();

        // Reverse key order puts longer prefixes first
        for (prefix, streams) in groups.iter().rev() {
            if !prefix.is_empty() && !file.starts_with(prefix.as_str()) {
                continue;
            }

            for stream in streams {
                let roots = self.search_paths(stream);

                // The prefix is stripped before lookup below the root
                let filename = format!("/{}", trim_separators(&file[prefix.len()..]));

                for (root, location) in roots {
                    let base = format!("{}/", self.base_path.trim_end_matches('/'));

                    // The root keeps its trailing slash and the filename its
                    // leading one; drop the root's to join on exactly one.
                    let joined = format!("{}{}", root.trim_end_matches('/'), filename);

                    let (full_path, rel_path, resource_base) = if is_absolute_search_root(&root) {
                        let full = joined.trim_end_matches('/').to_string();
                        // Strip the base path back off when the root lies
                        // under it; otherwise the absolute path stands alone.
                        match full.strip_prefix(&base) {
                            Some(rel) => {
                                let rel = rel.to_string();
                                (full, rel, base.clone())
                            }
                            None => (full.clone(), full, String::new()),
                        }
                    } else {
                        let rel = joined.trim_matches('/').to_string();
                        (format!("{base}{rel}"), rel, base.clone())
                    };

                    if all || self.filesystem.exists(&full_path) {
                        let resource =
                            Resource::new(stream.clone(), location, &rel_path, &resource_base);

                        if !array {
                            return Ok(CacheEntry::Single(Some(resource)));
                        }
                        results.push(resource);
                    }
                }
            }
        }

        Ok(if array {
            CacheEntry::Many(results)
        } else {
            CacheEntry::Single(None)
        })
    }

    /// The candidate search roots for one stream.
    ///
    /// A shared stream is its own single root. Otherwise the stream path is
    /// appended to every location path, highest priority location first.
    /// Two locations composing to the same root keep the first (highest
    /// priority) occurrence.
    fn search_paths(&self, stream: &Stream) -> Vec<(String, Option<Location>)> {
        if stream.is_shared() {
            return vec![(stream.path().to_string(), None)];
        }

        let mut roots: Vec<(String, Option<Location>)> = Vec::new();

        for location in self.locations() {
            let mut parts: Vec<&str> = Vec::new();

            let location_path = location.path().trim_end_matches('/');
            if !location_path.is_empty() {
                parts.push(location_path);
            }

            let stream_path = stream.path().trim_matches('/');
            if !stream_path.is_empty() {
                parts.push(stream_path);
            }

            let root = parts.join("/");

            if !roots.iter().any(|(existing, _)| existing == &root) {
                roots.push((root, Some(location.clone())));
            }
        }

        roots
    }
}

/// Whether a search root is absolute rather than base-path-relative.
///
/// Covers both unix roots (`/...`) and Windows drive roots (`c:...`).
fn is_absolute_search_root(path: &str) -> bool {
    if path.starts_with('/') {
        return true;
    }

    let mut prev_is_word = false;
    for c in path.chars() {
        if c == ':' && prev_is_word {
            return true;
        }
        prev_is_word = c.is_ascii_alphanumeric() || c == '_';
    }

    false
}

fn trim_separators(s: &str) -> &str {
    s.trim_matches(|c| c == '/' || c == '\\')
}
