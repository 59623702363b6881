//! The resource locator registry.
//!
//! The locator owns the registered [`Stream`]s and [`Location`]s and turns
//! `scheme://path` URIs into concrete filesystem paths.
//!
//! # Key Concepts
//!
//! ## Streams
//!
//! A stream maps a scheme (plus optional prefix) to a base directory.
//! Within a scheme, prefix groups are tried in reverse lexicographic order,
//! which puts longer prefixes first for typical prefix sets. This ordering
//! is an approximation of longest-prefix-first matching, kept for
//! compatibility; prefixes of differing lengths with overlapping characters
//! are ordered lexicographically, not by length.
//!
//! ## Locations
//!
//! Locations are priority tiers: every non-shared stream is searched once
//! per location, most recently registered location first. Shared streams
//! bypass locations entirely.
//!
//! ## Caching
//!
//! Query results are memoized per `(uri, flags)` key for the lifetime of
//! the locator. Registering or removing streams and locations does NOT
//! invalidate previously cached results; registries are expected to be
//! populated once at startup and queried afterwards.
//!
//! # Examples
//!
//! ```
//! use strata::{Locator, MemoryFilesystem};
//!
//! let fs = MemoryFilesystem::new(["/base/d2/sub/x.txt"]);
//! let mut locator = Locator::with_filesystem("/base", Box::new(fs)).unwrap();
//!
//! locator.register_location("L1", Some("d1")).unwrap();
//! locator.register_location("L2", Some("d2")).unwrap();
//! locator.register_stream("f", "", &["sub"], false).unwrap();
//!
//! let found = locator.find_resource("f://x.txt", true, false).unwrap();
//! assert_eq!(found.as_deref(), Some("/base/d2/sub/x.txt"));
//! ```

mod search;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use crate::error::{Error, Result};
use crate::filesystem::{Filesystem, OsFilesystem};
use crate::location::Location;
use crate::resource::Resource;
use crate::stream::Stream;
use crate::uri::{normalize_path, normalize_split};

/// Schemes that cannot be registered.
const RESERVED_SCHEMES: &[&str] = &["file"];

/// Memoized result of one query, keyed by `(uri, flags)`.
#[derive(Debug, Clone)]
enum CacheEntry {
    Single(Option<Resource>),
    Many(Vec<Resource>),
}

/// The resource locator.
///
/// Holds the registered streams and locations, the base path every
/// relative search root is anchored to, and a per-query memo cache.
///
/// The locator is single-threaded by design: the memo cache uses interior
/// mutability without a lock, so sharing a locator across threads requires
/// external synchronization (and the type system enforces this).
pub struct Locator {
    /// scheme -> prefix -> streams in registration order.
    streams: HashMap<String, BTreeMap<String, Vec<Stream>>>,
    /// Registration order; search priority is the reverse.
    locations: Vec<Location>,
    base_path: String,
    filesystem: Box<dyn Filesystem>,
    cache: RefCell<HashMap<String, CacheEntry>>,
}

impl fmt::Debug for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locator")
            .field("streams", &self.streams)
            .field("locations", &self.locations)
            .field("base_path", &self.base_path)
            .finish_non_exhaustive()
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self {
            streams: HashMap::new(),
            locations: Vec::new(),
            base_path: String::new(),
            filesystem: Box::new(OsFilesystem),
            cache: RefCell::new(HashMap::new()),
        }
    }
}

impl Locator {
    /// Creates a locator anchored at `base_path`, querying the real
    /// filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUri`] if the base path cannot be normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata::Locator;
    ///
    /// let locator = Locator::new("/var/app").unwrap();
    /// assert_eq!(locator.base_path(), "/var/app/");
    /// ```
    pub fn new(base_path: &str) -> Result<Self> {
        Self::with_filesystem(base_path, Box::new(OsFilesystem))
    }

    /// Creates a locator with a custom [`Filesystem`] collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUri`] if the base path cannot be normalized.
    pub fn with_filesystem(base_path: &str, filesystem: Box<dyn Filesystem>) -> Result<Self> {
        Ok(Self {
            streams: HashMap::new(),
            locations: Vec::new(),
            base_path: normalize_path(base_path)?,
            filesystem,
            cache: RefCell::new(HashMap::new()),
        })
    }

    /// The normalized base path, with a trailing `/` when non-empty.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    // ---- Stream registration ----

    /// Registers a stream definition.
    ///
    /// Cached query results are not invalidated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RestrictedScheme`] for a reserved scheme such as
    /// `file`.
    pub fn add_stream(&mut self, stream: Stream) -> Result<()> {
        if RESERVED_SCHEMES.contains(&stream.scheme()) {
            return Err(Error::RestrictedScheme {
                scheme: stream.scheme().to_string(),
            });
        }

        log::debug!(
            "registering stream {}://{} -> {}",
            stream.scheme(),
            stream.prefix(),
            stream.path()
        );

        self.streams
            .entry(stream.scheme().to_string())
            .or_default()
            .entry(stream.prefix().to_string())
            .or_default()
            .push(stream);

        Ok(())
    }

    /// Registers one stream per path for `scheme` under `prefix`.
    ///
    /// An empty `paths` slice registers a single stream whose path defaults
    /// to the scheme name. A multi-element list is registered in reverse
    /// input order, so the LAST path is matched first within the prefix.
    /// Note this priority direction is the opposite of location priority.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RestrictedScheme`] for a reserved scheme, or
    /// [`Error::InvalidUri`] if a path cannot be normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata::Locator;
    ///
    /// let mut locator = Locator::new("/base").unwrap();
    /// locator.register_stream("files", "", &["p1", "p2", "p3"], false).unwrap();
    /// // p3 now has the highest priority within the prefix
    /// ```
    pub fn register_stream(
        &mut self,
        scheme: &str,
        prefix: &str,
        paths: &[&str],
        shared: bool,
    ) -> Result<()> {
        if paths.is_empty() {
            return self.add_stream(Stream::new(scheme, prefix, None, shared)?);
        }

        // Last path has priority: register in reverse input order.
        for path in paths.iter().rev() {
            self.add_stream(Stream::new(scheme, prefix, Some(path), shared)?)?;
        }

        Ok(())
    }

    /// Registers a shared stream, bypassing the location tiers.
    ///
    /// Shortcut for [`Locator::register_stream`] with the shared flag set.
    ///
    /// # Errors
    ///
    /// Same as [`Locator::register_stream`].
    pub fn register_shared_stream(
        &mut self,
        scheme: &str,
        prefix: &str,
        paths: &[&str],
    ) -> Result<()> {
        self.register_stream(scheme, prefix, paths, true)
    }

    /// Removes every stream registered for `scheme`.
    ///
    /// No error if the scheme was never registered. Cached query results
    /// are not invalidated.
    pub fn remove_stream(&mut self, scheme: &str) {
        self.streams.remove(scheme);
    }

    /// Whether any stream is registered for `scheme`.
    #[must_use]
    pub fn scheme_exists(&self, scheme: &str) -> bool {
        self.streams.contains_key(scheme)
    }

    /// The registered scheme names, unordered.
    #[must_use]
    pub fn list_schemes(&self) -> Vec<&str> {
        self.streams.keys().map(String::as_str).collect()
    }

    /// The streams registered for `scheme`, grouped by prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemeNotFound`] if the scheme has no streams.
    pub fn streams_for(&self, scheme: &str) -> Result<&BTreeMap<String, Vec<Stream>>> {
        self.streams
            .get(scheme)
            .ok_or_else(|| Error::SchemeNotFound {
                scheme: scheme.to_string(),
            })
    }

    // ---- Location registration ----

    /// Registers a location tier.
    ///
    /// Re-registering an existing name replaces the definition but keeps
    /// its original priority slot. Cached query results are not
    /// invalidated.
    pub fn add_location(&mut self, location: Location) {
        log::debug!(
            "registering location {} -> {}",
            location.name(),
            location.path()
        );

        if let Some(existing) = self
            .locations
            .iter_mut()
            .find(|l| l.name() == location.name())
        {
            *existing = location;
        } else {
            self.locations.push(location);
        }
    }

    /// Registers a location by name.
    ///
    /// When `path` is `None`, the name is used as the path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUri`] if the path cannot be normalized.
    pub fn register_location(&mut self, name: &str, path: Option<&str>) -> Result<()> {
        self.add_location(Location::new(name, path)?);
        Ok(())
    }

    /// Removes the location registered under `name`.
    ///
    /// No error if absent. Cached query results are not invalidated.
    pub fn remove_location(&mut self, name: &str) {
        self.locations.retain(|l| l.name() != name);
    }

    /// Whether a location is registered under `name`.
    #[must_use]
    pub fn location_exists(&self, name: &str) -> bool {
        self.locations.iter().any(|l| l.name() == name)
    }

    /// Looks up a location by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LocationNotFound`] if no location has this name.
    pub fn get_location(&self, name: &str) -> Result<&Location> {
        self.locations
            .iter()
            .find(|l| l.name() == name)
            .ok_or_else(|| Error::LocationNotFound {
                name: name.to_string(),
            })
    }

    /// The registered locations in search priority order.
    ///
    /// The most recently registered location comes first.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata::Locator;
    ///
    /// let mut locator = Locator::new("").unwrap();
    /// locator.register_location("A", None).unwrap();
    /// locator.register_location("B", None).unwrap();
    /// locator.register_location("C", None).unwrap();
    ///
    /// let names: Vec<&str> = locator.locations().iter().map(|l| l.name()).collect();
    /// assert_eq!(names, ["C", "B", "A"]);
    /// ```
    #[must_use]
    pub fn locations(&self) -> Vec<&Location> {
        self.locations.iter().rev().collect()
    }

    /// The registered location names in search priority order.
    #[must_use]
    pub fn list_locations(&self) -> Vec<&str> {
        self.locations.iter().rev().map(Location::name).collect()
    }

    /// Removes all registered streams and locations.
    ///
    /// The base path is kept. Cached query results are not invalidated.
    pub fn reset(&mut self) {
        self.streams.clear();
        self.locations.clear();
    }

    // ---- Queries ----

    /// Finds the highest priority instance of a resource.
    ///
    /// With `first` set, the highest priority candidate is returned even if
    /// it does not exist on disk.
    ///
    /// Malformed URIs (including traversal attempts) yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemeNotFound`] if the URI names an unregistered
    /// scheme; that is a configuration error and is never swallowed.
    pub fn get_resource(&self, uri: &str, first: bool) -> Result<Option<Resource>> {
        if let CacheEntry::Single(resource) = self.find_cached(uri, false, first)? {
            Ok(resource)
        } else {
            Ok(None)
        }
    }

    /// Finds every instance of a resource, in priority order.
    ///
    /// With `all` set, every candidate is returned whether or not it exists
    /// on disk.
    ///
    /// Malformed URIs yield `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemeNotFound`] if the URI names an unregistered
    /// scheme.
    pub fn get_resources(&self, uri: &str, all: bool) -> Result<Vec<Resource>> {
        if let CacheEntry::Many(resources) = self.find_cached(uri, true, all)? {
            Ok(resources)
        } else {
            Ok(Vec::new())
        }
    }

    /// Finds the highest priority path for a resource.
    ///
    /// Returns the absolute path, or the path relative to the locator base
    /// when `absolute` is false. With `first` set, the highest priority
    /// candidate path is returned even if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemeNotFound`] if the URI names an unregistered
    /// scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata::{Locator, MemoryFilesystem};
    ///
    /// let fs = MemoryFilesystem::new(["/base/uploads/a.txt"]);
    /// let mut locator = Locator::with_filesystem("/base", Box::new(fs)).unwrap();
    /// locator.register_shared_stream("up", "", &["uploads"]).unwrap();
    ///
    /// let path = locator.find_resource("up://a.txt", true, false).unwrap();
    /// assert_eq!(path.as_deref(), Some("/base/uploads/a.txt"));
    ///
    /// let missing = locator.find_resource("up://b.txt", true, false).unwrap();
    /// assert!(missing.is_none());
    /// ```
    pub fn find_resource(&self, uri: &str, absolute: bool, first: bool) -> Result<Option<String>> {
        Ok(self.get_resource(uri, first)?.map(|resource| {
            if absolute {
                resource.absolute_path()
            } else {
                resource.path().to_string()
            }
        }))
    }

    /// Finds every path for a resource, in priority order.
    ///
    /// With `all` set, candidate paths are returned whether or not they
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemeNotFound`] if the URI names an unregistered
    /// scheme.
    pub fn find_resources(&self, uri: &str, absolute: bool, all: bool) -> Result<Vec<String>> {
        Ok(self
            .get_resources(uri, all)?
            .into_iter()
            .map(|resource| {
                if absolute {
                    resource.absolute_path()
                } else {
                    resource.path().to_string()
                }
            })
            .collect())
    }

    /// Lists the files provided by every directory the URI resolves to.
    ///
    /// Each matching directory root is listed recursively. By default a
    /// file appearing under several locations is reported once, from the
    /// highest priority location; with `all` set every copy is kept. With
    /// `sort` set (the usual form) the final list is ordered by absolute
    /// path; otherwise it stays in priority order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemeNotFound`] if the URI names an unregistered
    /// scheme.
    pub fn list_resources(&self, uri: &str, all: bool, sort: bool) -> Result<Vec<Resource>> {
        let directories = self.get_resources(uri, false)?;

        let mut list: Vec<Resource> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for directory in &directories {
            let base = format!("{}/", self.base_path.trim_end_matches('/'));

            for file in self.filesystem.all_files(&directory.absolute_path()) {
                let rel_path = file.strip_prefix(&base).unwrap_or(file.as_str());
                let rel_path = rel_path.trim_start_matches('/');

                let resource = Resource::new(
                    directory.stream().clone(),
                    directory.location().cloned(),
                    rel_path,
                    &base,
                );

                if all {
                    list.push(resource);
                } else if seen.insert(resource.uri()) {
                    // First occurrence is the highest priority copy
                    list.push(resource);
                }
            }
        }

        if sort {
            list.sort_by(|a, b| a.absolute_path().cmp(&b.absolute_path()));
        }

        Ok(list)
    }

    /// Whether the URI can be resolved by this locator.
    ///
    /// True when the URI normalizes and its scheme is registered,
    /// independent of whether the resource exists. All failures are
    /// swallowed into `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata::Locator;
    ///
    /// let mut locator = Locator::new("").unwrap();
    /// locator.register_stream("f", "", &[], false).unwrap();
    ///
    /// assert!(locator.is_stream("f://anything"));
    /// assert!(!locator.is_stream("bogus://anything"));
    /// assert!(!locator.is_stream("f://../escape"));
    /// ```
    #[must_use]
    pub fn is_stream(&self, uri: &str) -> bool {
        match normalize_split(uri) {
            Ok((scheme, _)) => self.scheme_exists(&scheme),
            Err(_) => false,
        }
    }
}
