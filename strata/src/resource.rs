//! Resource handles.
//!
//! A resource is the result of a successful search: a found relative path
//! plus the stream and location that produced it, which is enough context to
//! rebuild its canonical URI and filesystem path.

use std::fmt;
use std::path::Path;

use crate::location::Location;
use crate::stream::Stream;
use crate::uri::normalize;

/// A located resource.
///
/// The handle stores the relative path under the locator base path together
/// with the [`Stream`] and optional [`Location`] used to find it. Everything
/// else (URI, absolute path, file name parts) is derived on demand.
///
/// Since the relative path contains the stream and location directories,
/// stripping those off recovers the path portion after `scheme://` in the
/// original URI; see [`Resource::base_path`].
///
/// # Examples
///
/// ```
/// use strata::{Resource, Stream};
///
/// let stream = Stream::new("cars", "", Some("garage/cars"), true).unwrap();
/// let resource = Resource::new(stream, None, "garage/cars/cars.json", "/building/");
///
/// assert_eq!(resource.uri(), "cars://cars.json");
/// assert_eq!(resource.absolute_path(), "/building/garage/cars/cars.json");
/// assert_eq!(resource.basename(), "cars.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    stream: Stream,
    location: Option<Location>,
    path: String,
    locator_base: String,
}

impl Resource {
    /// Creates a resource handle.
    ///
    /// `path` is the found path relative to `locator_base`, still carrying
    /// the stream and location directories. It is normalized on
    /// construction.
    #[must_use]
    pub fn new(stream: Stream, location: Option<Location>, path: &str, locator_base: &str) -> Self {
        // Resolver-produced paths always normalize; keep raw input as a
        // fallback for hand-built handles.
        let path = normalize(path).unwrap_or_else(|_| path.to_string());

        Self {
            stream,
            location,
            path,
            locator_base: locator_base.to_string(),
        }
    }

    /// Reconstructs the URI this resource answers to.
    ///
    /// The stream prefix, when present, is glued back in front of the base
    /// path: `scheme://[prefix/]basePath`.
    #[must_use]
    pub fn uri(&self) -> String {
        // Collect the non-empty parts so the separator is only added
        // between two of them.
        let mut parts: Vec<String> = Vec::new();

        if !self.stream.prefix().is_empty() {
            parts.push(self.stream.prefix().to_string());
        }

        let base_path = self.base_path();
        if !base_path.is_empty() {
            parts.push(base_path);
        }

        format!("{}://{}", self.stream.scheme(), parts.join("/"))
    }

    /// The path portion after `scheme://`, without the prefix.
    ///
    /// Computed by stripping, from the front of the relative path, the
    /// stream's own path and (when a location produced this resource) the
    /// location path prepended to it. Both operands are stored normalized,
    /// which is what makes plain string prefix removal sufficient here.
    #[must_use]
    pub fn base_path(&self) -> String {
        // The locator base path never survives into the relative path, so
        // drop it from the stream path before using it as a pattern.
        let mut pattern = strip_prefix(self.stream.path(), &self.locator_base).to_string();

        if let Some(location) = &self.location {
            let location_path = strip_prefix(location.path(), &self.locator_base);
            pattern = normalize(&format!("{location_path}/{pattern}")).unwrap_or_default();
        }

        // The stream root directory itself matches the pattern minus its
        // trailing slash and yields an empty base path.
        if self.path == pattern.trim_end_matches('/') {
            return String::new();
        }

        let result = strip_prefix(&self.path, &pattern);

        result
            .trim_start_matches('/')
            .trim_start_matches('\\')
            .to_string()
    }

    /// The absolute filesystem path.
    #[must_use]
    pub fn absolute_path(&self) -> String {
        format!("{}{}", self.locator_base, self.path)
    }

    /// The path relative to the locator base path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The locator base path captured at resolution time.
    #[must_use]
    pub fn locator_base_path(&self) -> &str {
        &self.locator_base
    }

    /// The stream that produced this resource.
    #[must_use]
    pub fn stream(&self) -> &Stream {
        &self.stream
    }

    /// The location that produced this resource, if any.
    ///
    /// Resources found through a shared stream have no location.
    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// The file name without its extension (`test.txt` -> `test`).
    #[must_use]
    pub fn filename(&self) -> String {
        Path::new(&self.path)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The trailing name component (`test.txt` -> `test.txt`).
    #[must_use]
    pub fn basename(&self) -> String {
        Path::new(&self.path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The file extension (`test.txt` -> `txt`).
    #[must_use]
    pub fn extension(&self) -> String {
        Path::new(&self.path)
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// A resource displays as its absolute path, so handles can be printed and
/// compared like plain paths.
impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.absolute_path())
    }
}

fn strip_prefix<'a>(value: &'a str, prefix: &str) -> &'a str {
    value.strip_prefix(prefix).unwrap_or(value)
}
