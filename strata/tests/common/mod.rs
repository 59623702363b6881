//! Common test utilities for integration tests.
//!
//! Provides a "building" fixture: a temporary directory tree with three
//! priority floors, a shared garage, and a shared upload area, mirroring a
//! typical plugin/theme override layout.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use strata::Locator;

/// A temporary building tree plus a locator registered over it.
///
/// Layout:
///
/// ```text
/// floors/floor1/files/test.json
/// floors/floor1/files/only1.json
/// floors/floor2/files/test.json
/// floors/floor2/config/settings.yaml
/// floors/floor3/files/test.json
/// floors/floor3/files/sub/deep.txt
/// garage/cars/cars.json
/// upload/data/files/foo.json
/// ```
pub struct Building {
    dir: TempDir,
}

impl Building {
    /// Creates the building tree on disk.
    pub fn new() -> Building {
        let dir = tempfile::tempdir().expect("create tempdir");

        let files = [
            "floors/floor1/files/test.json",
            "floors/floor1/files/only1.json",
            "floors/floor2/files/test.json",
            "floors/floor2/config/settings.yaml",
            "floors/floor3/files/test.json",
            "floors/floor3/files/sub/deep.txt",
            "garage/cars/cars.json",
            "upload/data/files/foo.json",
        ];

        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
            fs::write(&path, "{}").expect("write file");
        }

        Building { dir }
    }

    /// The building root directory.
    pub fn base(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file inside the building, as a string.
    pub fn path(&self, rel: &str) -> String {
        format!("{}/{rel}", self.dir.path().to_string_lossy())
    }

    /// A locator over the building with the standard registrations.
    ///
    /// Floors are registered 1, 2, 3; floor3 therefore has the highest
    /// priority. Trailing separators are deliberately mixed to check they
    /// make no difference.
    pub fn locator(&self) -> Locator {
        let mut locator =
            Locator::new(&self.dir.path().to_string_lossy()).expect("locator base path");

        locator
            .register_location("Floor1", Some("floors/floor1/"))
            .unwrap();
        locator
            .register_location("Floor2", Some("floors/floor2/"))
            .unwrap();
        locator
            .register_location("Floor3", Some("floors/floor3"))
            .unwrap();

        locator.register_stream("files", "", &[], false).unwrap();
        locator
            .register_stream("files", "data", &["upload/data/files"], true)
            .unwrap();
        locator
            .register_stream("conf", "", &["config"], false)
            .unwrap();
        locator
            .register_shared_stream("cars", "", &["garage/cars/"])
            .unwrap();

        locator
    }
}
