//! Property-based tests for locator ordering and query consistency.

use proptest::prelude::*;

use crate::filesystem::MemoryFilesystem;
use crate::locator::Locator;

// Strategy for simple directory names
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}".prop_map(|s| s)
}

fn names_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set(name_strategy(), 1..=max)
        .prop_map(|set| set.into_iter().collect())
}

proptest! {
    /// Locations are searched in reverse registration order
    #[test]
    fn locations_priority_is_reverse_registration(names in names_strategy(6)) {
        let mut locator = Locator::new("/base").unwrap();
        for name in &names {
            locator.register_location(name, None).unwrap();
        }

        let expected: Vec<&str> = names.iter().rev().map(String::as_str).collect();
        let actual: Vec<&str> = locator.locations().iter().map(|l| l.name()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// The singular query agrees with the head of the plural query
    #[test]
    fn single_result_is_first_of_many(
        dirs in names_strategy(4),
        file in "[a-z]{1,8}\\.txt",
    ) {
        let files: Vec<String> = dirs
            .iter()
            .map(|dir| format!("/base/{dir}/sub/{file}"))
            .collect();
        let fs = MemoryFilesystem::new(files);

        let mut locator = Locator::with_filesystem("/base", Box::new(fs)).unwrap();
        for dir in &dirs {
            locator.register_location(dir, None).unwrap();
        }
        locator.register_stream("f", "", &["sub"], false).unwrap();

        let uri = format!("f://{file}");
        let single = locator.get_resource(&uri, false).unwrap();
        let many = locator.get_resources(&uri, false).unwrap();

        prop_assert_eq!(single.as_ref(), many.first());
        prop_assert_eq!(many.len(), dirs.len());
    }

    /// Every resolver-produced resource re-resolves to itself
    #[test]
    fn round_trip_uri(
        dirs in names_strategy(3),
        file in "[a-z]{1,8}\\.json",
    ) {
        let files: Vec<String> = dirs
            .iter()
            .map(|dir| format!("/base/{dir}/sub/{file}"))
            .collect();
        let fs = MemoryFilesystem::new(files);

        let mut locator = Locator::with_filesystem("/base", Box::new(fs)).unwrap();
        for dir in &dirs {
            locator.register_location(dir, None).unwrap();
        }
        locator.register_stream("f", "", &["sub"], false).unwrap();

        let resource = locator
            .get_resource(&format!("f://{file}"), false)
            .unwrap()
            .unwrap();
        let again = locator.get_resource(&resource.uri(), false).unwrap().unwrap();
        prop_assert_eq!(resource, again);
    }

    /// Traversal URIs never resolve, whatever the registry holds
    #[test]
    fn traversal_never_resolves(
        dirs in names_strategy(3),
        depth in 1usize..=4,
    ) {
        let fs = MemoryFilesystem::new(["/base/secret.txt"]);
        let mut locator = Locator::with_filesystem("/base", Box::new(fs)).unwrap();
        for dir in &dirs {
            locator.register_location(dir, None).unwrap();
        }
        locator.register_stream("f", "", &["sub"], false).unwrap();

        let ups = "../".repeat(depth);
        let uri = format!("f://{ups}secret.txt");
        prop_assert!(locator.get_resource(&uri, false).unwrap().is_none());
        prop_assert!(locator.get_resources(&uri, true).unwrap().is_empty());
    }
}
