use gatsby_fs::NormalizedPath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_normalize_is_idempotent(s in "[a-z./]{0,24}") {
        let once = NormalizedPath::new(&s).normalize();
        let twice = once.normalize();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_removes_dot_components(s in "[a-z./]{0,24}") {
        let normalized = NormalizedPath::new(&s).normalize();
        let as_str = normalized.as_str();

        prop_assert!(!as_str.contains("//"));
        if as_str != "." {
            prop_assert!(!as_str.split('/').any(|c| c == "."));
        }
    }
}
