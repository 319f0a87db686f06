use proptest::prelude::*;
use gitgrade::structs::repository_ref::RepositoryRef;

proptest! {
    #[test]
    fn trailing_content_does_not_change_the_repository(
        owner in "[A-Za-z0-9][A-Za-z0-9-]{0,20}",
        name in "[A-Za-z0-9_][A-Za-z0-9_.-]{0,30}",
        suffix in prop_oneof![
            Just(String::new()),
            Just("/".to_string()),
            Just("/tree/main".to_string()),
            Just("/blob/main/src/lib.rs".to_string()),
            Just("?tab=readme-ov-file".to_string()),
            Just("#readme".to_string()),
        ],
    ) {
        prop_assume!(!name.ends_with(".git") && name != "." && name != "..");

        let base = RepositoryRef::parse(&format!("https://github.com/{}/{}", owner, name)).unwrap();
        let decorated = RepositoryRef::parse(&format!("https://github.com/{}/{}{}", owner, name, suffix)).unwrap();

        prop_assert_eq!(&base, &decorated);
        prop_assert_eq!(base.owner, owner);
        prop_assert_eq!(base.name, name);
    }
}

#[test]
fn non_github_inputs_are_rejected() {
    for input in [
        "",
        "github.com/octo/demo",
        "http://github.com/octo/demo",
        "https://gitlab.com/octo/demo",
        "https://github.com/octo",
        "https://github.com/",
    ] {
        assert!(RepositoryRef::parse(input).is_err(), "{input:?} should be rejected");
    }
}
