use std::fmt;
use reqwest::Url;
use serde::Serialize;
use crate::enums::fetch_error::FetchError;

const GITHUB_HOSTS: &[&str] = &["github.com", "www.github.com"];

/// Owner and repository name of a public GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    /// Parses `https://github.com/<owner>/<repo>`, ignoring any trailing path,
    /// query or fragment. A `.git` suffix on the repository segment is dropped.
    pub fn parse(input: &str) -> Result<Self, FetchError> {
        let invalid = || FetchError::InvalidUrl(input.trim().to_string());

        let url = Url::parse(input.trim()).map_err(|_| invalid())?;
        if url.scheme() != "https" {
            return Err(invalid());
        }

        let host = url.host_str().ok_or_else(invalid)?.to_ascii_lowercase();
        if !GITHUB_HOSTS.contains(&host.as_str()) {
            return Err(invalid());
        }

        let mut segments = url.path_segments().ok_or_else(invalid)?;
        let owner = segments.next().unwrap_or_default();
        let name = segments.next().unwrap_or_default();
        let name = name.strip_suffix(".git").unwrap_or(name);

        if owner.is_empty() || name.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_plain_repository_url() {
        let repo = RepositoryRef::parse("https://github.com/rust-lang/cargo").unwrap();
        assert_eq!(repo.owner, "rust-lang");
        assert_eq!(repo.name, "cargo");
        assert_eq!(repo.to_string(), "rust-lang/cargo");
    }

    #[test]
    fn ignores_trailing_segments_and_git_suffix() {
        for input in [
            "https://github.com/rust-lang/cargo/",
            "https://github.com/rust-lang/cargo/tree/master/src",
            "https://github.com/rust-lang/cargo.git",
            "https://www.github.com/rust-lang/cargo?tab=readme-ov-file#usage",
            "  https://github.com/rust-lang/cargo  ",
        ] {
            let repo = RepositoryRef::parse(input).unwrap();
            assert_eq!((repo.owner.as_str(), repo.name.as_str()), ("rust-lang", "cargo"), "{input}");
        }
    }

    #[test]
    fn rejects_non_github_input() {
        for input in [
            "",
            "not a url",
            "https://gitlab.com/rust-lang/cargo",
            "http://github.com/rust-lang/cargo",
            "https://github.com/rust-lang",
            "https://github.com/",
            "https://github.com//cargo",
            "github.com/rust-lang/cargo",
            "https://api.github.com/repos/rust-lang/cargo",
        ] {
            let err = RepositoryRef::parse(input).unwrap_err();
            assert!(matches!(err, FetchError::InvalidUrl(_)), "{input}");
        }
    }

    proptest! {
        #[test]
        fn trailing_content_never_changes_the_pair(
            owner in "[A-Za-z0-9][A-Za-z0-9-]{0,20}",
            name in "[A-Za-z0-9_-]{1,30}",
            tail in "(/[a-z0-9]{1,8}){0,3}",
            query in "(\\?[a-z]{1,5}=[a-z0-9]{1,5})?",
        ) {
            let base = RepositoryRef::parse(&format!("https://github.com/{owner}/{name}")).unwrap();
            let decorated = RepositoryRef::parse(&format!("https://github.com/{owner}/{name}{tail}{query}")).unwrap();

            prop_assert_eq!(&base, &decorated);
            prop_assert_eq!(base.owner, owner);
            prop_assert_eq!(base.name, name);
        }
    }
}
