use serde::Serialize;

const CI_MARKERS: &[&str] = &[
    ".github/workflows/",
    ".gitlab-ci.yml",
    ".travis.yml",
    ".circleci/",
    "Jenkinsfile",
    "azure-pipelines.yml",
    "bitbucket-pipelines.yml",
    ".drone.yml",
];

const TEST_DIRECTORIES: &[&str] = &["test", "tests", "__tests__", "spec", "specs"];

/// Presence of the housekeeping files graders look for first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BestPractices {
    pub has_gitignore: bool,
    pub has_license: bool,
    pub has_ci: bool,
    pub has_tests: bool,
}

impl BestPractices {
    pub fn from_paths<S: AsRef<str>>(paths: &[S]) -> Self {
        let mut practices = Self::default();

        for path in paths {
            let path = path.as_ref();
            let file_name = path.rsplit('/').next().unwrap_or(path);

            if path == ".gitignore" {
                practices.has_gitignore = true;
            }
            if !path.contains('/') && is_license_name(file_name) {
                practices.has_license = true;
            }
            if CI_MARKERS.iter().any(|marker| path == marker.trim_end_matches('/') || path.starts_with(marker)) {
                practices.has_ci = true;
            }
            if is_test_path(path) {
                practices.has_tests = true;
            }
        }

        practices
    }

    /// Label/flag pairs in prompt order.
    pub fn checks(&self) -> [(&'static str, bool); 4] {
        [
            (".gitignore", self.has_gitignore),
            ("LICENSE", self.has_license),
            ("CI configuration", self.has_ci),
            ("Test directory", self.has_tests),
        ]
    }
}

fn is_license_name(file_name: &str) -> bool {
    let upper = file_name.to_ascii_uppercase();
    upper.starts_with("LICENSE") || upper.starts_with("LICENCE") || upper.starts_with("COPYING")
}

fn is_test_path(path: &str) -> bool {
    let mut components: Vec<&str> = path.split('/').collect();
    // the last component is a file name unless a directory entry itself is listed
    let file_name = components.pop().unwrap_or_default();

    components.iter().any(|dir| TEST_DIRECTORIES.contains(&dir.to_ascii_lowercase().as_str()))
        || TEST_DIRECTORIES.contains(&file_name.to_ascii_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_every_marker() {
        let practices = BestPractices::from_paths(&[
            ".gitignore",
            "LICENSE-MIT",
            ".github/workflows/ci.yml",
            "crates/core/tests/smoke.rs",
        ]);

        assert!(practices.has_gitignore);
        assert!(practices.has_license);
        assert!(practices.has_ci);
        assert!(practices.has_tests);
    }

    #[test]
    fn nested_files_do_not_count_as_root_markers() {
        let practices = BestPractices::from_paths(&[
            "vendor/lib/.gitignore",
            "vendor/lib/LICENSE",
            "src/contest.rs",
            "docs/testing.md",
        ]);

        assert_eq!(practices, BestPractices::default());
    }

    #[test]
    fn tree_entries_for_directories_are_recognized() {
        let practices = BestPractices::from_paths(&[".circleci", "tests", "Jenkinsfile"]);
        assert!(practices.has_ci);
        assert!(practices.has_tests);
    }
}
