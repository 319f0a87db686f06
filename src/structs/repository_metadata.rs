use serde::Serialize;

/// Repository-level facts reported by the GitHub metadata endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryMetadata {
    pub full_name: String,
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub language: Option<String>,
    pub license: Option<String>,
    pub default_branch: String,
    pub topics: Vec<String>,
    pub homepage: Option<String>,
    pub archived: bool,
    pub pushed_at: Option<String>,
}
