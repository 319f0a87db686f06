use serde::Deserialize;
use crate::structs::repository_metadata::RepositoryMetadata;

#[derive(Debug, Deserialize, Clone)]
pub struct GithubLicense {
    pub name: Option<String>,
    pub spdx_id: Option<String>,
}

/// Subset of `GET /repos/{owner}/{repo}` the grader uses.
#[derive(Debug, Deserialize, Clone)]
pub struct GithubRepository {
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub license: Option<GithubLicense>,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub pushed_at: Option<String>,
}

impl From<GithubRepository> for RepositoryMetadata {
    fn from(repo: GithubRepository) -> Self {
        let license = repo.license.and_then(|license| license.name.or(license.spdx_id));

        Self {
            full_name: repo.full_name,
            description: repo.description.filter(|d| !d.trim().is_empty()),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            open_issues: repo.open_issues_count,
            language: repo.language,
            license,
            default_branch: repo.default_branch.unwrap_or_else(|| "main".to_string()),
            topics: repo.topics,
            homepage: repo.homepage.filter(|h| !h.trim().is_empty()),
            archived: repo.archived,
            pushed_at: repo.pushed_at,
        }
    }
}
