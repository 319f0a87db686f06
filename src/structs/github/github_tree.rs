use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct GithubTreeEntry {
    pub path: String,
}

/// Response of `GET /repos/{owner}/{repo}/git/trees/{ref}?recursive=1`.
#[derive(Debug, Deserialize, Clone)]
pub struct GithubTree {
    #[serde(default)]
    pub tree: Vec<GithubTreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}
