use std::collections::BTreeMap;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use crate::config::constants::{DEFAULT_GITHUB_API_URL, DEFAULT_USER_AGENT, MAX_TREE_ENTRIES, RECOGNIZED_DEPENDENCY_FILES};
use crate::enums::fetch_error::FetchError;
use crate::structs::best_practices::BestPractices;
use crate::structs::github::github_content::GithubContent;
use crate::structs::github::github_repository::GithubRepository;
use crate::structs::github::github_tree::GithubTree;
use crate::structs::repository_metadata::RepositoryMetadata;
use crate::structs::repository_ref::RepositoryRef;
use crate::structs::repository_snapshot::RepositorySnapshot;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";
const DEFAULT_README: &str = "README.md";

/// Collects a [`RepositorySnapshot`] from the GitHub REST API.
#[derive(Clone)]
pub struct GithubFetcher {
    base_url: String,
    token: Option<String>,
    user_agent: String,
    client: Client,
}

impl Default for GithubFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_GITHUB_API_URL, None)
    }
}

impl GithubFetcher {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Parses `url` and fetches it. Invalid URLs fail before any request is sent.
    pub async fn fetch_url(&self, url: &str) -> Result<RepositorySnapshot, FetchError> {
        let repository = RepositoryRef::parse(url)?;
        self.fetch(&repository).await
    }

    pub async fn fetch(&self, repository: &RepositoryRef) -> Result<RepositorySnapshot, FetchError> {
        if !self.has_token() {
            log::info!("🔓 No GitHub token set, anonymous requests may hit rate limits");
        }

        let metadata = self.fetch_metadata(repository).await?;
        let branch = metadata.default_branch.clone();

        let tree = match self.fetch_tree(repository, &branch).await {
            Ok(tree) => Some(tree),
            Err(e) => {
                log::warn!("⚠️ File tree unavailable for {}: {}", repository, e);
                None
            }
        };

        let all_paths: Vec<String> = tree
            .as_ref()
            .map(|tree| tree.tree.iter().map(|entry| entry.path.clone()).collect())
            .unwrap_or_default();
        let tree_truncated_by_host = tree.as_ref().is_some_and(|tree| tree.truncated);
        if tree_truncated_by_host {
            log::warn!("⚠️ GitHub truncated the recursive tree of {}", repository);
        }

        // A missing or truncated listing cannot rule a root file out.
        let listing_complete = tree.is_some() && !tree_truncated_by_host;

        let readme_path = match find_readme(&all_paths) {
            Some(path) => Some(path),
            None if !listing_complete => Some(DEFAULT_README.to_string()),
            None => None,
        };
        let readme = match readme_path {
            Some(path) => self.fetch_optional_file(repository, &branch, &path).await,
            None => None,
        };

        let mut dependencies = BTreeMap::new();
        for name in RECOGNIZED_DEPENDENCY_FILES {
            let listed = all_paths.iter().any(|path| path == name);
            if listing_complete && !listed {
                continue;
            }
            if let Some(content) = self.fetch_optional_file(repository, &branch, name).await {
                dependencies.insert((*name).to_string(), content);
            }
        }

        let practices = BestPractices::from_paths(&all_paths);
        let total_files = all_paths.len();
        let mut files = all_paths;
        files.truncate(MAX_TREE_ENTRIES);

        log::info!(
            "📂 {}: {} of {} tree entries, README {}, {} dependency file(s)",
            repository,
            files.len(),
            total_files,
            if readme.is_some() { "found" } else { "missing" },
            dependencies.len()
        );

        Ok(RepositorySnapshot {
            repository: repository.clone(),
            metadata,
            files,
            total_files,
            tree_truncated_by_host,
            practices,
            readme,
            dependencies,
        })
    }

    async fn fetch_metadata(&self, repository: &RepositoryRef) -> Result<RepositoryMetadata, FetchError> {
        let url = self.endpoint(repository, &[])?;
        let response = self.request(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::RepoNotFound {
                owner: repository.owner.clone(),
                name: repository.name.clone(),
            });
        }

        let repo: GithubRepository = Self::decode(response).await?;
        Ok(repo.into())
    }

    async fn fetch_tree(&self, repository: &RepositoryRef, branch: &str) -> Result<GithubTree, FetchError> {
        let url = self.endpoint(repository, &["git", "trees", branch])?;
        let response = self.request(url).query(&[("recursive", "1")]).send().await?;
        Self::decode(response).await
    }

    /// Missing or unreadable files are `None`; only the metadata call is fatal.
    async fn fetch_optional_file(&self, repository: &RepositoryRef, branch: &str, path: &str) -> Option<String> {
        match self.fetch_file(repository, branch, path).await {
            Ok(content) => content,
            Err(e) => {
                log::warn!("⚠️ Could not read {} from {}: {}", path, repository, e);
                None
            }
        }
    }

    async fn fetch_file(&self, repository: &RepositoryRef, branch: &str, path: &str) -> Result<Option<String>, FetchError> {
        let mut segments = vec!["contents"];
        segments.extend(path.split('/'));
        let url = self.endpoint(repository, &segments)?;
        let response = self.request(url).query(&[("ref", branch)]).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            log::debug!("{} not present in {}", path, repository);
            return Ok(None);
        }

        let content: GithubContent = Self::decode(response).await?;
        content
            .decode()
            .map(Some)
            .map_err(|reason| FetchError::InvalidResponse(format!("{}: {}", path, reason)))
    }

    /// `{base}/repos/{owner}/{name}/{segments..}` with every segment percent-encoded.
    fn endpoint(&self, repository: &RepositoryRef, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| FetchError::NetworkError(format!("invalid API URL '{}': {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::NetworkError(format!("API URL '{}' cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(["repos", repository.owner.as_str(), repository.name.as_str()])
            .extend(segments);
        Ok(url)
    }

    fn request(&self, url: Url) -> RequestBuilder {
        let mut request = self.client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::InvalidResponse(e.to_string()))
    }

    async fn error_from_response(response: Response) -> FetchError {
        let status = response.status();
        let rate_limit_exhausted = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.trim() == "0");

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|json| json.get("message").and_then(|m| m.as_str()).map(ToString::to_string))
            .unwrap_or_else(|| body.trim().to_string());

        match status {
            StatusCode::TOO_MANY_REQUESTS => FetchError::RateLimited(message),
            StatusCode::FORBIDDEN if rate_limit_exhausted || message.to_ascii_lowercase().contains("rate limit") => {
                FetchError::RateLimited(message)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FetchError::AuthError(message),
            _ => FetchError::UnexpectedStatus {
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// Root-level README, preferring `README.md` over other spellings.
fn find_readme(paths: &[String]) -> Option<String> {
    if paths.iter().any(|path| path == DEFAULT_README) {
        return Some(DEFAULT_README.to_string());
    }

    paths
        .iter()
        .find(|path| !path.contains('/') && path.to_ascii_uppercase().starts_with("README"))
        .cloned()
}
