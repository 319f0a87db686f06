use std::collections::BTreeMap;
use serde::Serialize;
use crate::structs::best_practices::BestPractices;
use crate::structs::repository_metadata::RepositoryMetadata;
use crate::structs::repository_ref::RepositoryRef;

/// Point-in-time bundle of repository data collected for one grading run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySnapshot {
    pub repository: RepositoryRef,
    pub metadata: RepositoryMetadata,
    /// Tree paths in API order, at most `MAX_TREE_ENTRIES`.
    pub files: Vec<String>,
    /// Entries in the tree listing before truncation.
    pub total_files: usize,
    /// GitHub itself cut the recursive listing short.
    pub tree_truncated_by_host: bool,
    pub practices: BestPractices,
    pub readme: Option<String>,
    pub dependencies: BTreeMap<String, String>,
}

impl RepositorySnapshot {
    pub fn is_file_list_truncated(&self) -> bool {
        self.total_files > self.files.len() || self.tree_truncated_by_host
    }
}
