pub mod github_content;
pub mod github_repository;
pub mod github_tree;
