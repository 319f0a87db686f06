//! GitGrade grades a public GitHub repository with a generative language model.
//!
//! The crate is a single forward pipeline: the GitHub fetcher builds a
//! [`structs::repository_snapshot::RepositorySnapshot`], the prompt generator
//! turns it into a prompt, an [`traits::ai_provider::AiProvider`] returns a
//! completion, and the analysis parser splits that completion into the four
//! report sections rendered by the terminal logger or the web UI.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod prompts;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
