use crate::config::constants::{LOCK_FILES, RECOGNIZED_DEPENDENCY_FILES};
use crate::prompts::grading_prompt::{GRADING_INSTRUCTIONS, GRADING_PREAMBLE};
use crate::structs::analysis_prompt::AnalysisPrompt;
use crate::structs::repository_snapshot::RepositorySnapshot;

const NONE: &str = "none";

pub fn generate_prompt(snapshot: &RepositorySnapshot) -> AnalysisPrompt {
    let mut prompt = String::new();

    prompt.push_str(GRADING_PREAMBLE);
    prompt.push_str("\n\n");

    push_metadata(&mut prompt, snapshot);
    push_file_structure(&mut prompt, snapshot);
    push_best_practices(&mut prompt, snapshot);
    push_readme(&mut prompt, snapshot);
    push_dependencies(&mut prompt, snapshot);

    prompt.push_str(GRADING_INSTRUCTIONS);
    prompt.push('\n');

    AnalysisPrompt::new(prompt)
}

fn or_none(value: Option<&String>) -> &str {
    value.map_or(NONE, String::as_str)
}

fn push_metadata(prompt: &mut String, snapshot: &RepositorySnapshot) {
    let meta = &snapshot.metadata;
    let topics = if meta.topics.is_empty() { NONE.to_string() } else { meta.topics.join(", ") };

    prompt.push_str("## 1. REPOSITORY METADATA\n");
    prompt.push_str(&format!("- Repository: {}\n", snapshot.repository));
    prompt.push_str(&format!("- Description: {}\n", or_none(meta.description.as_ref())));
    prompt.push_str(&format!("- Stars: {}\n", meta.stars));
    prompt.push_str(&format!("- Forks: {}\n", meta.forks));
    prompt.push_str(&format!("- Open issues: {}\n", meta.open_issues));
    prompt.push_str(&format!("- Primary language: {}\n", or_none(meta.language.as_ref())));
    prompt.push_str(&format!("- License: {}\n", or_none(meta.license.as_ref())));
    prompt.push_str(&format!("- Default branch: {}\n", meta.default_branch));
    prompt.push_str(&format!("- Topics: {}\n", topics));
    prompt.push_str(&format!("- Homepage: {}\n", or_none(meta.homepage.as_ref())));
    prompt.push_str(&format!("- Archived: {}\n", if meta.archived { "yes" } else { "no" }));
    prompt.push_str(&format!("- Last push: {}\n", or_none(meta.pushed_at.as_ref())));
    prompt.push('\n');
}

fn push_file_structure(prompt: &mut String, snapshot: &RepositorySnapshot) {
    prompt.push_str("## 2. FILE STRUCTURE\n");

    if snapshot.files.is_empty() {
        prompt.push_str("(file tree not found)\n\n");
        return;
    }

    for path in &snapshot.files {
        prompt.push_str(path);
        prompt.push('\n');
    }

    if snapshot.is_file_list_truncated() {
        let total = if snapshot.tree_truncated_by_host {
            format!("more than {}", snapshot.total_files)
        } else {
            snapshot.total_files.to_string()
        };
        prompt.push_str(&format!(
            "(file list truncated: showing the first {} of {} entries)\n",
            snapshot.files.len(),
            total
        ));
    }
    prompt.push('\n');
}

fn push_best_practices(prompt: &mut String, snapshot: &RepositorySnapshot) {
    prompt.push_str("## 3. BEST PRACTICE CHECKS\n");
    for (label, present) in snapshot.practices.checks() {
        prompt.push_str(&format!("- {}: {}\n", label, if present { "present" } else { "missing" }));
    }
    prompt.push('\n');
}

fn push_readme(prompt: &mut String, snapshot: &RepositorySnapshot) {
    prompt.push_str("## 4. README CONTENT\n");
    match snapshot.readme.as_deref().filter(|text| !text.trim().is_empty()) {
        Some(readme) => {
            prompt.push_str(readme.trim_end());
            prompt.push('\n');
        }
        None => prompt.push_str("(no README found)\n"),
    }
    prompt.push('\n');
}

fn push_dependencies(prompt: &mut String, snapshot: &RepositorySnapshot) {
    prompt.push_str("## 5. DEPENDENCY FILES\n");

    if snapshot.dependencies.is_empty() {
        prompt.push_str("No primary dependency manifest (e.g. requirements.txt, package.json) or lock file was found.\n");
    }

    for name in RECOGNIZED_DEPENDENCY_FILES {
        match snapshot.dependencies.get(*name) {
            Some(content) => {
                prompt.push_str(&format!("--- {} ---\n", name));
                prompt.push_str(content.trim_end());
                prompt.push('\n');
            }
            None if LOCK_FILES.contains(name) => {
                prompt.push_str(&format!("--- {} --- not found (lock file)\n", name));
            }
            None => {
                prompt.push_str(&format!("--- {} --- not found\n", name));
            }
        }
    }
    prompt.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use crate::structs::best_practices::BestPractices;
    use crate::structs::repository_metadata::RepositoryMetadata;
    use crate::structs::repository_ref::RepositoryRef;

    fn snapshot() -> RepositorySnapshot {
        RepositorySnapshot {
            repository: RepositoryRef { owner: "octo".to_string(), name: "demo".to_string() },
            metadata: RepositoryMetadata {
                full_name: "octo/demo".to_string(),
                description: Some("A demo project".to_string()),
                stars: 42,
                forks: 3,
                language: Some("JavaScript".to_string()),
                default_branch: "main".to_string(),
                ..RepositoryMetadata::default()
            },
            files: vec!["README.md".to_string(), "package.json".to_string(), "src/index.js".to_string()],
            total_files: 3,
            tree_truncated_by_host: false,
            practices: BestPractices::from_paths(&["README.md", "package.json", "src/index.js"]),
            readme: Some("# Demo\nRun `npm start`.".to_string()),
            dependencies: BTreeMap::from([(
                "package.json".to_string(),
                r#"{"dependencies":{"express":"*"}}"#.to_string(),
            )]),
        }
    }

    #[test]
    fn prompt_is_deterministic() {
        let snapshot = snapshot();
        assert_eq!(generate_prompt(&snapshot).text, generate_prompt(&snapshot).text);
    }

    #[test]
    fn missing_readme_is_stated_explicitly() {
        let mut snapshot = snapshot();
        snapshot.readme = None;
        let prompt = generate_prompt(&snapshot).text;
        assert!(prompt.contains("(no README found)"));

        snapshot.readme = Some("   \n".to_string());
        assert!(generate_prompt(&snapshot).text.contains("(no README found)"));
    }

    #[test]
    fn missing_metadata_fields_render_placeholders() {
        let mut snapshot = snapshot();
        snapshot.metadata.description = None;
        snapshot.metadata.license = None;
        let prompt = generate_prompt(&snapshot).text;

        assert!(prompt.contains("- Description: none"));
        assert!(prompt.contains("- License: none"));
        assert!(prompt.contains("- Stars: 42"));
    }

    #[test]
    fn found_manifests_are_labelled_and_missing_ones_noted() {
        let prompt = generate_prompt(&snapshot()).text;

        assert!(prompt.contains("--- package.json ---\n{\"dependencies\":{\"express\":\"*\"}}"));
        assert!(prompt.contains("--- package-lock.json --- not found (lock file)"));
        assert!(prompt.contains("--- requirements.txt --- not found"));
        assert!(!prompt.contains("No primary dependency manifest"));
    }

    #[test]
    fn no_manifests_at_all_is_called_out() {
        let mut snapshot = snapshot();
        snapshot.dependencies.clear();
        assert!(generate_prompt(&snapshot).text.contains("No primary dependency manifest"));
    }

    #[test]
    fn truncation_notice_only_when_capped() {
        let mut snapshot = snapshot();
        assert!(!generate_prompt(&snapshot).text.contains("file list truncated"));

        snapshot.files = (0..100).map(|i| format!("src/file_{i}.rs")).collect();
        snapshot.total_files = 150;
        let prompt = generate_prompt(&snapshot).text;
        assert!(prompt.contains("(file list truncated: showing the first 100 of 150 entries)"));
    }

    #[test]
    fn best_practice_checks_and_instructions_are_embedded() {
        let prompt = generate_prompt(&snapshot()).text;

        assert!(prompt.contains("- .gitignore: missing"));
        assert!(prompt.contains("- LICENSE: missing"));
        assert!(prompt.contains("Dependency Health (CRITICAL"));
        for marker in ["### SCORE", "### CRITICAL INSIGHTS", "### SUMMARY", "### ROADMAP"] {
            assert!(prompt.contains(marker), "{marker}");
        }
    }
}
