use terminal_size::{terminal_size, Width};
use crate::enums::analysis_section::AnalysisSection;
use crate::enums::output_format::OutputFormat;
use crate::errors::GitGradeResult;
use crate::structs::analysis_report::AnalysisReport;
use crate::structs::model_info::ModelInfo;

const DEFAULT_WIDTH: usize = 80;
const MAX_WIDTH: usize = 120;
const MIN_WIDTH: usize = 40;
const EMPTY_SECTION: &str = "(the model did not provide this section)";

pub struct ReportLogger;

impl ReportLogger {

    pub fn print_report(report: &AnalysisReport, format: OutputFormat) -> GitGradeResult<()> {
        let rendered = match format {
            OutputFormat::Text => Self::render_text(report, Self::panel_width()),
            OutputFormat::Markdown => Self::render_markdown(report),
            OutputFormat::Json => serde_json::to_string_pretty(report)?,
        };
        println!("{}", rendered);
        Ok(())
    }

    pub fn print_models(models: &[ModelInfo], preferred: Option<&ModelInfo>) {
        println!("🤖 Models supporting generateContent ({}):", models.len());
        for model in models {
            let marker = if preferred.is_some_and(|p| p.name == model.name) { "⭐" } else { "  " };
            match &model.display_name {
                Some(display) => println!("{} {:<32} {}", marker, model.short_name(), display),
                None => println!("{} {}", marker, model.short_name()),
            }
        }
    }

    /// Terminal width clamped to a readable range.
    fn panel_width() -> usize {
        terminal_size()
            .map(|(Width(w), _)| usize::from(w))
            .unwrap_or(DEFAULT_WIDTH)
            .clamp(MIN_WIDTH, MAX_WIDTH)
    }

    pub fn render_text(report: &AnalysisReport, width: usize) -> String {
        let rule = "━".repeat(width);
        let mut out = String::new();

        out.push_str(&format!("{}\n", rule));
        out.push_str(&format!("📊 {}  ⭐ {}\n", report.repository, report.stars));
        if let Some(description) = &report.description {
            out.push_str(&format!("{}\n", description));
        }
        out.push_str(&format!(
            "🔧 {} · 🤖 {} · {}\n",
            report.language.as_deref().unwrap_or("unknown language"),
            report.model,
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        out.push_str(&format!("{}\n", rule));

        if !report.result.has_sections() {
            out.push_str("\n📄 RAW MODEL OUTPUT\n");
            out.push_str(&format!("{}\n", "─".repeat(width)));
            push_wrapped(&mut out, &report.result.raw, width);
            return out;
        }

        for section in AnalysisSection::ALL {
            let body = report.result.section(section);
            out.push_str(&format!("\n{} {}\n", section.emoji(), section.title()));
            out.push_str(&format!("{}\n", "─".repeat(width)));
            push_wrapped(&mut out, if body.is_empty() { EMPTY_SECTION } else { body }, width);
        }
        out
    }

    pub fn render_markdown(report: &AnalysisReport) -> String {
        let mut out = String::new();

        out.push_str(&format!("# {} ({} ⭐)\n\n", report.repository, report.stars));
        if let Some(description) = &report.description {
            out.push_str(&format!("> {}\n\n", description));
        }
        out.push_str(&format!("_Graded by {} on {}_\n\n", report.model, report.generated_at.format("%Y-%m-%d")));

        if !report.result.has_sections() {
            out.push_str(&format!("{}\n", report.result.raw.trim()));
            return out;
        }

        for section in AnalysisSection::ALL {
            let body = report.result.section(section);
            out.push_str(&format!("{}\n\n", section.marker()));
            out.push_str(&format!("{}\n\n", if body.is_empty() { EMPTY_SECTION } else { body }));
        }
        out
    }
}

/// Soft-wraps each line at `width` display columns, keeping the leading indent.
fn push_wrapped(out: &mut String, text: &str, width: usize) {
    for line in text.lines() {
        let indent: String = line.chars().take_while(|c| c.is_whitespace()).collect();
        let mut current = indent.clone();
        let mut prefix_len = current.chars().count();

        for word in line.split_whitespace() {
            let current_len = current.chars().count();
            let has_words = current_len > prefix_len;
            if has_words && current_len + 1 + word.chars().count() > width {
                out.push_str(&current);
                out.push('\n');
                current = format!("{}  ", indent);
                prefix_len = current.chars().count();
            } else if has_words {
                current.push(' ');
            }
            current.push_str(word);
        }

        out.push_str(current.trim_end());
        out.push('\n');
    }
}
