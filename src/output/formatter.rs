//! Output formatters for extraction reports

use crate::config::OutputFormat;
use crate::error::{Result, ResumeScreenerError};
use crate::output::report::BatchReport;
use crate::processing::document::CandidateRecord;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for all output formatters
pub trait OutputFormatter {
    fn format_report(&self, report: &BatchReport) -> Result<String>;
}

/// Fixed-column tabular report, the format downstream tools consume.
pub struct CsvFormatter;

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct ConsoleFormatter {
    use_colors: bool,
}

/// Main report generator that coordinates all formatters
pub struct ReportGenerator {
    csv_formatter: CsvFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    console_formatter: ConsoleFormatter,
}

impl OutputFormatter for CsvFormatter {
    fn format_report(&self, report: &BatchReport) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(CandidateRecord::COLUMNS)?;
        for record in &report.records {
            writer.write_record(record.cells())?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ResumeScreenerError::OutputFormatting(format!("Failed to flush CSV: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| ResumeScreenerError::OutputFormatting(format!("CSV is not valid UTF-8: {}", e)))
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &BatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn escape_cell(cell: &str) -> String {
        cell.replace('|', "\\|").replace('\n', " ")
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &BatchReport) -> Result<String> {
        let mut output = String::from("# Resume Extraction Report\n\n");

        if self.include_metadata {
            let meta = &report.metadata;
            output.push_str(&format!(
                "*Generated {} from folder `{}`*\n\n",
                meta.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                meta.folder
            ));
            output.push_str(&format!(
                "**Requested skills:** {}\n\n",
                meta.requested_skills.join(", ")
            ));
            output.push_str(&format!(
                "**Documents:** {} seen, {} matched\n\n",
                meta.documents_seen, meta.records_created
            ));
        }

        output.push_str(&format!("| {} |\n", CandidateRecord::COLUMNS.join(" | ")));
        output.push_str(&format!("|{}\n", "---|".repeat(CandidateRecord::COLUMNS.len())));
        for record in &report.records {
            let cells: Vec<String> = record.cells().iter().map(|c| Self::escape_cell(c)).collect();
            output.push_str(&format!("| {} |\n", cells.join(" | ")));
        }

        if !report.skipped.is_empty() {
            output.push_str("\n## Skipped Documents\n\n");
            for skipped in &report.skipped {
                output.push_str(&format!("- `{}`: {}\n", skipped.filename, skipped.reason));
            }
        }

        Ok(output)
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".blue().bold(), title.blue().bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &BatchReport) -> Result<String> {
        let meta = &report.metadata;
        let mut output = self.format_header("📄 RESUME EXTRACTION REPORT");

        output.push_str(&format!(
            "Generated: {} | Folder: {}\n",
            meta.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            if meta.folder.is_empty() { "(all)" } else { meta.folder.as_str() }
        ));
        output.push_str(&format!("Skills: {}\n", meta.requested_skills.join(", ")));
        output.push_str(&format!(
            "Documents: {} seen, {} matched\n",
            meta.documents_seen,
            self.colorize(&meta.records_created.to_string(), Color::Green)
        ));

        for (index, record) in report.records.iter().enumerate() {
            output.push_str(&format!(
                "\n{}. {}\n",
                index + 1,
                self.colorize(record.name.as_deref().unwrap_or("-"), Color::Cyan)
            ));
            output.push_str(&format!("   📞 {}\n", record.contact_number));
            output.push_str(&format!("   ✉️  {}\n", record.email));
            output.push_str(&format!("   🛠  {}\n", record.skills));
            output.push_str(&format!("   📍 {}\n", record.location.as_deref().unwrap_or("-")));
            output.push_str(&format!("   ⏳ {}\n", record.experience));
            output.push_str(&format!("   📁 {}\n", record.filename));
        }

        let failures: Vec<_> = report.failures().collect();
        if !failures.is_empty() {
            output.push_str(&self.format_header("⚠️  SKIPPED"));
            for skipped in failures {
                output.push_str(&format!(
                    "  • {}: {}\n",
                    skipped.filename,
                    self.colorize(&skipped.reason.to_string(), Color::Yellow)
                ));
            }
        }

        Ok(output)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true)
    }

    pub fn with_options(use_colors: bool) -> Self {
        Self {
            csv_formatter: CsvFormatter,
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            console_formatter: ConsoleFormatter::new(use_colors),
        }
    }

    pub fn generate_report(&self, report: &BatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Csv => self.csv_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Console => self.console_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// File name for a saved report: the configured stem with the extension
/// matching the format.
pub fn suggest_filename(format: &OutputFormat, base_name: &str, timestamp: bool) -> String {
    let stem = Path::new(base_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Csv => format!("{}{}.csv", stem, timestamp_suffix),
        OutputFormat::Json => format!("{}{}.json", stem, timestamp_suffix),
        OutputFormat::Markdown => format!("{}{}.md", stem, timestamp_suffix),
        OutputFormat::Console => format!("{}{}.txt", stem, timestamp_suffix),
    }
}
