//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a completed scaffold run
#[derive(Debug, Serialize)]
pub struct SetupSummary {
    /// Whether the scaffold completed
    pub success: bool,
    /// The project directory that was created
    pub project_dir: String,
    /// Number of files in the scaffolded tree (excluding venv and .git)
    pub files_created: usize,
    /// Short id of the initial commit
    pub commit: String,
}

impl SetupSummary {
    /// Render the summary based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!();
        println!("{} {}", "Scaffolded".green().bold(), self.project_dir);
        println!("  {} files committed as {}", self.files_created, self.commit);
        println!();
        println!("Next steps:");
        println!("  cd {}", self.project_dir);
        println!("  cp .env.example .env   # add your OpenAI API key");
        println!("  hsa run");
    }
}

/// Prerequisite check results printed before the server starts
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PreflightReport {
    /// Virtual environment present
    pub venv: bool,
    /// Secrets file present
    pub env_file: bool,
    /// Customer data file present (absence is non-fatal)
    pub data_file: bool,
}

impl PreflightReport {
    /// Render the report based on output mode
    pub fn render(self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(&self),
        }
    }

    fn render_human(self) {
        println!("Preflight:");
        println!("  venv       {}", status_word(self.venv));
        println!("  .env       {}", status_word(self.env_file));
        if self.data_file {
            println!("  data file  {}", status_word(true));
        } else {
            println!(
                "  data file  {} (sample data will be generated)",
                "missing".yellow()
            );
        }
    }
}

fn status_word(present: bool) -> String {
    if present {
        "ok".green().to_string()
    } else {
        "missing".yellow().to_string()
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
