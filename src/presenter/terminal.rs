use std::io::{self, Write};

use colored::Colorize;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use super::Presenter;
use crate::analyze::AnalysisStats;
use crate::search::SearchResult;

const RESULT_SEPARATOR_WIDTH: usize = 80;

/// Renders command output as colored text and tables
pub struct TerminalPresenter<W: Write> {
    out: W,
    color: bool,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, color: bool) -> Self {
        if color {
            colored::control::set_override(true);
        }
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, paint: fn(&str) -> colored::ColoredString) -> String {
        if self.color {
            paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn table(&self, headers: [&str; 2]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(headers);
        if self.color {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        table
    }

    fn row(&self, label: &str, value: String) -> Vec<Cell> {
        if self.color {
            vec![Cell::new(label).fg(Color::Cyan), Cell::new(value).fg(Color::Green)]
        } else {
            vec![Cell::new(label), Cell::new(value)]
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn status(&mut self, message: &str) -> io::Result<()> {
        let line = self.paint(message, |t| t.green());
        writeln!(self.out, "{}", line)
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        let line = self.paint(message, |t| t.green());
        writeln!(self.out, "{}", line)
    }

    fn warning(&mut self, message: &str) -> io::Result<()> {
        let line = self.paint(message, |t| t.yellow());
        writeln!(self.out, "{}", line)
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        let line = self.paint(message, |t| t.red());
        writeln!(self.out, "{}", line)
    }

    fn stats(&mut self, stats: &AnalysisStats) -> io::Result<()> {
        let mut summary = self.table(["Metric", "Value"]);
        summary.add_row(self.row("Total Categories", stats.total_categories.to_string()));
        summary.add_row(self.row("Total Prompts", stats.total_prompts.to_string()));
        summary.add_row(self.row(
            "Average Prompt Length",
            format!("{:.1} chars", stats.avg_prompt_length),
        ));

        let title = self.paint("Prompt Analysis Statistics", |t| t.bold());
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", summary)?;

        if stats.categories.is_empty() {
            return Ok(());
        }

        let mut breakdown = self.table(["Category", "Count"]);
        for (category, count) in stats.categories.sorted_by_count() {
            breakdown.add_row(self.row(category, count.to_string()));
        }

        let title = self.paint("Categories Breakdown", |t| t.bold());
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", breakdown)
    }

    fn search_results(&mut self, results: &[SearchResult]) -> io::Result<()> {
        if results.is_empty() {
            return self.warning("No results found.");
        }

        self.success(&format!("Found {} results:", results.len()))?;

        for result in results {
            let category = self.paint("Category:", |t| t.cyan());
            let index = self.paint("Index:", |t| t.cyan());
            let prompt = self.paint("Prompt:", |t| t.cyan());

            writeln!(self.out)?;
            writeln!(self.out, "{} {}", category, result.category)?;
            writeln!(self.out, "{} {}", index, result.index)?;
            writeln!(self.out, "{}", prompt)?;
            writeln!(self.out, "{}", result.prompt)?;
            writeln!(self.out, "{}", "-".repeat(RESULT_SEPARATOR_WIDTH))?;
        }

        Ok(())
    }

    fn markdown(&mut self, content: &str) -> io::Result<()> {
        writeln!(self.out, "{}", content)
    }
}
