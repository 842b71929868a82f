//! Terminal output sink.
//!
//! Flows write through the [`Console`] trait rather than `println!` so
//! tests can capture everything a flow says.

use console::style;

pub trait Console {
    /// Progress note about the step currently running.
    fn note(&mut self, msg: &str);

    /// Soft notice. Not an error, the flow continues.
    fn warn(&mut self, msg: &str);

    /// Success indicator.
    fn success(&mut self, msg: &str);

    /// Announcement of a flow.
    fn heading(&mut self, title: &str);

    /// Bordered panel with a title and multi-line body.
    fn panel(&mut self, title: &str, body: &str);
}

/// Console rendering styled output to the terminal.
pub struct TermConsole;

impl Console for TermConsole {
    fn note(&mut self, msg: &str) {
        println!("{}", style(msg).cyan());
    }

    fn warn(&mut self, msg: &str) {
        println!("{}", style(msg).yellow());
    }

    fn success(&mut self, msg: &str) {
        println!("{} {}", style("✔").green().bold(), style(msg).green().bold());
    }

    fn heading(&mut self, title: &str) {
        let width = title.chars().count() + 2;
        println!("╭{}╮", "─".repeat(width));
        println!("│ {} │", style(title).cyan().bold());
        println!("╰{}╯", "─".repeat(width));
    }

    fn panel(&mut self, title: &str, body: &str) {
        let width = body
            .lines()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .max(title.chars().count() + 2);
        let tail = width.saturating_sub(title.chars().count() + 1);
        println!("╭─ {} {}╮", style(title).green().bold(), "─".repeat(tail));
        for line in body.lines() {
            println!("│ {line:<width$} │");
        }
        println!("╰{}╯", "─".repeat(width + 2));
    }
}
