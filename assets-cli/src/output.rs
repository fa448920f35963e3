//! Output abstraction for testable printing
//!
//! Separates I/O from command logic by providing a trait
//! that can be mocked in tests and implemented for real output.
//! Panel-specific renderings (warning panel, notices, activity details) are
//! provided methods so every `Output` draws them the same way.

use lib_assets::{ActivityRecord, Notice};

use crate::error::CliResult;

/// Output abstraction for printing results
pub trait Output: Send + Sync {
    /// Print normal output
    fn print(&self, msg: &str) -> CliResult<()>;

    /// Print formatted JSON
    fn print_json(&self, data: &serde_json::Value) -> CliResult<()> {
        self.print(&serde_json::to_string_pretty(data)?)
    }

    /// Print error message
    fn error(&self, msg: &str) -> CliResult<()>;

    /// Print success message with checkmark
    fn success(&self, msg: &str) -> CliResult<()> {
        self.print(&format!("✅ {}", msg))
    }

    /// Print info message
    fn info(&self, msg: &str) -> CliResult<()> {
        self.print(&format!("ℹ️  {}", msg))
    }

    /// Print a section header
    fn header(&self, title: &str) -> CliResult<()> {
        self.print(&format!("\n{}\n{}", title, "=".repeat(title.chars().count())))
    }

    /// Print the warning panel: a header followed by its rendered lines
    fn print_panel(&self, title: &str, lines: &[String]) -> CliResult<()> {
        self.header(title)?;
        for line in lines {
            self.print(line)?;
        }
        Ok(())
    }

    /// Print a panel notice as a success toast
    fn notice(&self, notice: Notice) -> CliResult<()> {
        self.success(&notice.to_string())
    }

    /// Print the full record of an activity entry
    fn activity_details(&self, activity: &ActivityRecord) -> CliResult<()> {
        self.header(&format!("Activity {}", activity.hash))?;
        self.print_json(&serde_json::to_value(activity)?)
    }
}

/// Standard console output implementation
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn print(&self, msg: &str) -> CliResult<()> {
        println!("{}", msg);
        Ok(())
    }

    fn error(&self, msg: &str) -> CliResult<()> {
        eprintln!("❌ {}", msg);
        Ok(())
    }
}
