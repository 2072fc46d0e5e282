//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print a JSON document regardless of the selected format
pub fn print_json<T: Serialize>(value: &T) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    println!("{json}");
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}

/// Render an optional cell
pub fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
