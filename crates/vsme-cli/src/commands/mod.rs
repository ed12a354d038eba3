pub mod report;
pub mod score;

use serde_json::Value;

/// What a command hands back to `main` for printing.
pub enum CommandOutput {
    /// Structured result, printed through the `--output` formatter.
    Value(Value),
    /// Pre-rendered text, printed as is.
    Text(String),
}
