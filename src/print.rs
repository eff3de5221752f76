use serde_json::Value;

use crate::api::CliError;

/// Pretty-print an API response exactly as received.
pub fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
