//! Command-line argument conversion

use bracefmt::Argument;

/// Parse one command-line argument: JSON when it is valid JSON, text otherwise
pub fn parse_argument(raw: &str) -> Argument {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => Argument::from_json(&value),
        Err(_) => Argument::Str(raw.to_string()),
    }
}

pub fn parse_arguments(raw: &[String]) -> Vec<Argument> {
    raw.iter().map(|s| parse_argument(s)).collect()
}
