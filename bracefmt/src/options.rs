//! Formatting options

use serde::{Deserialize, Serialize};

/// Options controlling how a format call treats malformed input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Report the first diagnostic as an error instead of degrading silently
    pub strict: bool,
}

impl FormatOptions {
    /// Lenient options: never fail, malformed pieces contribute nothing
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Strict options: malformed templates and missing arguments are errors
    pub fn strict() -> Self {
        Self { strict: true }
    }
}
