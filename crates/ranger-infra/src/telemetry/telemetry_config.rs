use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsoleFormat {
    #[default]
    Compact,
    Pretty,
    /// One json object per line, for log collectors
    Json,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    pub enable_console_log: bool,
    #[serde(default)]
    pub console_format: ConsoleFormat,
    /// Filter directives in the `RUST_LOG` format, `warn` if not given.
    pub default_level: Option<String>,
}
